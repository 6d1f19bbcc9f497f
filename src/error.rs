use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open scene file {}: {source}", .path.display())]
    SceneOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: invalid integer {text:?} in `{field}` field")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        text: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: malformed `{field}` field: {reason}")]
    MalformedField {
        line: usize,
        field: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
