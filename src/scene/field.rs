use crate::error::{Error, Result};

/// Extracts the first `N` comma-separated integers between the first `(` and the `)` after it.
///
/// `Color: (255, 0, 12)` yields `[255, 0, 12]` for `N = 3`. Components beyond `N` are ignored.
pub fn parse_tuple<const N: usize>(line: &str, line_no: usize, field: &'static str) -> Result<[i32; N]> {
    let inner = parenthesized(line).ok_or_else(|| Error::MalformedField {
        line: line_no,
        field,
        reason: "expected a parenthesized list".to_string(),
    })?;

    let mut components = inner.split(',');
    let mut values = [0; N];
    for (found, value) in values.iter_mut().enumerate() {
        let text = components.next().ok_or_else(|| Error::MalformedField {
            line: line_no,
            field,
            reason: format!("expected {} components, found {}", N, found),
        })?;
        *value = parse_int(text, line_no, field)?;
    }
    Ok(values)
}

/// Returns everything after the first `:` of the line, verbatim.
pub fn content(line: &str) -> &str {
    line.split_once(':').map_or("", |(_, rest)| rest)
}

fn parenthesized(line: &str) -> Option<&str> {
    let start = line.find('(')? + 1;
    let len = line[start..].find(')')?;
    Some(&line[start..start + len])
}

fn parse_int(text: &str, line_no: usize, field: &'static str) -> Result<i32> {
    let text = text.trim();
    text.parse::<i32>().map_err(|source| Error::InvalidNumber {
        line: line_no,
        field,
        text: text.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair() {
        assert_eq!(parse_tuple::<2>("Position: (10, 20)", 1, "Position").unwrap(), [10, 20]);
        assert_eq!(parse_tuple::<2>("Size: (3,4)", 1, "Size").unwrap(), [3, 4]);
        assert_eq!(parse_tuple::<2>("  Size: ( 7 ,  8 )  ", 1, "Size").unwrap(), [7, 8]);
    }

    #[test]
    fn negative_and_signed() {
        assert_eq!(parse_tuple::<2>("Position: (12, -5)", 1, "Position").unwrap(), [12, -5]);
        assert_eq!(parse_tuple::<2>("Position: (+3, -0)", 1, "Position").unwrap(), [3, 0]);
    }

    #[test]
    fn triple() {
        assert_eq!(parse_tuple::<3>("Color: (255, 128, 0)", 1, "Color").unwrap(), [255, 128, 0]);
        // Extra components are not an error.
        assert_eq!(parse_tuple::<3>("Color: (1, 2, 3, 4)", 1, "Color").unwrap(), [1, 2, 3]);
    }

    #[test]
    fn too_few_components() {
        let err = parse_tuple::<3>("Color: (1, 2)", 4, "Color").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedField { line: 4, field: "Color", .. }
        ));
    }

    #[test]
    fn missing_parenthesis() {
        assert!(matches!(
            parse_tuple::<2>("Position: 1, 2", 2, "Position").unwrap_err(),
            Error::MalformedField { line: 2, .. }
        ));
        assert!(matches!(
            parse_tuple::<2>("Position: (1, 2", 2, "Position").unwrap_err(),
            Error::MalformedField { line: 2, .. }
        ));
    }

    #[test]
    fn invalid_number() {
        match parse_tuple::<2>("Position: (abc, 2)", 9, "Position").unwrap_err() {
            Error::InvalidNumber { line, field, text, .. } => {
                assert_eq!(line, 9);
                assert_eq!(field, "Position");
                assert_eq!(text, "abc");
            }
            e => panic!("unexpected error: {:?}", e),
        }
        assert!(parse_tuple::<2>("Size: (4x, 2)", 1, "Size").is_err());
        assert!(parse_tuple::<2>("Size: (, 2)", 1, "Size").is_err());
        assert!(parse_tuple::<2>("Size: (1.5, 2)", 1, "Size").is_err());
    }

    #[test]
    fn content_after_first_colon() {
        assert_eq!(content("Content: hello"), " hello");
        assert_eq!(content("Content: 10:30 report"), " 10:30 report");
        assert_eq!(content("Content:"), "");
        assert_eq!(content("no colon"), "");
    }
}
