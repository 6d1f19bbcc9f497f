use std::rc::Rc;

use log::{debug, trace};

use crate::error::Result;
use crate::font::FontFace;
use crate::scene::element::{Label, Rect, Rgb, SceneElement};
use crate::scene::field::{content, parse_tuple};

const OBJECT_START: &str = "Object {";
const TEXT_START: &str = "Text {";
const BLOCK_END: &str = "}";
const POSITION: &str = "Position: (";
const SIZE: &str = "Size: (";
const COLOR: &str = "Color: (";
const CONTENT: &str = "Content: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outer,
    InText,
}

/// Scratch record for an `Object {` block.
#[derive(Debug, Default)]
struct RectBuilder {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl RectBuilder {
    fn build(&self, color: Rgb) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            color,
        }
    }
}

/// Scratch record for a `Text {` block.
#[derive(Debug, Default)]
struct LabelBuilder {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Rgb,
    content: String,
}

impl LabelBuilder {
    fn build(self, font: Rc<FontFace>) -> Label {
        Label {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            color: self.color,
            content: self.content,
            font,
        }
    }
}

/// Line-oriented parser for the scene description format.
///
/// A `Rect` is emitted as soon as the `Color:` line of its `Object {` block is read, and a `Label`
/// when the `}` line closing its `Text {` block is read. Any malformed number fails the whole parse.
#[derive(Debug)]
pub struct SceneParser<'a> {
    input: &'a str,
    font: Rc<FontFace>,
    state: State,
    rect: RectBuilder,
    label: LabelBuilder,
    elements: Vec<SceneElement>,
}

impl<'a> SceneParser<'a> {
    pub fn new(input: &'a str, font: Rc<FontFace>) -> Self {
        Self {
            input,
            font,
            state: State::Outer,
            rect: RectBuilder::default(),
            label: LabelBuilder::default(),
            elements: Vec::new(),
        }
    }

    pub fn parse(mut self) -> Result<Vec<SceneElement>> {
        let input = self.input;
        for (i, line) in input.lines().enumerate() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match self.state {
                State::Outer => self.consume_outer_line(line, i + 1)?,
                State::InText => self.consume_text_line(line, i + 1)?,
            }
        }

        if self.state == State::InText {
            debug!("discarding unterminated Text block at end of input");
        }
        Ok(self.elements)
    }

    fn consume_outer_line(&mut self, line: &str, line_no: usize) -> Result<()> {
        if line.contains(OBJECT_START) {
            self.rect = RectBuilder::default();
        } else if line.contains(POSITION) {
            [self.rect.x, self.rect.y] = parse_tuple::<2>(line, line_no, "Position")?;
        } else if line.contains(SIZE) {
            [self.rect.width, self.rect.height] = parse_tuple::<2>(line, line_no, "Size")?;
        } else if line.contains(COLOR) {
            let [r, g, b] = parse_tuple::<3>(line, line_no, "Color")?;
            let rect = self.rect.build(Rgb::new(r, g, b));
            trace!("line {}: emit {:?}", line_no, rect);
            self.elements.push(SceneElement::Rect(rect));
        } else if line.contains(TEXT_START) {
            self.label = LabelBuilder::default();
            self.state = State::InText;
        } else {
            trace!("line {}: ignored {:?}", line_no, line);
        }
        Ok(())
    }

    fn consume_text_line(&mut self, line: &str, line_no: usize) -> Result<()> {
        if line.contains(BLOCK_END) {
            let label = std::mem::take(&mut self.label).build(Rc::clone(&self.font));
            trace!("line {}: emit {:?}", line_no, label);
            self.elements.push(SceneElement::Label(label));
            self.state = State::Outer;
        } else if line.contains(POSITION) {
            [self.label.x, self.label.y] = parse_tuple::<2>(line, line_no, "Position")?;
        } else if line.contains(COLOR) {
            let [r, g, b] = parse_tuple::<3>(line, line_no, "Color")?;
            self.label.color = Rgb::new(r, g, b);
        } else if line.contains(SIZE) {
            [self.label.width, self.label.height] = parse_tuple::<2>(line, line_no, "Size")?;
        } else if line.contains(CONTENT) {
            self.label.content = content(line).to_string();
        } else {
            trace!("line {}: ignored {:?}", line_no, line);
        }
        Ok(())
    }
}
