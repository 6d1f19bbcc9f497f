use gtk4::{cairo, pango};
use pangocairo::functions::show_layout;

use crate::scene::{Label, Rect, Rgb, SceneElement};

/// Background of every frame.
const CLEAR_COLOR: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Draws scene elements onto a cairo context. Text goes through pango.
pub struct Painter<'a> {
    gfx_ctx: &'a cairo::Context,
    text_ctx: &'a pango::Context,
}

impl<'a> Painter<'a> {
    pub fn new(gfx_ctx: &'a cairo::Context, text_ctx: &'a pango::Context) -> Self {
        Self { gfx_ctx, text_ctx }
    }

    pub fn clear(&self) -> Result<(), cairo::Error> {
        let (r, g, b) = CLEAR_COLOR.to_unit();
        self.gfx_ctx.set_source_rgb(r, g, b);
        self.gfx_ctx.paint()
    }

    pub fn paint(&self, element: &SceneElement) -> Result<(), cairo::Error> {
        match element {
            SceneElement::Rect(rect) => self.fill_rect(rect),
            SceneElement::Label(label) => self.draw_label(label),
        }
    }

    fn fill_rect(&self, rect: &Rect) -> Result<(), cairo::Error> {
        let (r, g, b) = rect.color.to_unit();
        self.gfx_ctx.set_source_rgb(r, g, b);
        self.gfx_ctx.rectangle(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
        self.gfx_ctx.fill()
    }

    /// The laid out text is stretched to fill the label's box and clipped to it. Nothing is drawn
    /// for an empty box.
    fn draw_label(&self, label: &Label) -> Result<(), cairo::Error> {
        if label.width <= 0 || label.height <= 0 {
            return Ok(());
        }

        let layout = pango::Layout::new(self.text_ctx);
        let attrs = pango::AttrList::new();

        // https://docs.gtk.org/Pango/struct.Color.html
        let (r, g, b) = label.color.to_unit();
        attrs.insert(pango::AttrColor::new_foreground(
            (r * 65535.0) as u16,
            (g * 65535.0) as u16,
            (b * 65535.0) as u16,
        ));

        layout.set_text(&label.content);
        layout.set_font_description(Some(&pango::FontDescription::from_string(
            &label.font.pango_description(),
        )));
        layout.set_attributes(Some(&attrs));

        let (text_w, text_h) = layout.pixel_size();
        if text_w <= 0 || text_h <= 0 {
            return Ok(());
        }

        self.gfx_ctx.save()?;
        self.gfx_ctx.rectangle(
            label.x as f64,
            label.y as f64,
            label.width as f64,
            label.height as f64,
        );
        self.gfx_ctx.clip();
        self.gfx_ctx.translate(label.x as f64, label.y as f64);
        self.gfx_ctx.scale(
            label.width as f64 / text_w as f64,
            label.height as f64 / text_h as f64,
        );
        self.gfx_ctx.move_to(0.0, 0.0);
        show_layout(self.gfx_ctx, &layout);
        self.gfx_ctx.restore()
    }
}

/// Clears the frame and paints every element in order.
pub fn paint(
    gfx_ctx: &cairo::Context,
    text_ctx: &pango::Context,
    elements: &[SceneElement],
) -> Result<(), cairo::Error> {
    let painter = Painter::new(gfx_ctx, text_ctx);
    painter.clear()?;
    for element in elements {
        painter.paint(element)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::font::FontFace;

    /// Returns the (r, g, b) of a pixel of an ARGB32 surface.
    fn pixel(surface: &mut cairo::ImageSurface, x: usize, y: usize) -> (u8, u8, u8) {
        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = y * stride + x * 4;
        // Native-endian 0xAARRGGBB.
        let argb = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        ((argb >> 16) as u8, (argb >> 8) as u8, argb as u8)
    }

    #[test]
    fn paints_rects_over_black() {
        let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 20, 20).unwrap();
        {
            let gfx_ctx = cairo::Context::new(&surface).unwrap();
            let text_ctx = pangocairo::functions::create_context(&gfx_ctx);
            let elements = vec![
                SceneElement::Rect(Rect {
                    x: 2,
                    y: 2,
                    width: 10,
                    height: 10,
                    color: Rgb::new(255, 0, 0),
                }),
                SceneElement::Rect(Rect {
                    x: 6,
                    y: 6,
                    width: 10,
                    height: 10,
                    color: Rgb::new(0, 0, 300),
                }),
            ];
            paint(&gfx_ctx, &text_ctx, &elements).unwrap();
        }

        assert_eq!(pixel(&mut surface, 0, 0), (0, 0, 0));
        assert_eq!(pixel(&mut surface, 3, 3), (255, 0, 0));
        // Later elements are drawn on top.
        assert_eq!(pixel(&mut surface, 8, 8), (0, 0, 255));
        assert_eq!(pixel(&mut surface, 19, 19), (0, 0, 0));
    }

    fn label(x: i32, y: i32, width: i32, height: i32, content: &str) -> SceneElement {
        SceneElement::Label(Label {
            x,
            y,
            width,
            height,
            color: Rgb::new(0, 255, 0),
            content: content.to_string(),
            font: Rc::new(FontFace::new("sans-serif", 24.0)),
        })
    }

    fn paint_on_20x20(elements: &[SceneElement]) -> cairo::ImageSurface {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 20, 20).unwrap();
        {
            let gfx_ctx = cairo::Context::new(&surface).unwrap();
            let text_ctx = pangocairo::functions::create_context(&gfx_ctx);
            paint(&gfx_ctx, &text_ctx, elements).unwrap();
        }
        surface
    }

    #[test]
    fn label_is_stretched_into_its_box() {
        let mut surface = paint_on_20x20(&[label(4, 4, 12, 8, "XXXX")]);

        let mut green_inside = false;
        for y in 0..20 {
            for x in 0..20 {
                let (r, g, b) = pixel(&mut surface, x, y);
                let inside = (4..16).contains(&x) && (4..12).contains(&y);
                if inside {
                    green_inside |= g > 0;
                } else {
                    assert_eq!((r, g, b), (0, 0, 0), "pixel ({}, {}) outside the box", x, y);
                }
            }
        }
        assert!(green_inside);
    }

    #[test]
    fn empty_label_box_draws_nothing() {
        for element in [
            label(4, 4, 0, 0, "XXXX"),
            label(4, 4, 12, 0, "XXXX"),
            label(4, 4, -3, 8, "XXXX"),
            label(4, 4, 12, 8, ""),
        ] {
            let mut surface = paint_on_20x20(&[element]);
            for y in 0..20 {
                for x in 0..20 {
                    assert_eq!(pixel(&mut surface, x, y), (0, 0, 0));
                }
            }
        }
    }
}
