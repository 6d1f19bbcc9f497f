mod painter;

use std::rc::Rc;

use gtk4::{glib, prelude::*, Application, ApplicationWindow, DrawingArea, EventControllerKey};
use log::{debug, warn};

use crate::scene::Scene;

const GTK_APP_ID: &str = "app.tableau";
const WINDOW_TITLE: &str = "tableau";

#[derive(Debug, Clone)]
pub struct WindowContext {
    pub window_size: (i32, i32),
    pub scene: Rc<Scene>,
}

/// Runs the GTK main loop until the window is closed or a key is pressed.
pub fn show_ui(ctx: WindowContext) -> glib::ExitCode {
    let app = Application::builder().application_id(GTK_APP_ID).build();
    app.connect_activate(move |app| {
        build_ui(app, &ctx);
    });
    // The command line belongs to clap, not GTK.
    app.run_with_args::<glib::GString>(&[])
}

fn build_ui(app: &Application, ctx: &WindowContext) {
    let (width, height) = ctx.window_size;

    let canvas = DrawingArea::new();
    canvas.set_content_width(width);
    canvas.set_content_height(height);
    let scene = Rc::clone(&ctx.scene);
    canvas.set_draw_func(move |area, gfx_ctx, _, _| {
        let text_ctx = area.create_pango_context();
        if let Err(e) = painter::paint(gfx_ctx, &text_ctx, scene.elements()) {
            warn!("Failed to paint the frame: {}", e);
        }
    });
    // Repaint every frame.
    canvas.add_tick_callback(|area, _| {
        area.queue_draw();
        glib::ControlFlow::Continue
    });

    let window = ApplicationWindow::builder()
        .application(app)
        .title(WINDOW_TITLE)
        .default_width(width)
        .default_height(height)
        .resizable(false)
        .child(&canvas)
        .build();

    let keys = EventControllerKey::new();
    let window_ref = window.downgrade();
    keys.connect_key_pressed(move |_, key, _, _| {
        debug!("Key {:?} pressed, closing the window", key.name());
        if let Some(window) = window_ref.upgrade() {
            window.close();
        }
        glib::Propagation::Stop
    });
    window.add_controller(keys);

    window.present();
}
