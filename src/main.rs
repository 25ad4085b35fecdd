//! Bounce Field entry point
//!
//! Mounts the animation on the page canvas and drives the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use bounce_field::config::SpawnConstraints;
    use bounce_field::consts::{FALLBACK_HEIGHT, FALLBACK_WIDTH};
    use bounce_field::render::FrameLoop;
    use bounce_field::render::canvas::CanvasSurface;
    use bounce_field::sim::{Viewport, spawn};

    /// Application state shared between input handlers and the frame loop
    struct App {
        frame_loop: FrameLoop<CanvasSurface>,
        canvas: HtmlCanvasElement,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bounce Field starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document to mount on");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No canvas element to mount on");
            return;
        };

        // Back the canvas with its measured CSS size, once, at mount
        let mut width = canvas.client_width() as f32;
        let mut height = canvas.client_height() as f32;
        if width <= 0.0 || height <= 0.0 {
            width = FALLBACK_WIDTH;
            height = FALLBACK_HEIGHT;
        }
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let viewport = Viewport::new(width, height);

        // A missing 2D context means no animation, not a crash
        let Some(surface) = CanvasSurface::from_canvas(&canvas) else {
            log::error!("2D context unavailable, not starting the loop");
            return;
        };

        let constraints = SpawnConstraints::load();
        let seed = js_sys::Date::now() as u64;
        let mut rng = Pcg32::seed_from_u64(seed);
        let bodies = spawn(constraints.count, viewport, &constraints, &mut rng);
        log::info!(
            "Spawned {} bodies in {}x{} (seed {seed})",
            bodies.len(),
            width,
            height
        );

        let app = Rc::new(RefCell::new(App {
            frame_loop: FrameLoop::new(surface, viewport, bodies),
            canvas: canvas.clone(),
        }));

        setup_input_handlers(&canvas, app.clone());

        // Start the redraw cycle
        request_animation_frame(app);

        log::info!("Bounce Field running");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse move - translate to surface-local coordinates
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                app.borrow_mut()
                    .frame_loop
                    .pointer_mut()
                    .set(Vec2::new(x, y));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    app.borrow_mut()
                        .frame_loop
                        .pointer_mut()
                        .set(Vec2::new(x, y));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>) {
        let reschedule = {
            let mut a = app.borrow_mut();

            // A canvas detached from the document is a dead surface; stop
            // instead of leaking redraw requests against it.
            if !a.canvas.is_connected() {
                a.frame_loop.stop();
            }

            a.frame_loop.frame()
        };

        if reschedule {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bounce Field (native) starting...");
    log::info!("The animation mounts on a browser canvas - run with `trunk serve` for the web version");

    headless_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Short seeded headless run as a native smoke check
#[cfg(not(target_arch = "wasm32"))]
fn headless_run() {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use bounce_field::config::SpawnConstraints;
    use bounce_field::consts::{FALLBACK_HEIGHT, FALLBACK_WIDTH};
    use bounce_field::sim::{Viewport, advance, spawn};

    let viewport = Viewport::new(FALLBACK_WIDTH, FALLBACK_HEIGHT);
    let constraints = SpawnConstraints::default();
    let mut rng = Pcg32::seed_from_u64(42);
    let mut bodies = spawn(constraints.count, viewport, &constraints, &mut rng);

    let frames = 600;
    for _ in 0..frames {
        advance(&mut bodies, viewport, None);
    }

    let speed_sum: f32 = bodies.iter().map(|b| b.vel.length()).sum();
    println!(
        "\n{} bodies advanced {frames} frames; mean speed {:.2} px/frame",
        bodies.len(),
        speed_sum / bodies.len() as f32
    );
}
