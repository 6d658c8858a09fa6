use crate::app::{run_all, App};
use crate::banner::Banner;
use crate::dom;
use crate::theme;
use instant::Instant;
use site_core::Viewport;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Longest step fed to the animations; covers a backgrounded tab.
const MAX_DT_SEC: f64 = 0.1;

pub struct FrameContext {
    pub app: Rc<App>,
    pub banner: Option<Banner>,
    pub last_instant: Instant,
    pub last_viewport: Viewport,
}

impl FrameContext {
    pub fn new(app: Rc<App>, banner: Option<Banner>) -> Self {
        Self {
            app,
            banner,
            last_instant: Instant::now(),
            last_viewport: dom::viewport(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f64().min(MAX_DT_SEC);
        self.last_instant = now;

        let viewport = dom::viewport();
        if viewport != self.last_viewport {
            log::debug!("[frame] resize {}x{}", viewport.width, viewport.height);
            self.last_viewport = viewport;
            if let Some(b) = &mut self.banner {
                b.remeasure(viewport);
            }
        }

        let scroll_y = self.step_scroll(dt);

        if let Some(b) = &mut self.banner {
            b.update(&self.app, scroll_y, viewport, dt);
        }
        theme::refresh(&self.app);

        let fired = self.app.animator.borrow_mut().tick(dt);
        run_all(fired);
    }

    /// Advance the scroll driver, mirror it onto the window and settle any
    /// programmatic scrolls that arrived.
    fn step_scroll(&mut self, dt: f64) -> f64 {
        let limit = dom::scroll_limit(&self.app.document);
        let frame = {
            let mut driver = self.app.driver.borrow_mut();
            driver.set_limit(limit);
            let frame = driver.frame(dt);
            if !frame.moved {
                driver.sync_native(dom::scroll_y());
            }
            frame
        };
        if frame.moved {
            if let Some(w) = web::window() {
                w.scroll_to_with_x_and_y(0.0, frame.position);
            }
        }
        let waiters = self.app.take_scroll_waiters(&frame.completed);
        run_all(waiters);
        self.app.driver.borrow().position()
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
