use crate::dom;
use gallery_core::DragAnimator;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animator: Rc<RefCell<DragAnimator>>,
    pub figure_els: Rc<Vec<web::HtmlElement>>,
}

impl FrameContext {
    /// One animation tick: advance the easing and push the dragged figure's
    /// displayed position to the DOM. Returns whether to keep the loop alive.
    pub fn frame(&mut self) -> bool {
        let mut anim = self.animator.borrow_mut();
        let Some(index) = anim.session().map(|s| s.figure) else {
            return false;
        };
        if !anim.tick() {
            return false;
        }
        if let (Some(el), Some(f)) = (
            self.figure_els.get(index),
            anim.surface.figures.get(index),
        ) {
            dom::set_position_px(el, f.displayed);
        }
        true
    }
}

/// Self-cancelling `requestAnimationFrame` loop.
///
/// The tick closure is created once at init; [`start`](FrameLoop::start)
/// arms it on drag begin, it reschedules itself only while a drag session is
/// active, and [`stop`](FrameLoop::stop) cancels the pending frame eagerly
/// on drag end so no orphaned callback survives the gesture.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<RefCell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(mut ctx: FrameContext) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let raf_id = Rc::new(RefCell::new(None::<i32>));
        let tick_clone = tick.clone();
        let raf_clone = raf_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if ctx.frame() {
                if let Some(w) = web::window() {
                    if let Ok(id) = w.request_animation_frame(
                        tick_clone
                            .borrow()
                            .as_ref()
                            .unwrap()
                            .as_ref()
                            .unchecked_ref(),
                    ) {
                        *raf_clone.borrow_mut() = Some(id);
                        return;
                    }
                }
            }
            *raf_clone.borrow_mut() = None;
        }) as Box<dyn FnMut()>));
        Self { tick, raf_id }
    }

    /// Arm the loop; no-op while a frame is already pending.
    pub fn start(&self) {
        if self.raf_id.borrow().is_some() {
            return;
        }
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                self.tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                *self.raf_id.borrow_mut() = Some(id);
            }
        }
    }

    /// Cancel the pending frame, if any.
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.borrow_mut().take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}
