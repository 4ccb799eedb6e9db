use crate::constants::{CURSOR_DRAGGING, CURSOR_IDLE};
use crate::dom;
use crate::frame::FrameLoop;
use gallery_core::{DragAnimator, PointerKind};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct GalleryWiring {
    pub surface_el: web::HtmlElement,
    pub figure_els: Rc<Vec<web::HtmlElement>>,
    pub animator: Rc<RefCell<DragAnimator>>,
    pub frame_loop: Rc<FrameLoop>,
}

/// Document-level move/end closures. They are built once and live for the
/// page's lifetime; registration on the document is what turns delivery on
/// (drag start, for the matching pointer kind only) and off (drag end, all
/// variants unconditionally so no handler can leak).
pub struct DragListeners {
    on_mouse_move: Closure<dyn FnMut(web::MouseEvent)>,
    on_mouse_up: Closure<dyn FnMut(web::MouseEvent)>,
    on_touch_move: Closure<dyn FnMut(web::TouchEvent)>,
    on_touch_end: Closure<dyn FnMut(web::TouchEvent)>,
}

impl DragListeners {
    fn add_for_kind(&self, kind: PointerKind) {
        let Some(document) = dom::window_document() else {
            return;
        };
        match kind {
            PointerKind::Mouse => {
                _ = document.add_event_listener_with_callback(
                    "mousemove",
                    self.on_mouse_move.as_ref().unchecked_ref(),
                );
                _ = document.add_event_listener_with_callback(
                    "mouseup",
                    self.on_mouse_up.as_ref().unchecked_ref(),
                );
            }
            PointerKind::Touch => {
                // passive: false so the move handler may suppress the
                // platform scroll/pan gesture
                let opts = web::AddEventListenerOptions::new();
                opts.set_passive(false);
                _ = document.add_event_listener_with_callback_and_add_event_listener_options(
                    "touchmove",
                    self.on_touch_move.as_ref().unchecked_ref(),
                    &opts,
                );
                _ = document.add_event_listener_with_callback(
                    "touchend",
                    self.on_touch_end.as_ref().unchecked_ref(),
                );
                // An interrupted gesture must still end the drag
                _ = document.add_event_listener_with_callback(
                    "touchcancel",
                    self.on_touch_end.as_ref().unchecked_ref(),
                );
            }
        }
    }

    fn remove_all(&self) {
        let Some(document) = dom::window_document() else {
            return;
        };
        _ = document.remove_event_listener_with_callback(
            "mousemove",
            self.on_mouse_move.as_ref().unchecked_ref(),
        );
        _ = document.remove_event_listener_with_callback(
            "mouseup",
            self.on_mouse_up.as_ref().unchecked_ref(),
        );
        _ = document.remove_event_listener_with_callback(
            "touchmove",
            self.on_touch_move.as_ref().unchecked_ref(),
        );
        _ = document.remove_event_listener_with_callback(
            "touchend",
            self.on_touch_end.as_ref().unchecked_ref(),
        );
        _ = document.remove_event_listener_with_callback(
            "touchcancel",
            self.on_touch_end.as_ref().unchecked_ref(),
        );
    }
}

pub fn wire_input_handlers(w: GalleryWiring) {
    let listeners: Rc<RefCell<Option<DragListeners>>> = Rc::new(RefCell::new(None));
    *listeners.borrow_mut() = Some(build_drag_listeners(&w, &listeners));
    wire_mousedown(&w, &listeners);
    wire_touchstart(&w, &listeners);
}

fn build_drag_listeners(
    w: &GalleryWiring,
    cell: &Rc<RefCell<Option<DragListeners>>>,
) -> DragListeners {
    let on_mouse_move = {
        let w = w.clone();
        Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            handle_move(&w, ev.client_x() as f32, ev.client_y() as f32);
        }) as Box<dyn FnMut(_)>)
    };
    let on_mouse_up = {
        let w = w.clone();
        let cell = cell.clone();
        Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            finish_drag(&w, &cell);
        }) as Box<dyn FnMut(_)>)
    };
    let on_touch_move = {
        let w = w.clone();
        Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(t) = ev.touches().item(0) {
                handle_move(&w, t.client_x() as f32, t.client_y() as f32);
            }
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>)
    };
    let on_touch_end = {
        let w = w.clone();
        let cell = cell.clone();
        Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            finish_drag(&w, &cell);
        }) as Box<dyn FnMut(_)>)
    };
    DragListeners {
        on_mouse_move,
        on_mouse_up,
        on_touch_move,
        on_touch_end,
    }
}

fn wire_mousedown(w: &GalleryWiring, listeners: &Rc<RefCell<Option<DragListeners>>>) {
    let w = w.clone();
    let surface_el = w.surface_el.clone();
    let listeners = listeners.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        begin_drag(
            &w,
            &listeners,
            ev.client_x() as f32,
            ev.client_y() as f32,
            PointerKind::Mouse,
        );
    }) as Box<dyn FnMut(_)>);
    _ = surface_el.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchstart(w: &GalleryWiring, listeners: &Rc<RefCell<Option<DragListeners>>>) {
    let w = w.clone();
    let surface_el = w.surface_el.clone();
    let listeners = listeners.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().item(0) {
            begin_drag(
                &w,
                &listeners,
                t.client_x() as f32,
                t.client_y() as f32,
                PointerKind::Touch,
            );
        }
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = surface_el.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

fn begin_drag(
    w: &GalleryWiring,
    listeners: &Rc<RefCell<Option<DragListeners>>>,
    client_x: f32,
    client_y: f32,
    kind: PointerKind,
) {
    if w.animator.borrow().is_dragging() {
        return;
    }

    let hit = {
        let mut anim = w.animator.borrow_mut();
        // Layout may have shifted since the last gesture (scroll, resize,
        // percentage-positioned figures); re-sync everything before the
        // hit-test
        anim.surface.set_bounds(dom::surface_extent(&w.surface_el));
        for (i, el) in w.figure_els.iter().enumerate() {
            let (pos, size) = dom::rect_relative_to(el, &w.surface_el);
            anim.surface.sync_layout(i, pos, size);
        }
        let point = dom::surface_point(&w.surface_el, client_x, client_y);
        anim.begin_drag(point, kind)
    };
    let Some(index) = hit else {
        return;
    };

    if let Some(el) = w.figure_els.get(index) {
        dom::set_cursor(el, CURSOR_DRAGGING);
        dom::set_z_index(el, w.animator.borrow().surface.figures[index].z);
    }
    if let Some(l) = listeners.borrow().as_ref() {
        l.add_for_kind(kind);
    }
    w.frame_loop.start();
}

fn handle_move(w: &GalleryWiring, client_x: f32, client_y: f32) {
    let point = dom::surface_point(&w.surface_el, client_x, client_y);
    let mut anim = w.animator.borrow_mut();
    anim.surface.set_bounds(dom::surface_extent(&w.surface_el));
    anim.pointer_moved(point);
}

fn finish_drag(w: &GalleryWiring, cell: &Rc<RefCell<Option<DragListeners>>>) {
    if let Some(index) = w.animator.borrow_mut().end_drag() {
        if let Some(el) = w.figure_els.get(index) {
            dom::set_cursor(el, CURSOR_IDLE);
        }
    }
    w.frame_loop.stop();
    if let Some(listeners) = cell.borrow().as_ref() {
        listeners.remove_all();
    }
}
