#![cfg(target_arch = "wasm32")]
use crate::constants::{CURSOR_IDLE, GALLERY_ELEMENT_ID};
use gallery_core::{DragAnimator, Figure, Surface, DEFAULT_EASE_FACTOR};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let gallery_el = document
        .get_element_by_id(GALLERY_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", GALLERY_ELEMENT_ID))?;
    let gallery_el: web::HtmlElement = gallery_el
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let figure_els = dom::figure_elements(&gallery_el);
    if figure_els.is_empty() {
        anyhow::bail!("no figures under #{}", GALLERY_ELEMENT_ID);
    }

    // The figure set is fixed at startup; build the surface from each
    // figure's current on-screen geometry
    let mut figures = Vec::with_capacity(figure_els.len());
    for el in &figure_els {
        let (pos, size) = dom::rect_relative_to(el, &gallery_el);
        figures.push(Figure::new(pos, size, dom::caption_text(el)));
    }
    let surface = Surface::new(figures, dom::surface_extent(&gallery_el));
    log::info!(
        "[gallery] {} figures on a {:.0}x{:.0} surface",
        figure_els.len(),
        surface.bounds().x,
        surface.bounds().y
    );

    for el in &figure_els {
        dom::set_cursor(el, CURSOR_IDLE);
    }

    let animator = Rc::new(RefCell::new(DragAnimator::new(surface, DEFAULT_EASE_FACTOR)));
    let figure_els = Rc::new(figure_els);

    let frame_loop = Rc::new(frame::FrameLoop::new(frame::FrameContext {
        animator: animator.clone(),
        figure_els: figure_els.clone(),
    }));

    events::pointer::wire_input_handlers(events::pointer::GalleryWiring {
        surface_el: gallery_el,
        figure_els,
        animator,
        frame_loop,
    });

    Ok(())
}
