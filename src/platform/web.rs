//! Browser driver
//!
//! Puts a pixelated `img` on the page, tracks the pointer in page coordinates
//! and ticks the cat on a fixed interval.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlImageElement, MouseEvent};

use crate::consts::{SPRITE_SIZE_PX, TICK_MS};
use crate::driver::{IdlePolicy, Neko};
use crate::settings::Config;
use crate::sim::VisualState;
use crate::wire::{sprite_url, sprite_urls};

/// The element the cat is drawn into
struct Surface {
    img: HtmlImageElement,
    base_url: String,
    // Held so the browser keeps every frame cached
    _preloaded: Vec<HtmlImageElement>,
}

impl Surface {
    fn create(document: &Document, base_url: &str) -> Result<Self, JsValue> {
        let img: HtmlImageElement = document.create_element("img")?.dyn_into()?;
        let style = img.style();
        style.set_property("position", "absolute")?;
        style.set_property("width", &format!("{}px", SPRITE_SIZE_PX))?;
        style.set_property("top", "0px")?;
        style.set_property("left", "0px")?;
        style.set_property("image-rendering", "pixelated")?;
        img.set_draggable(false);

        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&img)?;

        let mut preloaded = Vec::with_capacity(crate::sim::Action::ALL.len());
        for url in sprite_urls(base_url) {
            let frame = HtmlImageElement::new()?;
            frame.set_src(&url);
            preloaded.push(frame);
        }
        log::info!("Preloading {} sprites from {}", preloaded.len(), base_url);

        Ok(Self {
            img,
            base_url: base_url.to_string(),
            _preloaded: preloaded,
        })
    }

    /// Move the element and swap the sprite (an empty label keeps the old one)
    fn apply(&self, frame: &VisualState) {
        let style = self.img.style();
        let _ = style.set_property("left", &format!("{}px", frame.position.x));
        let _ = style.set_property("top", &format!("{}px", frame.position.y));
        if let Some(action) = frame.action {
            self.img.set_src(&sprite_url(&self.base_url, action));
        }
    }
}

/// Start the cat once the page has a body
pub fn start(config: Config, policy: IdlePolicy, base_url: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.body().is_some() {
        return mount(config, policy, base_url);
    }

    let base_url = base_url.to_string();
    let closure = Closure::<dyn FnMut(web_sys::Event)>::once(move |_event: web_sys::Event| {
        if let Err(e) = mount(config, policy, &base_url) {
            log::error!("Failed to start: {:?}", e);
        }
    });
    window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn mount(config: Config, policy: IdlePolicy, base_url: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let surface = Surface::create(&document, base_url)?;
    let seed = js_sys::Date::now() as u64;
    let neko = Rc::new(RefCell::new(Neko::with_policy(config, policy, seed)));
    surface.apply(&neko.borrow().current_frame());

    // Pointer tracking: last sample wins
    for kind in ["mousemove", "mouseenter"] {
        let neko = neko.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            neko.borrow_mut()
                .set_pointer(event.page_x() as f64, event.page_y() as f64);
        });
        document.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Fixed cadence
    {
        let closure = Closure::<dyn FnMut()>::new(move || {
            let frame = neko.borrow_mut().tick();
            surface.apply(&frame);
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TICK_MS as i32,
        )?;
        closure.forget();
    }

    log::info!("Neko running (tick every {} ms, seed {})", TICK_MS, seed);
    Ok(())
}
