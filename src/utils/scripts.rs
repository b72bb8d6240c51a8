//! Idempotent loading of third-party scripts. Both embeds (the YouTube
//! IFrame API and the TikTok embed script) may be requested from more than
//! one place, so insertion is always check-then-insert keyed by the src URL.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Whether a script tag with this exact src is already in the document.
pub fn script_present(src: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let selector = format!("script[src=\"{}\"]", src);
    matches!(document.query_selector(&selector), Ok(Some(_)))
}

/// Append a `<script async>` tag for `src` and invoke `on_load` once it has
/// loaded. Callers are expected to have checked [`script_present`] first;
/// this function does not invoke `on_load` for an already-present script.
pub fn insert_script(src: &str, on_load: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document available, cannot load {}", src);
        return;
    };
    let tag = match document.create_element("script") {
        Ok(el) => el,
        Err(e) => {
            log::warn!("failed to create script tag for {}: {:?}", src, e);
            return;
        }
    };
    let tag: web_sys::HtmlScriptElement = match tag.dyn_into() {
        Ok(tag) => tag,
        Err(_) => return,
    };
    tag.set_src(src);
    tag.set_async(true);

    let on_load = Closure::once(on_load);
    tag.set_onload(Some(on_load.as_ref().unchecked_ref()));
    on_load.forget();

    if let Some(body) = document.body() {
        if let Err(e) = body.append_child(&tag) {
            log::warn!("failed to append script tag for {}: {:?}", src, e);
        }
    }
}
