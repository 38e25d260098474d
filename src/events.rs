// scrollback change notifications for the page hosting the terminal
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent, CustomEventInit};

pub const HISTORY_APPENDED: &str = "cli-history-appended";
pub const HISTORY_CLEARED: &str = "cli-history-cleared";

const CALLBACK_NAME: &str = "__cliCallback";

/// Serializes `detail` as plain JSON-shaped JS objects (no `Map`s).
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

/// Hands an event to the front-end: `window.__cliCallback(type, detail)` if
/// the page registered one, else a bubbling `CustomEvent` on `window`.
/// Delivery problems are logged and otherwise ignored.
pub fn emit_session_event<T: Serialize + ?Sized>(event_type: &str, detail: &T) {
    if cfg!(not(target_arch = "wasm32")) {
        return;
    }
    let Some(win) = window() else {
        log::warn!("no window object, dropping {}", event_type);
        return;
    };
    let detail = to_js(detail);

    if let Ok(callback) = js_sys::Reflect::get(win.as_ref(), &CALLBACK_NAME.into()) {
        if let Some(callback) = callback.dyn_ref::<js_sys::Function>() {
            match callback.call2(&JsValue::NULL, &event_type.into(), &detail) {
                Ok(_) => return,
                Err(e) => log::warn!("{} failed for {}: {:?}", CALLBACK_NAME, event_type, e),
            }
        }
    }

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&detail);
    match CustomEvent::new_with_event_init_dict(event_type, &init) {
        Ok(event) => {
            if let Err(e) = win.dispatch_event(&event) {
                log::warn!("window dispatch failed for {}: {:?}", event_type, e);
            }
        }
        Err(e) => log::warn!("couldn't create {} event: {:?}", event_type, e),
    }
}
