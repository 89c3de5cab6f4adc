//! Cross-origin script injection wrapped in a future.
//!
//! Each request registers its own `window[callback]`, appends a `<script>`
//! pointing at the endpoint, and resolves on whichever comes first: the
//! callback, the script's `error` event, or the timeout. The script element
//! is removed when the request settles either way. The callback is deleted
//! once it has fired; a request abandoned by timeout leaves a no-op in its
//! place, since the script may still load and call it.

use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::search::SearchRequest;
use super::types::SearchError;

type Delivery = Result<JsValue, String>;
type DeliverySlot = Rc<RefCell<Option<oneshot::Sender<Delivery>>>>;

/// Issue `request` by script injection and return the payload handed to the callback.
pub(crate) async fn request(request: &SearchRequest<'_>) -> Result<serde_json::Value, SearchError> {
    let window = web_sys::window().ok_or(SearchError::Unavailable)?;
    let document = window.document().ok_or(SearchError::Unavailable)?;
    let head = document
        .head()
        .ok_or_else(|| SearchError::Transport("document has no <head>".to_owned()))?;

    let url = request_url(request)?;
    let (tx, rx) = oneshot::channel::<Delivery>();
    let slot: DeliverySlot = Rc::new(RefCell::new(Some(tx)));

    let on_payload = {
        let slot = Rc::clone(&slot);
        Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| deliver(&slot, Ok(payload)))
    };
    let on_error = {
        let slot = Rc::clone(&slot);
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            deliver(&slot, Err("search script failed to load".to_owned()));
        })
    };

    let script: web_sys::HtmlScriptElement = document
        .create_element("script")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| SearchError::Transport("created element is not a script".to_owned()))?;

    let mut injected = Injected {
        window: window.clone(),
        script: script.clone(),
        callback_name: request.callback_name(),
        on_payload,
        on_error,
        settled: false,
    };

    js_sys::Reflect::set(
        &window,
        &JsValue::from_str(&injected.callback_name),
        injected.on_payload.as_ref(),
    )
    .map_err(js_err)?;
    script.set_onerror(Some(injected.on_error.as_ref().unchecked_ref()));
    script.set_src(&url);
    head.append_child(&script).map_err(js_err)?;

    let timeout_ms = request.timeout_ms();
    let delivered = rx.fuse();
    let timeout = gloo_timers::future::TimeoutFuture::new(timeout_ms).fuse();
    futures::pin_mut!(delivered, timeout);
    let delivery = futures::select! {
        delivery = delivered => delivery,
        () = timeout => return Err(SearchError::Timeout(timeout_ms)),
    };
    injected.settled = true;
    drop(injected);

    let payload = match delivery {
        Ok(Ok(payload)) => payload,
        Ok(Err(reason)) => return Err(SearchError::Transport(reason)),
        Err(_) => return Err(SearchError::Transport("search callback dropped".to_owned())),
    };
    let raw = js_sys::JSON::stringify(&payload)
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| SearchError::Transport("search callback received no payload".to_owned()))?;
    serde_json::from_str(&raw).map_err(SearchError::Decode)
}

/// Endpoint URL with the request parameters appended.
fn request_url(request: &SearchRequest<'_>) -> Result<String, SearchError> {
    let url = web_sys::Url::new(request.endpoint()).map_err(js_err)?;
    let query = url.search_params();
    for (key, value) in request.params() {
        query.append(key, &value);
    }
    Ok(url.href())
}

fn deliver(slot: &DeliverySlot, delivery: Delivery) {
    if let Some(tx) = slot.borrow_mut().take() {
        if tx.send(delivery).is_err() {
            leptos::logging::warn!("search response arrived after its request settled");
        }
    }
}

fn js_err(e: JsValue) -> SearchError {
    SearchError::Transport(format!("{e:?}"))
}

/// Script element and callback registered for one request.
struct Injected {
    window: web_sys::Window,
    script: web_sys::HtmlScriptElement,
    callback_name: String,
    on_payload: Closure<dyn FnMut(JsValue)>,
    on_error: Closure<dyn FnMut(web_sys::Event)>,
    /// The callback or the error event fired before the request was dropped.
    settled: bool,
}

impl Drop for Injected {
    fn drop(&mut self) {
        self.script.set_onerror(None);
        self.script.remove();
        let name = JsValue::from_str(&self.callback_name);
        let cleared = if self.settled {
            js_sys::Reflect::delete_property(&self.window, &name)
        } else {
            let noop = Closure::<dyn FnMut(JsValue)>::new(|_: JsValue| {}).into_js_value();
            js_sys::Reflect::set(&self.window, &name, &noop)
        };
        if cleared.is_err() {
            leptos::logging::warn!("could not clear search callback {}", self.callback_name);
        }
    }
}
