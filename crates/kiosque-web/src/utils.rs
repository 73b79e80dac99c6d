use std::{cell::RefCell, rc::Rc};

use futures::{
    Future,
    future::{AbortHandle, abortable},
};
use kiosque_lib::{
    config::{self, Config},
    sequence::RequestSeq,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Storage, Window};

thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static DOCUMENT: Document = WINDOW.with(|w| w.document().unwrap_throw());
    static LOCAL_STORAGE: Storage = WINDOW.with(|w| w.local_storage().unwrap_throw().unwrap_throw());
}

/// Runs search requests so that only the newest one is delivered. Loading a
/// request aborts the one in flight, and a response that still resolves
/// after a newer request was issued is dropped.
#[derive(Default)]
pub struct LatestLoader {
    seq: Rc<RequestSeq>,
    in_flight: RefCell<Option<AbortHandle>>,
}

impl LatestLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<F, T, D>(&self, fut: F, deliver: D)
    where
        F: Future<Output = T> + 'static,
        D: FnOnce(T) + 'static,
    {
        let id = self.seq.issue();
        let (fut, handle) = abortable(fut);

        if let Some(previous) = self.in_flight.replace(Some(handle)) {
            previous.abort();
        }

        let seq = self.seq.clone();
        spawn_local(async move {
            match fut.await {
                Ok(output) => {
                    if let Some(output) = seq.accept(id, output) {
                        deliver(output);
                    }
                }
                Err(_) => {
                    debug!("request {:?} aborted", id);
                }
            }
        });
    }
}

/// Resolves the page configuration. `window.__KIOSQUE_ORIGIN__` overrides
/// the origin search requests are sent to.
pub fn initialize_config() -> Config {
    let override_origin = js_sys::eval("window.__KIOSQUE_ORIGIN__")
        .ok()
        .filter(|val| !val.is_undefined() && !val.is_null())
        .and_then(|val| val.as_string());
    let location_origin = document()
        .location()
        .and_then(|location| location.origin().ok());

    Config::default().with_origin(config::resolve_origin(override_origin, location_origin))
}

pub fn local_storage() -> Storage {
    LOCAL_STORAGE.with(|s| s.clone())
}

pub fn document() -> Document {
    DOCUMENT.with(|d| d.clone())
}
