#[macro_use]
extern crate log;

mod app;
mod common;
mod query;
mod results;
mod utils;

use wasm_bindgen::{JsCast, prelude::*};

use app::App;
use utils::document;

fn start() {
    let config = utils::initialize_config();

    let result = App::new(config).and_then(App::mount);
    if let Err(e) = result {
        error!("search disabled: {}", e);
    }
}

#[wasm_bindgen(start)]
pub async fn main_js() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    if document().ready_state() == "loading" {
        let closure: Closure<dyn FnMut()> = Closure::once(start);
        document().add_event_listener_with_callback(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
    } else {
        start();
    }

    Ok(())
}
