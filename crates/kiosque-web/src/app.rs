use std::rc::Rc;

use anyhow::anyhow;
use dominator::clone;
use kiosque_lib::{config::Config, debounce::Debouncer, route::Routes};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{HtmlInputElement, KeyboardEvent};

use crate::{
    common::TimeoutScheduler,
    query,
    results::ResultList,
    utils::{LatestLoader, document},
};

pub struct App {
    input: HtmlInputElement,
    debouncer: Debouncer<TimeoutScheduler>,
}

impl App {
    /// Looks up the search input and result container the page must provide.
    pub fn new(config: Config) -> Result<Rc<Self>, anyhow::Error> {
        let input = document()
            .query_selector(&config.input_selector)
            .map_err(|e| anyhow!("error query {}: {:?}", config.input_selector, e))?
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .ok_or_else(|| anyhow!("no search input matching {}", config.input_selector))?;

        let container = document()
            .get_element_by_id(&config.list_id)
            .ok_or_else(|| anyhow!("no result list with id {}", config.list_id))?;

        let routes = Routes::new(&config);
        let results = ResultList::new(container, routes.clone(), config.favorites_key.clone());
        let loader = LatestLoader::new();

        let debouncer = Debouncer::new(
            TimeoutScheduler,
            config.debounce_ms,
            clone!(input => move || {
                Self::dispatch(input.value(), &routes, &loader, &results);
            }),
        );

        Ok(Rc::new(Self { input, debouncer }))
    }

    fn dispatch(
        keyword: String,
        routes: &Routes,
        loader: &LatestLoader,
        results: &Rc<ResultList>,
    ) {
        let url = routes.search_url(&keyword);
        debug!("search {}", url);

        loader.load(
            async move { query::search(&url).await },
            clone!(results => move |result| match result {
                Ok(records) => results.render(&records),
                Err(e) => error!("error search {:?}: {}", keyword, e),
            }),
        );
    }

    pub fn mount(app: Rc<Self>) -> Result<(), anyhow::Error> {
        let closure = Closure::wrap(Box::new(clone!(app => move |_: KeyboardEvent| {
            app.debouncer.trigger();
        })) as Box<dyn FnMut(_)>);

        app.input
            .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("error listen keyup: {:?}", e))?;

        closure.forget();
        info!("search wired, debounce {}ms", app.debouncer.delay_ms());

        Ok(())
    }
}
