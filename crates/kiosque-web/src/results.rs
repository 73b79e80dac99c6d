use std::{cell::RefCell, rc::Rc};

use dominator::{Dom, DomHandle, clone, events, html};
use discard::Discard;
use futures_signals::signal::{Mutable, SignalExt};
use kiosque_lib::{
    favorites::{FAVORITE_CLASS, FavoriteState, FavoritesStore},
    models::SearchRecord,
    route::Routes,
    view::{NO_RESULTS, ResultItem, ResultView, build_view},
};
use web_sys::Element;

use crate::common::LocalStorage;

type Favorites = Rc<RefCell<FavoritesStore<LocalStorage>>>;

/// Owns the children of the result container.
pub struct ResultList {
    container: Element,
    routes: Routes,
    favorites_key: String,
    handles: RefCell<Vec<DomHandle>>,
}

impl ResultList {
    pub fn new(container: Element, routes: Routes, favorites_key: String) -> Rc<Self> {
        Rc::new(Self {
            container,
            routes,
            favorites_key,
            handles: RefCell::new(vec![]),
        })
    }

    fn clear(&self) {
        for handle in self.handles.borrow_mut().drain(..) {
            handle.discard();
        }
        // drops the server rendered listing on first pass
        self.container.set_inner_html("");
    }

    pub fn render(&self, records: &[SearchRecord]) {
        self.clear();

        let favorites = match FavoritesStore::load(LocalStorage::new(), &self.favorites_key) {
            Ok(favorites) => favorites,
            Err(e) => {
                error!("error load favorites: {}", e);
                return;
            }
        };

        debug!("rendering {} results", records.len());
        let view = build_view(records, &favorites, &self.routes);

        let doms = match view {
            ResultView::Empty => vec![html!("p", {
                .class("no-results")
                .text(NO_RESULTS)
            })],
            ResultView::Items(items) => {
                let favorites = Rc::new(RefCell::new(favorites));
                items
                    .into_iter()
                    .map(|item| Self::render_item(item, favorites.clone()))
                    .collect()
            }
        };

        let mut handles = self.handles.borrow_mut();
        for dom in doms {
            handles.push(dominator::append_dom(&self.container, dom));
        }
    }

    fn render_item(item: ResultItem, favorites: Favorites) -> Dom {
        html!("li", {
            .class("manga-item")
            .children(&mut [
                html!("a", {
                    .class("manga-link")
                    .attr("href", &item.href)
                    .children(item.cover.as_ref().map(|cover| html!("img", {
                        .class("manga-cover")
                        .attr("src", &cover.src)
                        .attr("alt", &cover.alt)
                    })))
                    .child(html!("span", {
                        .class("manga-title")
                        .text(&item.name)
                    }))
                })
            ])
            .children(item.syllabus.as_ref().map(|syllabus| html!("p", {
                .class("syllabus")
                .text(syllabus)
            })))
            .child(html!("span", {
                .class("nb-chapitres")
                .text(&item.chapters_label)
            }))
            .child(Self::render_favorite_button(item.name.clone(), item.favorite, favorites))
        })
    }

    fn render_favorite_button(name: String, state: FavoriteState, favorites: Favorites) -> Dom {
        let state = Mutable::new(state);

        html!("button", {
            .class(["nav-link", "add-favorite-btn"])
            .attr("data-manga-name", &name)
            .text_signal(state.signal().map(|state| state.label().to_string()))
            .class_signal(FAVORITE_CLASS, state.signal().map(|state| state.is_favorite()))
            .event(clone!(state => move |_: events::Click| {
                let toggled = favorites.borrow_mut().toggle(&name);
                match toggled {
                    Ok(new_state) => state.set_neq(new_state),
                    Err(e) => error!("error toggle favorite {}: {}", name, e),
                }
            }))
        })
    }
}
