use crate::{
    favorites::{FavoriteState, FavoritesStore, Storage},
    models::SearchRecord,
    route::Routes,
};

pub const NO_RESULTS: &str = "Aucun manga trouvé.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub name: String,
    pub href: String,
    pub cover: Option<CoverImage>,
    pub syllabus: Option<String>,
    pub chapters_label: String,
    pub favorite: FavoriteState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Empty,
    Items(Vec<ResultItem>),
}

/// Maps a search response onto what the result list displays, in response
/// order. Favorite state comes from the store as loaded for this pass.
pub fn build_view<S>(
    records: &[SearchRecord],
    favorites: &FavoritesStore<S>,
    routes: &Routes,
) -> ResultView
where
    S: Storage,
{
    if records.is_empty() {
        return ResultView::Empty;
    }

    ResultView::Items(
        records
            .iter()
            .map(|record| ResultItem {
                name: record.name.clone(),
                href: routes.manga_url(&record.name),
                cover: record.cover().map(|src| CoverImage {
                    src: src.to_string(),
                    alt: format!("Cover de {}", record.name),
                }),
                syllabus: record.syllabus().map(str::to_string),
                chapters_label: record.chapters_label(),
                favorite: favorites.state(&record.name),
            })
            .collect(),
    )
}
