use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde_json::Value;

use crate::error::{Error, Result};

/// Marker class carried by a favorite control while its manga is a favorite.
pub const FAVORITE_CLASS: &str = "is-favorite";

/// Key/value backend the favorites are persisted into.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory [`Storage`]. Clones share the same items.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteState {
    NotFavorite,
    Favorite,
}

impl FavoriteState {
    pub fn label(&self) -> &'static str {
        match self {
            FavoriteState::NotFavorite => "Favori ★",
            FavoriteState::Favorite => "Retirer des favoris ★",
        }
    }

    pub fn is_favorite(&self) -> bool {
        matches!(self, FavoriteState::Favorite)
    }

    pub fn toggled(&self) -> Self {
        match self {
            FavoriteState::NotFavorite => FavoriteState::Favorite,
            FavoriteState::Favorite => FavoriteState::NotFavorite,
        }
    }
}

impl From<bool> for FavoriteState {
    fn from(is_favorite: bool) -> Self {
        if is_favorite {
            FavoriteState::Favorite
        } else {
            FavoriteState::NotFavorite
        }
    }
}

/// Favorite names loaded from a [`Storage`] key. The set is read once on
/// [`FavoritesStore::load`] and written back in full after every toggle.
///
/// Entries are kept as raw JSON values: only strings can match a name, any
/// other entry is carried through untouched.
pub struct FavoritesStore<S>
where
    S: Storage,
{
    storage: S,
    key: String,
    entries: Vec<Value>,
}

impl<S> FavoritesStore<S>
where
    S: Storage,
{
    pub fn load(storage: S, key: &str) -> Result<Self> {
        let entries = match storage.get_item(key)? {
            Some(value) if !value.is_empty() => {
                serde_json::from_str(&value).map_err(|source| Error::MalformedFavorites {
                    key: key.to_string(),
                    source,
                })?
            }
            _ => vec![],
        };

        Ok(Self {
            storage,
            key: key.to_string(),
            entries,
        })
    }

    /// Favorite names, in stored order.
    pub fn get(&self) -> Vec<&str> {
        self.entries.iter().filter_map(Value::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.as_str() == Some(name))
    }

    pub fn state(&self, name: &str) -> FavoriteState {
        self.contains(name).into()
    }

    /// Adds `name` if absent, otherwise removes every entry equal to it, then
    /// persists the whole set. Returns the new state of `name`.
    pub fn toggle(&mut self, name: &str) -> Result<FavoriteState> {
        if self.contains(name) {
            self.entries.retain(|entry| entry.as_str() != Some(name));
        } else {
            self.entries.push(Value::String(name.to_string()));
        }

        let value = serde_json::to_string(&self.entries)?;
        self.storage.set_item(&self.key, &value)?;
        debug!("favorites now hold {} entries", self.entries.len());

        Ok(self.state(name))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::FAVORITES_KEY;

    #[test]
    fn test_load_missing_key() {
        let store = FavoritesStore::load(MemoryStorage::new(), FAVORITES_KEY).unwrap();

        assert!(store.get().is_empty());
    }

    #[test]
    fn test_load_empty_value() {
        let storage = MemoryStorage::with_item(FAVORITES_KEY, "");
        let store = FavoritesStore::load(storage, FAVORITES_KEY).unwrap();

        assert!(store.get().is_empty());
    }

    #[test]
    fn test_load_malformed_value() {
        let storage = MemoryStorage::with_item(FAVORITES_KEY, "[\"A\",");
        let result = FavoritesStore::load(storage, FAVORITES_KEY);

        assert!(matches!(result, Err(Error::MalformedFavorites { .. })));
    }

    #[test]
    fn test_load_null_is_malformed() {
        let storage = MemoryStorage::with_item(FAVORITES_KEY, "null");
        let result = FavoritesStore::load(storage, FAVORITES_KEY);

        assert!(matches!(result, Err(Error::MalformedFavorites { .. })));
    }

    #[test]
    fn test_non_string_entries_are_kept() {
        let storage = MemoryStorage::with_item(FAVORITES_KEY, "[\"A\",1]");
        let mut store = FavoritesStore::load(storage.clone(), FAVORITES_KEY).unwrap();

        assert_eq!(store.get(), vec!["A"]);
        assert!(store.contains("A"));
        assert!(!store.contains("1"));

        assert_eq!(store.toggle("C").unwrap(), FavoriteState::Favorite);
        assert_eq!(
            storage.get_item(FAVORITES_KEY).unwrap().as_deref(),
            Some("[\"A\",1,\"C\"]")
        );

        assert_eq!(store.toggle("A").unwrap(), FavoriteState::NotFavorite);
        assert_eq!(
            storage.get_item(FAVORITES_KEY).unwrap().as_deref(),
            Some("[1,\"C\"]")
        );
    }

    #[test]
    fn test_toggle_persists() {
        let storage = MemoryStorage::with_item(FAVORITES_KEY, "[]");
        let mut store = FavoritesStore::load(storage.clone(), FAVORITES_KEY).unwrap();

        let state = store.toggle("C").unwrap();

        assert_eq!(state, FavoriteState::Favorite);
        assert_eq!(
            storage.get_item(FAVORITES_KEY).unwrap().as_deref(),
            Some("[\"C\"]")
        );
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let storage = MemoryStorage::with_item(FAVORITES_KEY, "[\"A\",\"B\"]");
        let mut store = FavoritesStore::load(storage.clone(), FAVORITES_KEY).unwrap();

        assert_eq!(store.toggle("A").unwrap(), FavoriteState::NotFavorite);
        assert_eq!(store.get(), vec!["B"]);

        assert_eq!(store.toggle("A").unwrap(), FavoriteState::Favorite);
        assert!(store.contains("A"));
        assert!(store.contains("B"));
        assert_eq!(
            storage.get_item(FAVORITES_KEY).unwrap().as_deref(),
            Some("[\"B\",\"A\"]")
        );
    }

    #[test]
    fn test_toggle_removes_every_duplicate() {
        let storage = MemoryStorage::with_item(FAVORITES_KEY, "[\"A\",\"B\",\"A\"]");
        let mut store = FavoritesStore::load(storage, FAVORITES_KEY).unwrap();

        assert_eq!(store.toggle("A").unwrap(), FavoriteState::NotFavorite);
        assert_eq!(store.get(), vec!["B"]);
    }

    #[test]
    fn test_favorite_state_labels() {
        assert_eq!(FavoriteState::NotFavorite.label(), "Favori ★");
        assert_eq!(FavoriteState::Favorite.label(), "Retirer des favoris ★");
        assert_eq!(
            FavoriteState::NotFavorite.toggled().toggled(),
            FavoriteState::NotFavorite
        );
    }
}
