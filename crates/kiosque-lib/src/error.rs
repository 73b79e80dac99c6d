use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("malformed favorites under {key}: {source}")]
    MalformedFavorites {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
