//! Crate error type.

pub type BookletResult<T> = Result<T, BookletError>;

#[derive(thiserror::Error, Debug)]
pub enum BookletError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("playlist error: {0}")]
    Playlist(String),

    #[error("card label error: {0}")]
    CardLabel(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BookletError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn playlist(msg: impl Into<String>) -> Self {
        Self::Playlist(msg.into())
    }

    pub fn card_label(msg: impl Into<String>) -> Self {
        Self::CardLabel(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BookletError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}
