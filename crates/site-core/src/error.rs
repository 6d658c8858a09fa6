use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("javascript call failed: {0}")]
    Js(String),
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}
