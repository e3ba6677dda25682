//! Error type for controller wiring.
//!
//! Errors never reach the page. The controller logs them at the boundary of
//! the behavior that failed and leaves that behavior unbound.

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// A required element is not in the document.
    #[error("missing element: {selector}")]
    MissingElement { selector: String },

    /// A web-sys call returned a JS exception.
    #[error("dom call failed: {0}")]
    Dom(String),

    /// The inline configuration document was rejected.
    #[error("config rejected: {0}")]
    Config(String),
}

impl PageError {
    pub fn missing(selector: &str) -> Self {
        Self::MissingElement { selector: selector.to_owned() }
    }
}
