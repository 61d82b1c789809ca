//! Setup errors for the DOM binding
//!
//! Counting itself cannot fail; the only failure surface is the one-time
//! lookup and wiring of the two page elements.

use wasm_bindgen::JsValue;

/// Why attaching the counter to the page failed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("no global `window` object")]
    NoWindow,

    #[error("window has no `document`")]
    NoDocument,

    #[error("element `#{id}` not found in document")]
    ElementNotFound { id: String },

    #[error("element `#{id}` is not a textarea")]
    NotATextArea { id: String },

    #[error("failed to register input listener on `#{id}`: {message}")]
    Listener { id: String, message: String },
}

impl SetupError {
    pub fn element_not_found(id: &str) -> Self {
        Self::ElementNotFound { id: id.to_string() }
    }

    pub fn not_a_textarea(id: &str) -> Self {
        Self::NotATextArea { id: id.to_string() }
    }

    pub fn listener(id: &str, cause: &JsValue) -> Self {
        Self::Listener {
            id: id.to_string(),
            message: cause
                .as_string()
                .unwrap_or_else(|| format!("{cause:?}")),
        }
    }
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_element() {
        let err = SetupError::element_not_found("id_content");
        assert_eq!(err.to_string(), "element `#id_content` not found in document");

        let err = SetupError::not_a_textarea("word-count");
        assert_eq!(err.to_string(), "element `#word-count` is not a textarea");
    }
}
