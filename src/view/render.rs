//! Text rendering settings for subset views

use std::fmt::{Display, Write};

use crate::CombinatoricsError;

/// Formatting parameters for [`SubsetView::render`](super::SubsetView::render).
///
/// Defaults render `{A, B}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Placed between consecutive elements.
    pub separator: String,
    /// Placed before the first element.
    pub open: String,
    /// Placed after the last element.
    pub close: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            open: "{".to_string(),
            close: "}".to_string(),
        }
    }
}

impl RenderConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the opening and closing delimiters.
    pub fn with_delimiters(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.open = open.into();
        self.close = close.into();
        self
    }

    /// Reject settings that would break one-subset-per-line output.
    pub fn validate(&self) -> Result<(), CombinatoricsError> {
        for (name, value) in [
            ("separator", &self.separator),
            ("open", &self.open),
            ("close", &self.close),
        ] {
            if value.contains(&['\n', '\r'][..]) {
                return Err(CombinatoricsError::InvalidRenderConfig(format!(
                    "{name} must not contain line breaks"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn render<I>(&self, items: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut out = self.open.clone();
        for (position, item) in items.into_iter().enumerate() {
            if position > 0 {
                out.push_str(&self.separator);
            }
            // writing into a String cannot fail
            let _ = write!(out, "{item}");
        }
        out.push_str(&self.close);
        out
    }
}
