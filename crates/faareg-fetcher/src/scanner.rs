//! Document scanning seam between extraction and the HTML parser.

use crate::selectors::LABEL_ATTR;
use scraper::{Html, Selector};

/// A table cell with its label attribute and trimmed visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledCell {
    pub label: String,
    pub text: String,
}

/// Read-only queries extraction needs from a parsed document.
pub trait DocumentScanner {
    /// Every element matching `scope` that carries a label attribute, in
    /// document order.
    fn labeled_cells(&self, scope: &str) -> Vec<LabeledCell>;

    /// Text of all elements matching `scope`, concatenated and trimmed.
    /// `None` when nothing matches.
    fn text_of(&self, scope: &str) -> Option<String>;
}

/// [`DocumentScanner`] backed by `scraper`.
pub struct HtmlScanner {
    document: Html,
}

impl HtmlScanner {
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    fn selector(scope: &str) -> Option<Selector> {
        match Selector::parse(scope) {
            Ok(selector) => Some(selector),
            Err(e) => {
                tracing::warn!("Invalid selector {:?}: {}", scope, e);
                None
            }
        }
    }
}

impl DocumentScanner for HtmlScanner {
    fn labeled_cells(&self, scope: &str) -> Vec<LabeledCell> {
        let Some(selector) = Self::selector(scope) else {
            return Vec::new();
        };

        self.document
            .select(&selector)
            .filter_map(|el| {
                el.value().attr(LABEL_ATTR).map(|label| LabeledCell {
                    label: label.to_string(),
                    text: el.text().collect::<String>().trim().to_string(),
                })
            })
            .collect()
    }

    fn text_of(&self, scope: &str) -> Option<String> {
        let selector = Self::selector(scope)?;
        let mut matches = self.document.select(&selector).peekable();
        matches.peek()?;

        let text: String = matches.flat_map(|el| el.text()).collect();
        Some(text.trim().to_string())
    }
}
