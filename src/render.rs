//! Rendering boundary.
//!
//! The card generator hands a [`Renderer`] a template *name* and the
//! placeholder mapping for one distance row; what the document looks like
//! is entirely the renderer's business. [`PlaceholderRenderer`] is the
//! plain whole-document token-substitution implementation — enough for
//! SVG/text card templates, with no templating language of its own.

use std::collections::{BTreeMap, HashMap};

use crate::error::RangeCardError;

/// Document renderer collaborator.
pub trait Renderer {
    /// Render one document from a registered template and a
    /// placeholder→value mapping.
    fn render(
        &self,
        template: &str,
        values: &BTreeMap<String, String>,
    ) -> Result<String, RangeCardError>;
}

/// In-memory template registry with `$TOKEN` substitution.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderRenderer {
    templates: HashMap<String, String>,
}

impl PlaceholderRenderer {
    pub fn new() -> Self {
        PlaceholderRenderer::default()
    }

    /// Register a template body under a name.
    pub fn register(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.templates.insert(name.into(), body.into());
    }
}

impl Renderer for PlaceholderRenderer {
    fn render(
        &self,
        template: &str,
        values: &BTreeMap<String, String>,
    ) -> Result<String, RangeCardError> {
        let body = self.templates.get(template).ok_or_else(|| {
            RangeCardError::Render(format!("unknown template \"{template}\""))
        })?;

        // Longer identifiers first, so a placeholder that prefixes another
        // ($T5 vs $T55) cannot clip it.
        let mut keys: Vec<&String> = values.keys().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut document = body.clone();
        for key in keys {
            document = document.replace(key.as_str(), &values[key]);
        }

        if let Some(token) = unresolved_token(&document) {
            return Err(RangeCardError::Render(format!(
                "template \"{template}\" has unresolved placeholder {token}"
            )));
        }
        Ok(document)
    }
}

/// First `$TOKEN`-shaped identifier left in a rendered document, if any.
fn unresolved_token(document: &str) -> Option<String> {
    let bytes = document.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'$' {
            continue;
        }
        let rest = &bytes[i + 1..];
        if rest.first().map_or(false, u8::is_ascii_uppercase) {
            let len = rest
                .iter()
                .take_while(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || **c == b'_')
                .count();
            return Some(String::from_utf8_lossy(&bytes[i..i + 1 + len]).into_owned());
        }
    }
    None
}
