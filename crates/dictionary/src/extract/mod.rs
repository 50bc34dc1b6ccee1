//! Turns a parsed dictionary page into the result types.
//!
//! All of it is pure over the document: the same tree always yields the same
//! output and nothing is cached between calls.

mod definition;
mod entry;
mod onyms;
mod suggestions;
pub mod text;

use reqwest::Url;
use tracing::warn;

use crate::config::{DictionaryConfig, MarkupConfig};

pub use onyms::OnymKind;
pub use suggestions::SuggestionMode;

pub struct Extractor<'c> {
    markup: &'c MarkupConfig,
    base: Option<Url>,
}

impl<'c> Extractor<'c> {
    pub fn new(config: &'c DictionaryConfig) -> Self {
        let base = Url::parse(&config.site_url).ok();
        if base.is_none() {
            warn!(site_url = %config.site_url, "site url does not parse, links are kept relative");
        }
        Self {
            markup: &config.markup,
            base,
        }
    }

    /// Resolves a link target found on the page against the site root.
    fn resolve(&self, href: &str) -> String {
        self.base
            .as_ref()
            .and_then(|base| base.join(href).ok())
            .map_or_else(|| href.to_owned(), String::from)
    }
}
