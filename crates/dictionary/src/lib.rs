use classify::{classify, PageKind};
use error::SearchError;
use scraper::Html;
use tracing::{debug, instrument, warn};

pub mod classify;
mod config;
mod dictionary;
mod error;
mod extract;
mod fetch;
mod markup;

pub use config::{DictionaryConfig, MarkupConfig};
pub use dictionary::{Definition, Entry, Onym, SearchResult, Suggestion};
pub use error::{ExtractionError, FetchError, FetchErrorKind, MalformedUrlError, SearchFailedError};
pub use extract::{Extractor, OnymKind, SuggestionMode};
pub use fetch::{Fetch, FetchedPage, HttpFetcher};

pub struct Dictionary<F = HttpFetcher> {
    fetcher: F,
    config: DictionaryConfig,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_config(DictionaryConfig::default())
    }

    pub fn with_config(config: DictionaryConfig) -> Self {
        let fetcher = HttpFetcher::new(&config.user_agent);
        Self { fetcher, config }
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fetch> Dictionary<F> {
    pub fn with_fetcher(fetcher: F, config: DictionaryConfig) -> Self {
        Self { fetcher, config }
    }

    /// Looks `word` up. Every failure, whichever stage it comes from, is
    /// reported as a [`SearchFailedError`] and no partial result is returned.
    #[instrument(skip(self))]
    pub async fn search(&self, word: &str) -> Result<SearchResult, SearchFailedError> {
        self.try_search(word).await.map_err(|source| {
            warn!(error = %source, "search failed");
            SearchFailedError::new(word, source)
        })
    }

    async fn try_search(&self, word: &str) -> Result<SearchResult, SearchError> {
        let url = self.config.word_url(word);
        let page = self.fetcher.fetch(&url).await?;
        self.extract(word, page)
    }

    fn extract(&self, word: &str, page: FetchedPage) -> Result<SearchResult, SearchError> {
        let kind = classify(&page.url, word)?;
        let document = Html::parse_document(&page.body);
        let extractor = Extractor::new(&self.config);
        let result = match kind {
            PageKind::Found(canonical) => {
                let entry = extractor.entry(&document)?;
                let suggestions = extractor.suggestions(&document, SuggestionMode::Found)?;
                debug!(
                    %canonical,
                    definitions = entry.definitions.len(),
                    suggestions = suggestions.len(),
                    "entry found"
                );
                SearchResult::found(canonical, page.url, entry, suggestions)
            }
            PageKind::NotFound => {
                let suggestions = extractor.suggestions(&document, SuggestionMode::NotFound)?;
                debug!(suggestions = suggestions.len(), "no entry found");
                SearchResult::not_found(word.to_owned(), page.url, suggestions)
            }
        };
        Ok(result)
    }
}
