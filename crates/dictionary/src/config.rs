use serde::{Deserialize, Serialize};

const DEFAULT_SITE_URL: &str = "https://www.larousse.fr";
const DEFAULT_DICTIONARY_PATH: &str = "/dictionnaires/francais";
const DEFAULT_USER_AGENT: &str = concat!("dictionary/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Root that relative links on a page are resolved against.
    pub site_url: String,
    /// Root that the searched word is appended to.
    pub dictionary_url: String,
    pub user_agent: String,
    pub markup: MarkupConfig,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        let mut config = Self::with_site(DEFAULT_SITE_URL);
        config.dictionary_url = format!("{DEFAULT_SITE_URL}{DEFAULT_DICTIONARY_PATH}");
        config
    }
}

impl DictionaryConfig {
    /// Config where both roots point at `site_url`, handy for local fixtures.
    pub fn with_site(site_url: impl Into<String>) -> Self {
        let site_url = site_url.into();
        Self {
            dictionary_url: site_url.clone(),
            site_url,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            markup: MarkupConfig::default(),
        }
    }

    /// Defaults overridden by `DICTIONARY_SITE_URL` and `DICTIONARY_URL`. A
    /// site override alone serves words from the site root.
    pub fn from_env() -> Self {
        let mut config = match std::env::var("DICTIONARY_SITE_URL") {
            Ok(site_url) => Self::with_site(site_url),
            Err(_) => Self::default(),
        };
        if let Ok(dictionary_url) = std::env::var("DICTIONARY_URL") {
            config.dictionary_url = dictionary_url;
        }
        config
    }

    pub fn word_url(&self, word: &str) -> String {
        format!(
            "{}/{}",
            self.dictionary_url.trim_end_matches('/'),
            urlencoding::encode(word)
        )
    }
}

/// Selectors and class markers of the dictionary page layout.
///
/// Fields ending in `_class` name a single class carried by a child element,
/// everything else is a CSS selector evaluated against the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    pub spelling_header: String,
    pub category: String,
    pub origin: String,
    pub definitions_block: String,
    pub definition: String,
    pub number_class: String,
    pub see_also_class: String,
    pub example_class: String,
    pub onym_list_class: String,
    pub annotation_class: String,
    pub synonym_labels: [String; 2],
    pub corrector_links: String,
    pub other_entries: String,
    pub selected_class: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            spelling_header: "h2.AdresseDefinition".to_owned(),
            category: "p.CatgramDefinition".to_owned(),
            origin: "p.OrigineDefinition".to_owned(),
            definitions_block: "ul.Definitions".to_owned(),
            definition: "li.DivisionDefinition".to_owned(),
            number_class: "numDef".to_owned(),
            see_also_class: "RenvoiDefinition".to_owned(),
            example_class: "ExempleDefinition".to_owned(),
            onym_list_class: "Synonymes".to_owned(),
            annotation_class: "Indicateur".to_owned(),
            synonym_labels: ["Synonyme :".to_owned(), "Synonymes :".to_owned()],
            corrector_links: ".corrector a".to_owned(),
            other_entries: ".wrapper-search li".to_owned(),
            selected_class: "selected".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_url_encodes_and_joins() {
        let config = DictionaryConfig::with_site("https://example.org/");
        assert_eq!(config.word_url("canción"), "https://example.org/canci%C3%B3n");
    }

    #[test]
    fn default_words_live_under_the_dictionary_path() {
        let config = DictionaryConfig::default();
        assert_eq!(config.site_url, "https://www.larousse.fr");
        assert_eq!(
            config.word_url("été"),
            "https://www.larousse.fr/dictionnaires/francais/%C3%A9t%C3%A9"
        );
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: MarkupConfig =
            serde_json::from_str(r#"{ "category": "span.cat" }"#).unwrap();
        assert_eq!(config.category, "span.cat");
        assert_eq!(config.definition, "li.DivisionDefinition");
    }
}
