use scraper::{ElementRef, Html};

use super::Extractor;
use crate::dictionary::Suggestion;
use crate::error::ExtractionError;
use crate::markup::{compile, first_text, has_class};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionMode {
    /// Corrections offered when nothing matched the query.
    NotFound,
    /// The other homograph entries listed next to the one shown.
    Found,
}

impl Extractor<'_> {
    pub fn suggestions(
        &self,
        document: &Html,
        mode: SuggestionMode,
    ) -> Result<Vec<Suggestion>, ExtractionError> {
        match mode {
            SuggestionMode::NotFound => {
                let selector = compile(&self.markup.corrector_links)?;
                Ok(document
                    .select(&selector)
                    .filter_map(|link| self.suggestion(link))
                    .collect())
            }
            SuggestionMode::Found => {
                let items = compile(&self.markup.other_entries)?;
                let link = compile("a[href]")?;
                Ok(document
                    .select(&items)
                    .filter(|item| !has_class(*item, &self.markup.selected_class))
                    .filter_map(|item| item.select(&link).next())
                    .filter_map(|link| self.suggestion(link))
                    .collect())
            }
        }
    }

    fn suggestion(&self, link: ElementRef<'_>) -> Option<Suggestion> {
        let href = link.value().attr("href")?;
        // Homograph links carry a superscript index after the word.
        let word = first_text(link)?.trim();
        if word.is_empty() {
            return None;
        }
        Some(Suggestion {
            word: word.to_owned(),
            url: self.resolve(href),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::DictionaryConfig;

    fn suggestion(word: &str, url: &str) -> Suggestion {
        Suggestion {
            word: word.to_owned(),
            url: url.to_owned(),
        }
    }

    #[test]
    fn corrector_links_in_order() {
        let config = DictionaryConfig::default();
        let document = Html::parse_document(
            r#"<section class="corrector"><ul>
<li><h3><a href="/dictionnaires/francais/dormir"> dormir </a></h3></li>
<li><h3><a href="/dictionnaires/francais/dormeur">dormeur</a></h3></li>
</ul></section>"#,
        );
        let suggestions = Extractor::new(&config)
            .suggestions(&document, SuggestionMode::NotFound)
            .unwrap();
        assert_eq!(
            suggestions,
            vec![
                suggestion("dormir", "https://www.larousse.fr/dictionnaires/francais/dormir"),
                suggestion("dormeur", "https://www.larousse.fr/dictionnaires/francais/dormeur"),
            ]
        );
    }

    #[test]
    fn other_entries_skip_the_selected_one() {
        let config = DictionaryConfig::default();
        let document = Html::parse_document(
            r#"<div class="wrapper-search"><ul>
<li class="selected"><a href="/dictionnaires/francais/pêche/59293">pêche<sup>1</sup></a></li>
<li><a href="/dictionnaires/francais/pêche/59294">pêche<sup>2</sup></a></li>
</ul></div>"#,
        );
        let suggestions = Extractor::new(&config)
            .suggestions(&document, SuggestionMode::Found)
            .unwrap();
        assert_eq!(
            suggestions,
            vec![suggestion(
                "pêche",
                "https://www.larousse.fr/dictionnaires/francais/p%C3%AAche/59294"
            )]
        );
    }

    #[test]
    fn absent_container_is_empty() {
        let config = DictionaryConfig::default();
        let document = Html::parse_document("<p>rien</p>");
        let extractor = Extractor::new(&config);
        assert!(extractor
            .suggestions(&document, SuggestionMode::NotFound)
            .unwrap()
            .is_empty());
        assert!(extractor
            .suggestions(&document, SuggestionMode::Found)
            .unwrap()
            .is_empty());
    }
}
