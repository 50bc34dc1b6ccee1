use scraper::Html;
use tracing::debug;

use super::text::annotation;
use super::Extractor;
use crate::dictionary::{Definition, Entry};
use crate::error::ExtractionError;
use crate::markup::{children, compile, is_newline, Node};

impl Extractor<'_> {
    /// Reads a page the site redirected to. Only the grammatical category is
    /// required; a page without it is not laid out the way we expect.
    pub fn entry(&self, document: &Html) -> Result<Entry, ExtractionError> {
        Ok(Entry {
            spelling_groups: self.spelling_groups(document)?,
            grammatical_category: self.grammatical_category(document)?,
            origin: self.origin(document)?,
            definitions: self.definitions(document)?,
        })
    }

    fn grammatical_category(&self, document: &Html) -> Result<String, ExtractionError> {
        let selector = compile(&self.markup.category)?;
        let marker = document
            .select(&selector)
            .next()
            .ok_or_else(|| ExtractionError::MissingElement {
                selector: self.markup.category.clone(),
            })?;
        Ok(marker.text().collect::<String>().trim().to_owned())
    }

    /// `clé, clef` under one header are spellings of one pronunciation.
    fn spelling_groups(&self, document: &Html) -> Result<Vec<Vec<String>>, ExtractionError> {
        let selector = compile(&self.markup.spelling_header)?;
        let groups = document
            .select(&selector)
            .map(|header| {
                children(header)
                    .filter_map(|node| match node {
                        Node::Text(run) if !is_newline(run) => Some(run),
                        _ => None,
                    })
                    .flat_map(|run| run.split(", "))
                    .map(str::trim)
                    .filter(|spelling| !spelling.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .collect();
        Ok(groups)
    }

    fn origin(&self, document: &Html) -> Result<String, ExtractionError> {
        let selector = compile(&self.markup.origin)?;
        match document.select(&selector).next() {
            Some(marker) => Ok(annotation(children(marker))),
            None => {
                debug!("entry has no origin block");
                Ok(String::new())
            }
        }
    }

    /// Definitions of the first block only, later blocks hold other forms.
    fn definitions(&self, document: &Html) -> Result<Vec<Definition>, ExtractionError> {
        let block_selector = compile(&self.markup.definitions_block)?;
        let definition_selector = compile(&self.markup.definition)?;
        let Some(block) = document.select(&block_selector).next() else {
            debug!("entry has no definitions block");
            return Ok(Vec::new());
        };
        Ok(block
            .select(&definition_selector)
            .map(|item| self.definition(item))
            .collect())
    }
}
