use serde::{Deserialize, Serialize};

/// Outcome of a single search. `entry` is only present on a hit, while
/// `suggestions` holds the corrector links on a miss or the sibling
/// homograph entries on a hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub found: bool,
    pub word: String,
    pub url: String,
    pub entry: Option<Entry>,
    pub suggestions: Vec<Suggestion>,
}

impl SearchResult {
    pub(crate) fn found(
        word: String,
        url: String,
        entry: Entry,
        suggestions: Vec<Suggestion>,
    ) -> Self {
        Self {
            found: true,
            word,
            url,
            entry: Some(entry),
            suggestions,
        }
    }

    pub(crate) fn not_found(word: String, url: String, suggestions: Vec<Suggestion>) -> Self {
        Self {
            found: false,
            word,
            url,
            entry: None,
            suggestions,
        }
    }
}


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// One group per pronunciation variant, spellings in document order.
    pub spelling_groups: Vec<Vec<String>>,
    pub grammatical_category: String,
    pub origin: String,
    pub definitions: Vec<Definition>,
}


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub number: Option<u32>,
    pub text: String,
    pub examples: Vec<String>,
    pub synonyms: Vec<Onym>,
    pub antonyms: Vec<Onym>,
}


/// A synonym or antonym reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Onym {
    pub word: String,
    /// Set when the word links to its own entry.
    pub url: Option<String>,
    /// Usage qualifier that followed the word, e.g. `familier`.
    pub info: Option<String>,
}

impl Onym {
    pub(crate) fn plain(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            url: None,
            info: None,
        }
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub url: String,
}
