use dictionary::{Entry, Onym, Suggestion};

pub fn print_entry(word: &str, entry: &Entry) {
    println!("Showing definition for '{}':", headword(word, entry));
    if !entry.spelling_groups.is_empty() {
        let spellings = entry
            .spelling_groups
            .iter()
            .map(|group| group.join(", "))
            .collect::<Vec<String>>()
            .join(" | ");
        println!("    {spellings}");
    }
    println!("    {}", entry.grammatical_category);
    if !entry.origin.is_empty() {
        println!("    origin: {}", entry.origin);
    }
    for definition in &entry.definitions {
        match definition.number {
            Some(number) => println!("    {number}. {}", definition.text),
            None => println!("    {}", definition.text),
        }
        for example in &definition.examples {
            println!("          example: {example}");
        }
        if !definition.synonyms.is_empty() {
            println!("          synonyms: {}", format_onyms(&definition.synonyms));
        }
        if !definition.antonyms.is_empty() {
            println!("          antonyms: {}", format_onyms(&definition.antonyms));
        }
    }
}

/// Sites that key entries by id put a number in the resolved url, so the
/// first spelling reads better when the page has one.
fn headword<'a>(word: &'a str, entry: &'a Entry) -> &'a str {
    entry
        .spelling_groups
        .first()
        .and_then(|group| group.first())
        .map_or(word, String::as_str)
}

pub fn print_suggestions<'a>(suggestions: impl Iterator<Item = &'a Suggestion>) {
    for suggestion in suggestions {
        println!("    {} <{}>", suggestion.word, suggestion.url);
    }
}

fn format_onyms(onyms: &[Onym]) -> String {
    onyms
        .iter()
        .map(|onym| match &onym.info {
            Some(info) => format!("{} ({info})", onym.word),
            None => onym.word.clone(),
        })
        .collect::<Vec<String>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onyms_show_their_usage_notes() {
        let onyms = vec![
            Onym {
                word: "reposer".to_owned(),
                url: None,
                info: None,
            },
            Onym {
                word: "pioncer".to_owned(),
                url: None,
                info: Some("familier".to_owned()),
            },
        ];
        assert_eq!(format_onyms(&onyms), "reposer, pioncer (familier)");
    }

    #[test]
    fn headword_prefers_the_first_spelling() {
        let entry = Entry {
            spelling_groups: vec![vec!["clé".to_owned(), "clef".to_owned()]],
            ..Entry::default()
        };
        assert_eq!(headword("16554", &entry), "clé");
        assert_eq!(headword("clé", &Entry::default()), "clé");
    }
}
