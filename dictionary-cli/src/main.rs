use dictionary::{Dictionary, DictionaryConfig, SearchFailedError, SearchResult};
use display::{print_entry, print_suggestions};
use futures::future::join_all;
use tracing_subscriber::EnvFilter;
use utilities::{input, rank_by_similarity, str_to_bool};

mod display;
mod utilities;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let dict = Dictionary::with_config(DictionaryConfig::from_env());
    while let Some(line) = input(">> ")? {
        let line = line.trim();
        let mut command_parts = line.split_ascii_whitespace();
        if let Some(command) = command_parts.next() {
            match command {
                "exit" | "leave" | "quit" | "e" | "q" | "l" => {
                    break;
                }
                "define" | "find" => {
                    define_words(&dict, &command_parts.collect::<Vec<&str>>()).await?;
                }
                "json" => {
                    let word = command_parts.collect::<Vec<&str>>().join(" ");
                    print_json(&dict, &word).await?;
                }
                _ => {
                    println!("Unknown command {command}.");
                }
            }
        }
    }
    Ok(())
}

async fn define_words(dict: &Dictionary, words: &[&str]) -> anyhow::Result<()> {
    if words.is_empty() {
        println!("Usage: define <word> [<word>...]");
        return Ok(());
    }
    let results = join_all(words.iter().map(|word| dict.search(word))).await;
    for (index, (word, result)) in words.iter().zip(results).enumerate() {
        if index != 0 {
            println!("----------------------------------------");
        }
        match result {
            Ok(result) => show_result(dict, word, result).await?,
            Err(error) => report(error),
        }
    }
    Ok(())
}

async fn show_result(dict: &Dictionary, query: &str, result: SearchResult) -> anyhow::Result<()> {
    if let Some(entry) = &result.entry {
        print_entry(&result.word, entry);
        if !result.suggestions.is_empty() {
            println!("  other entries:");
            print_suggestions(result.suggestions.iter());
        }
        return Ok(());
    }

    let ranked = rank_by_similarity(query, &result.suggestions, |suggestion| suggestion.word.as_str());
    let Some(closest) = ranked.first() else {
        println!("Couldn't find the word you were looking for.");
        return Ok(());
    };
    println!("Couldn't find '{query}'. Related entries:");
    print_suggestions(ranked.iter().copied());
    let Some(answer) = input(&format!("Look up '{}' instead? (Y/n): ", closest.word))? else {
        return Ok(());
    };
    if str_to_bool(answer).unwrap_or(false) {
        match dict.search(&closest.word).await {
            Ok(SearchResult {
                word,
                entry: Some(entry),
                ..
            }) => print_entry(&word, &entry),
            Ok(_) => println!("'{}' has no entry either.", closest.word),
            Err(error) => report(error),
        }
    }
    Ok(())
}

async fn print_json(dict: &Dictionary, word: &str) -> anyhow::Result<()> {
    match dict.search(word).await {
        Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
        Err(error) => report(error),
    }
    Ok(())
}

fn report(error: SearchFailedError) {
    tracing::debug!(?error, "search failed");
    println!("{:#}", anyhow::Error::from(error));
}
