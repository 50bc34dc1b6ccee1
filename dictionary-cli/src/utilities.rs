use std::io::{self, Write};



/// Reads one line after printing `prompt`. Returns `None` once stdin is closed.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

pub fn str_to_bool(mut str: String) -> Option<bool> {
    str.make_ascii_lowercase();
    match str.trim() {
        "y" | "yes" | "s" | "si" | "sí" | "true" | "on" => Some(true),
        "n" | "no" | "nope" | "false" | "off" => Some(false),
        _ => None,
    }
}

/// Orders candidates by how close they are to `query`, closest first.
pub fn rank_by_similarity<'a, T>(query: &str, candidates: &'a [T], key: impl Fn(&T) -> &str) -> Vec<&'a T> {
    let query = query.to_lowercase();
    let mut ranked = candidates
        .iter()
        .map(|candidate| (candidate, strsim::jaro(&key(candidate).to_lowercase(), &query)))
        .collect::<Vec<(&T, f64)>>();
    // most similar at the start
    ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    ranked.into_iter().map(|(candidate, _)| candidate).collect()
}
