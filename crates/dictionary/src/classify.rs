use crate::error::MalformedUrlError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    /// The site redirected to an entry; carries the canonical word.
    Found(String),
    /// The site echoed the query back.
    NotFound,
}

/// Decides hit or miss from the resolved url alone.
///
/// The site answers a miss by re-rendering the url that was asked for, so a
/// last segment equal to the query means nothing matched. Anything else is a
/// redirect to an entry and its last segment is the canonical word. One
/// trailing slash is not a segment of its own.
pub fn classify(resolved_url: &str, word: &str) -> Result<PageKind, MalformedUrlError> {
    let path = resolved_url
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or(resolved_url);
    let path = path.strip_suffix('/').unwrap_or(path);
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 2 {
        return Err(MalformedUrlError {
            url: resolved_url.to_owned(),
        });
    }

    let last = decode(segments[segments.len() - 1]);
    if last == word {
        return Ok(PageKind::NotFound);
    }
    Ok(PageKind::Found(last))
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "https://www.larousse.fr/dictionnaires/francais";

    #[test]
    fn echoed_query_is_not_found() {
        assert_eq!(
            classify(&format!("{ROOT}/dormirr"), "dormirr"),
            Ok(PageKind::NotFound)
        );
    }

    #[test]
    fn redirect_names_the_canonical_segment() {
        assert_eq!(
            classify(&format!("{ROOT}/dormir/26573"), "dormir"),
            Ok(PageKind::Found("26573".to_owned()))
        );
        assert_eq!(
            classify(&format!("{ROOT}/camion"), "camión"),
            Ok(PageKind::Found("camion".to_owned()))
        );
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(
            classify(&format!("{ROOT}/dormirr/"), "dormirr"),
            Ok(PageKind::NotFound)
        );
        assert_eq!(
            classify(&format!("{ROOT}/dormir/26573/"), "dormir"),
            Ok(PageKind::Found("26573".to_owned()))
        );
    }

    #[test]
    fn encoded_segments_compare_decoded() {
        assert_eq!(
            classify(&format!("{ROOT}/%C3%A9t%C3%A9e"), "étée"),
            Ok(PageKind::NotFound)
        );
        assert_eq!(
            classify(&format!("{ROOT}/%C3%A9t%C3%A9/"), "ete"),
            Ok(PageKind::Found("été".to_owned()))
        );
    }

    #[test]
    fn query_string_is_not_part_of_the_segment() {
        assert_eq!(
            classify(&format!("{ROOT}/dormir?q=dormir#1"), "dormir"),
            Ok(PageKind::NotFound)
        );
    }

    #[test]
    fn single_segment_is_malformed() {
        for url in ["dormir", "dormir/"] {
            assert_eq!(
                classify(url, "dormir"),
                Err(MalformedUrlError {
                    url: url.to_owned()
                })
            );
        }
    }
}
