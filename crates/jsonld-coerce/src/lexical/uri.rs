use crate::model::UriParts;

/// Split a URI reference into its components.
///
/// This is a purely syntactic decomposition: nothing is validated or
/// percent-decoded, so every string yields a result. The scheme is lower-cased.
pub fn parse_uri(text: &str) -> UriParts {
    let mut parts = UriParts::default();
    let mut rest = text.trim();

    if let Some((scheme, after)) = rest.split_once(':')
        && is_scheme(scheme)
    {
        parts.scheme = scheme.to_ascii_lowercase();
        rest = after;
    }

    if let Some((before, fragment)) = rest.split_once('#') {
        parts.fragment = fragment.to_string();
        rest = before;
    }
    if let Some((before, query)) = rest.split_once('?') {
        parts.query = query.to_string();
        rest = before;
    }

    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find('/').unwrap_or(after.len());
        parts.authority = after[..end].to_string();
        parts.has_authority = true;
        rest = &after[end..];
    }

    let segment_start = rest.rfind('/').map_or(0, |i| i + 1);
    match rest[segment_start..].find(';') {
        Some(i) => {
            parts.path = rest[..segment_start + i].to_string();
            parts.params = rest[segment_start + i + 1..].to_string();
        }
        None => parts.path = rest.to_string(),
    }

    parts
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
