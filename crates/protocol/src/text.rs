//! Display helpers for the hyphenated slugs the remote API uses as names.

/// `mr-mime` -> `Mr Mime`. Only the first character of each word changes case.
pub fn title_case(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `generation-iv` -> `GENERATION IV`.
pub fn upper_words(slug: &str) -> String {
    slug.split('-')
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapse the form feeds and line breaks that flavor texts carry into single spaces.
pub fn normalize_flavor_text(raw: &str) -> String {
    raw.split(|c: char| c == '\u{c}' || c == '\n' || c == '\r')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
