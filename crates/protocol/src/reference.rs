use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/(\d+)/?$").expect("valid reference id regex"));

/// Parse the numeric id out of a resource URL such as
/// `https://pokeapi.co/api/v2/pokemon-species/25/`.
///
/// Returns `None` when the last path segment is not a number or does not fit `u32`.
pub fn parse_reference_id(url: &str) -> Option<u32> {
    TRAILING_ID
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Sprite location for a species id under `base`.
pub fn sprite_url(base: &str, id: u32) -> String {
    format!("{}/{id}.png", base.trim_end_matches('/'))
}
