use std::sync::OnceLock;

use regex::Regex;

/// Converts a component folder name into its `usingComponents` key,
/// e.g. `PrivacyModal` into `privacy-modal`.
pub fn kebab(name: &str) -> String {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    static ACRONYM: OnceLock<Regex> = OnceLock::new();

    if name.chars().count() < 2 {
        return name.to_lowercase();
    }

    // `myURLString` -> `my-URLString`
    let boundary = BOUNDARY.get_or_init(|| Regex::new(r"([\p{Ll}0-9])(\p{Lu})").unwrap());
    let split = boundary.replace_all(name, "$1-$2");

    // `my-URLString` -> `my-URL-String`
    let acronym = ACRONYM.get_or_init(|| Regex::new(r"(\p{Lu})(\p{Lu}\p{Ll}+)").unwrap());
    acronym.replace_all(&split, "$1-$2").to_lowercase()
}
