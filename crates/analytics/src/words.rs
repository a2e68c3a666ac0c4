//! Title tokenization for the word-frequency tables.

/// Case-fold a raw token and strip non-alphanumeric characters from both
/// ends.
///
/// Example: "(Adventure!)" -> Some("adventure")
///          "Spider-Man:"  -> Some("spider-man")
///          "--"           -> None
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whitespace-split a title and normalize every token, dropping tokens that
/// normalize to nothing
pub fn title_words(title: &str) -> impl Iterator<Item = String> + '_ {
    title.split_whitespace().filter_map(normalize_word)
}
