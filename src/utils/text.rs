use std::sync::LazyLock;

use regex::Regex;

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9]+(?:['’][a-z]+)*").expect("valid word regex"));

/// Lowercased word tokens of `text`; apostrophe contractions stay in one token.
pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().replace('’', "'"))
        .collect()
}
