use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Za-z][A-Za-z0-9_]*)\}\}").expect("placeholder pattern"));

/// 擷取範本中的 `{{Name}}` 佔位符名稱。 / Extracts the `{{Name}}` placeholder tokens
/// from a template body. The consuming app substitutes these at render time;
/// a translation that drops or renames one produces broken messages.
pub fn placeholder_names(text: &str) -> BTreeSet<String> {
    PLACEHOLDER
        .captures_iter(text)
        .map(|captures| captures[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<String> {
        placeholder_names(text).into_iter().collect()
    }

    #[test]
    fn extracts_tokens() {
        assert_eq!(
            names("[电池监控]\n电池电量: {{BatteryLevel}}%\n{{Message}}"),
            ["BatteryLevel", "Message"]
        );
    }

    #[test]
    fn repeated_tokens_count_once() {
        assert_eq!(names("{{From}} says: {{From}}"), ["From"]);
    }

    #[test]
    fn single_braces_are_not_tokens() {
        assert!(names("{Name} and { {Almost} }").is_empty());
    }

    #[test]
    fn plain_text_has_none() {
        assert!(names("no tokens here").is_empty());
    }
}
