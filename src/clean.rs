//! Note-field cleaning.
//!
//! Field contents arrive as HTML, often with furigana in ruby notation
//! (`漢字[かんじ]`) or bracketed glosses. These helpers reduce them to the
//! plain strings the matcher works on.

use std::sync::LazyLock;

use regex::Regex;

static HTML_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static HTML_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style.*?</style>|<script.*?</script>").unwrap());
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<.*?>").unwrap());
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[\(\{][^\]\)\}]*[\]\)\}]").unwrap());
static VARIATION_SELECTORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{E0100}-\x{E013D}]+").unwrap());
static JAPANESE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "[",
        r"\x{3041}-\x{3096}", // hiragana
        r"\x{30A0}-\x{30FF}", // katakana
        r"\x{3400}-\x{4DB5}\x{4E00}-\x{9FCB}\x{F900}-\x{FA6A}", // kanji
        r"\x{3005}", // 々
        "]+"
    ))
    .unwrap()
});
static ALL_HIRAGANA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\x{3041}-\x{3096}]+$").unwrap());
static RUBY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" ?([^ >]+?)\[(.+?)\]").unwrap());

/// Remove comments, style/script blocks and tags, then decode entities.
pub fn strip_html(s: &str) -> String {
    let s = HTML_COMMENT.replace_all(s, "");
    let s = HTML_BLOCK.replace_all(&s, "");
    let s = HTML_TAG.replace_all(&s, "");
    html_escape::decode_html_entities(&s).into_owned()
}

/// Remove `[...]`, `(...)` and `{...}` runs with their contents.
pub fn remove_bracketed(s: &str) -> String {
    BRACKETED.replace_all(s, "").into_owned()
}

pub fn remove_variation_selectors(s: &str) -> String {
    VARIATION_SELECTORS.replace_all(s, "").into_owned()
}

/// HTML and bracket stripped, trimmed. This is the form the matcher
/// expects for both expression and reading.
pub fn clean(s: &str) -> String {
    remove_bracketed(&strip_html(s)).trim().to_string()
}

/// The first consecutive run of Japanese script after heuristic cleaning,
/// or `None` if the field holds no Japanese.
pub fn clean_japanese(field: &str) -> Option<String> {
    let cleaned = remove_variation_selectors(&remove_bracketed(&strip_html(field)));
    JAPANESE_RUN.find(&cleaned).map(|m| m.as_str().to_string())
}

/// Split a field in ruby notation (`日本[に ほん]語[ご]`) into its expression
/// and concatenated reading. Both are `None` when no Japanese remains.
pub fn split_ruby(field: &str) -> (Option<String>, Option<String>) {
    let field = strip_html(field);
    let mut reading = String::new();
    let mut plain = String::with_capacity(field.len());
    let mut last = 0;

    for caps in RUBY.captures_iter(&field) {
        let (Some(whole), Some(base), Some(ruby)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        plain.push_str(&field[last..whole.start()]);
        plain.push_str(base.as_str());
        reading.push_str(ruby.as_str());
        last = whole.end();
    }
    plain.push_str(&field[last..]);

    match clean_japanese(&plain) {
        Some(expression) => (Some(expression), Some(reading)),
        None => (None, None),
    }
}

/// `Some` if the field consists of hiragana only.
pub fn just_hiragana(field: &str) -> Option<&str> {
    ALL_HIRAGANA.find(field).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup() {
        assert_eq!(strip_html("<b>日本</b>語&amp;<!-- c -->"), "日本語&");
        assert_eq!(strip_html("<style>b{}</style>橋"), "橋");
    }

    #[test]
    fn clean_removes_brackets_and_trims() {
        assert_eq!(clean(" <div>橋 (はし)</div> "), "橋");
        assert_eq!(clean("[sound:x.mp3]"), "");
    }

    #[test]
    fn first_japanese_run() {
        assert_eq!(clean_japanese("to eat: 食べる (v1)").as_deref(), Some("食べる"));
        assert_eq!(clean_japanese("葛\u{E0100}城").as_deref(), Some("葛城"));
        assert_eq!(clean_japanese("hello"), None);
    }

    #[test]
    fn ruby_split() {
        let (expr, reading) = split_ruby("日本[にほん] 語[ご]");
        assert_eq!(expr.as_deref(), Some("日本語"));
        assert_eq!(reading.as_deref(), Some("にほんご"));

        assert_eq!(split_ruby("abc[x]"), (None, None));
    }

    #[test]
    fn hiragana_only() {
        assert_eq!(just_hiragana("はし"), Some("はし"));
        assert_eq!(just_hiragana("橋"), None);
        assert_eq!(just_hiragana("ハシ"), None);
    }
}
