/// Keyword extraction for submissions and templates.
///
/// Text is lower-cased, split into runs of word characters, and filtered
/// against a closed Spanish stopword list and a minimum token length.
use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Normalized keyword signature of a piece of text.
pub type KeywordSet = BTreeSet<String>;

/// Tokens with this many characters or fewer are discarded.
const MAX_DISCARDED_LEN: usize = 2;

/// Letters, digits and underscore. Narrower than regex `\w`, which also
/// matches combining marks and other connector punctuation.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("valid regex"));

pub const STOPWORDS: &[&str] = &[
    "a", "al", "algo", "algun", "alguna", "algunas", "algunos", "ante", "antes", "como", "con",
    "contra", "cual", "cuales", "de", "del", "desde", "donde", "e", "el", "ella", "ellas",
    "ellos", "en", "entre", "era", "eramos", "eran", "eres", "es", "esa", "esas", "ese", "eso",
    "esos", "esta", "estaba", "estaban", "estado", "estar", "este", "estos", "fue", "fueron",
    "ha", "habia", "habiamos", "han", "hasta", "la", "las", "le", "les", "lo", "los", "mas",
    "me", "mi", "mis", "mucho", "muy", "no", "nos", "nuestra", "nuestro", "o", "otra", "otro",
    "para", "pero", "poco", "por", "porque", "que", "se", "ser", "si", "sin", "sobre", "su",
    "sus", "te", "tiene", "tienen", "tu", "tus", "un", "una", "uno", "y", "ya",
];

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Extract the keyword set of `text`. Any input, including `""`, is valid.
pub fn extract_keywords(text: &str) -> KeywordSet {
    let lowered = text.to_lowercase();
    let mut token_count = 0usize;
    let keywords: KeywordSet = WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .inspect(|_| token_count += 1)
        .filter(|t| t.chars().count() > MAX_DISCARDED_LEN && !is_stopword(t))
        .map(str::to_string)
        .collect();

    debug!(
        input_len = text.len(),
        token_count,
        keyword_count = keywords.len(),
        "extracted keywords"
    );
    keywords
}
