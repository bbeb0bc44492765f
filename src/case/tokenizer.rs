use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A word is a maximal run of letters or digits; everything else separates.
    // Combining marks belong to the letter they follow (NFD accents, Indic vowel signs).
    static ref UNICODE_WORD: Regex = Regex::new(r"[\p{L}\p{N}][\p{L}\p{M}\p{N}]*").unwrap();
    static ref ASCII_WORD: Regex = Regex::new(r"[A-Za-z0-9]+").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Treat letters and digits of any script as word characters
    pub unicode: bool,
    /// Additionally split runs like `fooBar` or `XMLHttp` at case transitions
    pub split_case_boundaries: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            unicode: true,
            split_case_boundaries: false,
        }
    }
}

/// Split `input` into words, in input order. Never yields an empty word.
pub fn words(input: &str, options: TokenizerOptions) -> Vec<String> {
    let pattern: &Regex = if options.unicode {
        &UNICODE_WORD
    } else {
        &ASCII_WORD
    };

    let mut result = Vec::new();
    for m in pattern.find_iter(input) {
        if options.split_case_boundaries {
            result.extend(split_case_boundaries(m.as_str()).into_iter().map(str::to_string));
        } else {
            result.push(m.as_str().to_string());
        }
    }

    result
}

fn split_case_boundaries(word: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut cuts = vec![0];

    for i in 1..chars.len() {
        let prev = chars[i - 1].1;
        let cur = chars[i].1;
        let next = chars.get(i + 1).map(|&(_, c)| c);

        let lower_to_upper = (prev.is_lowercase() || prev.is_numeric()) && cur.is_uppercase();
        // "XMLHttp": the H starts a new word, not the L
        let acronym_end = prev.is_uppercase()
            && cur.is_uppercase()
            && next.is_some_and(|c| c.is_lowercase());

        if lower_to_upper || acronym_end {
            cuts.push(chars[i].0);
        }
    }
    cuts.push(word.len());

    cuts.windows(2)
        .map(|w| &word[w[0]..w[1]])
        .filter(|part| !part.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii() -> TokenizerOptions {
        TokenizerOptions {
            unicode: false,
            ..Default::default()
        }
    }

    fn splitting() -> TokenizerOptions {
        TokenizerOptions {
            split_case_boundaries: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_separators() {
        let opts = TokenizerOptions::default();
        assert_eq!(words("hello world", opts), vec!["hello", "world"]);
        assert_eq!(words("--foo__bar..baz  ", opts), vec!["foo", "bar", "baz"]);
        assert_eq!(words("version 2 beta", opts), vec!["version", "2", "beta"]);
    }

    #[test]
    fn test_empty_and_separator_only() {
        let opts = TokenizerOptions::default();
        assert!(words("", opts).is_empty());
        assert!(words(" -_.!? ", opts).is_empty());
    }

    #[test]
    fn test_unicode_words() {
        let opts = TokenizerOptions::default();
        assert_eq!(words("héllo wörld", opts), vec!["héllo", "wörld"]);
        assert_eq!(words("日本語 テキスト", opts), vec!["日本語", "テキスト"]);
    }

    #[test]
    fn test_combining_marks_stay_in_word() {
        let opts = TokenizerOptions::default();
        assert_eq!(
            words("e\u{301}cole normale", opts),
            vec!["e\u{301}cole", "normale"]
        );
        assert_eq!(words("हिन्दी भाषा", opts), vec!["हिन्दी", "भाषा"]);
        // a mark with no base letter is still a separator
        assert_eq!(words("\u{301}abc", opts), vec!["abc"]);
    }

    #[test]
    fn test_ascii_fallback() {
        assert_eq!(words("héllo wörld", ascii()), vec!["h", "llo", "w", "rld"]);
        assert_eq!(words("plain_ascii", ascii()), vec!["plain", "ascii"]);
    }

    #[test]
    fn test_case_boundaries_kept_by_default() {
        let opts = TokenizerOptions::default();
        assert_eq!(words("fooBar", opts), vec!["fooBar"]);
    }

    #[test]
    fn test_case_boundary_splitting() {
        assert_eq!(words("fooBar", splitting()), vec!["foo", "Bar"]);
        assert_eq!(
            words("XMLHttpRequest", splitting()),
            vec!["XML", "Http", "Request"]
        );
        assert_eq!(words("v2Beta", splitting()), vec!["v2", "Beta"]);
        assert_eq!(words("ALLCAPS", splitting()), vec!["ALLCAPS"]);
        assert_eq!(words("ÉtéÀParis", splitting()), vec!["Été", "À", "Paris"]);
    }
}
