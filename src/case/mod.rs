pub mod joiner;
pub mod tokenizer;

use crate::error::CaseError;
use crate::Conversion;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
pub use tokenizer::TokenizerOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Camel,
    Kebab,
    Dot,
    Snake,
    Pascal,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 5] = [
        CaseStyle::Camel,
        CaseStyle::Kebab,
        CaseStyle::Dot,
        CaseStyle::Snake,
        CaseStyle::Pascal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Dot => "dot",
            CaseStyle::Snake => "snake",
            CaseStyle::Pascal => "pascal",
        }
    }

    /// Character placed between words, if any
    pub fn separator(&self) -> Option<char> {
        match self {
            CaseStyle::Camel | CaseStyle::Pascal => None,
            CaseStyle::Kebab => Some('-'),
            CaseStyle::Dot => Some('.'),
            CaseStyle::Snake => Some('_'),
        }
    }

    /// Case already-tokenized words for this style
    pub fn join<S: AsRef<str>>(&self, words: &[S]) -> String {
        match self {
            CaseStyle::Camel => joiner::camel(words),
            CaseStyle::Pascal => joiner::pascal(words),
            CaseStyle::Kebab | CaseStyle::Dot | CaseStyle::Snake => {
                // separator() is Some for every separated style
                joiner::separated(words, self.separator().unwrap_or('-'))
            }
        }
    }

    pub fn apply(&self, input: &str) -> String {
        self.join(&tokenizer::words(input, TokenizerOptions::default()))
    }

    /// Missing input converts to an empty string
    pub fn apply_opt(&self, input: Option<&str>) -> String {
        input.map(|s| self.apply(s)).unwrap_or_default()
    }
}

impl FromStr for CaseStyle {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "kebab" | "kebabcase" => Ok(CaseStyle::Kebab),
            "dot" | "dotcase" => Ok(CaseStyle::Dot),
            "snake" | "snakecase" => Ok(CaseStyle::Snake),
            "pascal" | "pascalcase" => Ok(CaseStyle::Pascal),
            _ => Err(CaseError::UnknownStyle(s.to_string())),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Converts text with a fixed set of tokenizer options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    options: TokenizerOptions,
}

impl Converter {
    pub fn new(options: TokenizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> TokenizerOptions {
        self.options
    }

    pub fn words(&self, input: &str) -> Vec<String> {
        tokenizer::words(input, self.options)
    }

    pub fn convert(&self, style: CaseStyle, input: &str) -> String {
        let words = self.words(input);
        log::trace!("{} -> {:?}", style, words);
        style.join(&words)
    }

    /// Convert every line of `text` on its own. Output order follows input order.
    pub fn convert_lines(&self, style: CaseStyle, text: &str) -> Vec<Conversion> {
        let lines: Vec<&str> = text.lines().collect();
        log::debug!("converting {} lines to {}", lines.len(), style);

        lines
            .par_iter()
            .map(|line| Conversion {
                input: line.to_string(),
                output: self.convert(style, line),
                style,
            })
            .collect()
    }
}
