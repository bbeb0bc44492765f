pub mod case;
pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;

pub use case::{CaseStyle, Converter, TokenizerOptions};
pub use config::Config;
pub use error::CaseError;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
    pub style: CaseStyle,
}

pub fn camel_case(input: &str) -> String {
    CaseStyle::Camel.apply(input)
}

pub fn kebab_case(input: &str) -> String {
    CaseStyle::Kebab.apply(input)
}

pub fn dot_case(input: &str) -> String {
    CaseStyle::Dot.apply(input)
}

pub fn snake_case(input: &str) -> String {
    CaseStyle::Snake.apply(input)
}

pub fn pascal_case(input: &str) -> String {
    CaseStyle::Pascal.apply(input)
}
