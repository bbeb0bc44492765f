use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("unknown case style '{0}' (expected one of: camel, kebab, dot, snake, pascal)")]
    UnknownStyle(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}
