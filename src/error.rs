/// A possible error value when parsing a URI.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// Input does not match the URI grammar.
    ///
    /// Carries the original input, before case folding.
    #[error("Invalid URI provided: {0}")]
    Invalid(String),
    /// A query segment without a `=` separator.
    #[error("query segment `{0}` is missing a `=` separator")]
    Query(String),
}
