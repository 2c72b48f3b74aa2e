use thiserror::Error;

/// Errors produced by the checked numeric helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value is not representable by the requested target type.
    #[error("cannot narrow value of type `{from}` to `{to}`")]
    Narrowing {
        from: &'static str,
        to: &'static str,
    },

    /// A percentage was requested of a quotient with a zero denominator.
    #[error("percentage denominator is zero")]
    ZeroDenominator,
}

pub type Result<T> = std::result::Result<T, Error>;
