//! Fetch error types

/// Statement error with code and message.
///
/// Every variant is recovered at the statement boundary: the failed
/// line is reported and the interpreter accepts the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    /// E01: Data payload with no command path
    MissingCommand,
    /// E02: Command or data token count over the cap
    TooManyTokens,
    /// E03: First token is not a known command
    UnrecognizedCommand,
    /// E04: Sub-token failed vocabulary validation
    UnrecognizedToken,
    /// E05: Required sub-token absent
    MissingToken,
    /// E06: Command registered but not implemented
    NotImplemented,
}

impl FetchError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCommand => "E01",
            Self::TooManyTokens => "E02",
            Self::UnrecognizedCommand => "E03",
            Self::UnrecognizedToken => "E04",
            Self::MissingToken => "E05",
            Self::NotImplemented => "E06",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingCommand => "missing command",
            Self::TooManyTokens => "too many tokens",
            Self::UnrecognizedCommand => "unrecognized command",
            Self::UnrecognizedToken => "unrecognized token",
            Self::MissingToken => "missing token",
            Self::NotImplemented => "not implemented",
        }
    }
}

impl core::fmt::Display for FetchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
