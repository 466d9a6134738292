//! Redaction hints: the text shown in place of a secret.
//!
//! A hint is chosen once, when a [`Secret`](crate::Secret) is built, by
//! reducing a list of [`RedactHint`] options over the default [`FIVE_STAR`]
//! marker. Later options overwrite earlier ones.
//!
//! # Example
//!
//! ```rust
//! use secret_text::{FIVE_X, RedactHint};
//!
//! assert_eq!(RedactHint::resolve([]), "*****");
//! assert_eq!(RedactHint::resolve([RedactHint::FiveX]), FIVE_X);
//! assert_eq!(
//!     RedactHint::resolve([RedactHint::FiveX, RedactHint::custom("^^^^^")]),
//!     "^^^^^"
//! );
//! ```

/// Default hint used when no option is given.
pub const FIVE_STAR: &str = "*****";

/// Five-character mask selected by [`RedactHint::FiveX`].
pub const FIVE_X: &str = "XXXXX";

/// Literal marker selected by [`RedactHint::Redacted`].
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Construction option that picks the redaction hint of a secret.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RedactHint {
    /// Use [`FIVE_X`].
    FiveX,
    /// Use [`REDACTED_PLACEHOLDER`].
    Redacted,
    /// Use the given text verbatim.
    Custom(String),
}

impl RedactHint {
    /// Builds a [`RedactHint::Custom`] option.
    #[must_use]
    pub fn custom(hint: impl Into<String>) -> Self {
        Self::Custom(hint.into())
    }

    /// Returns the hint text this option selects.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::FiveX => FIVE_X,
            Self::Redacted => REDACTED_PLACEHOLDER,
            Self::Custom(hint) => hint,
        }
    }

    /// Applies `hints` left to right over [`FIVE_STAR`] and returns the winner.
    #[must_use]
    pub fn resolve<I>(hints: I) -> String
    where
        I: IntoIterator<Item = RedactHint>,
    {
        hints
            .into_iter()
            .fold(FIVE_STAR.to_string(), |_, hint| hint.into_string())
    }

    fn into_string(self) -> String {
        match self {
            Self::Custom(hint) => hint,
            preset => preset.as_str().to_string(),
        }
    }
}

impl From<&str> for RedactHint {
    fn from(hint: &str) -> Self {
        Self::custom(hint)
    }
}

impl From<String> for RedactHint {
    fn from(hint: String) -> Self {
        Self::Custom(hint)
    }
}
