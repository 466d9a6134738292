//! The [`Secret`] string wrapper.
//!
//! A `Secret` pairs a sensitive value with a redaction hint. Every generic
//! output path (`Display`, `Debug`, text and JSON marshaling, logging
//! adapters) emits the hint. The value is only reachable through
//! [`Secret::expose`] or [`Secret::into_inner`].
//!
//! Both fields live in `Arc<str>`, so cloning is cheap. Nothing writes through
//! that shared storage: unmarshaling rebinds both fields to fresh
//! allocations, which keeps earlier clones intact.

use std::{convert::Infallible, fmt, str::FromStr, sync::Arc};

use crate::hint::{FIVE_STAR, RedactHint};

/// A string that renders as its redaction hint everywhere except [`Secret::expose`].
///
/// ```rust
/// use secret_text::{RedactHint, Secret};
///
/// let password = Secret::with_hints("hunter2", [RedactHint::Redacted]);
/// assert_eq!(password.to_string(), "[REDACTED]");
/// assert_eq!(format!("{password:?}"), r#"Secret("[REDACTED]")"#);
/// assert_eq!(password.expose(), "hunter2");
/// ```
#[derive(Clone)]
pub struct Secret {
    value: Arc<str>,
    hint: Arc<str>,
}

impl Secret {
    /// Wraps `value` with the default [`FIVE_STAR`] hint.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_hints(value, [])
    }

    /// Wraps `value` and picks the hint by applying `hints` left to right.
    #[must_use]
    pub fn with_hints<I>(value: impl Into<String>, hints: I) -> Self
    where
        I: IntoIterator<Item = RedactHint>,
    {
        Self {
            value: Arc::from(value.into()),
            hint: Arc::from(RedactHint::resolve(hints)),
        }
    }

    /// Returns a copy of this secret with `hint` applied on top.
    ///
    /// The hint gets its own allocation; `self` is left as it was.
    #[must_use]
    pub fn with_hint(&self, hint: RedactHint) -> Self {
        Self {
            value: Arc::clone(&self.value),
            hint: Arc::from(RedactHint::resolve([hint])),
        }
    }

    /// Explicitly access the secret value.
    ///
    /// This is the only way to read the value back. Use with care.
    #[must_use]
    pub fn expose(&self) -> &str {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(
            target: "secret_text::audit",
            hint = %self.hint,
            "secret value exposed"
        );
        &self.value
    }

    /// Consumes the wrapper and returns the secret value.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.expose().to_owned()
    }

    /// Returns the redaction hint.
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Compares secret values, ignoring hints.
    #[must_use]
    pub fn equals(&self, other: &Secret) -> bool {
        self.value == other.value
    }

    /// Returns the bytes written by text marshaling: the hint, never the value.
    #[must_use]
    pub fn marshal_text(&self) -> Vec<u8> {
        self.hint.as_bytes().to_vec()
    }

    /// Replaces this secret with one holding `text`.
    ///
    /// The current hint carries over by value. Both fields are freshly
    /// allocated, so clones taken before this call keep their contents.
    pub fn unmarshal_text(&mut self, text: &str) {
        *self = Self {
            value: Arc::from(text),
            hint: Arc::from(self.hint()),
        };
    }

    #[cfg(test)]
    pub(crate) fn shares_storage_with(&self, other: &Secret) -> bool {
        Arc::ptr_eq(&self.value, &other.value) || Arc::ptr_eq(&self.hint, &other.hint)
    }
}

impl Default for Secret {
    fn default() -> Self {
        Self {
            value: Arc::from(""),
            hint: Arc::from(FIVE_STAR),
        }
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hint)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Secret").field(&self.hint()).finish()
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Secret {}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl FromStr for Secret {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(text))
    }
}
