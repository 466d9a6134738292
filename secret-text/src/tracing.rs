//! Adapters for emitting secrets through `tracing`.
//!
//! `Secret` already implements `Display` as its hint, so `%secret` is safe in
//! any `tracing` macro. [`TracingRedactedExt`] makes that intent explicit at
//! the call site, and with the `tracing-valuable` feature `Secret` also
//! implements `valuable::Valuable`.
//!
//! Calls to [`Secret::expose`] emit a `TRACE` event on the
//! `secret_text::audit` target carrying the hint, so reveals can be audited.
//!
//! # Example
//!
//! ```ignore
//! use secret_text::tracing::TracingRedactedExt;
//!
//! tracing::info!(password = %login.password.tracing_redacted(), "login attempt");
//! ```

use std::fmt;

use tracing::field::{DisplayValue, display};

use crate::secret::Secret;

/// Marker trait for types whose `Display` output is always redacted.
pub trait TracingRedacted: fmt::Display {}

impl<T: TracingRedacted + ?Sized> TracingRedacted for &T {}

impl TracingRedacted for Secret {}

/// Extension trait for logging redacted values as `tracing` display fields.
pub trait TracingRedactedExt {
    /// Wraps the redacted rendering of the value for `tracing`.
    fn tracing_redacted(&self) -> DisplayValue<String>;
}

impl<T> TracingRedactedExt for T
where
    T: TracingRedacted + ?Sized,
{
    fn tracing_redacted(&self) -> DisplayValue<String> {
        display(self.to_string())
    }
}

#[cfg(feature = "tracing-valuable")]
impl valuable::Valuable for Secret {
    fn as_value(&self) -> valuable::Value<'_> {
        valuable::Value::String(self.hint())
    }

    fn visit(&self, visit: &mut dyn valuable::Visit) {
        visit.visit_value(self.as_value());
    }
}
