//! Adapters for emitting secrets through `slog`.
//!
//! `Secret` implements `slog::Value` by emitting its hint as a plain string.
//! Because `Secret` also serializes to its hint through `serde`, structs that
//! hold secrets can be logged with `slog::Serde` and stay redacted.
//!
//! This module does not configure `slog`.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::secret::Secret;

/// Marker trait for types whose `slog` integration always emits redacted output.
///
/// It is implemented for [`Secret`] and references to it, never for raw
/// string types.
///
/// ```compile_fail
/// use secret_text::slog::SlogRedacted;
///
/// fn assert_slog_redacted<T: SlogRedacted>() {}
///
/// assert_slog_redacted::<String>();
/// ```
pub trait SlogRedacted: SlogValue {}

impl<T: SlogRedacted + ?Sized> SlogRedacted for &T {}

impl SlogValue for Secret {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, self.hint())
    }
}

impl SlogRedacted for Secret {}
