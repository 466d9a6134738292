//! A string wrapper that keeps secrets out of generic output paths.
//!
//! [`Secret`] pairs a sensitive value (password, API token) with a redaction
//! hint. `Display`, `Debug`, text marshaling, JSON serialization and the
//! logging adapters all emit the hint. The value comes back only through
//! [`Secret::expose`], which keeps every reveal explicit and easy to grep for.
//!
//! ```rust
//! use secret_text::{RedactHint, Secret};
//!
//! let token = Secret::with_hints("sk_live_abc123", [RedactHint::FiveX]);
//! assert_eq!(format!("token={token}"), "token=XXXXX");
//! assert_eq!(token.expose(), "sk_live_abc123");
//! ```
//!
//! What this crate does:
//! - defines the [`Secret`] type and its hint options ([`RedactHint`])
//! - renders hints through `Display`, `serde` and (behind features) `slog`,
//!   `tracing` and `valuable`
//!
//! What it does not do:
//! - store, rotate or encrypt secrets
//! - wipe secret memory on drop
//! - configure a logger

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
#[cfg(feature = "json")]
mod error;
mod hint;
#[cfg(feature = "json")]
mod json;
mod secret;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports
#[cfg(feature = "json")]
pub use error::ParseError;
pub use hint::{FIVE_STAR, FIVE_X, REDACTED_PLACEHOLDER, RedactHint};
pub use secret::Secret;
#[cfg(feature = "slog")]
pub use crate::slog::SlogRedacted;
#[cfg(feature = "tracing")]
pub use crate::tracing::{TracingRedacted, TracingRedactedExt};
