//! Shared, dependency-free vocabulary for the parseconf configuration front end.
//!
//! This crate is intentionally small. It holds the pieces that every layer (tokenizer, grammar matcher,
//! line driver, CLI) must agree on:
//! - the lexical byte classes of the configuration language (`lang::delimiters`),
//! - the error taxonomy reported for a failed statement (`errors`),
//! - the integer result-code table and its human-readable strings (`status`),
//! - version information (`version`).
//!
//! ## Notes
//!
//! - No I/O, no global state, no dependencies.
//! - Syntax types (tokens, grammar rules) live in `parseconf_syntax`, which builds on this crate.

pub mod errors;
pub mod lang;
pub mod status;
pub mod version;

pub use errors::ErrorKind;
pub use status::Status;
