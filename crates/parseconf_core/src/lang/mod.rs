//! Registry-backed vocabulary of the configuration language.
//!
//! The language has no keywords of its own (keywords come from caller-supplied grammar tables), so the
//! only fixed vocabulary is the small set of bytes that delimit, terminate, quote or comment tokens.
//!
//! ## See also
//! - [`delimiters`] for the byte classes and their predicates.

pub mod delimiters;
