//! Delimiter vocabulary.
//!
//! Every byte with a lexical meaning in a configuration line is listed in [`DELIMITERS`]. Anything else
//! is token content; its digit-ness only matters for numeric classification.
//!
//! ## Notes
//! - All delimiters are ASCII, so slicing a `&str` at a delimiter position is always on a char boundary.
//! - The `is_*` predicates are the hot-path form of the registry and must agree with it (see the
//!   guardrail tests).
//!
//! ## Examples
//! ```rust
//! use parseconf_core::lang::delimiters::{self, DelimiterId, DelimiterRole};
//!
//! assert_eq!(delimiters::from_byte(b';'), Some(DelimiterId::Terminator));
//! assert_eq!(delimiters::role(DelimiterId::Tab), DelimiterRole::Separator);
//! assert!(delimiters::is_boundary(b'\r'));
//! ```

/// What a delimiter does to the token being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterRole {
    /// Ends a token; more tokens may follow on the same statement.
    Separator,
    /// Ends a token and the statement.
    Terminator,
    /// Starts a comment running to the end of the line.
    Comment,
    /// Opens and closes a quoted string.
    Quote,
    /// Promotes a numeric token to a float.
    DecimalPoint,
    /// Ends the physical line (or the buffer).
    LineEnd,
}

/// Stable identifier for delimiter bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterId {
    Space,
    Tab,
    Terminator,
    Comment,
    Quote,
    DecimalPoint,
    LineFeed,
    CarriageReturn,
    Nul,
}

/// Metadata for a delimiter byte.
#[derive(Debug, Clone, Copy)]
pub struct DelimiterInfo {
    pub id: DelimiterId,
    pub byte: u8,
    pub role: DelimiterRole,
    pub summary: &'static str,
}

/// Registry of all delimiter bytes.
pub const DELIMITERS: &[DelimiterInfo] = &[
    info(DelimiterId::Space, b' ', DelimiterRole::Separator, "separates tokens"),
    info(DelimiterId::Tab, b'\t', DelimiterRole::Separator, "separates tokens"),
    info(
        DelimiterId::Terminator,
        b';',
        DelimiterRole::Terminator,
        "ends the last token of a statement",
    ),
    info(
        DelimiterId::Comment,
        b'#',
        DelimiterRole::Comment,
        "starts a comment at a token start",
    ),
    info(DelimiterId::Quote, b'"', DelimiterRole::Quote, "delimits a quoted string"),
    info(
        DelimiterId::DecimalPoint,
        b'.',
        DelimiterRole::DecimalPoint,
        "turns a number into a float (once)",
    ),
    info(DelimiterId::LineFeed, b'\n', DelimiterRole::LineEnd, "ends the line"),
    info(DelimiterId::CarriageReturn, b'\r', DelimiterRole::LineEnd, "ends the line"),
    info(DelimiterId::Nul, b'\0', DelimiterRole::LineEnd, "ends the buffer"),
];

pub const SPACE: u8 = b' ';
pub const TAB: u8 = b'\t';
pub const TERMINATOR: u8 = b';';
pub const COMMENT: u8 = b'#';
pub const QUOTE: u8 = b'"';
pub const DECIMAL_POINT: u8 = b'.';

/// Return the delimiter byte for an identifier.
pub fn as_byte(id: DelimiterId) -> u8 {
    info_for(id).byte
}

/// Return the role of a delimiter.
pub fn role(id: DelimiterId) -> DelimiterRole {
    info_for(id).role
}

/// Return the full metadata entry for a delimiter.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: DelimiterId) -> &'static DelimiterInfo {
    DELIMITERS
        .iter()
        .find(|d| d.id == id)
        .expect("delimiter info missing")
}

/// Resolve a byte to its delimiter identifier, if it has one.
pub fn from_byte(byte: u8) -> Option<DelimiterId> {
    DELIMITERS.iter().find(|d| d.byte == byte).map(|d| d.id)
}

/// Space or tab.
pub const fn is_blank(byte: u8) -> bool {
    matches!(byte, SPACE | TAB)
}

/// Line feed, carriage return or NUL.
pub const fn is_line_end(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r' | b'\0')
}

/// A byte that can never start a token: separators, the terminator and line ends.
pub const fn is_boundary(byte: u8) -> bool {
    is_blank(byte) || byte == TERMINATOR || is_line_end(byte)
}

const fn info(id: DelimiterId, byte: u8, role: DelimiterRole, summary: &'static str) -> DelimiterInfo {
    DelimiterInfo {
        id,
        byte,
        role,
        summary,
    }
}
