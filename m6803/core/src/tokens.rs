//! Display tokens produced by the renderer and consumed by listing hosts.
//!
//! Tokens carry both the formatted text and, for numeric kinds, the raw
//! operand value so a host can resolve addresses without re-parsing text.

use serde::Serialize;

/// Width of the mnemonic column in rendered listings.
pub const OPCODE_COLUMN: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Token {
    /// Mnemonic, already padded to the listing column width.
    Opcode { text: String },
    /// Literal text: separators and the `#` immediate marker.
    Text { text: String },
    /// Numeric literal carrying the raw operand value.
    Integer { text: String, value: u16 },
    /// Value that may resolve to an address in the host's view.
    PossibleAddress { text: String, value: u16 },
    /// Register reference.
    Register { name: &'static str },
}

impl Token {
    /// Opcode-column token: mnemonic left-justified plus one trailing space.
    pub fn opcode(mnemonic: &str) -> Self {
        Token::Opcode {
            text: format!("{mnemonic:<OPCODE_COLUMN$} "),
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Token::Text { text: text.into() }
    }

    /// The display text of this token.
    pub fn text(&self) -> &str {
        match self {
            Token::Opcode { text }
            | Token::Text { text }
            | Token::Integer { text, .. }
            | Token::PossibleAddress { text, .. } => text,
            Token::Register { name } => name,
        }
    }
}

/// Flatten a token sequence into one listing line.
pub fn asm_str(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}
