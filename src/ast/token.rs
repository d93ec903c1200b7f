//! Display token AST type

use serde::Serialize;
use std::fmt;

/// What a display token represents, so a host can style or link it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// The instruction mnemonic.
    Instruction,

    /// Whitespace or punctuation between the mnemonic and its operands.
    OperandSeparator,

    /// An integer operand that may also be an address.
    PossibleAddress,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,

    /// Raw numeric value, for tokens that carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<u64>,
}

impl Token {
    pub fn instruction(mnemonic: &str) -> Self {
        Token {
            kind: TokenKind::Instruction,
            text: mnemonic.to_string(),
            value: None,
        }
    }

    pub fn separator(text: &str) -> Self {
        Token {
            kind: TokenKind::OperandSeparator,
            text: text.to_string(),
            value: None,
        }
    }

    pub fn possible_address(text: String, value: u64) -> Self {
        Token {
            kind: TokenKind::PossibleAddress,
            text,
            value: Some(value),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> Option<u64> {
        self.value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
