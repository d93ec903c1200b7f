//! AST type for a single listing line

use crate::ast::Token;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Line {
    label: Option<String>,
    tokens: Vec<Token>,
    comment: Option<String>,
    source_address: u64,
    encoding: Vec<u8>,
}

impl Line {
    pub fn new(
        label: Option<String>,
        tokens: Vec<Token>,
        comment: Option<String>,
        source_address: u64,
        encoding: &[u8],
    ) -> Self {
        Line {
            label,
            tokens,
            comment,
            source_address,
            encoding: encoding.to_vec(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: &str) {
        self.label = Some(label.to_string());
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn source_address(&self) -> u64 {
        self.source_address
    }

    pub fn encoding(&self) -> &[u8] {
        &self.encoding
    }

    /// The instruction text alone, without address, encoding or label.
    pub fn instr_text(&self) -> String {
        self.tokens.iter().map(|t| t.text()).collect()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            writeln!(f, "{}:", label)?;
        }

        let encoding: Vec<String> = self.encoding.iter().map(|b| format!("{:02x}", b)).collect();
        write!(
            f,
            "{:016x}  {:<26}  {}",
            self.source_address,
            encoding.join(" "),
            self.instr_text()
        )?;

        if let Some(comment) = &self.comment {
            write!(f, " ; {}", comment)?;
        }

        Ok(())
    }
}
