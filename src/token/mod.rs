// Copyright 2026 The Tagquery Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use crate::common::Loc;


/// The closed set of token kinds produced by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    And,
    Or,
    Not,
    String,
    OpenBracket,
    CloseBracket,
}

impl TokenKind {
    /// The fixed human-readable name of this kind, as used verbatim in
    /// parse diagnostics.
    pub fn description(self) -> &'static str {
        match self {
            TokenKind::And => "AND operator",
            TokenKind::Or => "OR operator",
            TokenKind::Not => "NOT operator",
            TokenKind::String => "tag",
            TokenKind::OpenBracket => "open bracket",
            TokenKind::CloseBracket => "close bracket",
        }
    }
}

/// A single lexeme, borrowing its value from the input text.
///
/// `loc` is the byte range of the lexeme in the source.  For a quoted
/// string the range covers the delimiters while `value` is the content
/// between them; offsets are strictly increasing across a lexed
/// sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'input> {
    pub kind: TokenKind,
    pub value: &'input str,
    pub loc: Loc,
}

impl<'input> Token<'input> {
    pub fn new(kind: TokenKind, value: &'input str, loc: Loc) -> Self {
        Token { kind, value, loc }
    }

    /// Whether this lexeme was written with surrounding double quotes.
    /// A quoted token's span covers the delimiters but its value does
    /// not, so the two lengths differ.
    pub fn is_quoted(&self) -> bool {
        self.loc.len() != self.value.len()
    }
}
