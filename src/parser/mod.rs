// Copyright 2026 The Tagquery Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Recursive descent parsers for the two query surface grammars.
//!
//! Both grammars share `TokenCursor`, a call-local cursor over a lexed
//! token sequence that knows how to navigate and raise diagnostics but
//! holds no grammar knowledge.  Each parser is an independent set of
//! production functions taking `&mut TokenCursor`, so parser values
//! stay stateless and reentrant.

pub mod expression;
pub mod list;


pub use expression::ExpressionParser;
pub use list::ListParser;

use crate::common::{ParseError, ParseResult};
use crate::token::{Token, TokenKind};

/// Cursor over a token sequence, created fresh for every parse call.
pub(crate) struct TokenCursor<'a, 'input> {
    tokens: &'a [Token<'input>],
    pos: usize,
}

impl<'a, 'input> TokenCursor<'a, 'input> {
    pub(crate) fn new(tokens: &'a [Token<'input>]) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    /// Index of the current token.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn peek(&self) -> Option<&'a Token<'input>> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|tok| tok.kind)
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token<'input>> {
        let tok = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(tok)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consume the current token if it has the expected kind, returning
    /// its index and the token; raise a diagnostic otherwise.
    pub(crate) fn expect(&mut self, expected: TokenKind) -> ParseResult<(usize, &'a Token<'input>)> {
        if self.peek_kind() == Some(expected) {
            let idx = self.pos;
            match self.advance() {
                Some(tok) => Ok((idx, tok)),
                None => Err(self.unexpected(expected.description())),
            }
        } else {
            Err(self.unexpected(expected.description()))
        }
    }

    /// Raise a diagnostic if any tokens remain after a complete
    /// top-level construct.
    pub(crate) fn expect_end(&self) -> ParseResult<()> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected("end of input"))
        }
    }

    /// Build a `ParseError` naming the expected construct and the
    /// actual token, or "end of input" if the cursor is exhausted.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(tok) => ParseError {
                message: format!(
                    "Unexpected {}, expected {}.",
                    tok.kind.description(),
                    expected
                ),
                loc: Some(tok.loc),
            },
            None => ParseError {
                message: format!("Unexpected end of input, expected {expected}."),
                loc: None,
            },
        }
    }
}
