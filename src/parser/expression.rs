// Copyright 2026 The Tagquery Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! The full boolean expression grammar:
//!
//! ```text
//! Expression := OrExpr
//! OrExpr     := AndExpr ( OR AndExpr )*
//! AndExpr    := NotExpr ( [AND] NotExpr )*    -- juxtaposition is AND
//! NotExpr    := NOT NotExpr | Primary
//! Primary    := TAG | '(' OrExpr ')'
//! ```

use super::TokenCursor;
use crate::ast::{Expr, Tag, TokenSpan};
use crate::common::{ParseResult, Result};
use crate::lexer::lex;
use crate::token::{Token, TokenKind};

/// Parser for the full boolean grammar: operators, brackets, wildcards.
///
/// Stateless; all parse state lives in a per-call cursor, so one value
/// can serve concurrent parses.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpressionParser;

impl ExpressionParser {
    pub fn new() -> Self {
        ExpressionParser
    }

    /// Lex and parse `input` into an AST.
    pub fn parse(&self, input: &str) -> Result<Expr> {
        let tokens = lex(input)?;
        Ok(self.parse_tokens(&tokens)?)
    }

    /// Parse a pre-lexed token sequence, for callers that need to
    /// inspect token provenance against their own sequence.
    pub fn parse_tokens(&self, tokens: &[Token]) -> ParseResult<Expr> {
        let mut cursor = TokenCursor::new(tokens);
        if cursor.is_at_end() {
            return Ok(Expr::Empty);
        }
        let expr = parse_or(&mut cursor)?;
        cursor.expect_end()?;
        Ok(expr)
    }
}

fn parse_or(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    let first = cursor.pos();
    let mut children = vec![parse_and(cursor)?];

    while cursor.peek_kind() == Some(TokenKind::Or) {
        cursor.advance();
        children.push(parse_and(cursor)?);
    }

    Ok(fold(children, Expr::Or, first, cursor.pos()))
}

fn parse_and(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    let first = cursor.pos();
    let mut children = vec![parse_not(cursor)?];

    loop {
        match cursor.peek_kind() {
            Some(TokenKind::And) => {
                cursor.advance();
                children.push(parse_not(cursor)?);
            }
            // a tag, NOT, or group starting right after an operand is
            // an implicit AND
            Some(TokenKind::String) | Some(TokenKind::Not) | Some(TokenKind::OpenBracket) => {
                children.push(parse_not(cursor)?);
            }
            _ => break,
        }
    }

    Ok(fold(children, Expr::And, first, cursor.pos()))
}

fn parse_not(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    if cursor.peek_kind() == Some(TokenKind::Not) {
        let first = cursor.pos();
        cursor.advance();
        let child = parse_not(cursor)?;
        let span = TokenSpan::new(first, cursor.pos() - 1);
        Ok(Expr::Not(Box::new(child), span))
    } else {
        parse_primary(cursor)
    }
}

fn parse_primary(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    match cursor.peek_kind() {
        Some(TokenKind::String) => {
            let (idx, tok) = cursor.expect(TokenKind::String)?;
            Ok(Expr::Tag(tag_from_token(idx, tok)))
        }
        Some(TokenKind::OpenBracket) => {
            let first = cursor.pos();
            cursor.advance();
            let expr = parse_or(cursor)?;
            cursor.expect(TokenKind::CloseBracket)?;
            // the group's span covers the brackets
            Ok(expr.with_span(TokenSpan::new(first, cursor.pos() - 1)))
        }
        _ => Err(cursor.unexpected("tag")),
    }
}

/// An unescaped trailing `*` outside quotes is the sole wildcard
/// trigger; quoted values keep it literally.
fn tag_from_token(idx: usize, tok: &Token) -> Tag {
    let span = TokenSpan::single(idx);
    if !tok.is_quoted() {
        if let Some(name) = tok.value.strip_suffix('*') {
            return Tag::new(name, true, span);
        }
    }
    Tag::new(tok.value, false, span)
}

/// Collapse a single-operand chain into the operand itself; otherwise
/// build the n-ary node spanning the consumed tokens.
fn fold(
    mut children: Vec<Expr>,
    build: fn(Vec<Expr>, TokenSpan) -> Expr,
    first: usize,
    next: usize,
) -> Expr {
    if children.len() == 1 {
        children.remove(0)
    } else {
        build(children, TokenSpan::new(first, next - 1))
    }
}
