// Copyright 2026 The Tagquery Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! The restricted list grammar: `List := Tag*`.
//!
//! No operators, no brackets, no wildcards — just plain tags, for
//! callers validating a flat tag list rather than a logical query.

use super::TokenCursor;
use crate::ast::{Expr, Tag, TokenSpan};
use crate::common::{ParseError, ParseResult, Result};
use crate::lexer::lex;
use crate::token::{Token, TokenKind};

/// Parser for operator-free tag sequences.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListParser;

impl ListParser {
    pub fn new() -> Self {
        ListParser
    }

    /// Lex and parse `input` into an AST: `Empty` for no tags, a bare
    /// `Tag` for one, a `LogicalAnd` preserving input order for more.
    pub fn parse(&self, input: &str) -> Result<Expr> {
        let tokens = lex(input)?;
        Ok(self.parse_tokens(&tokens)?)
    }

    /// Parse a pre-lexed token sequence.
    pub fn parse_tokens(&self, tokens: &[Token]) -> ParseResult<Expr> {
        let mut tags = parse_tags(tokens)?;

        Ok(match tags.len() {
            0 => Expr::Empty,
            1 => Expr::Tag(tags.remove(0)),
            n => {
                let span = TokenSpan::new(tags[0].span.first, tags[n - 1].span.last);
                Expr::And(tags.into_iter().map(Expr::Tag).collect(), span)
            }
        })
    }

    /// Parse, then project to the ordered raw tag strings, for callers
    /// that want validated strings rather than an AST.
    pub fn parse_as_array(&self, input: &str) -> Result<Vec<String>> {
        let tokens = lex(input)?;
        let tags = parse_tags(&tokens)?;
        Ok(tags.into_iter().map(|tag| tag.name).collect())
    }
}

fn parse_tags(tokens: &[Token]) -> ParseResult<Vec<Tag>> {
    let mut cursor = TokenCursor::new(tokens);
    let mut tags = Vec::new();

    while !cursor.is_at_end() {
        let (idx, tok) = cursor.expect(TokenKind::String)?;
        // the lexer accepts the wildcard character, but this grammar
        // does not
        if !tok.is_quoted() && tok.value.ends_with('*') {
            return Err(ParseError {
                message: format!(
                    "Unexpected wildcard string \"*\", in tag \"{}\".",
                    tok.value
                ),
                loc: Some(tok.loc),
            });
        }
        tags.push(Tag::new(tok.value, false, TokenSpan::single(idx)));
    }

    Ok(tags)
}
