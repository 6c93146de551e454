// Copyright 2026 The Tagquery Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use serde::{Deserialize, Serialize};

/// An inclusive range of indices into the token sequence a node was
/// parsed from.  Indices rather than references keep the AST decoupled
/// from the token storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenSpan {
    pub first: usize,
    pub last: usize,
}

impl TokenSpan {
    pub fn new(first: usize, last: usize) -> Self {
        TokenSpan { first, last }
    }

    pub fn single(idx: usize) -> Self {
        TokenSpan { first: idx, last: idx }
    }
}

/// A tag literal.  `wildcard` marks prefix-match semantics, written as
/// a trailing unescaped `*` in source; `name` never contains that
/// trigger character's trailing occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub wildcard: bool,
    pub span: TokenSpan,
}

impl Tag {
    pub fn new(name: impl Into<String>, wildcard: bool, span: TokenSpan) -> Self {
        Tag {
            name: name.into(),
            wildcard,
            span,
        }
    }
}

/// A parsed query.  The variant set is closed; consumers (the renderer,
/// downstream evaluators) match exhaustively so new behavior can't miss
/// a case.
///
/// `Empty` only ever appears as the whole result of parsing an empty
/// token sequence.  `And`/`Or` carry two or more children in source
/// order; `Not` exactly one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    Empty,
    Tag(Tag),
    And(Vec<Expr>, TokenSpan),
    Or(Vec<Expr>, TokenSpan),
    Not(Box<Expr>, TokenSpan),
}

impl Expr {
    /// The inclusive range of source tokens this node was built from,
    /// or `None` for the empty expression.  A bracketed group's span
    /// includes the brackets.
    pub fn token_span(&self) -> Option<TokenSpan> {
        match self {
            Expr::Empty => None,
            Expr::Tag(tag) => Some(tag.span),
            Expr::And(_, span) | Expr::Or(_, span) | Expr::Not(_, span) => Some(*span),
        }
    }

    pub fn first_token(&self) -> Option<usize> {
        self.token_span().map(|span| span.first)
    }

    pub fn last_token(&self) -> Option<usize> {
        self.token_span().map(|span| span.last)
    }

    /// Replace this node's span, used when a group's brackets widen the
    /// range of tokens it covers.  No-op on `Empty`.
    pub(crate) fn with_span(self, span: TokenSpan) -> Expr {
        match self {
            Expr::Empty => Expr::Empty,
            Expr::Tag(tag) => Expr::Tag(Tag { span, ..tag }),
            Expr::And(children, _) => Expr::And(children, span),
            Expr::Or(children, _) => Expr::Or(children, span),
            Expr::Not(child, _) => Expr::Not(child, span),
        }
    }
}
