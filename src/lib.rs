// Copyright 2026 The Tagquery Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! A front end for boolean tag queries: expressions combining tag
//! literals with AND/OR/NOT, grouping brackets, quoted multi-word tags,
//! and wildcard (prefix-match) tags.
//!
//! Two surface grammars share one lexer: [`ExpressionParser`] accepts
//! the full boolean grammar, [`ListParser`] a restricted operator-free
//! tag sequence.  Both produce the same closed [`Expr`] AST, which
//! [`render`] projects back to canonical text.
//!
//! The library is an in-process, stateless text-in/AST-out transform:
//! no I/O, nothing cached, every call a pure function over its input.

#![forbid(unsafe_code)]

pub mod ast;
pub mod common;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod token;

pub use self::ast::{Expr, Tag, TokenSpan};
pub use self::common::{Error, ErrorCode, LexError, Loc, ParseError, Result};
pub use self::lexer::{Lexer, lex};
pub use self::parser::{ExpressionParser, ListParser};
pub use self::render::render;
pub use self::token::{Token, TokenKind};
