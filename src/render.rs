// Copyright 2026 The Tagquery Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Canonical rendering of ASTs back to query text.
//!
//! The canonical form is used to compare two ASTs for semantic
//! equality: logically equivalent trees may differ in intermediate
//! shape (nested vs. flat OR chains), but they render identically.

use crate::ast::{Expr, Tag};
use crate::lexer::KEYWORDS;

/// Project an AST to its canonical text form.
pub fn render(expr: &Expr) -> String {
    match expr {
        Expr::Empty => String::new(),
        Expr::Tag(tag) => render_tag(tag),
        Expr::Not(child, _) => format!("NOT {}", paren_if_necessary(expr, child)),
        Expr::And(children, _) => join(expr, children, " AND "),
        Expr::Or(children, _) => join(expr, children, " OR "),
    }
}

fn render_tag(tag: &Tag) -> String {
    let mut out = if needs_quotes(tag) {
        format!("\"{}\"", tag.name)
    } else {
        tag.name.clone()
    };
    if tag.wildcard {
        out.push('*');
    }
    out
}

/// A name is quoted whenever writing it bare would not lex back to a
/// single tag token with the same value: whitespace and brackets split
/// the run, keyword spellings become operators, an empty name vanishes,
/// and a bare trailing `*` on a non-wildcard tag would re-parse as a
/// wildcard.
fn needs_quotes(tag: &Tag) -> bool {
    let name = tag.name.as_str();
    if name
        .chars()
        .any(|c| c.is_whitespace() || c == '(' || c == ')')
    {
        return true;
    }
    if tag.wildcard {
        // the appended `*` already keeps the bare form a single tag
        // token, distinct from any keyword
        return false;
    }
    name.is_empty()
        || name.ends_with('*')
        || KEYWORDS.iter().any(|&(kw, _)| kw.eq_ignore_ascii_case(name))
}

fn join(parent: &Expr, children: &[Expr], separator: &str) -> String {
    children
        .iter()
        .map(|child| paren_if_necessary(parent, child))
        .collect::<Vec<String>>()
        .join(separator)
}

/// Binding strength under the expression grammar: OR loosest, tags
/// tightest.
fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Or(_, _) => 1,
        Expr::And(_, _) => 2,
        Expr::Not(_, _) => 3,
        Expr::Tag(_) | Expr::Empty => 4,
    }
}

/// Parenthesize a child only when omitting the parentheses would change
/// the parsed meaning: the child binds strictly looser than its parent.
fn paren_if_necessary(parent: &Expr, child: &Expr) -> String {
    let rendered = render(child);
    if precedence(child) < precedence(parent) {
        format!("({rendered})")
    } else {
        rendered
    }
}
