// Copyright 2026 The Tagquery Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Canonical round-trip properties: for any valid query, rendering is a
//! fixed point after one parse/render normalization pass.

use proptest::prelude::*;

use tagquery::{Expr, ExpressionParser, ListParser, Tag, TokenSpan, render};

/// Tag names that can't collide with keywords or surface syntax, for
/// the list grammar (which has no quoting-aware renderer to lean on).
fn list_name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_filter("reserved keyword", |s| {
        !s.eq_ignore_ascii_case("and") && !s.eq_ignore_ascii_case("or") && !s.eq_ignore_ascii_case("not")
    })
}

/// Names only writable in quotes: whitespace, brackets, keyword
/// spellings, and a literal trailing star.
fn quoted_only_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,3} [a-z]{1,3}",
        "[a-z]{0,2}[()][a-z]{0,2}",
        prop_oneof![Just("and"), Just("or"), Just("NOT")].prop_map(str::to_string),
        "[a-z]{1,4}\\*",
    ]
}

fn arb_tag() -> impl Strategy<Value = Expr> {
    prop_oneof![
        // bare names, wildcard or not; keyword collisions are the
        // renderer's problem
        ("[a-z]{1,8}", any::<bool>())
            .prop_map(|(name, wildcard)| Expr::Tag(Tag::new(name, wildcard, TokenSpan::single(0)))),
        quoted_only_name()
            .prop_map(|name| Expr::Tag(Tag::new(name, false, TokenSpan::single(0)))),
    ]
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    // spans are irrelevant here: rendering never looks at them
    arb_tag().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 2..4)
                .prop_map(|children| Expr::And(children, TokenSpan::new(0, 0))),
            prop::collection::vec(inner.clone(), 2..4)
                .prop_map(|children| Expr::Or(children, TokenSpan::new(0, 0))),
            inner.prop_map(|child| Expr::Not(Box::new(child), TokenSpan::new(0, 0))),
        ]
    })
}

proptest! {
    #[test]
    fn canonical_rendering_is_a_fixed_point(expr in arb_expr()) {
        let parser = ExpressionParser::new();

        let rendered = render(&expr);
        let reparsed = parser
            .parse(&rendered)
            .unwrap_or_else(|err| panic!("canonical text {rendered:?} failed to re-parse: {err}"));

        // re-parsing canonical text must land on an equal-rendering AST
        prop_assert_eq!(rendered, render(&reparsed));
    }

    #[test]
    fn list_array_projection_round_trips(names in prop::collection::vec(list_name(), 0..6)) {
        let input = names.join(" ");
        let projected = ListParser::new().parse_as_array(&input).unwrap();
        prop_assert_eq!(names, projected);
    }
}
