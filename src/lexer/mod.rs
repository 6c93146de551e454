// Copyright 2026 The Tagquery Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::str::CharIndices;

use crate::common::ErrorCode::*;
use crate::common::{ErrorCode, LexError, LexResult, Loc};
use crate::token::{Token, TokenKind};


pub(crate) const KEYWORDS: &[(&str, TokenKind)] = &[
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("not", TokenKind::Not),
];

fn error<T>(code: ErrorCode, start: usize, end: usize) -> LexResult<T> {
    Err(LexError {
        loc: Loc::new(start, end),
        code,
    })
}

/// Tokenizer for the tag query surface syntax.
///
/// Whitespace separates tokens and is discarded.  Brackets are
/// single-character tokens, double quotes delimit strings whose content
/// is taken verbatim, and any other run of characters is either a
/// reserved keyword (case-insensitive `and`/`or`/`not`) or a tag.
pub struct Lexer<'input> {
    text: &'input str,
    chars: CharIndices<'input>,
    lookahead: Option<(usize, char)>,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        let mut t = Lexer {
            text: input,
            chars: input.char_indices(),
            lookahead: None,
        };
        t.bump();
        t
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        self.lookahead = self.chars.next();
        self.lookahead
    }

    fn take_while<F>(&mut self, mut keep_going: F) -> Option<usize>
    where
        F: FnMut(char) -> bool,
    {
        self.take_until(|c| !keep_going(c))
    }

    fn take_until<F>(&mut self, mut terminate: F) -> Option<usize>
    where
        F: FnMut(char) -> bool,
    {
        loop {
            match self.lookahead {
                None => {
                    return None;
                }
                Some((idx1, c)) => {
                    if terminate(c) {
                        return Some(idx1);
                    } else {
                        self.bump();
                    }
                }
            }
        }
    }

    /// A bare run of non-whitespace, non-bracket characters.  Reserved
    /// keywords only count when they occupy the whole run; any trailing
    /// `*` stays in the value (wildcard legality is a parser concern).
    fn stringish(&mut self, idx0: usize) -> Token<'input> {
        let end = self
            .take_while(|c| !c.is_whitespace() && c != '(' && c != ')')
            .unwrap_or(self.text.len());
        let word = &self.text[idx0..end];

        let kind = KEYWORDS
            .iter()
            .filter(|&&(w, _)| w.eq_ignore_ascii_case(word))
            .map(|&(_, k)| k)
            .next()
            .unwrap_or(TokenKind::String);

        Token::new(kind, word, Loc::new(idx0, end))
    }

    /// A double-quoted string: everything up to the next `"` becomes
    /// the token value verbatim, whitespace included.  The token's span
    /// covers the delimiters.
    fn quoted_string(&mut self, idx0: usize) -> LexResult<Token<'input>> {
        // eat the opening '"'
        self.bump();

        match self.take_until(|c| c == '"') {
            Some(idx1) => {
                // eat the trailing '"'
                self.bump();
                Ok(Token::new(
                    TokenKind::String,
                    &self.text[idx0 + 1..idx1],
                    Loc::new(idx0, idx1 + 1),
                ))
            }
            None => error(UnclosedQuotedString, idx0, self.text.len()),
        }
    }

    fn consume(&mut self, i: usize, kind: TokenKind) -> Option<LexResult<Token<'input>>> {
        let end = i + 1;
        self.bump();
        Some(Ok(Token::new(kind, &self.text[i..end], Loc::new(i, end))))
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = LexResult<Token<'input>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            return match self.lookahead {
                Some((i, '(')) => self.consume(i, TokenKind::OpenBracket),
                Some((i, ')')) => self.consume(i, TokenKind::CloseBracket),
                Some((i, '"')) => Some(self.quoted_string(i)),
                Some((_, c)) if c.is_whitespace() => {
                    self.bump();
                    continue;
                }
                Some((i, _)) => Some(Ok(self.stringish(i))),
                None => None,
            };
        }
    }
}

/// Tokenize `input` into an ordered token sequence.
pub fn lex(input: &str) -> LexResult<Vec<Token<'_>>> {
    Lexer::new(input).collect()
}
