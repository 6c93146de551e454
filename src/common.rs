// Copyright 2026 The Tagquery Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::fmt;
use std::{error, result};

/// A byte range in the source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Loc {
    pub start: usize,
    pub end: usize,
}

impl Loc {
    pub fn new(start: usize, end: usize) -> Self {
        Loc { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnclosedQuotedString,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ErrorCode::UnclosedQuotedString => "unclosed_quoted_string",
        };
        write!(f, "{name}")
    }
}

/// A malformed token stream: the input couldn't be split into tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LexError {
    pub loc: Loc,
    pub code: ErrorCode,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.loc, self.code)
    }
}

impl error::Error for LexError {}

/// Well-formed tokens in an invalid grammatical position.
///
/// `loc` is the byte range of the offending token; `None` means the
/// input ended while a construct was still incomplete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub loc: Option<Loc>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl error::Error for ParseError {}

/// Any failure from the text-in entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Lex(err) => write!(f, "{err}"),
            Error::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl error::Error for Error {}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

pub type Result<T> = result::Result<T, Error>;
pub type LexResult<T> = result::Result<T, LexError>;
pub type ParseResult<T> = result::Result<T, ParseError>;
