// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The literal grammar.
//!
//! Parsers thread `(input, depth)` by hand and return [`PResult`]. Once a
//! bracket has been consumed the surrounding parser is committed: inner
//! errors become failures instead of backtracking into other alternatives,
//! so reported positions stay at the real problem. Errors carry the
//! remaining input, from which [`parse_literal`] derives line and column.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while};
use nom::character::complete::{char, digit0, digit1, multispace0, one_of, satisfy};
use nom::combinator::{map, opt, recognize, value};
use nom::error::{ErrorKind, ParseError as NomParseError};
use nom::sequence::{delimited, pair, tuple};

use crate::{Literal, ParseError};

/// Maximum nesting depth the parser accepts.
///
/// Input nested deeper than this fails to parse, which also bounds recursion
/// everywhere downstream of validation.
pub const MAX_DEPTH: usize = 64;

type PResult<'a, T> = IResult<&'a str, T, GrammarError<'a>>;

/// Internal parse error: the remaining input at the failure plus a reason.
#[derive(Debug)]
struct GrammarError<'a> {
    input: &'a str,
    reason: Reason,
}

#[derive(Debug, Clone, Copy)]
enum Reason {
    Expected(&'static str),
    ExpectedChar(char),
    TooDeep,
    BadEscape,
    BadNumber,
    Unterminated,
}

impl Reason {
    fn message(self) -> String {
        match self {
            Self::Expected(what) => format!("expected {what}"),
            Self::ExpectedChar(c) => format!("expected `{c}`"),
            Self::TooDeep => format!("nesting deeper than {MAX_DEPTH} levels"),
            Self::BadEscape => String::from("invalid escape sequence"),
            Self::BadNumber => String::from("malformed number"),
            Self::Unterminated => String::from("unterminated string"),
        }
    }
}

impl<'a> NomParseError<&'a str> for GrammarError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        let reason = match kind {
            ErrorKind::Digit => Reason::Expected("a digit"),
            _ => Reason::Expected("a literal"),
        };
        Self { input, reason }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    fn from_char(input: &'a str, c: char) -> Self {
        Self {
            input,
            reason: Reason::ExpectedChar(c),
        }
    }

    fn or(self, other: Self) -> Self {
        // Keep whichever error got further into the input.
        if other.input.len() <= self.input.len() {
            other
        } else {
            self
        }
    }
}

/// Parses one complete literal, requiring the whole input to be consumed.
///
/// Whitespace (spaces, tabs, newlines) around the literal is accepted.
/// The returned [`ParseError`] carries the 1-based line and column of the
/// failure.
pub fn parse_literal(text: &str) -> Result<Literal, ParseError> {
    match delimited(ws, |i| literal(i, 0), ws)(text) {
        Ok(("", parsed)) => Ok(parsed),
        Ok((rest, _)) => {
            let (line, column) = position(text, text.len() - rest.len());
            Err(ParseError {
                line,
                column,
                message: String::from("unexpected trailing input"),
            })
        }
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
            let (line, column) = position(text, text.len() - e.input.len());
            Err(ParseError {
                line,
                column,
                message: e.reason.message(),
            })
        }
        // Complete parsers never suspend on more input.
        Err(nom::Err::Incomplete(_)) => Err(ParseError {
            line: 1,
            column: 1,
            message: String::from("incomplete input"),
        }),
    }
}

/// Converts a byte offset into 1-based line and character column.
fn position(source: &str, offset: usize) -> (usize, usize) {
    let consumed = &source[..offset];
    let line = consumed.matches('\n').count() + 1;
    let column = match consumed.rfind('\n') {
        Some(newline) => consumed[newline + 1..].chars().count() + 1,
        None => consumed.chars().count() + 1,
    };
    (line, column)
}

fn ws(input: &str) -> PResult<'_, &str> {
    multispace0(input)
}

fn fail<'a, T>(input: &'a str, reason: Reason) -> PResult<'a, T> {
    Err(nom::Err::Failure(GrammarError { input, reason }))
}

/// Upgrades errors to failures once a branch is committed, so surrounding
/// alternatives stop backtracking over a definitely-broken construct.
fn committed<'a, T>(result: PResult<'a, T>) -> PResult<'a, T> {
    result.map_err(|err| match err {
        nom::Err::Error(e) => nom::Err::Failure(e),
        other => other,
    })
}

fn literal(input: &str, depth: usize) -> PResult<'_, Literal> {
    if depth >= MAX_DEPTH {
        return fail(input, Reason::TooDeep);
    }
    alt((
        |i| list(i, depth),
        |i| object(i, depth),
        map(text, Literal::Text),
        number,
        keyword,
    ))(input)
}

/// Parses `[ ... ]` with comma separators and an optional trailing comma.
fn list(input: &str, depth: usize) -> PResult<'_, Literal> {
    let (rest, _) = char('[')(input)?;
    let (mut rest, _) = ws(rest)?;
    let mut items = Vec::new();
    loop {
        if let Ok((after, _)) = char::<_, GrammarError<'_>>(']')(rest) {
            return Ok((after, Literal::List(items)));
        }
        let (after_item, item) = committed(literal(rest, depth + 1))?;
        items.push(item);
        let (after_ws, _) = ws(after_item)?;
        match char::<_, GrammarError<'_>>(',')(after_ws) {
            Ok((after_comma, _)) => {
                let (next, _) = ws(after_comma)?;
                rest = next;
            }
            Err(_) => match char::<_, GrammarError<'_>>(']')(after_ws) {
                Ok((after, _)) => return Ok((after, Literal::List(items))),
                Err(_) => return fail(after_ws, Reason::Expected("`,` or `]`")),
            },
        }
    }
}

/// Parses `{ key: value, ... }` with identifier or quoted-string keys.
fn object(input: &str, depth: usize) -> PResult<'_, Literal> {
    let (rest, _) = char('{')(input)?;
    let (mut rest, _) = ws(rest)?;
    let mut entries = Vec::new();
    loop {
        if let Ok((after, _)) = char::<_, GrammarError<'_>>('}')(rest) {
            return Ok((after, Literal::Object(entries)));
        }
        let Ok((after_key, key)) = object_key(rest) else {
            return fail(rest, Reason::Expected("an object key"));
        };
        let (after_ws, _) = ws(after_key)?;
        let Ok((after_colon, _)) = char::<_, GrammarError<'_>>(':')(after_ws) else {
            return fail(after_ws, Reason::ExpectedChar(':'));
        };
        let (value_start, _) = ws(after_colon)?;
        let (after_value, entry) = committed(literal(value_start, depth + 1))?;
        entries.push((key, entry));
        let (after_ws, _) = ws(after_value)?;
        match char::<_, GrammarError<'_>>(',')(after_ws) {
            Ok((after_comma, _)) => {
                let (next, _) = ws(after_comma)?;
                rest = next;
            }
            Err(_) => match char::<_, GrammarError<'_>>('}')(after_ws) {
                Ok((after, _)) => return Ok((after, Literal::Object(entries))),
                Err(_) => return fail(after_ws, Reason::Expected("`,` or `}`")),
            },
        }
    }
}

fn object_key(input: &str) -> PResult<'_, String> {
    if input.starts_with('"') || input.starts_with('\'') {
        return text(input);
    }
    let (rest, id) = identifier(input)?;
    Ok((rest, String::from(id)))
}

fn identifier(input: &str) -> PResult<'_, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic() || c == '_' || c == '$'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
    ))(input)
}

/// Parses a single- or double-quoted string, decoding escapes.
fn text(input: &str) -> PResult<'_, String> {
    let Some(quote @ ('"' | '\'')) = input.chars().next() else {
        return Err(nom::Err::Error(GrammarError {
            input,
            reason: Reason::Expected("a string"),
        }));
    };
    let mut rest = &input[1..];
    let mut out = String::new();
    loop {
        let Some(c) = rest.chars().next() else {
            return fail(rest, Reason::Unterminated);
        };
        rest = &rest[c.len_utf8()..];
        if c == quote {
            return Ok((rest, out));
        }
        if c == '\\' {
            let (after, decoded) = escape(rest)?;
            out.push(decoded);
            rest = after;
        } else {
            out.push(c);
        }
    }
}

/// Decodes one escape sequence, positioned just after the backslash.
fn escape(input: &str) -> PResult<'_, char> {
    let Some(c) = input.chars().next() else {
        return fail(input, Reason::BadEscape);
    };
    let rest = &input[c.len_utf8()..];
    let decoded = match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'b' => '\u{8}',
        'f' => '\u{c}',
        'v' => '\u{b}',
        '0' => '\0',
        '\\' => '\\',
        '\'' => '\'',
        '"' => '"',
        '/' => '/',
        'x' => return hex_escape(input, rest, 2),
        'u' => return hex_escape(input, rest, 4),
        _ => return fail(input, Reason::BadEscape),
    };
    Ok((rest, decoded))
}

/// Decodes `\xHH` / `\uHHHH` digits. Lone surrogates are rejected.
fn hex_escape<'a>(at: &'a str, input: &'a str, digits: usize) -> PResult<'a, char> {
    let Some(repr) = input.get(..digits) else {
        return fail(at, Reason::BadEscape);
    };
    let Ok(code) = u32::from_str_radix(repr, 16) else {
        return fail(at, Reason::BadEscape);
    };
    match char::from_u32(code) {
        Some(c) => Ok((&input[digits..], c)),
        None => fail(at, Reason::BadEscape),
    }
}

/// Parses a number: optional minus, digits with the bare `.5`/`5.` forms
/// accepted, optional exponent.
fn number(input: &str) -> PResult<'_, Literal> {
    let (rest, repr) = recognize(tuple((
        opt(char('-')),
        alt((
            recognize(tuple((digit1, opt(char('.')), digit0))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)?;
    match repr.parse::<f64>() {
        Ok(n) => Ok((rest, Literal::Number(n))),
        Err(_) => Err(nom::Err::Error(GrammarError {
            input,
            reason: Reason::BadNumber,
        })),
    }
}

fn keyword(input: &str) -> PResult<'_, Literal> {
    let (rest, parsed) = alt((
        value(Literal::Null, tag("null")),
        value(Literal::Undefined, tag("undefined")),
        value(Literal::Bool(true), tag("true")),
        value(Literal::Bool(false), tag("false")),
        value(Literal::Number(f64::NAN), tag("NaN")),
        value(Literal::Number(f64::INFINITY), tag("Infinity")),
        value(Literal::Number(f64::NEG_INFINITY), tag("-Infinity")),
    ))(input)?;
    word_end(rest)?;
    Ok((rest, parsed))
}

/// A keyword must not continue as an identifier.
fn word_end(input: &str) -> PResult<'_, ()> {
    match input.chars().next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' || c == '$' => {
            Err(nom::Err::Error(GrammarError {
                input,
                reason: Reason::Expected("end of word"),
            }))
        }
        _ => Ok((input, ())),
    }
}
