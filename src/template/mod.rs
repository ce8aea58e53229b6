//! printf-style template expansion with checked arguments
//!
//! Supported directives:
//!
//! - `%s` string argument
//! - `%d`, `%i` integer argument
//! - `%%` literal percent sign
//! - `%N$s`, `%N$d` numbered forms (1-based), which may repeat an argument
//!
//! The whole template is validated against the arguments before any
//! output is produced. A mismatch is an error, never a partial string.
//!
//! # Example
//!
//! ```
//! use yait::template::{expand, Arg};
//!
//! let out = expand("Hello, %s!", &[Arg::from("World")]).unwrap();
//! assert_eq!(out, "Hello, World!");
//! ```

use thiserror::Error;

/// One substitution argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    Str(&'a str),
    Int(i64),
}

impl Arg<'_> {
    fn type_name(&self) -> &'static str {
        match self {
            Arg::Str(_) => "a string",
            Arg::Int(_) => "an integer",
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg::Str(value.as_str())
    }
}

impl From<i64> for Arg<'_> {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<i32> for Arg<'_> {
    fn from(value: i32) -> Self {
        Arg::Int(i64::from(value))
    }
}

impl From<u32> for Arg<'_> {
    fn from(value: u32) -> Self {
        Arg::Int(i64::from(value))
    }
}

/// Owned form of [`Arg`], for argument lists built ahead of emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(i64),
}

impl Value {
    pub fn as_arg(&self) -> Arg<'_> {
        match self {
            Value::Str(s) => Arg::Str(s),
            Value::Int(n) => Arg::Int(*n),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

/// Why a template and its arguments do not fit together.
///
/// Argument indices in messages are 1-based, as written in `%N$s`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown directive `%{directive}` at byte {offset}")]
    UnknownDirective { directive: char, offset: usize },

    #[error("dangling `%` at byte {offset}")]
    DanglingPercent { offset: usize },

    #[error("template expects {expected} argument(s), {supplied} supplied")]
    CountMismatch { expected: usize, supplied: usize },

    #[error("argument {index} is {found}, directive expects {expected}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("argument index {index} is out of range ({supplied} supplied)")]
    IndexOutOfRange { index: usize, supplied: usize },

    #[error("argument {index} is never used")]
    UnusedArgument { index: usize },

    #[error("numbered and sequential directives cannot be mixed")]
    MixedNumbering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Str,
    Int,
}

impl Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::Str => "a string",
            Kind::Int => "an integer",
        }
    }

    fn accepts(self, arg: &Arg<'_>) -> bool {
        matches!((self, arg), (Kind::Str, Arg::Str(_)) | (Kind::Int, Arg::Int(_)))
    }
}

#[derive(Debug)]
enum Piece<'t> {
    Literal(&'t str),
    Percent,
    Directive { position: Option<usize>, kind: Kind },
}

/// Expand `template` against `args`.
pub fn expand(template: &str, args: &[Arg<'_>]) -> Result<String, TemplateError> {
    let pieces = parse(template)?;
    let bindings = bind(&pieces, args)?;

    let extra: usize = args
        .iter()
        .map(|arg| match arg {
            Arg::Str(s) => s.len(),
            Arg::Int(_) => 20,
        })
        .sum();
    let mut out = String::with_capacity(template.len() + extra);

    let mut next = bindings.iter();
    for piece in &pieces {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Percent => out.push('%'),
            Piece::Directive { .. } => {
                // bind() produced exactly one binding per directive
                if let Some(&index) = next.next() {
                    match args[index] {
                        Arg::Str(s) => out.push_str(s),
                        Arg::Int(n) => out.push_str(&n.to_string()),
                    }
                }
            }
        }
    }

    Ok(out)
}

fn parse(template: &str) -> Result<Vec<Piece<'_>>, TemplateError> {
    let bytes = template.as_bytes();
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        if start < i {
            pieces.push(Piece::Literal(&template[start..i]));
        }
        let offset = i;
        i += 1;

        let digits_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let position = if i > digits_start && bytes.get(i) == Some(&b'$') {
            let n = template[digits_start..i].parse().unwrap_or(usize::MAX);
            i += 1;
            Some(n)
        } else {
            // no widths or flags: digits must be followed by `$`
            i = digits_start;
            None
        };

        let Some(&c) = bytes.get(i) else {
            return Err(TemplateError::DanglingPercent { offset });
        };
        let piece = match c {
            b'%' if position.is_none() => Piece::Percent,
            b's' => Piece::Directive {
                position,
                kind: Kind::Str,
            },
            b'd' | b'i' => Piece::Directive {
                position,
                kind: Kind::Int,
            },
            _ => {
                let directive = template[i..].chars().next().unwrap_or('%');
                return Err(TemplateError::UnknownDirective { directive, offset });
            }
        };
        pieces.push(piece);
        i += 1;
        start = i;
    }

    if start < bytes.len() {
        pieces.push(Piece::Literal(&template[start..]));
    }
    Ok(pieces)
}

/// Resolve every directive to a 0-based argument index and check it.
fn bind(pieces: &[Piece<'_>], args: &[Arg<'_>]) -> Result<Vec<usize>, TemplateError> {
    let mut bindings = Vec::new();
    let mut numbered = false;
    let mut sequential = false;

    for piece in pieces {
        let Piece::Directive { position, kind } = piece else {
            continue;
        };
        let index = match position {
            Some(n) => {
                numbered = true;
                if *n == 0 || *n > args.len() {
                    return Err(TemplateError::IndexOutOfRange {
                        index: *n,
                        supplied: args.len(),
                    });
                }
                n - 1
            }
            None => {
                sequential = true;
                bindings.len()
            }
        };
        if numbered && sequential {
            return Err(TemplateError::MixedNumbering);
        }
        if let Some(arg) = args.get(index) {
            if !kind.accepts(arg) {
                return Err(TemplateError::TypeMismatch {
                    index: index + 1,
                    expected: kind.name(),
                    found: arg.type_name(),
                });
            }
        }
        bindings.push(index);
    }

    if numbered {
        if let Some(unused) = (0..args.len()).find(|i| !bindings.contains(i)) {
            return Err(TemplateError::UnusedArgument { index: unused + 1 });
        }
    } else if bindings.len() != args.len() {
        return Err(TemplateError::CountMismatch {
            expected: bindings.len(),
            supplied: args.len(),
        });
    }

    Ok(bindings)
}
