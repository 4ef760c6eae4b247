//! Args file reading and line directives.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

use crate::shell::tokenize;

/// Default upper bound for a single line, terminator excluded.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 4096;

/// Errors that can occur while reading an args file.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("line {line} is longer than {limit} bytes")]
    LineTooLong { line: usize, limit: usize },

    #[error("line {line} continues an argument but no argument precedes it")]
    OrphanContinuation { line: usize },
}

/// Separator inserted when a continuation line extends the previous argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinMode {
    /// `| `
    None,
    /// `|= `
    Equals,
    /// `|s `
    Space,
    /// `|t `
    Tab,
    /// `|n `
    Newline,
}

impl JoinMode {
    pub fn separator(self) -> &'static str {
        match self {
            JoinMode::None => "",
            JoinMode::Equals => "=",
            JoinMode::Space => " ",
            JoinMode::Tab => "\t",
            JoinMode::Newline => "\n",
        }
    }
}

/// How a single line contributes to the argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
    Blank,
    Comment,
    /// Words to append, already tokenized.
    Shell(Vec<String>),
    /// Text to join onto the last argument.
    Continue(JoinMode, &'a str),
    /// The whole line as one argument.
    Literal(&'a str),
}

/// Continuation prefixes, most specific first.
const CONTINUATIONS: &[(&str, JoinMode)] = &[
    ("|= ", JoinMode::Equals),
    ("|s ", JoinMode::Space),
    ("|t ", JoinMode::Tab),
    ("|n ", JoinMode::Newline),
    ("| ", JoinMode::None),
];

/// Classify one line (without terminator).
pub fn classify(line: &str) -> Directive<'_> {
    if line.trim().is_empty() {
        return Directive::Blank;
    }
    if line.starts_with('#') {
        return Directive::Comment;
    }
    if let Some(rest) = line.strip_prefix("$ ") {
        return Directive::Shell(tokenize(rest));
    }
    for (prefix, mode) in CONTINUATIONS {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Directive::Continue(*mode, rest);
        }
    }
    Directive::Literal(line)
}

/// Read all args from `reader` with the default line limit.
///
/// Reading stops cleanly at end of input; a final line without a terminator
/// is still processed.
pub fn read<R: Read>(reader: R) -> Result<Vec<String>, ReadError> {
    read_limited(reader, DEFAULT_MAX_LINE_LENGTH)
}

/// Read all args from `reader`, failing on lines longer than `max_line_length`.
pub fn read_limited<R: Read>(reader: R, max_line_length: usize) -> Result<Vec<String>, ReadError> {
    let mut reader = BufReader::new(reader);
    let mut args: Vec<String> = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    // Room for "\r\n" so a line of exactly the limit still fits.
    let chunk = (max_line_length as u64).saturating_add(2);

    loop {
        buf.clear();
        let n = (&mut reader).take(chunk).read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        if buf.len() > max_line_length {
            return Err(ReadError::LineTooLong {
                line: line_no,
                limit: max_line_length,
            });
        }

        let line = String::from_utf8_lossy(&buf);
        match classify(&line) {
            Directive::Blank | Directive::Comment => {}
            Directive::Shell(words) => args.extend(words),
            Directive::Continue(mode, tail) => {
                let Some(last) = args.last_mut() else {
                    return Err(ReadError::OrphanContinuation { line: line_no });
                };
                last.push_str(mode.separator());
                last.push_str(tail);
            }
            Directive::Literal(text) => args.push(text.to_string()),
        }
    }

    Ok(args)
}

/// Read all args from the file at `path`.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<String>, ReadError> {
    read_file_limited(path, DEFAULT_MAX_LINE_LENGTH)
}

/// Read all args from the file at `path` with an explicit line limit.
pub fn read_file_limited(
    path: impl AsRef<Path>,
    max_line_length: usize,
) -> Result<Vec<String>, ReadError> {
    let file = File::open(path)?;
    read_limited(file, max_line_length)
}
