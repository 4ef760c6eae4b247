//! Interactive selection of an args file.

use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors that can occur while selecting an args file.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("failed to prompt for an args file: {0}")]
    Io(#[from] io::Error),

    #[error("{0:?} is not a file number")]
    NotANumber(String),

    #[error("{choice} is not a valid file number (1-{count})")]
    OutOfRange { choice: usize, count: usize },

    #[error("no args files to select from")]
    NoCandidates,
}

/// Picks one entry out of a list of options.
pub trait Selector {
    /// Return the chosen option as a 1-based number.
    fn select_one_of(&mut self, options: &[String]) -> Result<usize, SelectError>;
}

/// Selector that lists the options on a writer and reads a number from a reader.
pub struct PromptSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptSelector<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Selector for PromptSelector<R, W> {
    fn select_one_of(&mut self, options: &[String]) -> Result<usize, SelectError> {
        writeln!(self.output, "args files in the working directory:\n")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "\t{:>3}. {}", i + 1, option)?;
        }
        write!(self.output, "\nselect via file number: ")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let answer = line.trim();
        answer
            .parse()
            .map_err(|_| SelectError::NotANumber(answer.to_string()))
    }
}

/// Let `selector` pick one of `files` and return it.
pub fn select_args_file<S: Selector + ?Sized>(
    selector: &mut S,
    files: &[String],
) -> Result<String, SelectError> {
    if files.is_empty() {
        return Err(SelectError::NoCandidates);
    }
    let choice = selector.select_one_of(files)?;
    if choice < 1 || choice > files.len() {
        return Err(SelectError::OutOfRange {
            choice,
            count: files.len(),
        });
    }
    Ok(files[choice - 1].clone())
}
