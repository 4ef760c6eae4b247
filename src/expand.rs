//! Expansion of `--args <file>` in an argument list.

use thiserror::Error;

use crate::directive::{ReadError, read_file};
use crate::flags::ARGS_FLAG;

/// Errors that can occur when expanding an argument list.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// No `--args` flag in the list; nothing to expand.
    #[error("no --args argument present")]
    NoArgs,

    #[error("missing --args filepath value")]
    MissingFilepath,

    #[error(transparent)]
    Read(#[from] ReadError),
}

impl ExpandError {
    /// Check if this is the "nothing to expand" signal rather than a failure.
    pub fn is_no_args(&self) -> bool {
        matches!(self, ExpandError::NoArgs)
    }
}

/// Expand the first `--args <file>` in `args` with the contents of that file.
pub fn expand_args(args: &[String]) -> Result<Vec<String>, ExpandError> {
    expand_args_with(args, |path| read_file(path))
}

/// Expand the first `--args <file>` in `args`, reading the file with `load`.
///
/// Arguments before the flag and after its value keep their positions.
pub fn expand_args_with<F>(args: &[String], load: F) -> Result<Vec<String>, ExpandError>
where
    F: FnOnce(&str) -> Result<Vec<String>, ReadError>,
{
    let idx = args
        .iter()
        .position(|a| a == ARGS_FLAG)
        .ok_or(ExpandError::NoArgs)?;
    let path = args.get(idx + 1).ok_or(ExpandError::MissingFilepath)?;

    let inserted = load(path)?;

    let mut expanded = Vec::with_capacity(args.len() - 2 + inserted.len());
    expanded.extend_from_slice(&args[..idx]);
    expanded.extend(inserted);
    expanded.extend_from_slice(&args[idx + 2..]);
    Ok(expanded)
}
