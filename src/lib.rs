//! argsfile - command-line arguments from args files.
//!
//! Expands `--args <file>` in an argument list with the arguments described
//! by that file, and can pick a default or user-selected args file from the
//! working directory when no `--args` is given.
//!
//! Args file lines:
//!
//! ```text
//! # comment                   ignored, as are blank lines
//! $ -o "out dir" --fast       split like a shell command line
//! | text                      appended to the previous argument
//! |= text                     appended after "="
//! |s text                     appended after a space
//! |t text                     appended after a tab
//! |n text                     appended after a newline
//! anything else               one argument, verbatim
//! ```

pub mod audit;
pub mod config;
pub mod directive;
pub mod discovery;
pub mod expand;
pub mod flags;
pub mod output;
pub mod plan;
pub mod select;
pub mod shell;
pub mod workflow;

pub use config::Config;
pub use directive::{ReadError, read, read_file};
pub use expand::{ExpandError, expand_args};
pub use select::{PromptSelector, Selector};
pub use shell::tokenize;
pub use workflow::{Resolved, Source, resolve_args};
