//! Choosing where arguments come from when no `--args` is given.

use crate::discovery::DirFiles;

/// What to do with an argument list that has no `--args` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Expand the default args file.
    UseDefault(String),
    /// Let the user pick one of these files.
    Select(Vec<String>),
    /// Leave the arguments as they are.
    PassThrough,
}

impl Plan {
    /// Create a pass-through plan.
    pub fn pass_through() -> Self {
        Plan::PassThrough
    }

    /// Check if this plan leaves the arguments untouched.
    pub fn is_pass_through(&self) -> bool {
        matches!(self, Plan::PassThrough)
    }
}

/// Decide between the default file, a selection and passing through.
///
/// `--no-args` suppresses both the default file and the selection,
/// `--no-auto-args` only the default file.
pub fn plan(dir_files: &DirFiles, no_args: bool, no_auto_args: bool) -> Plan {
    if let Some(default) = &dir_files.default_args
        && !no_args
        && !no_auto_args
    {
        return Plan::UseDefault(default.clone());
    }
    if !dir_files.args_files.is_empty() && !no_args {
        return Plan::Select(dir_files.args_files.clone());
    }
    Plan::pass_through()
}
