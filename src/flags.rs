//! Sentinel flags recognized in an argument list.

/// Expands the following file path in place.
pub const ARGS_FLAG: &str = "--args";

/// Disables both the default args file and interactive selection.
pub const NO_ARGS_FLAG: &str = "--no-args";

/// Disables only the default args file.
pub const NO_AUTO_ARGS_FLAG: &str = "--no-auto-args";

/// Remove the first occurrence of `flag` from `args`.
///
/// Returns the reduced list and whether the flag was found.
pub fn pull_flag(mut args: Vec<String>, flag: &str) -> (Vec<String>, bool) {
    match args.iter().position(|a| a == flag) {
        Some(idx) => {
            args.remove(idx);
            (args, true)
        }
        None => (args, false),
    }
}

/// Pull `--no-args` from `args`.
pub fn pull_no_args(args: Vec<String>) -> (Vec<String>, bool) {
    pull_flag(args, NO_ARGS_FLAG)
}

/// Pull `--no-auto-args` from `args`.
pub fn pull_no_auto_args(args: Vec<String>) -> (Vec<String>, bool) {
    pull_flag(args, NO_AUTO_ARGS_FLAG)
}
