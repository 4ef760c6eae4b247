//! Full argument resolution for a command-line tool.
//!
//! An explicit `--args <file>` is always expanded. Without it, the working
//! directory is searched for `<app>.auto.args` (used unless `--no-args` or
//! `--no-auto-args` is given) and then for other `<app>*.args` files, which
//! are offered for selection unless `--no-args` is given.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::Config;
use crate::directive::{ReadError, read_file_limited};
use crate::discovery::dir_files_in;
use crate::expand::{ExpandError, expand_args_with};
use crate::flags::{pull_no_args, pull_no_auto_args};
use crate::plan::{Plan, plan};
use crate::select::{SelectError, Selector, select_args_file};

/// Errors that can occur while resolving arguments.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Expand(#[from] ExpandError),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    #[error("failed to list args files in {}: {source}", .dir.display())]
    Discovery {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Select(#[from] SelectError),
}

/// Where the resolved arguments came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// An explicit `--args <file>` was expanded.
    Explicit,
    /// The default args file of the working directory.
    Default(PathBuf),
    /// An args file picked by the user.
    Selected(PathBuf),
    /// No args file was used.
    PassThrough,
}

/// The final argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub args: Vec<String>,
    pub source: Source,
}

/// Application name used for discovery: the file name of `argv0`.
pub fn app_name(argv0: &str) -> String {
    Path::new(argv0)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| argv0.to_string())
}

/// Resolve `argv` (program name first) against the args files in `cwd`.
pub fn resolve_args<S: Selector + ?Sized>(
    argv: Vec<String>,
    cwd: &Path,
    config: &Config,
    selector: &mut S,
) -> Result<Resolved, Error> {
    // Relative `--args` paths are taken from `cwd`, like discovered files.
    let mut explicit_path = PathBuf::new();
    let expanded = expand_args_with(&argv, |path| {
        explicit_path = cwd.join(path);
        read_file_limited(&explicit_path, config.max_line_length)
    });
    match expanded {
        Ok(args) => {
            return Ok(Resolved {
                args,
                source: Source::Explicit,
            });
        }
        Err(ExpandError::Read(source)) => {
            return Err(Error::Read {
                path: explicit_path,
                source,
            });
        }
        Err(e) if !e.is_no_args() => return Err(e.into()),
        Err(_) => {}
    }

    let mut rest = argv;
    if rest.is_empty() {
        return Ok(Resolved {
            args: rest,
            source: Source::PassThrough,
        });
    }
    let argv0 = rest.remove(0);
    let (rest, no_auto_args) = pull_no_auto_args(rest);
    let (rest, no_args) = pull_no_args(rest);

    let app = app_name(&argv0);
    let dir_files = dir_files_in(&app, cwd, config).map_err(|source| Error::Discovery {
        dir: cwd.to_path_buf(),
        source,
    })?;

    let (path, source) = match plan(&dir_files, no_args, no_auto_args) {
        Plan::UseDefault(name) => {
            let path = cwd.join(name);
            (path.clone(), Source::Default(path))
        }
        Plan::Select(files) => {
            let path = cwd.join(select_args_file(selector, &files)?);
            (path.clone(), Source::Selected(path))
        }
        Plan::PassThrough => {
            let mut args = vec![argv0];
            args.extend(rest);
            return Ok(Resolved {
                args,
                source: Source::PassThrough,
            });
        }
    };

    let inserted = read_file_limited(&path, config.max_line_length)
        .map_err(|source| Error::Read { path, source })?;

    let mut args = Vec::with_capacity(1 + inserted.len() + rest.len());
    args.push(argv0);
    args.extend(inserted);
    args.extend(rest);
    Ok(Resolved { args, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    /// Selector that answers with a fixed number and records what it saw.
    struct Fixed {
        answer: usize,
        seen: Vec<String>,
    }

    impl Fixed {
        fn new(answer: usize) -> Self {
            Self {
                answer,
                seen: Vec::new(),
            }
        }
    }

    impl Selector for Fixed {
        fn select_one_of(&mut self, options: &[String]) -> Result<usize, SelectError> {
            self.seen = options.to_vec();
            Ok(self.answer)
        }
    }

    fn workdir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_app_name() {
        assert_eq!(app_name("/usr/local/bin/tool"), "tool");
        assert_eq!(app_name("tool"), "tool");
        assert_eq!(app_name(""), "");
    }

    #[test]
    fn test_explicit_args() {
        let dir = workdir(&[("x.args", "-i\n1\n"), ("tool.auto.args", "--auto\n")]);
        let file = dir.path().join("x.args").to_string_lossy().to_string();
        let mut selector = Fixed::new(1);

        let resolved = resolve_args(
            strings(&["tool", "--args", &file, "tail"]),
            dir.path(),
            &Config::default(),
            &mut selector,
        )
        .unwrap();
        assert_eq!(resolved.source, Source::Explicit);
        assert_eq!(resolved.args, strings(&["tool", "-i", "1", "tail"]));
    }

    #[test]
    fn test_explicit_relative_to_cwd() {
        let dir = workdir(&[("local.args", "$ --from cwd\n")]);
        let resolved = resolve_args(
            strings(&["tool", "--args", "local.args"]),
            dir.path(),
            &Config::default(),
            &mut Fixed::new(1),
        )
        .unwrap();
        assert_eq!(resolved.source, Source::Explicit);
        assert_eq!(resolved.args, strings(&["tool", "--from", "cwd"]));
    }

    #[test]
    fn test_explicit_missing_file_names_path() {
        let dir = workdir(&[]);
        let err = resolve_args(
            strings(&["tool", "--args", "missing.args"]),
            dir.path(),
            &Config::default(),
            &mut Fixed::new(1),
        )
        .unwrap_err();
        match &err {
            Error::Read {
                path,
                source: ReadError::Io(e),
            } => {
                assert_eq!(path, &dir.path().join("missing.args"));
                assert_eq!(e.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("missing.args"));
    }

    #[test]
    fn test_explicit_missing_value() {
        let dir = workdir(&[]);
        let err = resolve_args(
            strings(&["tool", "--args"]),
            dir.path(),
            &Config::default(),
            &mut Fixed::new(1),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Expand(ExpandError::MissingFilepath)));
    }

    #[test]
    fn test_default_file() {
        let dir = workdir(&[
            ("tool.auto.args", "$ --mode auto\n"),
            ("tool.en.args", "--lang\nen\n"),
        ]);
        let mut selector = Fixed::new(1);

        let resolved = resolve_args(
            strings(&["/bin/tool", "input.txt"]),
            dir.path(),
            &Config::default(),
            &mut selector,
        )
        .unwrap();
        assert_eq!(
            resolved.source,
            Source::Default(dir.path().join("tool.auto.args"))
        );
        assert_eq!(
            resolved.args,
            strings(&["/bin/tool", "--mode", "auto", "input.txt"])
        );
        assert!(selector.seen.is_empty());
    }

    #[test]
    fn test_no_auto_args_selects() {
        let dir = workdir(&[
            ("tool.auto.args", "--auto\n"),
            ("tool.de.args", "--lang\nde\n"),
            ("tool.en.args", "--lang\nen\n"),
        ]);
        let mut selector = Fixed::new(2);

        let resolved = resolve_args(
            strings(&["tool", "--no-auto-args", "input.txt"]),
            dir.path(),
            &Config::default(),
            &mut selector,
        )
        .unwrap();
        assert_eq!(selector.seen, strings(&["tool.de.args", "tool.en.args"]));
        assert_eq!(
            resolved.source,
            Source::Selected(dir.path().join("tool.en.args"))
        );
        assert_eq!(resolved.args, strings(&["tool", "--lang", "en", "input.txt"]));
    }

    #[test]
    fn test_no_args_passes_through() {
        let dir = workdir(&[("tool.auto.args", "--auto\n"), ("tool.en.args", "--en\n")]);
        let resolved = resolve_args(
            strings(&["tool", "-v", "--no-args", "input.txt"]),
            dir.path(),
            &Config::default(),
            &mut Fixed::new(1),
        )
        .unwrap();
        assert_eq!(resolved.source, Source::PassThrough);
        assert_eq!(resolved.args, strings(&["tool", "-v", "input.txt"]));
    }

    #[test]
    fn test_nothing_found_passes_through() {
        let dir = workdir(&[("other.args", "--x\n")]);
        let resolved = resolve_args(
            strings(&["tool", "a", "b"]),
            dir.path(),
            &Config::default(),
            &mut Fixed::new(1),
        )
        .unwrap();
        assert_eq!(resolved.source, Source::PassThrough);
        assert_eq!(resolved.args, strings(&["tool", "a", "b"]));
    }

    #[test]
    fn test_empty_argv() {
        let dir = workdir(&[]);
        let resolved =
            resolve_args(Vec::new(), dir.path(), &Config::default(), &mut Fixed::new(1)).unwrap();
        assert!(resolved.args.is_empty());
        assert_eq!(resolved.source, Source::PassThrough);
    }

    #[test]
    fn test_bad_selection() {
        let dir = workdir(&[("tool.en.args", "--en\n")]);
        let err = resolve_args(
            strings(&["tool"]),
            dir.path(),
            &Config::default(),
            &mut Fixed::new(5),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Select(SelectError::OutOfRange { choice: 5, count: 1 })
        ));
    }

    #[test]
    fn test_default_file_line_limit() {
        let dir = workdir(&[("tool.auto.args", "0123456789abcdef\n")]);
        let config = Config {
            max_line_length: 8,
            ..Default::default()
        };
        let err = resolve_args(strings(&["tool"]), dir.path(), &config, &mut Fixed::new(1))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Read {
                source: ReadError::LineTooLong { line: 1, limit: 8 },
                ..
            }
        ));
    }

    #[test]
    fn test_missing_dir() {
        let dir = workdir(&[]);
        let err = resolve_args(
            strings(&["tool"]),
            &dir.path().join("gone"),
            &Config::default(),
            &mut Fixed::new(1),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Discovery { .. }));
    }
}
