//! Discovery of args files in a directory.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::Config;

/// The args files found for an application in one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirFiles {
    /// `<app><auto_suffix>`, used when no `--args` is given.
    pub default_args: Option<String>,
    /// Other `<app>*<args_suffix>` files, sorted by name.
    pub args_files: Vec<String>,
}

impl DirFiles {
    pub fn is_empty(&self) -> bool {
        self.default_args.is_none() && self.args_files.is_empty()
    }
}

/// Find the args files for `app` in `dir`.
///
/// Only regular files are considered, following symlinks; names that are
/// not valid UTF-8 are skipped.
pub fn dir_files_in(app: &str, dir: &Path, config: &Config) -> io::Result<DirFiles> {
    let auto_name = format!("{}{}", app, config.auto_suffix);
    let mut dir_files = DirFiles::default();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let is_file = match entry.file_type()? {
            t if t.is_symlink() => fs::metadata(entry.path()).is_ok_and(|m| m.is_file()),
            t => t.is_file(),
        };
        if !is_file {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };

        if name == auto_name {
            dir_files.default_args = Some(name);
        } else if name.starts_with(app) && name.ends_with(&config.args_suffix) {
            dir_files.args_files.push(name);
        }
    }

    dir_files.args_files.sort();
    Ok(dir_files)
}
