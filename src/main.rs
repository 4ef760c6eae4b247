//! argsfile - prints the arguments it resolves from args files.

use argsfile::audit::AuditLogger;
use argsfile::config::Config;
use argsfile::output::format_resolved;
use argsfile::select::PromptSelector;
use argsfile::workflow::{app_name, resolve_args};

use std::process::ExitCode;

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("argsfile: cannot determine working directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = match Config::load(Some(&cwd)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("argsfile: config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let app = argv.first().map(|a| app_name(a)).unwrap_or_default();

    let mut selector = PromptSelector::stdio();
    let resolved = match resolve_args(argv, &cwd, &config, &mut selector) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("argsfile: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Audit logging (if enabled)
    if let Some(path) = config.audit_path()
        && let Ok(mut logger) = AuditLogger::open(path)
    {
        let _ = logger.log_resolved(&app, &resolved);
    }

    print!("{}", format_resolved(&resolved.args));
    ExitCode::SUCCESS
}
