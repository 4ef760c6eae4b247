//! Output formatting for the `argsfile` binary.

/// Format resolved arguments as a numbered listing.
pub fn format_resolved(args: &[String]) -> String {
    let mut out = String::from("resolved args:\n--------------\n");
    for (i, arg) in args.iter().enumerate() {
        out.push_str(&format!("{:>3}. {}\n", i, arg));
    }
    out
}
