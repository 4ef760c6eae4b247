//! Shell-style word splitting for `$ ` lines.

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Split a line into words, respecting quotes and escapes.
///
/// Single, double and back quotes group whitespace into one word. A quote of
/// one kind is literal inside a region of another kind. A backslash escapes
/// the next character everywhere except inside single quotes. Unterminated
/// quotes close silently at the end of the line.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut in_back_quote = false;
    let mut escape_next = false;

    for c in input.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_single_quote => current.push(c),
            '\\' => escape_next = true,
            c if is_separator(c) => {
                if in_single_quote || in_double_quote || in_back_quote {
                    current.push(c);
                } else if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            '`' if in_single_quote || in_double_quote => current.push(c),
            '`' => in_back_quote = !in_back_quote,
            '"' if in_single_quote || in_back_quote => current.push(c),
            '"' => in_double_quote = !in_double_quote,
            '\'' if in_double_quote || in_back_quote => current.push(c),
            '\'' => in_single_quote = !in_single_quote,
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}
