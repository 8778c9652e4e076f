//! Character-level scanning over JavaScript call text.
//!
//! The plot arguments can contain parentheses, commas and braces inside
//! string literals, so a regex cannot safely bound the call. These scanners
//! track double-quoted string state (with backslash-escape awareness) and a
//! nesting depth instead.

/// Find the byte index of the `)` that closes the first `(` in `s`.
///
/// Parentheses inside double-quoted string literals are ignored. Returns
/// `None` if the input ends before the depth returns to zero.
pub fn matching_paren_end(s: &str) -> Option<usize> {
    let mut depth = 0i32;
    let mut in_string = false;
    let mut escape_next = false;
    let mut seen_open = false;

    for (i, c) in s.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        if c == '\\' && in_string {
            escape_next = true;
            continue;
        }
        if c == '"' {
            in_string = !in_string;
            continue;
        }
        if in_string {
            continue;
        }
        match c {
            '(' => {
                depth += 1;
                seen_open = true;
            }
            ')' => {
                depth -= 1;
                if seen_open && depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split an argument list at top-level commas.
///
/// `args` is the text between the call's outer parentheses. Commas nested
/// inside `[]`, `{}`, `()` or string literals do not split. Returned slices
/// are trimmed of surrounding whitespace.
pub fn split_top_level_args(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut in_string = false;
    let mut escape_next = false;
    let mut start = 0usize;

    for (i, c) in args.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        if c == '\\' && in_string {
            escape_next = true;
            continue;
        }
        if c == '"' {
            in_string = !in_string;
            continue;
        }
        if in_string {
            continue;
        }
        match c {
            '[' | '{' | '(' => depth += 1,
            ']' | '}' | ')' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(args[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = args[start..].trim();
    if !last.is_empty() || !parts.is_empty() {
        parts.push(last);
    }
    parts
}

// ─── Tests ──────────────────────────────────────────────────────────────────
