// src/core/sanitize.rs

/// Collapse runs of whitespace (incl. NBSP and newlines) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Case-fold for keyword matching. Full Unicode lowering so `É` meets `é`.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// True if the folded `haystack` contains any of the (already folded) needles.
pub fn contains_any_folded(haystack: &str, needles: &[&str]) -> bool {
    let folded = fold(haystack);
    needles.iter().any(|n| folded.contains(n))
}

/// Drop every space character (not other whitespace).
pub fn strip_spaces(s: &str) -> String {
    s.chars().filter(|c| *c != ' ').collect()
}

/// Keep `[A-Za-z0-9_-]`, turn space runs into one `_`. Empty → `fallback`.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch.to_ascii_lowercase()); last_us = false; }
        else if ch.is_whitespace() || ch == '_' { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' { out.push(ch); last_us = false; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}
