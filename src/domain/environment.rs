//! Environment file placeholder rewriting.

/// Result of rewriting an environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvRewrite {
    pub contents: String,
    /// Number of placeholder lines that were replaced.
    pub replaced: usize,
}

/// Replace every line exactly equal to `key=from` with `key=to`.
///
/// Line endings and all other bytes are kept as they were. Lines that only start with
/// the placeholder (`key=from_other`) are not touched.
pub fn replace_assignment(contents: &str, key: &str, from: &str, to: &str) -> EnvRewrite {
    let placeholder = format!("{key}={from}");
    let replacement = format!("{key}={to}");

    let mut out = String::with_capacity(contents.len() + to.len());
    let mut replaced = 0;
    for line in contents.split_inclusive('\n') {
        let (body, ending) = split_line_ending(line);
        if body == placeholder {
            out.push_str(&replacement);
            out.push_str(ending);
            replaced += 1;
        } else {
            out.push_str(line);
        }
    }

    EnvRewrite { contents: out, replaced }
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
