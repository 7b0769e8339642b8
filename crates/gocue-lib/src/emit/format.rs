//! Post-processing of rendered Go source.

use crate::{Error, Result};

/// Rewrites rendered declaration syntax before it is returned.
pub trait Formatter {
    fn format(&self, src: &str) -> Result<String>;
}

/// Re-indents by block depth and normalizes whitespace.
///
/// Lines are trimmed and indented with one tab per open `{`/`(` block. Runs
/// of blank lines collapse into one, blank lines directly inside a block are
/// dropped, and the output ends with exactly one newline. Comment lines,
/// including every line of a `/* ... */` block, never open or close blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canonical;

/// Returns the source untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl Formatter for Canonical {
    fn format(&self, src: &str) -> Result<String> {
        let mut out = String::with_capacity(src.len());
        let mut depth = 0usize;
        let mut pending_blank = false;
        let mut in_block_comment = false;

        for (lineno, raw) in src.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                pending_blank = !out.is_empty();
                continue;
            }

            let comment = if in_block_comment {
                in_block_comment = !line.contains("*/");
                true
            } else if let Some(rest) = line.strip_prefix("/*") {
                in_block_comment = !rest.contains("*/");
                true
            } else {
                line.starts_with("//")
            };
            let closes = !comment && (line.starts_with('}') || line.starts_with(')'));
            if closes {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    Error::Format(format!("unbalanced {:?} on line {}", &line[..1], lineno + 1))
                })?;
            }

            let opens_block = out.ends_with("{\n") || out.ends_with("(\n");
            if pending_blank && !closes && !opens_block {
                out.push('\n');
            }
            pending_blank = false;

            for _ in 0..depth {
                out.push('\t');
            }
            out.push_str(line);
            out.push('\n');

            if !comment && (line.ends_with('{') || line.ends_with('(')) {
                depth += 1;
            }
        }

        if depth != 0 {
            return Err(Error::Format(format!("{depth} unclosed block(s) at end of input")));
        }
        Ok(out)
    }
}

impl Formatter for Verbatim {
    fn format(&self, src: &str) -> Result<String> {
        Ok(src.to_string())
    }
}
