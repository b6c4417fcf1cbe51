use std::fmt;

use glob::{MatchOptions, Pattern};

const PREFIX: &str = "*toltec*[0-9]";
const EXT: &str = ".nc";

// `find -name` semantics: whole-name match, case sensitive, `*` may match a leading dot.
const NAME_MATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Glob used to select data files by name.
#[derive(Debug, Clone)]
pub struct MatchPattern {
    text: String,
    compiled: Option<Pattern>,
}

impl MatchPattern {
    /// `None` gives `*toltec*[0-9].nc`, `Some(s)` gives `*toltec*[0-9]<s>*.nc`.
    pub fn new(suffix: Option<&str>) -> Self {
        let text = match suffix {
            None => format!("{PREFIX}{EXT}"),
            Some(s) => format!("{PREFIX}{s}*{EXT}"),
        };
        let compiled = Pattern::new(&collapse_stars(&text))
            .or_else(|e| {
                // Any suffix is accepted; one that is not valid glob syntax is matched literally.
                tracing::warn!(
                    target: "toltec_repeat.pattern",
                    pattern = %text,
                    error = %e,
                    "suffix is not a valid glob, matching it literally"
                );
                let escaped = suffix.map(Pattern::escape).unwrap_or_default();
                Pattern::new(&collapse_stars(&format!("{PREFIX}{escaped}*{EXT}")))
            })
            .ok();
        Self { text, compiled }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.compiled
            .as_ref()
            .is_some_and(|p| p.matches_with(name, NAME_MATCH))
    }
}

// `glob` only accepts `**` as a whole path component; in a file name any run
// of `*` means the same as one.
fn collapse_stars(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if c == '*' && out.ends_with('*') {
            continue;
        }
        out.push(c);
    }
    out
}

impl fmt::Display for MatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
