use std::env::VarError;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Expands `$VAR`, `${VAR}` and `~` in a configured tool path.
///
/// An undefined variable expands to an empty string, as in the shell, and is
/// warned about. `~` stays literal when `HOME` is unset.
pub fn expand_tool_path<F>(bin: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let home = lookup("HOME");
    let expanded = shellexpand::full_with_context(
        bin,
        move || home,
        |var: &str| -> Result<Option<String>, VarError> {
            Ok(Some(lookup(var).unwrap_or_else(|| {
                tracing::warn!(
                    target: "toltec_repeat.resolve",
                    var,
                    configured = bin,
                    "undefined variable in tool path, expanding to empty"
                );
                String::new()
            })))
        },
    )
    .with_context(|| format!("cannot expand tool path: {bin}"))?;
    Ok(expanded.into_owned())
}

/// Expanded path of the tool. A directory gets `default_name` appended; a
/// bare program name is looked up on `PATH`. A tool that cannot be found is
/// only warned about.
pub fn resolve_tool<F>(bin: &str, default_name: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let expanded = expand_tool_path(bin, lookup)?;
    let mut path = PathBuf::from(&expanded);

    if path.is_dir() {
        path = path.join(default_name);
    }

    if is_bare_name(&path) {
        match which::which(&path) {
            Ok(found) => path = found,
            Err(e) => tracing::warn!(
                target: "toltec_repeat.resolve",
                tool = %path.display(),
                error = %e,
                "reduction tool not found on PATH"
            ),
        }
    } else if !path.exists() {
        tracing::warn!(
            target: "toltec_repeat.resolve",
            tool = %path.display(),
            "reduction tool does not exist, every invocation will fail"
        );
    }

    tracing::debug!(target: "toltec_repeat.resolve", configured = bin, tool = %path.display(), "tool resolved");
    Ok(path.to_string_lossy().into_owned())
}

fn is_bare_name(path: &Path) -> bool {
    path.components().count() == 1 && !path.is_absolute() && !path.starts_with(".")
}
