use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::pattern::MatchPattern;

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectOpts {
    pub follow_links: bool,
}

/// Recursively collects every entry under `root` (root included) whose file
/// name matches `pattern`, in walk order.
///
/// Unreadable entries and a missing root yield no matches rather than an error.
pub fn select_matches_blocking(root: &Path, pattern: &MatchPattern, opts: SelectOpts) -> Vec<PathBuf> {
    if !root.exists() {
        tracing::warn!(
            target: "toltec_repeat.select",
            root = %root.display(),
            "root directory does not exist, nothing to select"
        );
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut skipped = 0usize;

    for entry in WalkDir::new(root).follow_links(opts.follow_links) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped += 1;
                tracing::debug!(
                    target: "toltec_repeat.select",
                    path = ?e.path(),
                    error = %e,
                    "skipping unreadable entry"
                );
                continue;
            }
        };

        if pattern.matches_name(&entry.file_name().to_string_lossy()) {
            matches.push(entry.into_path());
        }
    }

    tracing::debug!(
        target: "toltec_repeat.select",
        root = %root.display(),
        pattern = %pattern,
        matched = matches.len(),
        skipped,
        "selection finished"
    );
    matches
}

/// Runs [`select_matches_blocking`] on the blocking thread pool.
pub async fn select_matches(root: PathBuf, pattern: MatchPattern, opts: SelectOpts) -> Vec<PathBuf> {
    let walk_root = root.clone();
    match tokio::task::spawn_blocking(move || select_matches_blocking(&walk_root, &pattern, opts)).await
    {
        Ok(paths) => paths,
        Err(e) => {
            tracing::error!(
                target: "toltec_repeat.select",
                root = %root.display(),
                error = %e,
                "directory walk task failed"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        let mut v: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        v.sort();
        v
    }

    #[test]
    fn selects_nc_files_only() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("toltec_001.nc"));
        touch(&dir.path().join("toltec_002.nc"));
        touch(&dir.path().join("other.txt"));

        let found = select_matches_blocking(dir.path(), &MatchPattern::new(None), SelectOpts::default());
        assert_eq!(names(&found), vec!["toltec_001.nc", "toltec_002.nc"]);
    }

    #[test]
    fn walks_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("ics/toltec0/toltec0_010000_000_0001_2020_02_01_12_00_00.nc"));
        touch(&dir.path().join("ics/toltec1/toltec1_010000_000_0001_2020_02_01_12_00_00_tune.nc"));
        touch(&dir.path().join("toltec5_010000.nc"));

        let found = select_matches_blocking(dir.path(), &MatchPattern::new(None), SelectOpts::default());
        assert_eq!(
            names(&found),
            vec!["toltec0_010000_000_0001_2020_02_01_12_00_00.nc", "toltec5_010000.nc"]
        );
        assert!(found.iter().all(|p| p.starts_with(dir.path())));
    }

    #[test]
    fn suffix_narrows_selection() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("toltec0_001_tune.nc"));
        touch(&dir.path().join("toltec0_002_tune.nc"));

        let found = select_matches_blocking(
            dir.path(),
            &MatchPattern::new(Some("_001")),
            SelectOpts::default(),
        );
        assert_eq!(names(&found), vec!["toltec0_001_tune.nc"]);
    }

    #[test]
    fn matching_directories_are_selected_too() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("toltec_9.nc")).unwrap();

        let found = select_matches_blocking(dir.path(), &MatchPattern::new(None), SelectOpts::default());
        assert_eq!(names(&found), vec!["toltec_9.nc"]);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let found = select_matches_blocking(
            &dir.path().join("absent"),
            &MatchPattern::new(None),
            SelectOpts::default(),
        );
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn async_wrapper_matches_blocking() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a/toltec_001.nc"));

        let found = select_matches(dir.path().to_path_buf(), MatchPattern::new(None), SelectOpts::default()).await;
        assert_eq!(names(&found), vec!["toltec_001.nc"]);
    }
}
