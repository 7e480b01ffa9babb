//! Reading a vault directory into a [`FileMap`].

use std::path::{Component, Path};

use async_walkdir::WalkDir;
use coursevault_core::{Error, FileMap};
use futures::StreamExt;

use crate::error::Result;

const SIDECAR_SUFFIX: &str = ".timestamps.json";

/// Reads every markdown file and timestamp sidecar under `root`.
///
/// Keys are `/`-separated paths relative to `root`. Hidden files and
/// anything under a hidden directory (`.obsidian/`, `.git/`) are skipped.
pub async fn read_vault(root: &Path) -> Result<FileMap> {
    let metadata = tokio::fs::metadata(root)
        .await
        .map_err(|e| Error::io_with_path(e, root))?;
    if !metadata.is_dir() {
        return Err(Error::not_found("Vault directory", root.display().to_string()).into());
    }

    let mut files = FileMap::new();
    let mut walker = WalkDir::new(root);

    while let Some(entry) = walker.next().await {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Walk error: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let Some(key) = vault_key(relative) else {
            continue;
        };
        if !is_vault_file(&key) {
            continue;
        }

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::io_with_path(e, &path))?;
        files.insert(key, text);
    }

    log::info!("Read {} file(s) from {}", files.len(), root.display());
    Ok(files)
}

/// `/`-joined relative path, or `None` for hidden or non-UTF-8 paths.
fn vault_key(relative: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        let Component::Normal(part) = component else {
            return None;
        };
        let part = part.to_str()?;
        if part.starts_with('.') {
            return None;
        }
        parts.push(part);
    }
    Some(parts.join("/"))
}

fn is_vault_file(key: &str) -> bool {
    key.ends_with(".md") || key.ends_with(SIDECAR_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, text: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[tokio::test]
    async fn test_reads_markdown_and_sidecars() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "modules/intro.md", "# Intro");
        write(dir.path(), "video_transcripts/talk.md", "0:00 - Hi");
        write(dir.path(), "video_transcripts/talk.timestamps.json", "[]");
        write(dir.path(), "images/diagram.png", "png");

        let files = read_vault(dir.path()).await.unwrap();
        let keys: Vec<&str> = files.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "modules/intro.md",
                "video_transcripts/talk.md",
                "video_transcripts/talk.timestamps.json",
            ]
        );
        assert_eq!(files["modules/intro.md"], "# Intro");
    }

    #[tokio::test]
    async fn test_skips_hidden_entries() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), ".obsidian/workspace.md", "x");
        write(dir.path(), "lenses/.draft.md", "x");
        write(dir.path(), "lenses/visible.md", "x");

        let files = read_vault(dir.path()).await.unwrap();
        assert_eq!(files.keys().collect::<Vec<_>>(), vec!["lenses/visible.md"]);
    }

    #[tokio::test]
    async fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = read_vault(&dir.path().join("nope")).await.unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[tokio::test]
    async fn test_file_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "file.md", "x");
        let err = read_vault(&dir.path().join("file.md")).await.unwrap_err();
        assert!(err.to_string().contains("Vault directory not found"));
    }

    #[test]
    fn test_vault_key_joins_with_slashes() {
        assert_eq!(
            vault_key(Path::new("learning outcomes").join("a.md").as_path()).as_deref(),
            Some("learning outcomes/a.md")
        );
        assert_eq!(vault_key(Path::new(".git/config")), None);
    }
}
