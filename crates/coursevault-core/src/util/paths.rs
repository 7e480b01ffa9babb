//! Vault-relative path helpers.
//!
//! Vault paths are always `/`-separated and relative to the vault root,
//! regardless of platform. They are plain strings, never `std::path::Path`,
//! so that behavior does not depend on the host filesystem.

/// Directory part of a vault path (`""` for files at the root).
///
/// ```
/// use coursevault_core::util::paths::parent_dir;
///
/// assert_eq!(parent_dir("lenses/intro.md"), "lenses");
/// assert_eq!(parent_dir("a/b/c.md"), "a/b");
/// assert_eq!(parent_dir("root.md"), "");
/// ```
pub fn parent_dir(path: &str) -> &str {
    path.rfind('/').map_or("", |i| &path[..i])
}

/// File name without directory.
pub fn file_name(path: &str) -> &str {
    path.rfind('/').map_or(path, |i| &path[i + 1..])
}

/// File name without directory or `.md` extension.
///
/// ```
/// use coursevault_core::util::paths::file_stem;
///
/// assert_eq!(file_stem("lenses/Intro Lens.md"), "Intro Lens");
/// assert_eq!(file_stem("notes"), "notes");
/// ```
pub fn file_stem(path: &str) -> &str {
    let name = file_name(path);
    name.strip_suffix(".md").unwrap_or(name)
}

/// Joins a directory and a relative path.
pub fn join(dir: &str, rest: &str) -> String {
    if dir.is_empty() {
        rest.to_string()
    } else {
        format!("{dir}/{rest}")
    }
}

/// Appends `.md` unless the path already ends with it.
pub fn with_md_extension(path: &str) -> String {
    if path.ends_with(".md") {
        path.to_string()
    } else {
        format!("{path}.md")
    }
}

/// Sidecar word-timestamp path for a transcript (`x.md` → `x.timestamps.json`).
///
/// ```
/// use coursevault_core::util::paths::timestamps_sidecar;
///
/// assert_eq!(
///     timestamps_sidecar("video_transcripts/talk.md"),
///     "video_transcripts/talk.timestamps.json"
/// );
/// ```
pub fn timestamps_sidecar(path: &str) -> String {
    let base = path.strip_suffix(".md").unwrap_or(path);
    format!("{base}.timestamps.json")
}
