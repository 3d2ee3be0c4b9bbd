use std::path::{Path, PathBuf};

use super::path_utils::map_request_path;

pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Resolve a request path against the document root, applying the SPA
/// fallback rule: the root path, and any path with no regular file behind
/// it, are served the default document so client-side routing can take over.
pub fn resolve_request_path(root_dir: &Path, request_path: &str) -> PathBuf {
    if request_path == "/" {
        return root_dir.join(DEFAULT_DOCUMENT);
    }

    let mapped = map_request_path(root_dir, request_path);
    if mapped.is_file() {
        mapped
    } else {
        log::debug!(
            "No file at {}, falling back to {}",
            mapped.display(),
            DEFAULT_DOCUMENT
        );
        root_dir.join(DEFAULT_DOCUMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn root_path_resolves_to_default_document() {
        let root = tempdir().unwrap();
        fs::write(root.path().join("index.html"), "<html></html>").unwrap();

        let resolved = resolve_request_path(root.path(), "/");
        assert_eq!(resolved, root.path().join("index.html"));
    }

    #[test]
    fn existing_file_resolves_to_itself() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join("js")).unwrap();
        fs::write(root.path().join("js/app.js"), "console.log(1)").unwrap();

        let resolved = resolve_request_path(root.path(), "/js/app.js");
        assert_eq!(resolved, root.path().join("js/app.js"));
    }

    #[test]
    fn missing_file_falls_back_to_default_document() {
        let root = tempdir().unwrap();
        fs::write(root.path().join("index.html"), "<html></html>").unwrap();

        let resolved = resolve_request_path(root.path(), "/expenses/42");
        assert_eq!(resolved, root.path().join("index.html"));
    }

    #[test]
    fn directory_path_falls_back_to_default_document() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join("assets")).unwrap();
        fs::write(root.path().join("index.html"), "<html></html>").unwrap();

        let resolved = resolve_request_path(root.path(), "/assets");
        assert_eq!(resolved, root.path().join("index.html"));
    }

    #[test]
    fn fallback_applies_even_without_default_document() {
        let root = tempdir().unwrap();

        let resolved = resolve_request_path(root.path(), "/missing");
        assert_eq!(resolved, root.path().join("index.html"));
    }
}
