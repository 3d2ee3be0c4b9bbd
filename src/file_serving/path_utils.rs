use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};

/// Map a raw request path to a filesystem location under the document root.
///
/// The query string is dropped, the remainder is percent-decoded, and only
/// normal components are kept, so `.` and `..` segments never escape the
/// root.
pub fn map_request_path(root_dir: &Path, request_path: &str) -> PathBuf {
    let path_without_query = request_path.split('?').next().unwrap_or(request_path);
    let decoded = percent_decode_str(path_without_query).decode_utf8_lossy();

    let cleaned: PathBuf = Path::new(decoded.as_ref())
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect();
    log::debug!("Cleaned path: {}", cleaned.display());

    root_dir.join(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_plain_path_under_root() {
        let mapped = map_request_path(Path::new("/srv/app"), "/js/app.js");
        assert_eq!(mapped, PathBuf::from("/srv/app/js/app.js"));
    }

    #[test]
    fn strips_query_string() {
        let mapped = map_request_path(Path::new("/srv/app"), "/index.html?v=3");
        assert_eq!(mapped, PathBuf::from("/srv/app/index.html"));
    }

    #[test]
    fn decodes_percent_encoding() {
        let mapped = map_request_path(Path::new("/srv/app"), "/my%20file.txt");
        assert_eq!(mapped, PathBuf::from("/srv/app/my file.txt"));
    }

    #[test]
    fn traversal_segments_stay_under_root() {
        let mapped = map_request_path(Path::new("/srv/app"), "/../../etc/passwd");
        assert_eq!(mapped, PathBuf::from("/srv/app/etc/passwd"));
    }

    #[test]
    fn root_path_maps_to_root_dir() {
        let mapped = map_request_path(Path::new("/srv/app"), "/");
        assert_eq!(mapped, PathBuf::from("/srv/app"));
    }
}
