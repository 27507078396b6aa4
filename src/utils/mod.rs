use std::path::Path;

/// Display name for a selected file: its path relative to the parent of
/// the chosen folder, so the folder name itself stays visible, joined with
/// forward slashes. Falls back to the bare file name for paths outside the
/// folder.
pub fn display_name(root: &Path, path: &Path) -> String {
    let base = root.parent().unwrap_or(root);
    let relative = match path.strip_prefix(base) {
        Ok(relative) => relative,
        Err(_) => {
            return path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        }
    };

    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<String>>()
        .join("/")
}

/// Best-effort MIME type from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("json") => "application/json",
        Some("csv") => "text/csv",
        Some("txt") => "text/plain",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let root = Path::new("/home/user/report");
        assert_eq!(
            display_name(root, Path::new("/home/user/report/a.html")),
            "report/a.html"
        );
        assert_eq!(
            display_name(root, Path::new("/home/user/report/sub/b.html")),
            "report/sub/b.html"
        );
        assert_eq!(display_name(root, Path::new("/elsewhere/c.html")), "c.html");
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("page.html")), "text/html");
        assert_eq!(mime_for_path(Path::new("PAGE.HTM")), "text/html");
        assert_eq!(mime_for_path(Path::new("notes.txt")), "text/plain");
        assert_eq!(
            mime_for_path(Path::new("archive.bin")),
            "application/octet-stream"
        );
        assert_eq!(mime_for_path(Path::new("Makefile")), "application/octet-stream");
    }
}
