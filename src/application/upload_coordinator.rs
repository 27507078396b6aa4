use std::path::{Path, PathBuf};

use ignore::Walk;

use crate::{
    api::{ApiClient, UploadPart},
    domain::{AppError, SelectedFile},
    utils::{display_name, mime_for_path},
};

#[derive(Clone)]
pub struct UploadCoordinator {
    api_client: ApiClient,
}

impl UploadCoordinator {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    pub async fn choose_folder(&self) -> Option<PathBuf> {
        rfd::AsyncFileDialog::new()
            .pick_folder()
            .await
            .map(|handle| handle.path().to_path_buf())
    }

    /// Walk the chosen folder and describe every regular file as a
    /// candidate. Type and size filtering happens in the workflow, not here.
    pub fn scan_folder(&self, root: &Path) -> Vec<SelectedFile> {
        let mut candidates = Vec::new();

        for entry in Walk::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let size = match path.metadata() {
                Ok(meta) => meta.len(),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            candidates.push(SelectedFile {
                display_name: display_name(root, path),
                path: path.to_path_buf(),
                size,
                mime: mime_for_path(path).to_string(),
            });
        }

        candidates.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        candidates
    }

    /// Read every file in the batch and post them as one multipart request.
    pub async fn upload(&self, batch: Vec<SelectedFile>) -> Result<String, AppError> {
        let mut parts = Vec::with_capacity(batch.len());
        for file in batch {
            let content = tokio::fs::read(&file.path)
                .await
                .map_err(|e| AppError::Io(format!("Failed to read {}: {}", file.display_name, e)))?;

            parts.push(UploadPart {
                field_name: file.display_name,
                content,
                mime: file.mime,
            });
        }

        self.api_client
            .upload(parts)
            .await
            .map_err(|e| AppError::Api(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiConfig;
    use std::fs;

    fn coordinator() -> UploadCoordinator {
        UploadCoordinator::new(ApiClient::new(ApiConfig::default()))
    }

    #[test]
    fn scan_reports_relative_names_and_mimes() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("report");
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("a.html"), "<html></html>").unwrap();
        fs::write(root.join("sub").join("b.html"), "<html></html>").unwrap();
        fs::write(root.join("notes.txt"), "plain").unwrap();

        let candidates = coordinator().scan_folder(&root);
        let summary: Vec<(&str, &str)> = candidates
            .iter()
            .map(|f| (f.display_name.as_str(), f.mime.as_str()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("report/a.html", "text/html"),
                ("report/notes.txt", "text/plain"),
                ("report/sub/b.html", "text/html"),
            ]
        );
        assert_eq!(candidates[0].size, "<html></html>".len() as u64);
    }

    #[test]
    fn scan_of_empty_folder_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(coordinator().scan_folder(dir.path()).is_empty());
    }
}
