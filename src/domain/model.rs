use std::path::PathBuf;

/// A file the user picked, described at selection time. The `path` is the
/// handle to the raw content, which is only read once the upload starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub display_name: String,
    pub path: PathBuf,
    pub size: u64,
    pub mime: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    New,
    Started,
    Loading,
    Finish,
    Failed,
}
