use super::model::{SelectedFile, UploadPhase};

pub const HTML_MIME: &str = "text/html";

/// Files above this size are rejected at selection time.
pub const MAX_FILE_SIZE: u64 = 50_000;

const OVERSIZE_NOTICE: &str = "These files are too large:";

/// The upload workflow state, independent of any rendering mechanism.
///
/// Owns the phase, the selected files, the user-visible error and the
/// download link. All transitions are synchronous; the actual network
/// call happens between `begin_submit` and `complete_submit`/`fail_submit`.
#[derive(Debug, Clone)]
pub struct UploadWorkflow {
    phase: UploadPhase,
    files: Vec<SelectedFile>,
    error: Option<String>,
    download_link: Option<String>,
}

impl Default for UploadWorkflow {
    fn default() -> Self {
        Self {
            phase: UploadPhase::New,
            files: Vec::new(),
            error: None,
            download_link: None,
        }
    }
}

impl UploadWorkflow {
    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn download_link(&self) -> Option<&str> {
        self.download_link.as_deref()
    }

    /// Apply a selection attempt.
    ///
    /// Non-HTML candidates are silently discarded. If any HTML candidate is
    /// oversized the whole selection is rejected and the error lists every
    /// oversized name, one per line. Otherwise the candidates are appended
    /// to the existing list, so the user can select more than once.
    ///
    /// The phase moves to `Started` on every attempt, even one that is
    /// fully rejected.
    pub fn select_files(&mut self, candidates: Vec<SelectedFile>) {
        self.phase = UploadPhase::Started;

        let html_files: Vec<SelectedFile> = candidates
            .into_iter()
            .filter(|file| file.mime == HTML_MIME)
            .collect();

        let oversized: Vec<&str> = html_files
            .iter()
            .filter(|file| file.size > MAX_FILE_SIZE)
            .map(|file| file.display_name.as_str())
            .collect();

        if !oversized.is_empty() {
            self.error = Some(format!("{}\n{}", OVERSIZE_NOTICE, oversized.join("\n")));
            return;
        }

        self.error = None;
        self.files.extend(html_files);
    }

    /// Whether a submission is currently allowed.
    pub fn can_submit(&self) -> bool {
        self.phase != UploadPhase::Loading && self.error.is_none() && !self.files.is_empty()
    }

    /// Start a submission. Returns the batch to upload, or `None` when
    /// submission is not allowed, in which case nothing changes.
    pub fn begin_submit(&mut self) -> Option<Vec<SelectedFile>> {
        if !self.can_submit() {
            return None;
        }

        self.download_link = None;
        self.phase = UploadPhase::Loading;
        Some(self.files.clone())
    }

    /// Record a successful upload. The link is set before the phase flips
    /// to `Finish`, since the terminal state reads it.
    pub fn complete_submit(&mut self, link: String) {
        self.download_link = Some(link);
        self.phase = UploadPhase::Finish;
        self.files.clear();
    }

    /// Record a failed upload. The selected files are kept; recovery goes
    /// through `reset`.
    pub fn fail_submit(&mut self, detail: String) {
        self.phase = UploadPhase::Failed;
        self.error = Some(detail);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
