use crate::api::{ApiClient, ApiConfig};
use crate::application::UploadCoordinator;
use crate::domain::{SelectedFile, UploadWorkflow};
use crate::ui::{self, UploadMessage};
use iced::Task;

pub struct UploadApp {
    workflow: UploadWorkflow,
    coordinator: UploadCoordinator,
}

impl Default for UploadApp {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl UploadApp {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            workflow: UploadWorkflow::default(),
            coordinator: UploadCoordinator::new(ApiClient::new(config)),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Ui(UploadMessage),
    /// Candidate files scanned from the chosen folder, None when the
    /// dialog was cancelled
    FolderScanned(Option<Vec<SelectedFile>>),
    /// Final result of the multipart upload
    UploadFinished(Result<String, String>),
}

pub fn update(app: &mut UploadApp, message: Message) -> Task<Message> {
    match message {
        Message::Ui(UploadMessage::SelectFolderPressed) => {
            let coordinator = app.coordinator.clone();

            return Task::perform(
                async move {
                    let folder = coordinator.choose_folder().await?;
                    Some(coordinator.scan_folder(&folder))
                },
                Message::FolderScanned,
            );
        }
        Message::Ui(UploadMessage::SubmitPressed) => {
            if let Some(batch) = app.workflow.begin_submit() {
                let coordinator = app.coordinator.clone();
                tracing::info!("uploading {} files", batch.len());

                return Task::perform(
                    async move { coordinator.upload(batch).await.map_err(|e| e.to_string()) },
                    Message::UploadFinished,
                );
            }
        }
        Message::Ui(UploadMessage::ResetPressed) => {
            app.workflow.reset();
        }
        Message::Ui(UploadMessage::OpenDownloadPressed) => {
            if let Some(link) = app.workflow.download_link() {
                if let Err(e) = open::that(link) {
                    tracing::error!("failed to open {}: {}", link, e);
                }
            }
        }
        Message::FolderScanned(Some(candidates)) => {
            tracing::debug!("scanned {} candidate files", candidates.len());
            app.workflow.select_files(candidates);
        }
        Message::FolderScanned(None) => {
            // Dialog cancelled
        }
        Message::UploadFinished(Ok(link)) => {
            tracing::info!("upload finished, link: {}", link);
            app.workflow.complete_submit(link);
        }
        Message::UploadFinished(Err(detail)) => {
            tracing::error!("upload failed: {}", detail);
            app.workflow.fail_submit(format!("Upload failed: {}", detail));
        }
    }
    Task::none()
}

pub fn view(app: &UploadApp) -> iced::Element<'_, Message> {
    ui::view(&app.workflow).map(Message::Ui)
}
