use iced::{
    widget::{button, column, row, text, Space},
    Element, Length,
};

use crate::domain::{UploadPhase, UploadWorkflow};

#[derive(Debug, Clone)]
pub enum UploadMessage {
    SelectFolderPressed,
    SubmitPressed,
    ResetPressed,
    OpenDownloadPressed,
}

pub fn view(workflow: &UploadWorkflow) -> Element<'_, UploadMessage> {
    let phase = workflow.phase();

    let select_enabled = phase != UploadPhase::Loading && phase != UploadPhase::Finish;
    let reset_enabled = phase != UploadPhase::New && phase != UploadPhase::Loading;

    let mut content = column![
        text("WELCOME").size(32),
        Space::new().height(Length::Fixed(20.0)),
        button("Select Folder")
            .on_press_maybe(select_enabled.then_some(UploadMessage::SelectFolderPressed))
            .padding([10, 20]),
    ]
    .padding(20)
    .spacing(10);

    if phase == UploadPhase::Started {
        content = content.push(text("You can select more").size(16));
    }

    if let Some(error) = workflow.error() {
        content = content.push(text(error).size(14).style(text::danger));
    }

    content = content.push(
        row![
            button("Start Again")
                .on_press_maybe(reset_enabled.then_some(UploadMessage::ResetPressed))
                .padding([10, 20]),
            button("Create CSV")
                .on_press_maybe(workflow.can_submit().then_some(UploadMessage::SubmitPressed))
                .padding([10, 20]),
        ]
        .spacing(20),
    );

    if phase == UploadPhase::Loading {
        content = content.push(text("loading...").size(14));
    }

    if phase != UploadPhase::Finish {
        content = content.push(
            text(format!("Total html files: {}", workflow.files().len())).size(16),
        );
    }

    for file in workflow.files() {
        content = content.push(text(file.display_name.as_str()).size(14));
    }

    if workflow.download_link().is_some() {
        content = content.push(
            button("Click here to download output")
                .on_press(UploadMessage::OpenDownloadPressed)
                .padding([10, 20]),
        );
    }

    content.into()
}
