pub mod error;
pub mod model;
pub mod workflow;

pub use error::AppError;
pub use model::{SelectedFile, UploadPhase};
pub use workflow::UploadWorkflow;
