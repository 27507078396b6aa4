mod api;
mod app;
mod application;
mod domain;
mod ui;
mod utils;

use api::ApiConfig;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,simple_csv_uploader=debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ApiConfig::from_env();
    tracing::info!("upload endpoint base: {}", config.base_url);

    iced::application(
        move || app::UploadApp::new(config.clone()),
        app::update,
        app::view,
    )
    .title("Simple CSV Uploader")
    .run()
}
