mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::client;
pub use interfaces::{handlers, repositories, routes};

use repositories::file_store::FileResumeRepo;
use settings::AppConfig;

/// Shared handler state: the file-backed resume repository rooted at
/// the configured data directory.
pub struct AppState {
    pub resume_repo: FileResumeRepo,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        AppState {
            resume_repo: FileResumeRepo::new(&config.data_dir),
        }
    }
}
