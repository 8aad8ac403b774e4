use thiserror::Error;

/// Faults that stop the application before or while the window starts.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Embedded seed data is invalid: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("Native window failed: {0}")]
    Window(#[from] eframe::Error),
}
