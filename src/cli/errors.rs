use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No destination paths were given; pass --output at least once")]
    NoDestinations,
}
