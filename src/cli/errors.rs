use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] clap::Error),

    #[error(transparent)]
    Launch(#[from] blant_epp::Error),
}
