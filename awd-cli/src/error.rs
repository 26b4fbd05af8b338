use awd_types::AwdError;
use thiserror::Error;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Ошибка чтения AWD
    #[error("AWD error: {0}")]
    Awd(#[from] AwdError),

    /// Ошибка сериализации сводки
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
