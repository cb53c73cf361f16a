use derive_more::Display;

/// Crate-wide error. Kept flat: every failure the dashboard can hit is
/// local and only ever logged.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Storage Error: {}", _0)]
    Storage(String),
    #[display(fmt = "Serialization Error: {}", _0)]
    Serialization(String),
    #[display(fmt = "Feed Error: {}", _0)]
    Feed(String),
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(String),
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(String),
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
