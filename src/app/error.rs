use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Cell ({row}, {col}) is out of range")]
    Index { row: usize, col: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Format("row 3 has 2 fields, expected 4".to_string());
        assert_eq!(err.to_string(), "Format error: row 3 has 2 fields, expected 4");

        let err = AppError::Index { row: 9, col: 1 };
        assert_eq!(err.to_string(), "Cell (9, 1) is out of range");
    }
}
