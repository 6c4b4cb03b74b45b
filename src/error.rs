/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Failed to load catalog for {genre}: {reason}")]
    CatalogLoad { genre: String, reason: String },

    #[error("No numeric feature columns in the {0} catalog")]
    EmptyFeatureSet(String),

    #[error("Decomposition error: {0}")]
    Decomposition(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
