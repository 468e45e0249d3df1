use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Settings error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must not contain commas or line breaks: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("Invalid salary amount: {0}")]
    InvalidSalary(String),

    #[error("Salary must be positive")]
    NonPositiveSalary,

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Month must be between 1 and 12, got {0}")]
    MonthOutOfRange(i64),

    #[error("Employee ID already exists: {0}")]
    DuplicateEmployee(String),

    #[error("Employee not found: {0}")]
    UnknownEmployee(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PayrollError>;
