use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Export,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScrapeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScrapeError::HttpError(_) | ScrapeError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            ScrapeError::IoError(_) => ErrorCategory::Io,
            ScrapeError::XlsxError(_) => ErrorCategory::Export,
            ScrapeError::ConfigValidationError { .. }
            | ScrapeError::InvalidConfigValueError { .. }
            | ScrapeError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Network failures during scraping are absorbed into placeholder
            // rows; one surfacing here means even that path broke.
            ScrapeError::HttpError(_) | ScrapeError::HttpStatusError { .. } => {
                ErrorSeverity::Medium
            }
            ScrapeError::IoError(_) | ScrapeError::XlsxError(_) => ErrorSeverity::High,
            ScrapeError::ConfigValidationError { .. }
            | ScrapeError::InvalidConfigValueError { .. }
            | ScrapeError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScrapeError::HttpError(e) => format!("A network request failed: {}", e),
            ScrapeError::HttpStatusError { url, status } => {
                format!("{} answered with HTTP {}", url, status)
            }
            ScrapeError::IoError(e) => format!("Could not write the output file: {}", e),
            ScrapeError::XlsxError(e) => format!("Could not build the workbook: {}", e),
            ScrapeError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            ScrapeError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid {}: {}", value, field, reason),
            ScrapeError::MissingConfigError { field } => {
                format!("Required configuration field '{}' is missing", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check connectivity and the catalog URLs, then rerun",
            ErrorCategory::Io => "Check the output directory exists and is writable",
            ErrorCategory::Export => "Check disk space and the output path, then rerun",
            ErrorCategory::Config => "Fix the flagged field in the CLI flags or seed file",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
