use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Feed request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Feed returned status {status} for {url}")]
    FeedStatusError { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown canteen '{key}' (known: {known})")]
    UnknownCanteenError { key: String, known: String },

    #[error("Unknown day selector '{value}'")]
    InvalidDayError { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl MenuError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MenuError::HttpError(_) | MenuError::FeedStatusError { .. } => ErrorCategory::Network,
            MenuError::IoError(_) => ErrorCategory::Io,
            MenuError::ConfigValidationError { .. }
            | MenuError::InvalidConfigValueError { .. }
            | MenuError::UnknownCanteenError { .. }
            | MenuError::InvalidDayError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MenuError::HttpError(_) => "Check your network connection and try again",
            MenuError::FeedStatusError { .. } => {
                "The menu for this week may not be published yet; try another week"
            }
            MenuError::IoError(_) => "Check that stdout and the config file are accessible",
            MenuError::ConfigValidationError { .. }
            | MenuError::InvalidConfigValueError { .. } => "Fix the configuration file and retry",
            MenuError::UnknownCanteenError { .. } => {
                "Use one of the configured canteen keys"
            }
            MenuError::InvalidDayError { .. } => {
                "Use mon..sun, today, tomorrow, curweek or nextweek"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MenuError::HttpError(_) | MenuError::FeedStatusError { .. } => {
                format!("Could not fetch the menu: {}", self)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
