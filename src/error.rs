use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("Login başarısız: {0}")]
    LoginFailed(String),

    #[error("Form validasyon hatası: {0}")]
    FormValidation(String),

    #[error("Zaman aşımı: {0}")]
    Timeout(String),

    #[error("Parse hatası: {0}")]
    ParseError(String),

    #[error("Doğrulama hatası: {0}")]
    Verification(String),

    #[error("WebDriver hatası: {0}")]
    WebDriverError(String),

    #[error("Dosya hatası: {0}")]
    IoError(String),

    #[error("Konfigürasyon hatası: {0}")]
    ConfigError(String),
}

impl From<fantoccini::error::CmdError> for SuiteError {
    fn from(err: fantoccini::error::CmdError) -> Self {
        SuiteError::WebDriverError(err.to_string())
    }
}

impl From<fantoccini::error::NewSessionError> for SuiteError {
    fn from(err: fantoccini::error::NewSessionError) -> Self {
        SuiteError::WebDriverError(err.to_string())
    }
}

impl From<serde_json::Error> for SuiteError {
    fn from(err: serde_json::Error) -> Self {
        SuiteError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for SuiteError {
    fn from(err: std::io::Error) -> Self {
        SuiteError::IoError(err.to_string())
    }
}

impl From<chrono::ParseError> for SuiteError {
    fn from(err: chrono::ParseError) -> Self {
        SuiteError::ParseError(err.to_string())
    }
}
