use std::fmt;

/// Message shown to the user when the submitted text is not a usable URL
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalShortError {
    Validation(String),
    Storage(String),
    Serialization(String),
    DateParse(String),
    IdExhausted(String),
    Config(String),
}

impl LocalShortError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LocalShortError::Validation(_) => "E001",
            LocalShortError::Storage(_) => "E002",
            LocalShortError::Serialization(_) => "E003",
            LocalShortError::DateParse(_) => "E004",
            LocalShortError::IdExhausted(_) => "E005",
            LocalShortError::Config(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LocalShortError::Validation(_) => "Validation Error",
            LocalShortError::Storage(_) => "Storage Error",
            LocalShortError::Serialization(_) => "Serialization Error",
            LocalShortError::DateParse(_) => "Date Parse Error",
            LocalShortError::IdExhausted(_) => "Short Id Exhausted",
            LocalShortError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LocalShortError::Validation(msg)
            | LocalShortError::Storage(msg)
            | LocalShortError::Serialization(msg)
            | LocalShortError::DateParse(msg)
            | LocalShortError::IdExhausted(msg)
            | LocalShortError::Config(msg) => msg,
        }
    }

    /// Whether the error is meant to be shown to the user as-is
    pub fn is_user_facing(&self) -> bool {
        matches!(self, LocalShortError::Validation(_))
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LocalShortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LocalShortError {}

// 便捷的构造函数
impl LocalShortError {
    pub fn invalid_url() -> Self {
        LocalShortError::Validation(INVALID_URL_MESSAGE.to_string())
    }

    pub fn storage<T: Into<String>>(msg: T) -> Self {
        LocalShortError::Storage(msg.into())
    }

    pub fn id_exhausted<T: Into<String>>(msg: T) -> Self {
        LocalShortError::IdExhausted(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LocalShortError::Config(msg.into())
    }
}

impl From<std::io::Error> for LocalShortError {
    fn from(err: std::io::Error) -> Self {
        LocalShortError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LocalShortError {
    fn from(err: serde_json::Error) -> Self {
        LocalShortError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for LocalShortError {
    fn from(err: chrono::ParseError) -> Self {
        LocalShortError::DateParse(err.to_string())
    }
}

impl From<url::ParseError> for LocalShortError {
    fn from(_: url::ParseError) -> Self {
        LocalShortError::invalid_url()
    }
}

pub type Result<T> = std::result::Result<T, LocalShortError>;
