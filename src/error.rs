use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("ticket '{0}' not found")]
    TicketNotFound(String),

    #[error("user '{0}' not found")]
    UserNotFound(String),

    #[error("article '{0}' not found")]
    ArticleNotFound(String),

    #[error("ambiguous ID '{0}' matches multiple records")]
    AmbiguousId(String),

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid priority '{0}'")]
    InvalidPriority(String),

    #[error("invalid category '{0}'")]
    InvalidCategory(String),

    #[error("invalid department '{0}'")]
    InvalidDepartment(String),

    #[error("invalid role '{0}'")]
    InvalidRole(String),

    #[error("invalid bulk action '{0}'")]
    InvalidAction(String),

    #[error("no records selected for bulk action")]
    EmptySelection,

    #[error("saved filter '{0}' not found")]
    FilterNotFound(String),

    #[error("saved filter name cannot be empty")]
    EmptyFilterName,

    #[error("not logged in")]
    NotLoggedIn,

    #[error("request timed out after {0} attempt(s)")]
    Timeout(u32),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DeskError>;
