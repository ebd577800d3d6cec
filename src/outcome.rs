use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

/// What an operation tells the user. Rendered once as a flash message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub level: Level,
    pub message: String,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == Level::Success
    }

    pub fn log(self) -> Self {
        match self.level {
            Level::Success => info!("{}", self.message),
            Level::Warning => warn!("{}", self.message),
            Level::Error => error!("{}", self.message),
        }
        self
    }
}

#[derive(Debug, Error)]
pub enum OpError {
    #[error("{0}")]
    ReferentialIntegrity(Cow<'static, str>),
    #[error("{0}")]
    Duplicate(Cow<'static, str>),
    #[error("{0}")]
    NotFound(Cow<'static, str>),
    #[error("{0}")]
    Validation(Cow<'static, str>),
    #[error("Failed to {what}. Error: {source}")]
    Persistence {
        what: Cow<'static, str>,
        source: sqlx::Error,
    },
}

pub type OpResult = Result<Outcome, OpError>;

impl OpError {
    pub fn not_found(s: impl Into<Cow<'static, str>>) -> Self {
        OpError::NotFound(s.into())
    }

    pub fn validation(s: impl Into<Cow<'static, str>>) -> Self {
        OpError::Validation(s.into())
    }

    pub fn duplicate(s: impl Into<Cow<'static, str>>) -> Self {
        OpError::Duplicate(s.into())
    }

    /// Classifies a database error raised while doing `what` ("add", "update", ...).
    pub fn from_db(what: &'static str, err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                OpError::ReferentialIntegrity(format!("Failed to {what}. Error: {db}").into())
            }
            _ => OpError::Persistence {
                what: what.into(),
                source: err,
            },
        }
    }

    pub fn level(&self) -> Level {
        match self {
            OpError::Duplicate(_) => Level::Warning,
            _ => Level::Error,
        }
    }
}

impl From<OpError> for Outcome {
    fn from(err: OpError) -> Self {
        Outcome {
            level: err.level(),
            message: err.to_string(),
        }
    }
}

/// Collapses an operation's result into the message shown to the user, logging it on the way.
pub fn settle(result: OpResult) -> Outcome {
    result.unwrap_or_else(Outcome::from).log()
}
