//! Engine boundary error type.
//!
//! `EngineError` is what embedders of the engine see; `DomainError` values
//! raised inside stores and services are mapped onto it with stable
//! machine-readable codes.

use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::errors::error_code::ErrorCode;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Store error: {detail}")]
    Store { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl EngineError {
    /// Machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::Validation { code, .. } => *code,
            EngineError::NotFound { code, .. } => *code,
            EngineError::Store { code, .. } => *code,
            EngineError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Human-readable detail for this error.
    pub fn detail(&self) -> &str {
        match self {
            EngineError::Validation { detail, .. } => detail,
            EngineError::NotFound { detail, .. } => detail,
            EngineError::Store { detail, .. } => detail,
            EngineError::Config { detail } => detail,
        }
    }

    pub fn validation(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for EngineError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::BothSidesDefaulted => ErrorCode::BothSidesDefaulted,
                    ValidationKind::InvalidWindow => ErrorCode::InvalidWindow,
                    ValidationKind::WindowTooLarge => ErrorCode::WindowTooLarge,
                    ValidationKind::EmptyTeamName => ErrorCode::EmptyTeamName,
                    _ => ErrorCode::ValidationError,
                };
                EngineError::Validation { code, detail }
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Team => ErrorCode::TeamNotFound,
                    NotFoundKind::Fixture => ErrorCode::FixtureNotFound,
                    _ => ErrorCode::NotFound,
                };
                EngineError::NotFound { code, detail }
            }
            DomainError::Infra(kind, detail) => {
                let code = match kind {
                    InfraErrorKind::Timeout => ErrorCode::StoreTimeout,
                    InfraErrorKind::StoreUnavailable => ErrorCode::StoreUnavailable,
                    InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                    _ => ErrorCode::StoreError,
                };
                EngineError::Store { code, detail }
            }
        }
    }
}
