//! Error taxonomy: domain-internal errors and boundary error codes.

pub mod domain;
pub mod error_code;

pub use domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
pub use error_code::ErrorCode;
