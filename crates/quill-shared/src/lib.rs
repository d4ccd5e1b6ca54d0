//! # Quill Shared
//!
//! Types shared between the HTTP surface and any future clients:
//! request/response DTOs, form validation, and error payloads.

pub mod dto;
pub mod forms;
pub mod response;

pub use response::{ErrorResponse, FieldError};
