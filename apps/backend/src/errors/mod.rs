//! Error handling for the Shapeshift backend.

pub mod error_code;

pub use error_code::ErrorCode;
