// Database-facing services

pub mod member_service;
pub mod workout_session_service;

pub use member_service::*;
pub use workout_session_service::*;
