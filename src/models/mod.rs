// Data models and payload validation

pub mod member;
pub mod validation;
pub mod workout_session;

pub use member::*;
pub use validation::*;
pub use workout_session::*;
