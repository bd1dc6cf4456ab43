// API routes and handlers

pub mod errors;
pub mod health;
pub mod members;
pub mod routes;
pub mod workout_sessions;
