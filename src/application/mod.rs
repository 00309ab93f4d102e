// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the domain, repositories and services
// - It provides the boundary between a UI and the catalog
// - It owns the lock that serializes access to the catalog
// - It translates between DTOs and domain entities

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
