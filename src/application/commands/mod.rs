// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between a UI boundary and the catalog
// - Commands accept DTOs, return DTOs
// - Commands convert errors into serialized ErrorResponse strings
// - Commands NEVER contain business logic

pub mod book_commands;
pub mod statistics_commands;

pub use book_commands::*;
pub use statistics_commands::*;
