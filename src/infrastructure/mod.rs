// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Contains implementation details that support the domain
// but are not part of the domain itself.
//
// RULES:
// - Infrastructure serves the domain
// - Infrastructure never dictates domain behavior
// - Infrastructure is replaceable

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

#[cfg(test)]
pub use clock::MockClock;
