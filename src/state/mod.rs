//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`spots`, `draft`, `ui`) so individual
//! components can depend on small focused models.

pub mod draft;
pub mod spots;
pub mod ui;
