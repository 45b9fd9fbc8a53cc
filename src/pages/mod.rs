//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns route-scoped orchestration (initial fetch, refresh
//! wiring) and delegates rendering details to `components`.

pub mod home;
