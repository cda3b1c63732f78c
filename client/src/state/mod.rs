//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `ui`) so individual components can
//! depend on small focused models. Each lives in an `RwSignal` provided via
//! context at the application root; tests construct fresh instances instead
//! of touching a global.

pub mod auth;
pub mod ui;
