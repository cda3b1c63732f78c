//! Local UI chrome state (theme, mobile navigation).
//!
//! Keeps transient presentation concerns out of the auth/session state so
//! rendering controls can evolve independently of identity data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for dark mode and the small-screen navigation drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_nav_open: bool,
}

impl UiState {
    /// Initial state with the persisted theme preference applied.
    #[must_use]
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self { dark_mode, mobile_nav_open: false }
    }
}
