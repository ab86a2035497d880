//! View-model support: the small, screen-independent pieces of per-screen
//! orchestration.
//!
//! Screens own their own observable state; these utilities enforce the
//! three loading disciplines every screen shares: forward-only pagination
//! with a re-entrancy guard, debounced search where superseded keystrokes
//! are cancelled rather than ignored, and stale-guarded refreshes that
//! never clobber displayed data with an error state.

pub mod debounce;
pub mod pager;
pub mod refresh;
pub mod supplementary;

pub use debounce::Debouncer;
pub use pager::Pager;
pub use refresh::StaleGuard;
pub use supplementary::load_supplementary;
