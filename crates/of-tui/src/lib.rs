//! Terminal UI for Otameshi Fighters: Office.
//!
//! A ratatui frontend over [`of_core::Session`]. The engine stays
//! synchronous; all pacing between turns and the ojisan's mood animation
//! are driven by the [`pacing::Scheduler`] owned by [`app::GameApp`].

pub mod app;
pub mod launch;
pub mod logging;
pub mod mood;
pub mod pacing;
pub mod shared;
pub mod terminal;
pub mod view;
