//! Reusable UI components for the dashboard views.

pub mod progress_bar;
pub mod sparkline;
pub mod status_chip;

pub use progress_bar::ProgressBar;
pub use sparkline::Sparkline;
pub use status_chip::{ChipTone, StatusChip};
