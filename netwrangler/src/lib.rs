//! NetWrangler - 5G network operations dashboard.
//!
//! This library exposes the core components for testing.

pub mod app;
pub mod args;
pub mod message;
pub mod mock;
pub mod poller;
pub mod scheduler;
pub mod subscription;
pub mod view;

// Re-export commonly used types
pub use app::NetWrangler;
pub use args::Args;
pub use message::{Message, Page};
pub use poller::Poller;
pub use scheduler::{ManualClock, Scheduler, TimerHandle, TokioScheduler};
