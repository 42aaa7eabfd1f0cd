//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod poller;
pub mod refresh;

pub use poller::{poller_task, SignPoller};
pub use refresh::{refresh_task, SignPanel};
