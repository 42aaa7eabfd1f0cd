//! Signal sources for the poller

pub mod button;
pub mod fixed;

pub use button::ButtonInput;
pub use fixed::FixedInput;
