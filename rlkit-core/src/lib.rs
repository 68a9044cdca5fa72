#![warn(missing_docs)]
//! Small building blocks for off-policy reinforcement learning loops.
//!
//! * [`replay_buffer::ReplayBuffer`] - A fixed-capacity circular buffer of
//!   transitions with uniform sampling.
//! * [`logger::MetricsLogger`] - Named logs reduced into periodic summaries.
//! * [`nn::construct_nn`] - Description of a feed-forward network.
pub mod error;
pub mod logger;
pub mod nn;
pub mod replay_buffer;

mod base;
pub use base::{ExperienceBufferBase, ReplayBufferBase};
pub use error::RlkitError;
