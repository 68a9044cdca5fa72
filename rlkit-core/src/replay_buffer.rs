//! Fixed-capacity circular replay buffer.
//!
//! [`ReplayBuffer`] keeps observations, actions, rewards, next observations
//! and done flags in five parallel containers. Once the capacity is reached,
//! new transitions overwrite the oldest ones. Batches are drawn uniformly at
//! random with replacement.
//!
//! # Examples
//!
//! ```rust
//! use rlkit_core::replay_buffer::{ReplayBuffer, ReplayBufferConfig};
//! use rlkit_core::ReplayBufferBase;
//!
//! let config = ReplayBufferConfig::default()
//!     .obs_dim(2)
//!     .act_dim(1)
//!     .capacity(100)
//!     .seed(42);
//! let mut buffer = ReplayBuffer::build(&config).unwrap();
//!
//! buffer.put(&[0.0, 1.0], &[1.0], 0.5, &[1.0, 1.0], false).unwrap();
//! let batch = buffer.sample_batch(8).unwrap();
//! assert_eq!(batch.len(), 8);
//! ```
mod base;
mod batch;
mod config;
pub use base::ReplayBuffer;
pub use batch::{Transition, TransitionBatch, TransitionRef};
pub use config::ReplayBufferConfig;
