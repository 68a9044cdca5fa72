#![warn(missing_docs)]
//! Rlkit collects small utilities used by off-policy reinforcement learning loops.
//! All of them live in [rlkit-core](rlkit_core) and are re-exported here:
//!
//! * [`ReplayBuffer`](replay_buffer::ReplayBuffer) stores transitions in a
//!   fixed-capacity ring and samples batches uniformly with replacement.
//!   It is configured with [`ReplayBufferConfig`](replay_buffer::ReplayBufferConfig),
//!   which can be loaded from YAML.
//! * [`MetricsLogger`](logger::MetricsLogger) keeps named logs and reduces them
//!   with [`Reducer`](logger::Reducer)s into a [`Summary`](logger::Summary), either
//!   over values logged since the previous summary or over the whole log.
//! * [`construct_nn`](nn::construct_nn) describes a multilayer perceptron as a
//!   chain of [`Layer`](nn::Layer)s, independent of any tensor library.
//!
//! A training loop calls [`ReplayBuffer::put`](replay_buffer::ReplayBuffer::put)
//! once per environment step and
//! [`ReplayBuffer::sample_batch`](replay_buffer::ReplayBuffer::sample_batch) once per
//! optimization step, and feeds the logger on whatever cadence it likes:
//!
//! ```rust
//! use rlkit::{
//!     logger::{MetricsLogger, Reducer, SummaryQuery},
//!     replay_buffer::{ReplayBuffer, ReplayBufferConfig},
//!     ReplayBufferBase,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ReplayBufferConfig::default().obs_dim(1).act_dim(1).capacity(3);
//! let mut buffer = ReplayBuffer::build(&config)?;
//! let mut logger: MetricsLogger = MetricsLogger::new();
//! logger.add_attribute("reward", vec![Reducer::mean(), Reducer::max()])?;
//!
//! for r in [1.0, 2.0, 3.0, 4.0] {
//!     buffer.put(&[r], &[0.0], r, &[r + 1.0], false)?;
//!     logger.put("reward", r)?;
//! }
//! assert_eq!(buffer.rewards(), &[4.0, 2.0, 3.0]);
//!
//! let batch = buffer.sample_batch(2)?;
//! assert_eq!(batch.len(), 2);
//!
//! let summary = logger.summarize(&SummaryQuery::default())?;
//! assert_eq!(summary.to_string(), "reward_mean=2.5000; reward_max=4.0000");
//! # Ok(())
//! # }
//! ```
pub use rlkit_core::{
    error, logger, nn, replay_buffer, ExperienceBufferBase, ReplayBufferBase, RlkitError,
};
