//! Replay buffer interface for reinforcement learning.
//!
//! This module defines the interfaces for experience replay buffers. A training
//! loop pushes one transition per environment step through
//! [`ExperienceBufferBase`] and draws one batch per optimization step through
//! [`ReplayBufferBase`].

use crate::error::RlkitError;

/// Interface for buffers that store experiences from environments.
///
/// # Examples
///
/// ```ignore
/// struct SimpleBuffer<T> {
///     items: Vec<T>,
/// }
///
/// impl<T> ExperienceBufferBase for SimpleBuffer<T> {
///     type Item = T;
///
///     fn push(&mut self, tr: T) -> Result<(), RlkitError> {
///         self.items.push(tr);
///         Ok(())
///     }
///
///     fn len(&self) -> usize {
///         self.items.len()
///     }
/// }
/// ```
pub trait ExperienceBufferBase {
    /// The type of items stored in the buffer.
    type Item;

    /// Pushes a new experience into the buffer.
    ///
    /// Nothing is written when an error is returned.
    fn push(&mut self, tr: Self::Item) -> Result<(), RlkitError>;

    /// Returns the current number of experiences in the buffer.
    fn len(&self) -> usize;

    /// Returns `true` if the buffer holds no experience.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Interface for replay buffers that generate batches for training.
///
/// This trait is independent of [`ExperienceBufferBase`] and focuses solely
/// on building the buffer and generating batches.
pub trait ReplayBufferBase: Sized {
    /// Configuration parameters for the replay buffer.
    type Config: Clone;

    /// The type of batch generated for training.
    type Batch;

    /// Builds a new replay buffer from the given configuration.
    fn build(config: &Self::Config) -> Result<Self, RlkitError>;

    /// Samples `size` experiences and returns them as a batch.
    ///
    /// Takes `&mut self` because sampling advances the random number generator
    /// of the buffer.
    fn batch(&mut self, size: usize) -> Result<Self::Batch, RlkitError>;
}
