//! Ring-buffer storage of transitions.
use super::{ReplayBufferConfig, Transition, TransitionBatch, TransitionRef};
use crate::{error::RlkitError, ExperienceBufferBase, ReplayBufferBase};
use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A fixed-capacity replay buffer of transitions with vector observations
/// and actions.
///
/// Transitions are written at the cursor `ptr`, which wraps around at the
/// capacity, so the buffer always retains the most recent `capacity`
/// transitions. Batches are sampled uniformly with replacement from the
/// stored transitions only.
pub struct ReplayBuffer {
    /// Maximum number of transitions that can be stored.
    capacity: usize,

    /// Current insertion index.
    ptr: usize,

    /// Current number of stored transitions.
    size: usize,

    obs_dim: usize,

    act_dim: usize,

    /// Storage for observations, `capacity * obs_dim` values.
    obs: Vec<f32>,

    /// Storage for actions, `capacity * act_dim` values.
    act: Vec<f32>,

    /// Storage for next observations, `capacity * obs_dim` values.
    next_obs: Vec<f32>,

    /// Storage for rewards.
    reward: Vec<f32>,

    /// Storage for done flags.
    done: Vec<i8>,

    /// Random number generator for sampling.
    rng: StdRng,
}

#[inline]
fn check_dim(field: &'static str, expected: usize, v: &[f32]) -> Result<(), RlkitError> {
    if v.len() == expected {
        Ok(())
    } else {
        Err(RlkitError::ShapeMismatch {
            field,
            expected,
            actual: v.len(),
        })
    }
}

impl ReplayBuffer {
    /// Creates a zero-filled buffer with a fixed sampling seed.
    ///
    /// Use [`ReplayBufferBase::build`] to choose the seed.
    pub fn new(obs_dim: usize, act_dim: usize, capacity: usize) -> Result<Self, RlkitError> {
        let config = ReplayBufferConfig::default()
            .obs_dim(obs_dim)
            .act_dim(act_dim)
            .capacity(capacity);
        Self::build(&config)
    }

    /// Puts a transition at the cursor, overwriting the oldest one if the
    /// buffer is full.
    ///
    /// # Errors
    ///
    /// Returns [`RlkitError::ShapeMismatch`] if `obs`, `act` or `next_obs`
    /// do not match the dimensions of the buffer. Nothing is written in that
    /// case.
    pub fn put(
        &mut self,
        obs: &[f32],
        act: &[f32],
        reward: f32,
        next_obs: &[f32],
        done: bool,
    ) -> Result<(), RlkitError> {
        check_dim("obs", self.obs_dim, obs)?;
        check_dim("act", self.act_dim, act)?;
        check_dim("next_obs", self.obs_dim, next_obs)?;

        let (i, o, a) = (self.ptr, self.obs_dim, self.act_dim);
        self.obs[i * o..(i + 1) * o].copy_from_slice(obs);
        self.act[i * a..(i + 1) * a].copy_from_slice(act);
        self.next_obs[i * o..(i + 1) * o].copy_from_slice(next_obs);
        self.reward[i] = reward;
        self.done[i] = done as i8;

        self.ptr = (self.ptr + 1) % self.capacity;
        if self.size < self.capacity {
            self.size += 1;
            if self.size == self.capacity {
                debug!(
                    "Replay buffer is full ({} transitions), overwriting from now on",
                    self.capacity
                );
            }
        }

        Ok(())
    }

    /// Samples `batch_size` transitions uniformly at random with replacement.
    ///
    /// The same slot may appear more than once in a batch. Rows of the batch
    /// follow the order in which the indices were drawn.
    ///
    /// # Errors
    ///
    /// Returns [`RlkitError::EmptyBuffer`] if no transition has been put yet.
    pub fn sample_batch(&mut self, batch_size: usize) -> Result<TransitionBatch, RlkitError> {
        if self.size == 0 {
            return Err(RlkitError::EmptyBuffer);
        }

        let size = self.size;
        let ixs = (0..batch_size)
            .map(|_| self.rng.gen_range(0..size))
            .collect::<Vec<_>>();
        trace!("Sampled indices {:?}", ixs);

        let mut batch = TransitionBatch::with_capacity(batch_size, self.obs_dim, self.act_dim);
        for ix in ixs {
            batch.push_slot(ix, self.slot(ix));
        }

        Ok(batch)
    }

    /// Returns the transition stored at slot `ix`, or `None` if the slot has
    /// not been written yet.
    ///
    /// Slots are storage positions, not insertion order: once the buffer has
    /// wrapped around, slot `ptr()` holds the oldest transition.
    pub fn get(&self, ix: usize) -> Option<TransitionRef<'_>> {
        if ix < self.size {
            Some(self.slot(ix))
        } else {
            None
        }
    }

    #[inline]
    fn slot(&self, i: usize) -> TransitionRef<'_> {
        let (o, a) = (self.obs_dim, self.act_dim);
        TransitionRef {
            obs: &self.obs[i * o..(i + 1) * o],
            act: &self.act[i * a..(i + 1) * a],
            reward: self.reward[i],
            next_obs: &self.next_obs[i * o..(i + 1) * o],
            done: self.done[i],
        }
    }

    /// Maximum number of transitions the buffer holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slot the next transition will be written to.
    pub fn ptr(&self) -> usize {
        self.ptr
    }

    /// Dimension of observations.
    pub fn obs_dim(&self) -> usize {
        self.obs_dim
    }

    /// Dimension of actions.
    pub fn act_dim(&self) -> usize {
        self.act_dim
    }

    /// Raw reward storage, including slots not written yet.
    pub fn rewards(&self) -> &[f32] {
        &self.reward
    }

    /// Raw done-flag storage, including slots not written yet.
    pub fn dones(&self) -> &[i8] {
        &self.done
    }

    /// Returns the number of done flags among stored transitions.
    pub fn num_done_flags(&self) -> usize {
        self.done[..self.size].iter().map(|d| *d as usize).sum()
    }

    /// Returns the sum of rewards of stored transitions.
    pub fn sum_rewards(&self) -> f32 {
        self.reward[..self.size].iter().sum()
    }
}

impl ExperienceBufferBase for ReplayBuffer {
    type Item = Transition;

    fn len(&self) -> usize {
        self.size
    }

    fn push(&mut self, tr: Self::Item) -> Result<(), RlkitError> {
        self.put(&tr.obs, &tr.act, tr.reward, &tr.next_obs, tr.done)
    }
}

impl ReplayBufferBase for ReplayBuffer {
    type Config = ReplayBufferConfig;
    type Batch = TransitionBatch;

    fn build(config: &Self::Config) -> Result<Self, RlkitError> {
        let capacity = config.capacity;
        if capacity == 0 {
            return Err(RlkitError::ZeroCapacity);
        }

        Ok(Self {
            capacity,
            ptr: 0,
            size: 0,
            obs_dim: config.obs_dim,
            act_dim: config.act_dim,
            obs: vec![0.; capacity * config.obs_dim],
            act: vec![0.; capacity * config.act_dim],
            next_obs: vec![0.; capacity * config.obs_dim],
            reward: vec![0.; capacity],
            done: vec![0; capacity],
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    fn batch(&mut self, size: usize) -> Result<Self::Batch, RlkitError> {
        self.sample_batch(size)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn scalar_buffer(capacity: usize) -> ReplayBuffer {
        ReplayBuffer::new(1, 1, capacity).unwrap()
    }

    fn put_reward(buffer: &mut ReplayBuffer, r: f32) {
        buffer.put(&[r], &[r], r, &[r + 1.0], false).unwrap();
    }

    #[test]
    fn test_new_is_empty() {
        let buffer = ReplayBuffer::new(3, 2, 10).unwrap();
        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.ptr(), 0);
        assert_eq!(buffer.capacity(), 10);
        assert!(buffer.rewards().iter().all(|r| *r == 0.0));
        assert!(buffer.get(0).is_none());
    }

    #[test]
    fn test_zero_capacity() {
        assert_eq!(
            ReplayBuffer::new(1, 1, 0).err(),
            Some(RlkitError::ZeroCapacity)
        );
    }

    #[test]
    fn test_put_below_capacity() {
        let mut buffer = scalar_buffer(5);
        for r in 0..4 {
            put_reward(&mut buffer, r as f32);
        }
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.ptr(), 4);
        for ix in 0..4 {
            let tr = buffer.get(ix).unwrap();
            assert_eq!(tr.obs, &[ix as f32]);
            assert_eq!(tr.reward, ix as f32);
            assert_eq!(tr.next_obs, &[ix as f32 + 1.0]);
        }
        assert!(buffer.get(4).is_none());
    }

    #[test]
    fn test_wraparound_overwrites_oldest() {
        let mut buffer = scalar_buffer(3);
        for r in [1.0, 2.0, 3.0, 4.0] {
            put_reward(&mut buffer, r);
        }
        assert_eq!(buffer.rewards(), &[4.0, 2.0, 3.0]);
        assert_eq!(buffer.ptr(), 1);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_retains_most_recent() {
        let mut buffer = scalar_buffer(4);
        for r in 0..11 {
            put_reward(&mut buffer, r as f32);
        }
        assert_eq!(buffer.len(), 4);
        let mut kept = buffer.rewards().to_vec();
        kept.sort_by(|x, y| x.total_cmp(y));
        assert_eq!(kept, vec![7.0, 8.0, 9.0, 10.0]);
    }

    #[test]
    fn test_shape_mismatch_writes_nothing() {
        let mut buffer = ReplayBuffer::new(2, 1, 3).unwrap();
        let err = buffer
            .put(&[1.0, 2.0], &[0.0], 1.0, &[1.0], true)
            .unwrap_err();
        assert_eq!(
            err,
            RlkitError::ShapeMismatch {
                field: "next_obs",
                expected: 2,
                actual: 1
            }
        );
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.ptr(), 0);
        assert!(buffer.dones().iter().all(|d| *d == 0));
    }

    #[test]
    fn test_sample_empty_buffer() {
        let mut buffer = scalar_buffer(3);
        assert_eq!(buffer.sample_batch(4).err(), Some(RlkitError::EmptyBuffer));
    }

    #[test]
    fn test_sample_only_stored_slots() {
        let mut buffer = scalar_buffer(100);
        for r in 1..=5 {
            put_reward(&mut buffer, r as f32);
        }
        let batch = buffer.sample_batch(256).unwrap();
        assert_eq!(batch.len(), 256);
        assert!(batch.ix_sample.iter().all(|ix| *ix < 5));
        // Unwritten slots hold zero rewards.
        assert!(batch.reward.iter().all(|r| *r >= 1.0 && *r <= 5.0));
    }

    #[test]
    fn test_sample_rows_follow_indices() {
        let mut buffer = ReplayBuffer::new(2, 1, 8).unwrap();
        for i in 0..8 {
            let x = i as f32;
            buffer
                .put(&[x, -x], &[x * 10.0], x, &[x + 0.5, -x], i % 2 == 0)
                .unwrap();
        }
        let batch = buffer.sample_batch(32).unwrap();
        for (row, ix) in batch.ix_sample.iter().enumerate() {
            let tr = batch.get(row).unwrap();
            assert_eq!(tr, buffer.get(*ix).unwrap());
        }
    }

    #[test]
    fn test_sample_with_replacement() {
        let mut buffer = scalar_buffer(2);
        put_reward(&mut buffer, 1.0);
        put_reward(&mut buffer, 2.0);
        // More draws than stored transitions forces duplicates.
        let batch = buffer.sample_batch(10).unwrap();
        assert_eq!(batch.len(), 10);
    }

    #[test]
    fn test_same_seed_same_batches() {
        let config = ReplayBufferConfig::default().capacity(16).seed(3);
        let mut b1 = ReplayBuffer::build(&config).unwrap();
        let mut b2 = ReplayBuffer::build(&config).unwrap();
        for r in 0..16 {
            put_reward(&mut b1, r as f32);
            put_reward(&mut b2, r as f32);
        }
        assert_eq!(b1.batch(8).unwrap(), b2.batch(8).unwrap());
    }

    #[test]
    fn test_statistics() {
        let mut buffer = scalar_buffer(3);
        for (r, done) in [(1.0, false), (2.0, true), (3.0, true), (4.0, false)] {
            buffer.put(&[0.0], &[0.0], r, &[0.0], done).unwrap();
        }
        assert_eq!(buffer.sum_rewards(), 9.0);
        assert_eq!(buffer.num_done_flags(), 2);
    }

    #[test]
    fn test_push_transition() {
        let mut buffer = ReplayBuffer::new(2, 1, 2).unwrap();
        let tr = Transition::new(vec![1.0, 2.0], vec![0.0], -1.0, vec![2.0, 3.0], true);
        buffer.push(tr.clone()).unwrap();
        assert_eq!(buffer.get(0).unwrap().to_transition(), tr);
    }
}
