//! Transitions and batches of transitions.

/// A single transition, owned.
///
/// This is the item pushed through
/// [`ExperienceBufferBase::push`](crate::ExperienceBufferBase::push).
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Observation.
    pub obs: Vec<f32>,

    /// Action taken upon `obs`.
    pub act: Vec<f32>,

    /// Reward received after taking the action.
    pub reward: f32,

    /// Observation after taking the action.
    pub next_obs: Vec<f32>,

    /// Whether the action was terminal.
    pub done: bool,
}

impl Transition {
    /// Creates a transition.
    pub fn new(obs: Vec<f32>, act: Vec<f32>, reward: f32, next_obs: Vec<f32>, done: bool) -> Self {
        Self {
            obs,
            act,
            reward,
            next_obs,
            done,
        }
    }
}

/// A transition borrowed from a slot of the replay buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRef<'a> {
    /// Observation.
    pub obs: &'a [f32],

    /// Action.
    pub act: &'a [f32],

    /// Reward.
    pub reward: f32,

    /// Next observation.
    pub next_obs: &'a [f32],

    /// Done flag, 0 or 1.
    pub done: i8,
}

impl TransitionRef<'_> {
    /// Copies the borrowed slot into an owned [`Transition`].
    pub fn to_transition(&self) -> Transition {
        Transition {
            obs: self.obs.to_vec(),
            act: self.act.to_vec(),
            reward: self.reward,
            next_obs: self.next_obs.to_vec(),
            done: self.done == 1,
        }
    }
}

/// A batch of transitions sampled from [`ReplayBuffer`](super::ReplayBuffer).
///
/// Vector-valued fields are flat and row-major: row `i` of `obs` is
/// `obs[i * obs_dim..(i + 1) * obs_dim]`. Rows follow the order in which the
/// indices were drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionBatch {
    /// Observations.
    pub obs: Vec<f32>,

    /// Actions.
    pub act: Vec<f32>,

    /// Rewards.
    pub reward: Vec<f32>,

    /// Next observations.
    pub next_obs: Vec<f32>,

    /// Done flags.
    pub done: Vec<i8>,

    /// Slot indices the rows were gathered from.
    pub ix_sample: Vec<usize>,

    obs_dim: usize,
    act_dim: usize,
}

impl TransitionBatch {
    pub(super) fn with_capacity(capacity: usize, obs_dim: usize, act_dim: usize) -> Self {
        Self {
            obs: Vec::with_capacity(capacity * obs_dim),
            act: Vec::with_capacity(capacity * act_dim),
            reward: Vec::with_capacity(capacity),
            next_obs: Vec::with_capacity(capacity * obs_dim),
            done: Vec::with_capacity(capacity),
            ix_sample: Vec::with_capacity(capacity),
            obs_dim,
            act_dim,
        }
    }

    pub(super) fn push_slot(&mut self, ix: usize, tr: TransitionRef) {
        self.obs.extend_from_slice(tr.obs);
        self.act.extend_from_slice(tr.act);
        self.reward.push(tr.reward);
        self.next_obs.extend_from_slice(tr.next_obs);
        self.done.push(tr.done);
        self.ix_sample.push(ix);
    }

    /// Returns the number of transitions in the batch.
    pub fn len(&self) -> usize {
        self.reward.len()
    }

    /// Returns `true` if the batch has no transition.
    pub fn is_empty(&self) -> bool {
        self.reward.is_empty()
    }

    /// Dimension of an observation row.
    pub fn obs_dim(&self) -> usize {
        self.obs_dim
    }

    /// Dimension of an action row.
    pub fn act_dim(&self) -> usize {
        self.act_dim
    }

    /// Returns the `i`-th transition of the batch, or `None` if out of range.
    pub fn get(&self, i: usize) -> Option<TransitionRef<'_>> {
        if i >= self.len() {
            return None;
        }
        let (o, a) = (self.obs_dim, self.act_dim);
        Some(TransitionRef {
            obs: &self.obs[i * o..(i + 1) * o],
            act: &self.act[i * a..(i + 1) * a],
            reward: self.reward[i],
            next_obs: &self.next_obs[i * o..(i + 1) * o],
            done: self.done[i],
        })
    }

    /// Decomposes the batch into observations, actions, rewards,
    /// next observations, done flags and sample indices.
    pub fn unpack(
        self,
    ) -> (
        Vec<f32>,
        Vec<f32>,
        Vec<f32>,
        Vec<f32>,
        Vec<i8>,
        Vec<usize>,
    ) {
        (
            self.obs,
            self.act,
            self.reward,
            self.next_obs,
            self.done,
            self.ix_sample,
        )
    }
}
