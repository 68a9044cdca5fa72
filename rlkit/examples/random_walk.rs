//! Drives the replay buffer and the metrics logger with a random policy on a
//! one-dimensional random walk.
//!
//! ```bash
//! RUST_LOG=info cargo run -p rlkit --example random_walk -- --steps 5000
//! ```
use anyhow::Result;
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rlkit::{
    logger::{MetricsLogger, Reducer, SummaryQuery},
    nn::{construct_nn, Activation},
    replay_buffer::{ReplayBuffer, ReplayBufferConfig},
    ExperienceBufferBase, ReplayBufferBase,
};

const DIM_OBS: usize = 2;
const DIM_ACT: usize = 1;
const N_HIDDEN: usize = 64;
const DISCOUNT_FACTOR: f32 = 0.99;
const WARMUP_PERIOD: usize = 100;
const MAX_EPISODE_STEPS: usize = 200;
const BOUNDARY: f32 = 10.0;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of environment steps
    #[arg(short, long, default_value_t = 5000)]
    steps: usize,

    /// Capacity of the replay buffer
    #[arg(short, long, default_value_t = 1000)]
    capacity: usize,

    /// Number of transitions per batch
    #[arg(short, long, default_value_t = 64)]
    batch_size: usize,

    /// Interval of summaries in environment steps
    #[arg(short, long, default_value_t = 1000)]
    log_interval: usize,

    /// Random seed of the environment and the replay buffer
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// YAML file of the replay buffer configuration, overrides `capacity` and `seed`
    #[arg(long)]
    config: Option<String>,
}

/// A walker on a line, observed as (position, velocity).
struct RandomWalk {
    pos: f32,
    vel: f32,
    steps: usize,
    rng: StdRng,
}

impl RandomWalk {
    fn new(seed: u64) -> Self {
        Self {
            pos: 0.0,
            vel: 0.0,
            steps: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn obs(&self) -> [f32; DIM_OBS] {
        [self.pos, self.vel]
    }

    fn reset(&mut self) -> [f32; DIM_OBS] {
        self.pos = self.rng.gen_range(-1.0f32..1.0);
        self.vel = 0.0;
        self.steps = 0;
        self.obs()
    }

    /// Returns next observation, reward and done flag.
    fn step(&mut self, act: f32) -> ([f32; DIM_OBS], f32, bool) {
        self.vel = 0.9 * self.vel + act + self.rng.gen_range(-0.1f32..0.1);
        self.pos += self.vel;
        self.steps += 1;
        let reward = -self.pos.abs();
        let done = self.pos.abs() >= BOUNDARY || self.steps >= MAX_EPISODE_STEPS;
        (self.obs(), reward, done)
    }
}

fn create_logger() -> Result<MetricsLogger> {
    let mut logger: MetricsLogger = MetricsLogger::new();
    logger.add_attribute("episode_return", vec![Reducer::mean(), Reducer::max()])?;
    logger.add_attribute("episode_length", Reducer::mean())?;
    logger.add_attribute("td_target", vec![Reducer::mean(), Reducer::std()])?;
    Ok(logger)
}

fn run(args: &Args) -> Result<MetricsLogger> {
    let config = match &args.config {
        Some(path) => ReplayBufferConfig::load(path)?,
        None => ReplayBufferConfig::default()
            .capacity(args.capacity)
            .seed(args.seed),
    }
    .obs_dim(DIM_OBS)
    .act_dim(DIM_ACT);

    let qnet = construct_nn(&[DIM_OBS + DIM_ACT, N_HIDDEN, N_HIDDEN, 1], Activation::Identity)?;
    info!("Q-network with {} parameters\n{}", qnet.num_parameters(), qnet);

    let mut buffer = ReplayBuffer::build(&config)?;
    let mut logger = create_logger()?;
    let mut env = RandomWalk::new(args.seed);
    let mut policy_rng = StdRng::seed_from_u64(args.seed + 1);

    let mut obs = env.reset();
    let mut episode_return = 0.0;
    let mut episode_length = 0;

    for step in 1..=args.steps {
        let act = [policy_rng.gen_range(-1.0f32..1.0)];
        let (next_obs, reward, done) = env.step(act[0]);
        buffer.put(&obs, &act, reward, &next_obs, done)?;

        episode_return += reward;
        episode_length += 1;
        obs = if done {
            logger.put("episode_return", episode_return)?;
            logger.put("episode_length", episode_length as f32)?;
            episode_return = 0.0;
            episode_length = 0;
            env.reset()
        } else {
            next_obs
        };

        if buffer.len() >= WARMUP_PERIOD {
            let batch = buffer.sample_batch(args.batch_size)?;
            // Critic is not trained here, so its estimate of next values is zero.
            for (r, d) in batch.reward.iter().zip(batch.done.iter()) {
                let next_value = 0.0;
                let target = r + DISCOUNT_FACTOR * (1.0 - *d as f32) * next_value;
                logger.put("td_target", target)?;
            }
        }

        if step % args.log_interval == 0 {
            let summary = logger.summarize(&SummaryQuery::default())?;
            info!("step {}: {}", step, summary);
        }
    }

    let summary = logger.summarize(&SummaryQuery::default().from_beginning(true))?;
    info!("Overall: {}", summary);

    Ok(logger)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    run(&args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run, Args, ReplayBufferConfig};
    use anyhow::Result;
    use tempdir::TempDir;

    fn args(steps: usize) -> Args {
        Args {
            steps,
            capacity: 128,
            batch_size: 8,
            log_interval: 100,
            seed: 0,
            config: None,
        }
    }

    #[test]
    fn test_random_walk() -> Result<()> {
        let logger = run(&args(500))?;
        let n_targets = logger.log("td_target")?.len();
        assert_eq!(n_targets, (500 - 100 + 1) * 8);
        assert!(!logger.log("episode_return")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_random_walk_with_config_file() -> Result<()> {
        let tmp_dir = TempDir::new("random_walk")?;
        let path = tmp_dir.path().join("replay_buffer.yaml");
        ReplayBufferConfig::default().capacity(200).seed(3).save(&path)?;

        let mut args = args(300);
        args.config = Some(path.to_string_lossy().into_owned());
        run(&args)?;
        Ok(())
    }
}
