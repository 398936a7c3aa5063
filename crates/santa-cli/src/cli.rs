use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use santa_core::RetryPolicy;

/// Draw Secret Santa assignments and reveal them one person at a time
#[derive(Parser, Debug)]
#[command(name = "santa")]
#[command(about = "Draw Secret Santa assignments that respect partners and fixed pairs")]
pub struct Args {
    /// Seed the random source for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Randomized attempts before giving up or solving exactly
    #[arg(long, default_value_t = 1000)]
    pub max_attempts: usize,

    /// Report failure after --max-attempts instead of running the exact solver
    #[arg(long)]
    pub no_fallback: bool,

    /// Log level (trace, debug, info, warn, error); SANTA_LOG overrides it
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Keep previous reveals on screen instead of clearing the terminal
    #[arg(long)]
    pub no_clear: bool,
}

impl Args {
    pub fn retry_policy(&self) -> RetryPolicy {
        let policy = RetryPolicy::new(self.max_attempts);
        if self.no_fallback {
            policy.without_fallback()
        } else {
            policy
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
