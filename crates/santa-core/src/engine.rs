use crate::feasibility;
use crate::matching;
use crate::{Assignment, Draw, SantaError, SantaResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// How hard the engine tries before giving up on random attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Randomized attempts before giving up or falling back
    pub max_attempts: usize,
    /// Run the exact solver once attempts are exhausted
    pub exact_fallback: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 1000,
            exact_fallback: true,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// Report failure after `max_attempts` instead of solving exactly
    pub fn without_fallback(mut self) -> Self {
        self.exact_fallback = false;
        self
    }

    pub fn validate(&self) -> SantaResult<()> {
        if self.max_attempts == 0 {
            return Err(SantaError::InvalidConfig {
                field: "max_attempts".to_string(),
                value: self.max_attempts.to_string(),
            });
        }
        Ok(())
    }
}

/// Randomized Secret Santa assignment engine
pub struct AssignmentEngine<R = StdRng> {
    policy: RetryPolicy,
    rng: R,
}

impl Default for AssignmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignmentEngine {
    /// Create an engine with the default policy, seeded from the OS
    pub fn new() -> Self {
        Self::with_rng(RetryPolicy::default(), StdRng::from_entropy())
    }

    /// Create an engine with a custom policy
    pub fn with_policy(policy: RetryPolicy) -> Self {
        Self::with_rng(policy, StdRng::from_entropy())
    }

    /// Create an engine with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(RetryPolicy::default(), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AssignmentEngine<R> {
    /// Create an engine around any random source
    pub fn with_rng(policy: RetryPolicy, rng: R) -> Self {
        Self { policy, rng }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: RetryPolicy) {
        self.policy = policy;
    }

    /// One randomized attempt. `None` means the attempt deadlocked and a
    /// fresh attempt may still succeed.
    pub fn attempt(&mut self, draw: &Draw) -> Option<Assignment> {
        attempt(draw, &mut self.rng)
    }

    /// Draw a full assignment under the retry policy.
    pub fn assign(&mut self, draw: &Draw) -> SantaResult<Assignment> {
        self.policy.validate()?;

        if let Some(stranded) = feasibility::first_stranded(draw.roster()) {
            return Err(SantaError::Infeasible {
                participant: stranded.to_string(),
            });
        }

        for attempt_no in 1..=self.policy.max_attempts {
            match attempt(draw, &mut self.rng) {
                Some(assignment) => {
                    info!(attempts = attempt_no, participants = assignment.len(), "Assignment drawn");
                    debug_assert!(assignment.satisfies(draw));
                    return Ok(assignment);
                }
                None => debug!(attempt = attempt_no, "Attempt deadlocked, retrying"),
            }
        }

        if !self.policy.exact_fallback {
            warn!(attempts = self.policy.max_attempts, "Giving up on randomized attempts");
            return Err(SantaError::RetriesExhausted {
                attempts: self.policy.max_attempts,
            });
        }

        warn!(
            attempts = self.policy.max_attempts,
            "Randomized attempts exhausted, falling back to exact solver"
        );
        solve_exact(draw, &mut self.rng).ok_or(SantaError::Unsatisfiable)
    }
}

/// A single randomized constructive pass.
///
/// Givers are taken in random order; each picks a random receiver among its
/// candidates that nobody has claimed yet. Fixed pairs are copied in first
/// and never revisited.
pub fn attempt<R: Rng + ?Sized>(draw: &Draw, rng: &mut R) -> Option<Assignment> {
    let n = draw.roster().len();
    let mut receivers: Vec<Option<usize>> = draw.fixed().to_vec();
    let mut candidates = matching::candidate_index(draw);

    let mut claimed = vec![false; n];
    for &r in receivers.iter().flatten() {
        claimed[r] = true;
    }

    let mut unresolved: Vec<usize> = (0..n).filter(|&g| receivers[g].is_none()).collect();
    while !unresolved.is_empty() {
        let slot = rng.gen_range(0..unresolved.len());
        let giver = unresolved[slot];

        let available: Vec<usize> = candidates[giver]
            .iter()
            .copied()
            .filter(|&r| !claimed[r])
            .collect();
        let &receiver = available.choose(rng)?;

        receivers[giver] = Some(receiver);
        claimed[receiver] = true;
        unresolved.swap_remove(slot);

        // Taken
        for list in &mut candidates {
            list.retain(|&r| r != receiver);
        }
    }

    let receivers: Vec<usize> = receivers.into_iter().flatten().collect();
    Some(Assignment::from_receivers(draw.roster(), &receivers))
}

/// Exact randomized search: finds a completion whenever one exists.
pub fn solve_exact<R: Rng + ?Sized>(draw: &Draw, rng: &mut R) -> Option<Assignment> {
    let receivers = matching::complete(draw, Some(rng))?;
    Some(Assignment::from_receivers(draw.roster(), &receivers))
}
