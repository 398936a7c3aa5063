//! Secret Santa assignment engine
//!
//! Builds a complete giver/receiver draw in which nobody gives to themself or
//! to their partner, honouring any pairs fixed in advance.

mod assignment;
mod draw;
mod engine;
mod error;
pub mod feasibility;
mod matching;
mod roster;

pub use assignment::{Assignment, Pairing};
pub use draw::{Draw, PreAssignment};
pub use engine::{attempt, solve_exact, AssignmentEngine, RetryPolicy};
pub use error::{SantaError, SantaResult};
pub use feasibility::{has_complete_assignment, is_assignment_possible};
pub use roster::{Participant, Roster, RosterBuilder};
