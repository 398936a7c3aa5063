//! The full interactive flow: collect, gate, draw, reveal

use crate::console::Console;
use crate::entry;
use crate::reveal::{check_again, reveal_all};
use rand::Rng;
use santa_core::{is_assignment_possible, Assignment, AssignmentEngine, Draw};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Run one session end to end.
pub fn run<R: BufRead, W: Write, G: Rng>(
    console: &mut Console<R, W>,
    engine: &mut AssignmentEngine<G>,
) -> anyhow::Result<()> {
    let Some(assignment) = draw_until_accepted(console, engine)? else {
        console.say("Exiting program.")?;
        return Ok(());
    };

    if !console.ask_yes_no("\nDo you want to see the assignments? (yes/no): ")? {
        console.say("Exiting program.")?;
        return Ok(());
    }
    reveal_all(console, &assignment)?;
    check_again(console, &assignment)?;
    Ok(())
}

/// Collect input and draw until a draw succeeds or the user gives up.
fn draw_until_accepted<R: BufRead, W: Write, G: Rng>(
    console: &mut Console<R, W>,
    engine: &mut AssignmentEngine<G>,
) -> anyhow::Result<Option<Assignment>> {
    loop {
        let mut pre_assigned = Vec::new();
        let Some(roster) = entry::collect_participants(console, &mut pre_assigned)? else {
            return Ok(None);
        };
        info!(
            participants = roster.len(),
            pre_assigned = pre_assigned.len(),
            "Roster confirmed"
        );

        if !is_assignment_possible(&roster) {
            warn!("Roster failed the feasibility check");
            console.say("\nAssignment is not possible with the current set of participants.")?;
        } else {
            let outcome = Draw::new(roster, &pre_assigned).and_then(|draw| engine.assign(&draw));
            match outcome {
                Ok(assignment) => return Ok(Some(assignment)),
                Err(err) => {
                    warn!(error = %err, "Draw failed");
                    console.say(format!("\n{err}"))?;
                }
            }
        }

        if !console.ask_yes_no("Do you want to re-enter participant information? (yes/no): ")? {
            return Ok(None);
        }
    }
}
