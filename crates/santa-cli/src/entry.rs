//! Interactive collection of participants, partners and fixed pairs

use crate::console::Console;
use santa_core::{PreAssignment, Roster, SantaError};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Typed in place of a name to start or finish entering fixed pairs
pub const PRE_ASSIGN_TOGGLE: &str = "1";

/// Collect a confirmed roster. Fixed pairs typed along the way are appended
/// to `pre_assigned` and survive a rejected confirmation.
///
/// Returns `None` when input ends before a roster is confirmed.
pub fn collect_participants<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    pre_assigned: &mut Vec<PreAssignment>,
) -> io::Result<Option<Roster>> {
    let mut builder = Roster::builder();

    loop {
        console.say("\nEnter the names of participants. Type 'done' when finished.")?;
        builder.clear();

        loop {
            let Some(name) = console.ask("Enter participant's name: ")? else {
                return Ok(None);
            };

            if name.is_empty() {
                console.say("Please enter a valid name.")?;
                continue;
            }
            if name == PRE_ASSIGN_TOGGLE {
                if !collect_pre_assignments(console, pre_assigned)? {
                    return Ok(None);
                }
                continue;
            }
            if name.eq_ignore_ascii_case("done") {
                if builder.is_empty() {
                    console.say("Please enter at least one participant.")?;
                    continue;
                }
                break;
            }

            let prompt = format!("Enter {name}'s partner's name (or 'none' if no partner): ");
            let Some(partner) = console.ask(&prompt)? else {
                return Ok(None);
            };
            let partner = (!partner.is_empty() && !partner.eq_ignore_ascii_case("none"))
                .then_some(partner.as_str());

            match builder.add(&name, partner) {
                Ok(_) => debug!(name = %name, partner = ?partner, "Participant added"),
                Err(SantaError::SelfPartner { .. }) => {
                    console.say("A participant cannot be their own partner. Please re-enter.")?;
                }
                Err(err) => console.say(err)?,
            }
        }

        let roster = match builder.build() {
            Ok(roster) => roster,
            Err(err) => {
                console.say(err)?;
                continue;
            }
        };

        console.say("\nParticipants and their partners:")?;
        for (participant, partner) in roster.pairs() {
            match partner {
                Some(partner) => console.say(format!("{participant} - {partner}"))?,
                None => console.say(format!("{participant} - None"))?,
            }
        }
        if !pre_assigned.is_empty() {
            console.say(format!("({} pre-determined assignment(s) recorded)", pre_assigned.len()))?;
        }

        if console.ask_yes_no("\nIs the above information correct? (yes/no): ")? {
            return Ok(Some(roster));
        }
    }
}

/// Read `Giver > Receiver` lines until the toggle is entered again.
/// The screen is cleared after each accepted pair to keep it secret.
///
/// Returns `false` if input ended first.
fn collect_pre_assignments<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    pre_assigned: &mut Vec<PreAssignment>,
) -> io::Result<bool> {
    console.say(format!(
        "Enter pre-determined assignments (format: Giver > Receiver). Type '{PRE_ASSIGN_TOGGLE}' to finish."
    ))?;

    loop {
        let Some(line) = console.ask("")? else {
            return Ok(false);
        };
        if line == PRE_ASSIGN_TOGGLE {
            return Ok(true);
        }
        if line.is_empty() {
            continue;
        }

        match line.parse::<PreAssignment>() {
            Ok(pair) => {
                pre_assigned.push(pair);
                console.clear_screen()?;
            }
            Err(_) => console.say("Invalid format for assignment. Please use 'Giver > Receiver'.")?,
        }
    }
}
