//! Showing each giver their receiver, one person at a time

use crate::console::Console;
use santa_core::{Assignment, Participant};
use std::io::{self, BufRead, Write};

/// Presents a single giver's receiver to them privately
pub trait Reveal {
    fn reveal_one(&mut self, giver: &Participant, receiver: &Participant) -> io::Result<()>;
}

impl<R: BufRead, W: Write> Reveal for Console<R, W> {
    fn reveal_one(&mut self, giver: &Participant, receiver: &Participant) -> io::Result<()> {
        self.pause(&format!("\n{giver}: (Press Enter to reveal)"))?;
        self.say(format!("-> {receiver}"))?;
        self.pause("Press Enter to continue...")?;
        self.clear_screen()
    }
}

/// Reveal every pairing in roster order
pub fn reveal_all(revealer: &mut impl Reveal, assignment: &Assignment) -> io::Result<()> {
    for pairing in assignment {
        revealer.reveal_one(&pairing.giver, &pairing.receiver)?;
    }
    Ok(())
}

/// Let people look up their receiver again until nobody else needs to.
pub fn check_again<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    assignment: &Assignment,
) -> io::Result<()> {
    while console.ask_yes_no("Does anyone need to see their assignment again? (yes/no): ")? {
        let Some(name) = console.ask("Enter your name to see your Secret Santa assignment: ")? else {
            break;
        };
        match assignment.receiver_of(&name) {
            Some(receiver) => console.say(format!("Your Secret Santa assignment is: {receiver}"))?,
            None => console.say("Name not found. Please try again.")?,
        }
        console.pause("Press Enter to continue...")?;
        console.clear_screen()?;
    }
    console.say("Exiting program.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::tests::{console, transcript};
    use santa_core::{AssignmentEngine, Draw, Roster};

    fn pair_assignment() -> Assignment {
        let mut builder = Roster::builder();
        builder.add("Alice", None).unwrap();
        builder.add("Bob", None).unwrap();
        let draw = Draw::unconstrained(builder.build().unwrap());
        AssignmentEngine::with_seed(0).assign(&draw).unwrap()
    }

    struct Recorder(Vec<(String, String)>);

    impl Reveal for Recorder {
        fn reveal_one(&mut self, giver: &Participant, receiver: &Participant) -> io::Result<()> {
            self.0.push((giver.to_string(), receiver.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_reveal_all_in_roster_order() {
        let mut recorder = Recorder(Vec::new());
        reveal_all(&mut recorder, &pair_assignment()).unwrap();
        assert_eq!(
            recorder.0,
            vec![
                ("Alice".to_string(), "Bob".to_string()),
                ("Bob".to_string(), "Alice".to_string()),
            ]
        );
    }

    #[test]
    fn test_console_reveal_waits_for_enter() {
        let mut c = console("\n\n\n\n");
        reveal_all(&mut c, &pair_assignment()).unwrap();
        let out = transcript(c);
        assert!(out.contains("Alice: (Press Enter to reveal)-> Bob\n"));
        assert!(out.contains("Bob: (Press Enter to reveal)-> Alice\n"));
    }

    #[test]
    fn test_check_again_lookup() {
        let mut c = console("yes\nBob\n\ny\nZed\n\nno\n");
        check_again(&mut c, &pair_assignment()).unwrap();
        let out = transcript(c);
        assert!(out.contains("Your Secret Santa assignment is: Alice"));
        assert!(out.contains("Name not found. Please try again."));
        assert!(out.ends_with("Exiting program.\n"));
    }
}
