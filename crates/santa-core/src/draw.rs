use crate::{Participant, Roster, SantaError, SantaResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A giver/receiver pair fixed before the draw runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreAssignment {
    pub giver: Participant,
    pub receiver: Participant,
}

impl PreAssignment {
    pub fn new(giver: &str, receiver: &str) -> SantaResult<Self> {
        Ok(Self {
            giver: Participant::new(giver)?,
            receiver: Participant::new(receiver)?,
        })
    }
}

/// Parses `Giver > Receiver`.
impl FromStr for PreAssignment {
    type Err = SantaError;

    fn from_str(line: &str) -> SantaResult<Self> {
        let malformed = || SantaError::MalformedPreAssignment {
            line: line.to_string(),
        };
        let mut parts = line.split('>');
        let (Some(giver), Some(receiver), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        Self::new(giver, receiver).map_err(|_| malformed())
    }
}

impl fmt::Display for PreAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > {}", self.giver, self.receiver)
    }
}

/// A roster paired with its resolved pre-assignments, ready to be drawn.
///
/// Pre-assignments are trusted: a fixed pair may name a partner or even the
/// giver themself. They must only reference roster members and claim each
/// receiver at most once.
#[derive(Debug, Clone)]
pub struct Draw {
    roster: Roster,
    fixed: Vec<Option<usize>>,
}

impl Draw {
    /// Resolve pre-assignments against the roster. A later entry for the same
    /// giver replaces an earlier one.
    pub fn new(roster: Roster, pre_assigned: &[PreAssignment]) -> SantaResult<Self> {
        let mut fixed = vec![None; roster.len()];
        for pair in pre_assigned {
            let giver = lookup(&roster, &pair.giver, "giver")?;
            let receiver = lookup(&roster, &pair.receiver, "receiver")?;
            fixed[giver] = Some(receiver);
        }

        let mut claimed = vec![false; roster.len()];
        for &receiver in fixed.iter().flatten() {
            if std::mem::replace(&mut claimed[receiver], true) {
                return Err(SantaError::InvalidPreAssignment {
                    reason: format!("{} is pre-assigned to more than one giver", roster[receiver]),
                });
            }
        }

        Ok(Self { roster, fixed })
    }

    /// A draw with no pre-assignments
    pub fn unconstrained(roster: Roster) -> Self {
        let fixed = vec![None; roster.len()];
        Self { roster, fixed }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Fixed receiver per giver index
    pub(crate) fn fixed(&self) -> &[Option<usize>] {
        &self.fixed
    }

    /// The pre-assigned receiver for a giver, if any
    pub fn pre_assigned_to(&self, giver: &str) -> Option<&Participant> {
        let idx = self.roster.index_of(giver)?;
        self.fixed[idx].map(|r| &self.roster[r])
    }

    pub fn pre_assigned_count(&self) -> usize {
        self.fixed.iter().flatten().count()
    }
}

fn lookup(roster: &Roster, name: &Participant, role: &str) -> SantaResult<usize> {
    roster
        .index_of(name.as_str())
        .ok_or_else(|| SantaError::InvalidPreAssignment {
            reason: format!("{role} {name} is not a participant"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trio() -> Roster {
        let mut builder = Roster::builder();
        builder.add("A", None).unwrap();
        builder.add("B", None).unwrap();
        builder.add("C", None).unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_parse_pre_assignment() {
        let pair: PreAssignment = " Alice >  Bob ".parse().unwrap();
        assert_eq!(pair.giver.as_str(), "Alice");
        assert_eq!(pair.receiver.as_str(), "Bob");
        assert_eq!(pair.to_string(), "Alice > Bob");
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        for line in ["Alice Bob", "Alice > Bob > Carol", " > Bob", "Alice >", ""] {
            assert_eq!(
                line.parse::<PreAssignment>(),
                Err(SantaError::MalformedPreAssignment {
                    line: line.to_string()
                }),
                "line {:?} should be rejected",
                line
            );
        }
    }

    #[test]
    fn test_draw_resolves_last_entry_wins() {
        let pre = vec![
            PreAssignment::new("A", "B").unwrap(),
            PreAssignment::new("A", "C").unwrap(),
        ];
        let draw = Draw::new(trio(), &pre).unwrap();
        assert_eq!(draw.pre_assigned_to("A").unwrap().as_str(), "C");
        assert_eq!(draw.pre_assigned_count(), 1);
    }

    #[test]
    fn test_draw_rejects_unknown_names() {
        let pre = vec![PreAssignment::new("A", "Zed").unwrap()];
        let err = Draw::new(trio(), &pre).unwrap_err();
        assert!(matches!(err, SantaError::InvalidPreAssignment { .. }));
    }

    #[test]
    fn test_draw_rejects_shared_receiver() {
        let pre = vec![
            PreAssignment::new("A", "C").unwrap(),
            PreAssignment::new("B", "C").unwrap(),
        ];
        let err = Draw::new(trio(), &pre).unwrap_err();
        assert!(matches!(err, SantaError::InvalidPreAssignment { .. }));
    }

    #[test]
    fn test_draw_trusts_self_pre_assignment() {
        let pre = vec![PreAssignment::new("A", "A").unwrap()];
        let draw = Draw::new(trio(), &pre).unwrap();
        assert_eq!(draw.pre_assigned_to("A").unwrap().as_str(), "A");
    }
}
