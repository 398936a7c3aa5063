use crate::{Draw, Participant, Roster};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One giver and the person they give to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub giver: Participant,
    pub receiver: Participant,
}

/// A complete draw: every participant gives exactly once and receives
/// exactly once. Pairings are kept in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pairings: Vec<Pairing>,
}

impl Assignment {
    /// Build from a total receiver-per-giver table.
    pub(crate) fn from_receivers(roster: &Roster, receivers: &[usize]) -> Self {
        let pairings = receivers
            .iter()
            .enumerate()
            .map(|(giver, &receiver)| Pairing {
                giver: roster[giver].clone(),
                receiver: roster[receiver].clone(),
            })
            .collect();
        Self { pairings }
    }

    /// Who the given participant gives to
    pub fn receiver_of(&self, giver: &str) -> Option<&Participant> {
        let giver = giver.trim();
        self.pairings
            .iter()
            .find(|p| p.giver.as_str() == giver)
            .map(|p| &p.receiver)
    }

    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Participant, &Participant)> {
        self.pairings.iter().map(|p| (&p.giver, &p.receiver))
    }

    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Check every rule a finished draw must satisfy: each participant gives
    /// once and receives once, fixed pairs are kept verbatim, and nobody else
    /// gives to themself or their partner.
    pub fn satisfies(&self, draw: &Draw) -> bool {
        let roster = draw.roster();
        if self.pairings.len() != roster.len() {
            return false;
        }

        let mut gave = vec![false; roster.len()];
        let mut received = vec![false; roster.len()];
        for pairing in &self.pairings {
            let (Some(g), Some(r)) = (
                roster.index_of(pairing.giver.as_str()),
                roster.index_of(pairing.receiver.as_str()),
            ) else {
                return false;
            };
            if std::mem::replace(&mut gave[g], true) || std::mem::replace(&mut received[r], true) {
                return false;
            }
            match draw.fixed()[g] {
                Some(fixed) if fixed != r => return false,
                Some(_) => {}
                None if g == r || roster.partner_index(g) == Some(r) => return false,
                None => {}
            }
        }
        true
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a Pairing;
    type IntoIter = std::slice::Iter<'a, Pairing>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairings.iter()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pairing in &self.pairings {
            writeln!(f, "{} -> {}", pairing.giver, pairing.receiver)?;
        }
        Ok(())
    }
}
