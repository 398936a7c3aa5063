use crate::{SantaError, SantaResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

/// A named member of the gift exchange
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Participant(String);

impl Participant {
    /// Create a participant from a name, trimming surrounding whitespace.
    pub fn new(name: &str) -> SantaResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SantaError::EmptyName);
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Participant {
    type Error = SantaError;

    fn try_from(name: String) -> SantaResult<Self> {
        Self::new(&name)
    }
}

impl From<Participant> for String {
    fn from(p: Participant) -> Self {
        p.0
    }
}

impl AsRef<str> for Participant {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The participant set together with its partner relation.
///
/// Participants keep the order they were entered in. Partners are stored by
/// index and are always symmetric: if A's partner is B then B's partner is A.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
    partners: Vec<Option<usize>>,
    index: HashMap<Participant, usize>,
}

impl Roster {
    /// Start building a roster.
    pub fn builder() -> RosterBuilder {
        RosterBuilder::new()
    }

    /// Number of participants
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// All participants in entry order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Position of a participant by name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let key = Participant::new(name).ok()?;
        self.index.get(&key).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// The partner of the participant at `idx`
    pub fn partner_index(&self, idx: usize) -> Option<usize> {
        self.partners.get(idx).copied().flatten()
    }

    /// The partner of a participant by name
    pub fn partner_of(&self, name: &str) -> Option<&Participant> {
        let idx = self.index_of(name)?;
        self.partner_index(idx).map(|p| &self.participants[p])
    }

    /// Each partnership once, plus everyone without a partner, in entry order.
    pub fn pairs(&self) -> Vec<(&Participant, Option<&Participant>)> {
        let mut shown = vec![false; self.len()];
        let mut pairs = Vec::new();
        for (idx, participant) in self.participants.iter().enumerate() {
            if shown[idx] {
                continue;
            }
            shown[idx] = true;
            match self.partners[idx] {
                Some(p) => {
                    shown[p] = true;
                    pairs.push((participant, Some(&self.participants[p])));
                }
                None => pairs.push((participant, None)),
            }
        }
        pairs
    }
}

impl Index<usize> for Roster {
    type Output = Participant;

    fn index(&self, idx: usize) -> &Participant {
        &self.participants[idx]
    }
}

/// Incrementally collects participants and partnerships.
#[derive(Debug, Clone, Default)]
pub struct RosterBuilder {
    participants: Vec<Participant>,
    partners: Vec<Option<usize>>,
    index: HashMap<Participant, usize>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant with an optional partner.
    ///
    /// A partner that is not yet known is added as a participant too. Both
    /// directions of the partnership are set together, and any previous
    /// partnership of either side is dissolved. Declaring an existing
    /// participant again replaces their partner.
    pub fn add(&mut self, name: &str, partner: Option<&str>) -> SantaResult<&mut Self> {
        let name = Participant::new(name)?;
        let partner = partner.map(Participant::new).transpose()?;
        if partner.as_ref() == Some(&name) {
            return Err(SantaError::SelfPartner {
                name: name.to_string(),
            });
        }

        let idx = self.intern(name);
        self.unlink(idx);
        if let Some(partner) = partner {
            let p = self.intern(partner);
            self.unlink(p);
            self.partners[idx] = Some(p);
            self.partners[p] = Some(idx);
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Drop everything collected so far.
    pub fn clear(&mut self) {
        self.participants.clear();
        self.partners.clear();
        self.index.clear();
    }

    /// Finish the roster. At least one participant is required.
    pub fn build(&self) -> SantaResult<Roster> {
        if self.participants.is_empty() {
            return Err(SantaError::EmptyRoster);
        }
        Ok(Roster {
            participants: self.participants.clone(),
            partners: self.partners.clone(),
            index: self.index.clone(),
        })
    }

    fn intern(&mut self, name: Participant) -> usize {
        if let Some(&idx) = self.index.get(&name) {
            return idx;
        }
        let idx = self.participants.len();
        self.index.insert(name.clone(), idx);
        self.participants.push(name);
        self.partners.push(None);
        idx
    }

    fn unlink(&mut self, idx: usize) {
        if let Some(old) = self.partners[idx].take() {
            self.partners[old] = None;
        }
    }
}
