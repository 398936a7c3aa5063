//! Up-front checks on whether a draw can succeed.

use crate::matching;
use crate::{Draw, Participant, Roster};
use rand::rngs::StdRng;

/// Whether every participant has at least one possible receiver
/// (anyone other than themself and their partner).
///
/// This is a necessary condition only: it says nothing about whether the
/// candidates can be shared out so that everyone receives exactly once.
pub fn is_assignment_possible(roster: &Roster) -> bool {
    first_stranded(roster).is_none()
}

/// The first participant, in entry order, with no possible receiver.
pub fn first_stranded(roster: &Roster) -> Option<&Participant> {
    (0..roster.len())
        .find(|&idx| {
            let partner = roster.partner_index(idx);
            !(0..roster.len()).any(|r| r != idx && Some(r) != partner)
        })
        .map(|idx| &roster[idx])
}

/// Exact check that the pre-assignments can be completed into a full draw.
pub fn has_complete_assignment(draw: &Draw) -> bool {
    matching::complete::<StdRng>(draw, None).is_some()
}
