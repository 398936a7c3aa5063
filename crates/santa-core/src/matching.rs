//! Exact completion of a draw as a bipartite matching.
//!
//! Unresolved givers sit on the left, unclaimed receivers on the right, and an
//! edge joins a giver to every receiver that is neither themself nor their
//! partner. A complete draw exists iff this graph has a matching that covers
//! every unresolved giver.

use crate::Draw;
use rand::seq::SliceRandom;
use rand::Rng;

/// Candidate receivers per giver: everyone except self and partner.
pub(crate) fn candidate_index(draw: &Draw) -> Vec<Vec<usize>> {
    let roster = draw.roster();
    (0..roster.len())
        .map(|giver| {
            let partner = roster.partner_index(giver);
            (0..roster.len())
                .filter(|&r| r != giver && Some(r) != partner)
                .collect()
        })
        .collect()
}

/// Find a full receiver table, or `None` if no completion exists.
///
/// With `rng` the search order is shuffled so repeated calls spread over
/// different completions; without it the search is deterministic.
pub(crate) fn complete<R: Rng + ?Sized>(draw: &Draw, rng: Option<&mut R>) -> Option<Vec<usize>> {
    let n = draw.roster().len();
    let fixed = draw.fixed();

    let mut claimed = vec![false; n];
    for &r in fixed.iter().flatten() {
        claimed[r] = true;
    }

    let mut adjacency: Vec<Vec<usize>> = candidate_index(draw)
        .into_iter()
        .map(|list| list.into_iter().filter(|&r| !claimed[r]).collect())
        .collect();
    let mut givers: Vec<usize> = (0..n).filter(|&g| fixed[g].is_none()).collect();

    if let Some(rng) = rng {
        givers.shuffle(rng);
        for list in &mut adjacency {
            list.shuffle(rng);
        }
    }

    // owner[r] = giver currently matched to receiver r
    let mut owner: Vec<Option<usize>> = vec![None; n];
    for &giver in &givers {
        let mut seen = vec![false; n];
        if !augment(giver, &adjacency, &mut owner, &mut seen) {
            return None;
        }
    }

    let mut receivers: Vec<usize> = fixed.iter().map(|r| r.unwrap_or(usize::MAX)).collect();
    for (receiver, giver) in owner.iter().enumerate() {
        if let Some(giver) = *giver {
            receivers[giver] = receiver;
        }
    }
    debug_assert!(receivers.iter().all(|&r| r < n));
    Some(receivers)
}

fn augment(giver: usize, adjacency: &[Vec<usize>], owner: &mut [Option<usize>], seen: &mut [bool]) -> bool {
    for &receiver in &adjacency[giver] {
        if seen[receiver] {
            continue;
        }
        seen[receiver] = true;
        let free = match owner[receiver] {
            None => true,
            Some(other) => augment(other, adjacency, owner, seen),
        };
        if free {
            owner[receiver] = Some(giver);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PreAssignment, Roster};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn draw(entries: &[(&str, Option<&str>)], pre: &[(&str, &str)]) -> Draw {
        let mut builder = Roster::builder();
        for (name, partner) in entries {
            builder.add(name, *partner).unwrap();
        }
        let pre: Vec<PreAssignment> = pre
            .iter()
            .map(|(g, r)| PreAssignment::new(g, r).unwrap())
            .collect();
        Draw::new(builder.build().unwrap(), &pre).unwrap()
    }

    #[test]
    fn test_candidate_index_excludes_self_and_partner() {
        let d = draw(&[("A", Some("B")), ("C", None)], &[]);
        let index = candidate_index(&d);
        assert_eq!(index, vec![vec![2], vec![2], vec![0, 1]]);
    }

    #[test]
    fn test_complete_finds_derangement() {
        let d = draw(&[("A", None), ("B", None), ("C", None)], &[]);
        let receivers = complete::<StdRng>(&d, None).unwrap();
        for (giver, &receiver) in receivers.iter().enumerate() {
            assert_ne!(giver, receiver);
        }
        let mut sorted = receivers.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2]);
    }

    #[test]
    fn test_complete_detects_hall_violation() {
        // With B taken, C and D can only give to A
        let d = draw(&[("A", Some("B")), ("C", Some("D"))], &[("A", "B")]);
        assert!(complete::<StdRng>(&d, None).is_none());
        let mut rng = StdRng::seed_from_u64(3);
        assert!(complete(&d, Some(&mut rng)).is_none());
    }

    #[test]
    fn test_complete_keeps_fixed_pairs() {
        let d = draw(&[("A", None), ("B", None), ("C", None)], &[("A", "B")]);
        let mut rng = StdRng::seed_from_u64(11);
        let receivers = complete(&d, Some(&mut rng)).unwrap();
        assert_eq!(receivers, vec![1, 2, 0]);
    }
}
