//! Static rosters of athletes and teams.
//!
//! Ratings are hand-assigned strength numbers (Elo for chess) used by the
//! rating and consistency dimensions. Rosters are plain `const` slices so
//! lookups never allocate.

pub mod boxing;
pub mod chess;
pub mod f1;
pub mod soccer;
pub mod tennis;
pub mod us;

use std::collections::HashSet;

use crate::types::{Competitor, SportsError};

/// Check a roster for duplicate names and minimum size.
pub fn validate_roster(league: &str, roster: &[Competitor]) -> Result<(), SportsError> {
    if roster.len() < 2 {
        return Err(SportsError::RosterTooSmall {
            league: league.to_string(),
            size: roster.len(),
        });
    }

    let mut seen = HashSet::with_capacity(roster.len());
    for entry in roster {
        if !seen.insert(entry.name.to_lowercase()) {
            return Err(SportsError::DuplicateEntry {
                league: league.to_string(),
                name: entry.name.to_string(),
            });
        }
    }
    Ok(())
}

/// Find a competitor by name.
///
/// Tries an exact case-insensitive match first, then a match on the last
/// word ("Los Angeles Lakers" finds "Lakers" and vice versa), then
/// containment either way.
pub fn find<'a>(roster: &'a [Competitor], name: &str) -> Option<&'a Competitor> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    if let Some(c) = roster.iter().find(|c| c.name.to_lowercase() == wanted) {
        return Some(c);
    }

    // Only trust a last-word match when it is unambiguous ("United").
    let last_word = |s: &str| s.split_whitespace().last().map(str::to_string);
    if let Some(wanted_last) = last_word(&wanted) {
        let mut candidates = roster.iter().filter(|c| {
            last_word(&c.name.to_lowercase()).as_deref() == Some(wanted_last.as_str())
        });
        if let (Some(c), None) = (candidates.next(), candidates.next()) {
            return Some(c);
        }
    }

    roster.iter().find(|c| {
        let n = c.name.to_lowercase();
        n.contains(&wanted) || wanted.contains(&n)
    })
}
