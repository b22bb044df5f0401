use crate::player::attributes::AttributeValues;
use crate::player::weighting::overall_rating;
use itertools::Itertools;
use log::{debug, warn};
use serde::Serialize;
use std::cmp::Ordering;

/// One signed-up player as the match organizer sees them.
#[derive(Debug, Clone)]
pub struct RosterPlayer {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub attributes: AttributeValues,
}

#[derive(Debug, Clone)]
struct RatedPlayer {
    index: usize,
    rating: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamSheet {
    pub player_ids: Vec<u32>,
    pub total_rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalancedTeams {
    pub home: TeamSheet,
    pub away: TeamSheet,
}

impl BalancedTeams {
    pub fn rating_gap(&self) -> f32 {
        (self.home.total_rating - self.away.total_rating).abs()
    }
}

/// Split a roster into two sides of near-equal strength.
///
/// Every player is rated with `overall_rating` for their declared position,
/// then drafted strongest-first in home/away/away/home order so consecutive
/// picks offset each other. Deterministic: rating ties keep roster order.
pub fn balance_teams(roster: &[RosterPlayer]) -> BalancedTeams {
    if roster.len() % 2 != 0 {
        warn!("odd roster of {} players, sides will be uneven", roster.len());
    }

    let rated: Vec<RatedPlayer> = roster
        .iter()
        .enumerate()
        .map(|(index, player)| RatedPlayer {
            index,
            rating: overall_rating(&player.attributes, &player.position),
        })
        .sorted_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal))
        .collect();

    let mut home = TeamSheet::default();
    let mut away = TeamSheet::default();

    for (pick, rated) in rated.iter().enumerate() {
        let player = &roster[rated.index];
        let to_home = matches!(pick % 4, 0 | 3);

        debug!(
            "pick {}: {} ({}) rated {:.1} -> {}",
            pick + 1,
            player.name,
            player.position,
            rated.rating,
            if to_home { "home" } else { "away" }
        );

        let side = if to_home { &mut home } else { &mut away };
        side.player_ids.push(player.id);
        side.total_rating += rated.rating;
    }

    BalancedTeams { home, away }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::attributes::AttributeKey;

    const EPS: f32 = 1e-3;

    // All six attributes equal, so the weighted mean equals `level`
    // regardless of position and ratings are easy to reason about.
    fn flat_player(id: u32, position: &str, level: f32) -> RosterPlayer {
        RosterPlayer {
            id,
            name: format!("Player {}", id),
            position: position.to_string(),
            attributes: AttributeKey::ALL
                .into_iter()
                .map(|key| (key, Some(level)))
                .collect(),
        }
    }

    #[test]
    fn four_player_roster_splits_evenly() {
        let roster = vec![
            flat_player(1, "DEL", 90.0),
            flat_player(2, "MED", 80.0),
            flat_player(3, "DEF", 70.0),
            flat_player(4, "POR", 60.0),
        ];

        let teams = balance_teams(&roster);

        // Snake order: 90 home, 80 away, 70 away, 60 home.
        assert_eq!(teams.home.player_ids, vec![1, 4]);
        assert_eq!(teams.away.player_ids, vec![2, 3]);
        assert!(teams.rating_gap() < EPS);
    }

    #[test]
    fn sides_stay_the_same_size() {
        let roster: Vec<RosterPlayer> = (0..10)
            .map(|i| flat_player(i, "MED", 40.0 + i as f32 * 5.0))
            .collect();

        let teams = balance_teams(&roster);

        assert_eq!(teams.home.player_ids.len(), 5);
        assert_eq!(teams.away.player_ids.len(), 5);
    }

    #[test]
    fn gap_is_small_relative_to_ratings() {
        let roster = vec![
            flat_player(1, "DEL", 92.0),
            flat_player(2, "DEL", 81.0),
            flat_player(3, "MED", 74.0),
            flat_player(4, "DEF", 66.0),
            flat_player(5, "DEF", 55.0),
            flat_player(6, "POR", 43.0),
        ];

        let teams = balance_teams(&roster);

        // No single swap of adjacent picks should be able to do much better.
        assert!(teams.rating_gap() <= 15.5);
    }

    #[test]
    fn unknown_positions_still_balance() {
        let roster = vec![
            flat_player(1, "???", 80.0),
            flat_player(2, "", 60.0),
        ];

        let teams = balance_teams(&roster);

        assert_eq!(teams.home.player_ids, vec![1]);
        assert_eq!(teams.away.player_ids, vec![2]);
    }

    #[test]
    fn balancing_is_deterministic() {
        let roster = vec![
            flat_player(1, "DEL", 70.0),
            flat_player(2, "MED", 70.0),
            flat_player(3, "DEF", 70.0),
            flat_player(4, "POR", 70.0),
        ];

        let first = balance_teams(&roster);
        let second = balance_teams(&roster);

        assert_eq!(first, second);
        // Equal ratings: roster order decides the draft.
        assert_eq!(first.home.player_ids, vec![1, 4]);
    }
}
