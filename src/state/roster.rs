//! Player roster operations. All mutations are positional; callers address
//! players by their index in the ordered roster.

use thiserror::Error;

use crate::state::game::Player;

/// Error raised by roster mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The index does not point at a roster entry.
    #[error("no player at index {0}")]
    OutOfRange(usize),
    /// Removal would leave the roster empty.
    #[error("cannot remove the last remaining player")]
    LastPlayer,
}

/// Append a player named `Player {len+1}` with a zero score.
pub fn add(players: &mut Vec<Player>) -> &Player {
    players.push(Player::numbered(players.len() + 1));
    players.last().expect("roster cannot be empty after push")
}

/// Rename the player at `index`.
pub fn rename(players: &mut [Player], index: usize, name: String) -> Result<(), RosterError> {
    let player = players.get_mut(index).ok_or(RosterError::OutOfRange(index))?;
    player.name = name;
    Ok(())
}

/// Remove the player at `index`. Removal must always leave at least one
/// player, so a roster of size one rejects it.
pub fn remove(players: &mut Vec<Player>, index: usize) -> Result<Player, RosterError> {
    if index >= players.len() {
        return Err(RosterError::OutOfRange(index));
    }
    if players.len() == 1 {
        return Err(RosterError::LastPlayer);
    }
    Ok(players.remove(index))
}

/// Override a player's score from raw text, defaulting to 0 when the text
/// does not parse as an integer.
pub fn set_score(players: &mut [Player], index: usize, raw: &str) -> Result<i64, RosterError> {
    let player = players.get_mut(index).ok_or(RosterError::OutOfRange(index))?;
    player.score = parse_amount(raw);
    Ok(player.score)
}

/// Add `delta` (possibly negative) to a player's score.
pub fn award(players: &mut [Player], index: usize, delta: i64) -> Result<i64, RosterError> {
    let player = players.get_mut(index).ok_or(RosterError::OutOfRange(index))?;
    player.score += delta;
    Ok(player.score)
}

/// Parse raw numeric input the way the score and wager fields do: any
/// unparseable text counts as zero rather than rejecting the action.
pub fn parse_amount(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(n: usize) -> Vec<Player> {
        (1..=n).map(Player::numbered).collect()
    }

    #[test]
    fn add_names_players_after_roster_size() {
        let mut players = roster(2);
        let added = add(&mut players);
        assert_eq!(added.name, "Player 3");
        assert_eq!(added.score, 0);
    }

    #[test]
    fn award_is_additive_including_negative_deltas() {
        let mut players = roster(1);
        award(&mut players, 0, 300).unwrap();
        award(&mut players, 0, -500).unwrap();
        assert_eq!(players[0].score, -200);
    }

    #[test]
    fn remove_rejects_emptying_the_roster() {
        let mut players = roster(1);
        assert_eq!(remove(&mut players, 0), Err(RosterError::LastPlayer));
        assert_eq!(players.len(), 1);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut players = roster(3);
        let removed = remove(&mut players, 1).unwrap();
        assert_eq!(removed.name, "Player 2");
        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Player 1", "Player 3"]);
    }

    #[test]
    fn set_score_defaults_to_zero_on_parse_failure() {
        let mut players = roster(1);
        set_score(&mut players, 0, "250").unwrap();
        assert_eq!(players[0].score, 250);
        set_score(&mut players, 0, "not a number").unwrap();
        assert_eq!(players[0].score, 0);
    }

    #[test]
    fn out_of_range_indexes_are_reported() {
        let mut players = roster(1);
        assert_eq!(rename(&mut players, 5, "X".into()), Err(RosterError::OutOfRange(5)));
        assert_eq!(award(&mut players, 5, 100), Err(RosterError::OutOfRange(5)));
    }
}
