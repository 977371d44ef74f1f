use tracing::debug;

use crate::quiz_engine::models::LeaderboardEntry;

/// Roster name of the person playing on this device.
pub const LOCAL_PLAYER_NAME: &str = "You";

/// The static roster shown before any game has been played.
pub fn default_roster() -> Vec<LeaderboardEntry> {
    [
        (LOCAL_PLAYER_NAME, 0, "👤"),
        ("Ana García", 1200, "👩‍🎓"),
        ("Carlos Ruiz", 950, "👨‍💻"),
        ("Elena M.", 720, "👩‍🔬"),
    ]
    .into_iter()
    .map(|(name, score, avatar)| LeaderboardEntry {
        name: name.to_string(),
        score,
        avatar: Some(avatar.to_string()),
    })
    .collect()
}

/// Fold a finished session's score into the roster and rank it.
///
/// The local player's row keeps the better of its old score and
/// `session_score`; if there is no such row one is appended. Ranking is by
/// score, highest first, with ties left in roster order.
pub fn merge(roster: &[LeaderboardEntry], local_player: &str, session_score: u32) -> Vec<LeaderboardEntry> {
    let mut ranked = roster.to_vec();
    match ranked.iter_mut().find(|e| e.name == local_player) {
        Some(entry) => entry.score = entry.score.max(session_score),
        None => ranked.push(LeaderboardEntry::new(local_player, session_score)),
    }
    // `sort_by` is stable.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    debug!(player = local_player, session_score, "leaderboard merged");
    ranked
}
