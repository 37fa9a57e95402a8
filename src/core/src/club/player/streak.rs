use serde::Serialize;

/// Form swings last a fixed number of games once triggered
pub const STREAK_GAMES: u8 = 3;

const HOT_SCORING_DELTA: i8 = 5;
const HOT_PLAYMAKING_DELTA: i8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StreakType {
    Hot,
    Neutral,
    Cold,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerStreak {
    pub streak_type: StreakType,
    pub games_remaining: u8,
}

impl PlayerStreak {
    pub fn neutral() -> Self {
        PlayerStreak {
            streak_type: StreakType::Neutral,
            games_remaining: 0,
        }
    }

    pub fn start(streak_type: StreakType) -> Self {
        match streak_type {
            StreakType::Neutral => PlayerStreak::neutral(),
            _ => PlayerStreak {
                streak_type,
                games_remaining: STREAK_GAMES,
            },
        }
    }

    pub fn is_active(&self) -> bool {
        self.streak_type != StreakType::Neutral && self.games_remaining > 0
    }

    /// One game has passed, active streaks move toward neutral
    pub fn decay(&mut self) {
        if self.games_remaining > 0 {
            self.games_remaining -= 1;
        }

        if self.games_remaining == 0 {
            self.streak_type = StreakType::Neutral;
        }
    }

    pub fn scoring_delta(&self) -> i8 {
        if !self.is_active() {
            return 0;
        }

        match self.streak_type {
            StreakType::Hot => HOT_SCORING_DELTA,
            StreakType::Cold => -HOT_SCORING_DELTA,
            StreakType::Neutral => 0,
        }
    }

    pub fn playmaking_delta(&self) -> i8 {
        if !self.is_active() {
            return 0;
        }

        match self.streak_type {
            StreakType::Hot => HOT_PLAYMAKING_DELTA,
            StreakType::Cold => -HOT_PLAYMAKING_DELTA,
            StreakType::Neutral => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_streak_has_no_deltas() {
        let streak = PlayerStreak::neutral();

        assert!(!streak.is_active());
        assert_eq!(streak.scoring_delta(), 0);
        assert_eq!(streak.playmaking_delta(), 0);
    }

    #[test]
    fn test_hot_streak_boosts_scoring() {
        let streak = PlayerStreak::start(StreakType::Hot);

        assert!(streak.is_active());
        assert_eq!(streak.games_remaining, STREAK_GAMES);
        assert_eq!(streak.scoring_delta(), 5);
        assert_eq!(streak.playmaking_delta(), 3);
    }

    #[test]
    fn test_cold_streak_mirrors_hot() {
        let streak = PlayerStreak::start(StreakType::Cold);

        assert_eq!(streak.scoring_delta(), -5);
        assert_eq!(streak.playmaking_delta(), -3);
    }

    #[test]
    fn test_streak_decays_to_neutral() {
        let mut streak = PlayerStreak::start(StreakType::Hot);

        streak.decay();
        streak.decay();
        assert!(streak.is_active());

        streak.decay();
        assert_eq!(streak.streak_type, StreakType::Neutral);
        assert!(!streak.is_active());
    }

    #[test]
    fn test_starting_neutral_stays_inactive() {
        let streak = PlayerStreak::start(StreakType::Neutral);

        assert_eq!(streak.games_remaining, 0);
        assert!(!streak.is_active());
    }
}
