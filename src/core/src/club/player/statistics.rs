use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PlayerSeasonStatistics {
    pub games_played: u16,
    pub minutes: u32,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
    pub field_goals_made: u32,
    pub field_goals_attempted: u32,
    pub three_points_made: u32,
    pub three_points_attempted: u32,
    pub free_throws_made: u32,
    pub free_throws_attempted: u32,
}

impl PlayerSeasonStatistics {
    pub fn points_per_game(&self) -> f32 {
        self.points as f32 / self.games_played.max(1) as f32
    }

    pub fn minutes_per_game(&self) -> f32 {
        self.minutes as f32 / self.games_played.max(1) as f32
    }

    pub fn field_goal_pct(&self) -> f32 {
        self.field_goals_made as f32 / self.field_goals_attempted.max(1) as f32
    }

    pub fn three_point_pct(&self) -> f32 {
        self.three_points_made as f32 / self.three_points_attempted.max(1) as f32
    }

    pub fn free_throw_pct(&self) -> f32 {
        self.free_throws_made as f32 / self.free_throws_attempted.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_statistics_avoid_division_by_zero() {
        let stats = PlayerSeasonStatistics::default();

        assert_eq!(stats.points_per_game(), 0.0);
        assert_eq!(stats.field_goal_pct(), 0.0);
        assert_eq!(stats.free_throw_pct(), 0.0);
    }

    #[test]
    fn test_per_game_averages() {
        let stats = PlayerSeasonStatistics {
            games_played: 4,
            minutes: 120,
            points: 62,
            field_goals_made: 24,
            field_goals_attempted: 48,
            ..PlayerSeasonStatistics::default()
        };

        assert_eq!(stats.points_per_game(), 15.5);
        assert_eq!(stats.minutes_per_game(), 30.0);
        assert_eq!(stats.field_goal_pct(), 0.5);
    }
}
