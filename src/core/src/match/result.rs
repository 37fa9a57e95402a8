use crate::club::player::player::Player;
use crate::r#match::game::{GameFormat, TeamSide};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayKind {
    Score,
    Assist,
    Rebound,
    Turnover,
    FreeThrow,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayByPlayEvent {
    pub kind: PlayKind,
    pub team_id: u32,
    pub player_id: u32,
    pub description: String,
    pub clock_remaining_secs: f32,
}

impl PlayByPlayEvent {
    pub fn new(
        kind: PlayKind,
        team_id: u32,
        player_id: u32,
        description: String,
        clock_remaining_secs: f32,
    ) -> Self {
        PlayByPlayEvent {
            kind,
            team_id,
            player_id,
            description,
            clock_remaining_secs,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerBoxScoreLine {
    pub player_id: u32,
    pub player_name: String,
    pub is_starter: bool,

    /// Minutes assigned by the rotation allocator. A resumed game reads the
    /// allocation back from here instead of re-running the allocator.
    pub rotation_minutes: u8,
    /// Minutes actually accrued, proportional to the possessions run.
    pub minutes: f32,

    pub points: u16,
    pub rebounds: u16,
    pub assists: u16,
    pub steals: u16,
    pub blocks: u16,
    pub turnovers: u16,
    pub field_goals_made: u16,
    pub field_goals_attempted: u16,
    pub three_points_made: u16,
    pub three_points_attempted: u16,
    pub free_throws_made: u16,
    pub free_throws_attempted: u16,
}

impl PlayerBoxScoreLine {
    pub fn new(player: &Player) -> Self {
        PlayerBoxScoreLine {
            player_id: player.id,
            player_name: player.full_name.to_string(),
            is_starter: player.is_starter(),
            rotation_minutes: player.rotation_minutes,
            minutes: 0.0,
            points: 0,
            rebounds: 0,
            assists: 0,
            steals: 0,
            blocks: 0,
            turnovers: 0,
            field_goals_made: 0,
            field_goals_attempted: 0,
            three_points_made: 0,
            three_points_attempted: 0,
            free_throws_made: 0,
            free_throws_attempted: 0,
        }
    }

    pub fn field_goal_pct(&self) -> f32 {
        if self.field_goals_attempted == 0 {
            return 0.0;
        }

        self.field_goals_made as f32 / self.field_goals_attempted as f32
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamBoxScore {
    pub team_id: u32,
    pub team_name: String,
    pub score: u16,
    pub lines: Vec<PlayerBoxScoreLine>,
}

impl TeamBoxScore {
    pub fn new(team_id: u32, team_name: String) -> Self {
        TeamBoxScore {
            team_id,
            team_name,
            score: 0,
            lines: Vec::new(),
        }
    }

    pub fn add_line(&mut self, line: PlayerBoxScoreLine) {
        self.lines.push(line);
    }

    pub fn line(&self, player_id: u32) -> Option<&PlayerBoxScoreLine> {
        self.lines.iter().find(|line| line.player_id == player_id)
    }

    pub fn line_mut(&mut self, player_id: u32) -> Option<&mut PlayerBoxScoreLine> {
        self.lines
            .iter_mut()
            .find(|line| line.player_id == player_id)
    }

    /// Adds points to a player line and keeps the team score in sync.
    pub fn add_points(&mut self, player_id: u32, points: u16) {
        if let Some(line) = self.line_mut(player_id) {
            line.points += points;
        }

        self.score += points;
    }

    pub fn points_total(&self) -> u16 {
        self.lines.iter().map(|line| line.points).sum()
    }

    /// Team score is defined as the sum of player points.
    pub fn recompute_score(&mut self) {
        self.score = self.points_total();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuspendedPhase {
    Halftime,
    CrunchTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameBoxScore {
    pub game_id: String,
    pub format: GameFormat,

    pub home: TeamBoxScore,
    pub away: TeamBoxScore,

    /// Chronological play log, append-only.
    pub events: Vec<PlayByPlayEvent>,

    /// Total possession budget for the full game, frozen at setup so a
    /// suspended game resumes against the same target.
    pub possession_budget: u16,
    pub possessions_run: u16,
    pub clock_remaining_secs: f32,

    /// Side with the ball for the next possession.
    pub possession_side: TeamSide,
}

impl GameBoxScore {
    pub fn new(
        game_id: String,
        format: GameFormat,
        home: TeamBoxScore,
        away: TeamBoxScore,
        possession_budget: u16,
    ) -> Self {
        GameBoxScore {
            game_id,
            format,
            home,
            away,
            events: Vec::new(),
            possession_budget,
            possessions_run: 0,
            clock_remaining_secs: format.game_seconds(),
            possession_side: TeamSide::Home,
        }
    }

    pub fn team(&self, side: TeamSide) -> &TeamBoxScore {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut TeamBoxScore {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    pub fn score_differential(&self) -> i32 {
        self.home.score as i32 - self.away.score as i32
    }

    pub fn fraction_complete(&self) -> f32 {
        if self.possession_budget == 0 {
            return 1.0;
        }

        (self.possessions_run as f32 / self.possession_budget as f32).min(1.0)
    }

    pub fn push_event(&mut self, event: PlayByPlayEvent) {
        if crate::is_play_log_enabled() {
            self.events.push(event);
        }
    }

    pub fn is_tied(&self) -> bool {
        self.home.score == self.away.score
    }
}

/// A game frozen mid-run. Consumed exactly once by the resume path, which
/// keeps every counted stat and appends to the same event log.
#[derive(Debug, Clone, Serialize)]
pub struct PartialBoxScore {
    pub box_score: GameBoxScore,
    pub phase: SuspendedPhase,
}

impl PartialBoxScore {
    pub fn new(box_score: GameBoxScore, phase: SuspendedPhase) -> Self {
        PartialBoxScore { box_score, phase }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_test_line(player_id: u32) -> PlayerBoxScoreLine {
        PlayerBoxScoreLine {
            player_id,
            player_name: format!("Player {}", player_id),
            is_starter: false,
            rotation_minutes: 20,
            minutes: 0.0,
            points: 0,
            rebounds: 0,
            assists: 0,
            steals: 0,
            blocks: 0,
            turnovers: 0,
            field_goals_made: 0,
            field_goals_attempted: 0,
            three_points_made: 0,
            three_points_attempted: 0,
            free_throws_made: 0,
            free_throws_attempted: 0,
        }
    }

    #[test]
    fn test_add_points_keeps_team_score_synced() {
        let mut team_box = TeamBoxScore::new(1, String::from("Home"));
        team_box.add_line(generate_test_line(10));
        team_box.add_line(generate_test_line(11));

        team_box.add_points(10, 3);
        team_box.add_points(11, 2);

        assert_eq!(team_box.score, 5);
        assert_eq!(team_box.score, team_box.points_total());
        assert_eq!(team_box.line(10).unwrap().points, 3);
    }

    #[test]
    fn test_score_differential_sign() {
        let mut home = TeamBoxScore::new(1, String::from("Home"));
        home.add_line(generate_test_line(10));
        let mut away = TeamBoxScore::new(2, String::from("Away"));
        away.add_line(generate_test_line(20));

        let mut box_score =
            GameBoxScore::new(String::from("g-1"), GameFormat::College, home, away, 126);
        box_score.home.add_points(10, 8);
        box_score.away.add_points(20, 11);

        assert_eq!(box_score.score_differential(), -3);
        assert!(!box_score.is_tied());
    }

    #[test]
    fn test_fraction_complete_guards_zero_budget() {
        let home = TeamBoxScore::new(1, String::from("Home"));
        let away = TeamBoxScore::new(2, String::from("Away"));
        let mut box_score =
            GameBoxScore::new(String::from("g-2"), GameFormat::College, home, away, 120);

        assert_eq!(box_score.fraction_complete(), 0.0);

        box_score.possessions_run = 60;
        assert_eq!(box_score.fraction_complete(), 0.5);

        box_score.possession_budget = 0;
        assert_eq!(box_score.fraction_complete(), 1.0);
    }
}
