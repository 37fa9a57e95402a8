use crate::r#match::result::GameBoxScore;
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Serialize)]
pub struct LeagueTableRow {
    pub team_id: u32,
    pub team_name: String,
    pub played: u16,
    pub wins: u16,
    pub losses: u16,
    pub points_for: u32,
    pub points_against: u32,
}

impl LeagueTableRow {
    pub fn new(team_id: u32, team_name: String) -> Self {
        LeagueTableRow {
            team_id,
            team_name,
            played: 0,
            wins: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
        }
    }

    pub fn win_pct(&self) -> f32 {
        self.wins as f32 / self.played.max(1) as f32
    }

    pub fn point_differential(&self) -> i64 {
        self.points_for as i64 - self.points_against as i64
    }
}

#[derive(Debug, Default, Serialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    pub fn with_teams(teams: &[(u32, String)]) -> Self {
        LeagueTable {
            rows: teams
                .iter()
                .map(|(team_id, team_name)| LeagueTableRow::new(*team_id, team_name.clone()))
                .collect(),
        }
    }

    pub fn row(&self, team_id: u32) -> Option<&LeagueTableRow> {
        self.rows.iter().find(|row| row.team_id == team_id)
    }

    /// Games never end level, every result is a win and a loss.
    pub fn update_from_game(&mut self, box_score: &GameBoxScore) {
        let home_won = box_score.home.score > box_score.away.score;

        self.apply_result(
            box_score.home.team_id,
            home_won,
            box_score.home.score,
            box_score.away.score,
        );
        self.apply_result(
            box_score.away.team_id,
            !home_won,
            box_score.away.score,
            box_score.home.score,
        );
    }

    fn apply_result(&mut self, team_id: u32, won: bool, scored: u16, allowed: u16) {
        let Some(row) = self.rows.iter_mut().find(|row| row.team_id == team_id) else {
            return;
        };

        row.played += 1;
        if won {
            row.wins += 1;
        } else {
            row.losses += 1;
        }
        row.points_for += scored as u32;
        row.points_against += allowed as u32;
    }

    /// Standings by winning percentage, point differential breaking ties.
    pub fn standings(&self) -> Vec<&LeagueTableRow> {
        self.rows
            .iter()
            .sorted_by(|a, b| {
                b.win_pct()
                    .partial_cmp(&a.win_pct())
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| b.point_differential().cmp(&a.point_differential()))
                    .then_with(|| b.wins.cmp(&a.wins))
                    .then_with(|| a.team_id.cmp(&b.team_id))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::game::GameFormat;
    use crate::r#match::result::TeamBoxScore;

    fn generate_test_box(
        home_id: u32,
        away_id: u32,
        home_score: u16,
        away_score: u16,
    ) -> GameBoxScore {
        let mut home = TeamBoxScore::new(home_id, format!("Team {}", home_id));
        home.score = home_score;
        let mut away = TeamBoxScore::new(away_id, format!("Team {}", away_id));
        away.score = away_score;

        GameBoxScore::new(String::from("g-t"), GameFormat::College, home, away, 126)
    }

    fn generate_test_table() -> LeagueTable {
        LeagueTable::with_teams(&[
            (1, String::from("Team 1")),
            (2, String::from("Team 2")),
            (3, String::from("Team 3")),
        ])
    }

    #[test]
    fn test_results_split_into_wins_and_losses() {
        let mut table = generate_test_table();

        table.update_from_game(&generate_test_box(1, 2, 80, 70));
        table.update_from_game(&generate_test_box(2, 3, 66, 71));

        let winner = table.row(1).unwrap();
        assert_eq!(winner.played, 1);
        assert_eq!(winner.wins, 1);
        assert_eq!(winner.points_for, 80);
        assert_eq!(winner.points_against, 70);

        let loser = table.row(2).unwrap();
        assert_eq!(loser.played, 2);
        assert_eq!(loser.wins, 0);
        assert_eq!(loser.losses, 2);
    }

    #[test]
    fn test_standings_order_by_win_pct_then_differential() {
        let mut table = generate_test_table();

        // all three finish 1-1, point differential decides
        table.update_from_game(&generate_test_box(1, 2, 80, 70));
        table.update_from_game(&generate_test_box(3, 1, 90, 60));
        table.update_from_game(&generate_test_box(2, 3, 75, 70));

        let standings = table.standings();

        assert_eq!(standings[0].team_id, 3);
        assert_eq!(standings[0].point_differential(), 25);
        assert_eq!(standings[1].team_id, 2);
        assert_eq!(standings[2].team_id, 1);
    }

    #[test]
    fn test_win_pct_guards_unplayed_rows() {
        let table = generate_test_table();

        assert_eq!(table.row(1).unwrap().win_pct(), 0.0);
    }
}
