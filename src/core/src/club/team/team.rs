use crate::club::player::player::{Player, PlayerCollection};
use crate::club::staff::staff::StaffCollection;
use crate::club::team::builder::TeamBuilder;
use crate::r#match::GameAdjustment;

pub const CHEMISTRY_MAX_VALUE: f32 = 100.0;
pub const FAMILIARITY_MAX_VALUE: f32 = 100.0;

#[derive(Debug, Clone, Copy)]
pub struct TeamFacilities {
    pub medical_quality: u8,
    pub training_quality: u8,
}

impl Default for TeamFacilities {
    fn default() -> Self {
        TeamFacilities {
            medical_quality: 60,
            training_quality: 60,
        }
    }
}

#[derive(Debug)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub abbreviation: String,

    pub players: PlayerCollection,
    pub staffs: StaffCollection,
    pub facilities: TeamFacilities,

    pub chemistry: f32,
    pub playbook_familiarity: f32,

    pub is_user_team: bool,
    pub player_focus_id: Option<u32>,
    pub team_captain_id: Option<u32>,

    /// One-game coaching choice staged for the next run. Cleared by
    /// post-game feedback once the game completes.
    pub game_adjustment: Option<GameAdjustment>,
}

impl Team {
    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    pub fn players(&self) -> Vec<&Player> {
        self.players.players()
    }

    pub fn captain(&self) -> Option<&Player> {
        self.team_captain_id.and_then(|id| self.players.by_id(id))
    }

    pub fn focus_player(&self) -> Option<&Player> {
        self.player_focus_id.and_then(|id| self.players.by_id(id))
    }

    /// Picks the highest rated available player when no captain is set.
    pub fn appoint_default_captain(&mut self) {
        if self.team_captain_id.is_some() {
            return;
        }

        self.team_captain_id = self
            .players
            .available_players()
            .iter()
            .max_by_key(|player| player.overall())
            .map(|player| player.id);
    }

    pub fn change_chemistry(&mut self, delta: f32) {
        self.chemistry = (self.chemistry + delta).clamp(0.0, CHEMISTRY_MAX_VALUE);
    }

    pub fn change_familiarity(&mut self, delta: f32) {
        self.playbook_familiarity =
            (self.playbook_familiarity + delta).clamp(0.0, FAMILIARITY_MAX_VALUE);
    }

    pub fn average_overall(&self) -> f32 {
        let players = self.players.players();
        if players.is_empty() {
            return 0.0;
        }

        let total: u32 = players.iter().map(|p| p.overall() as u32).sum();

        total as f32 / players.len() as f32
    }

    /// Weekly upkeep between rounds: injured players heal one week,
    /// everyone's morale drifts toward baseline.
    pub fn process_week(&mut self) {
        for player in self.players.players_mut() {
            player.process_week();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::injury::{InjuryType, PlayerInjury};
    use crate::club::player::position::CourtPosition;
    use crate::club::player::skills::BasketballSkills;
    use crate::shared::fullname::FullName;
    use chrono::NaiveDate;

    fn generate_test_team(levels: &[u8]) -> Team {
        let players = levels
            .iter()
            .enumerate()
            .map(|(idx, &level)| {
                Player::builder()
                    .id(idx as u32 + 1)
                    .full_name(FullName::with_full(
                        String::from("Test"),
                        format!("Player{}", idx + 1),
                    ))
                    .birth_date(NaiveDate::from_ymd_opt(2005, 3, 14).unwrap())
                    .position(CourtPosition::SmallForward)
                    .skills(BasketballSkills::with_level(level))
                    .build()
                    .unwrap()
            })
            .collect();

        Team::builder()
            .id(1)
            .name(String::from("Test State"))
            .abbreviation(String::from("TST"))
            .players(PlayerCollection::new(players))
            .staffs(StaffCollection::new(Vec::new()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_captain_is_highest_rated() {
        let mut team = generate_test_team(&[60, 80, 70]);

        team.appoint_default_captain();

        assert_eq!(team.team_captain_id, Some(2));
        assert_eq!(team.captain().unwrap().id, 2);
    }

    #[test]
    fn test_default_captain_skips_injured_players() {
        let mut team = generate_test_team(&[60, 80, 70]);
        team.players.by_id_mut(2).unwrap().injury = Some(PlayerInjury::new(InjuryType::AnkleRoll, 2));

        team.appoint_default_captain();

        assert_eq!(team.team_captain_id, Some(3));
    }

    #[test]
    fn test_chemistry_clamps_to_bounds() {
        let mut team = generate_test_team(&[60]);
        team.chemistry = 99.0;

        team.change_chemistry(5.0);
        assert_eq!(team.chemistry, 100.0);

        team.change_chemistry(-250.0);
        assert_eq!(team.chemistry, 0.0);
    }

    #[test]
    fn test_process_week_heals_injuries() {
        let mut team = generate_test_team(&[60, 70]);
        team.players.by_id_mut(1).unwrap().injury = Some(PlayerInjury::new(InjuryType::AnkleRoll, 1));

        team.process_week();

        assert!(team.players.by_id(1).unwrap().is_available());
    }
}
