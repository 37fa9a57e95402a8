use crate::club::player::builder::PlayerBuilder;
use crate::club::player::injury::PlayerInjury;
use crate::club::player::skills::BasketballSkills;
use crate::club::player::statistics::PlayerSeasonStatistics;
use crate::club::player::streak::PlayerStreak;
use crate::club::player::position::CourtPosition;
use crate::shared::fullname::FullName;
use crate::utils::DateUtils;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Index;

pub const MORALE_MAX_VALUE: f32 = 100.0;
pub const MORALE_BASELINE: f32 = 50.0;

/// Weekly decay of the lingering reinjury risk once a player is back
const REINJURY_RISK_DECAY: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClassYear {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerRole {
    GlueGuy,
    VolumeScorer,
    FloorGeneral,
    LockdownDefender,
    Regular,
}

#[derive(Debug)]
pub struct Player {
    pub id: u32,
    pub full_name: FullName,
    pub birth_date: NaiveDate,
    pub class_year: ClassYear,

    pub position: CourtPosition,
    pub secondary_position: Option<CourtPosition>,
    pub starter_position: Option<CourtPosition>,

    pub skills: BasketballSkills,
    pub potential: u8,

    pub rotation_minutes: u8,
    pub morale: f32,
    pub role: PlayerRole,

    pub streak: PlayerStreak,
    pub injury: Option<PlayerInjury>,
    pub reinjury_risk: f32,

    pub statistics: PlayerSeasonStatistics,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn overall(&self) -> u8 {
        self.skills.overall()
    }

    /// Skills as they play tonight: stored skills shifted by any active streak
    pub fn effective_skills(&self) -> BasketballSkills {
        if !self.streak.is_active() {
            return self.skills;
        }

        self.skills
            .with_scoring_shift(self.streak.scoring_delta(), self.streak.playmaking_delta())
    }

    pub fn is_available(&self) -> bool {
        self.injury.is_none()
    }

    pub fn is_starter(&self) -> bool {
        self.starter_position.is_some()
    }

    pub fn age(&self, now: NaiveDate) -> u8 {
        DateUtils::age(self.birth_date, now)
    }

    pub fn change_morale(&mut self, delta: f32) {
        self.morale = (self.morale + delta).clamp(0.0, MORALE_MAX_VALUE);
    }

    /// Going down also hurts: the hit scales with severity
    pub fn apply_injury(&mut self, injury: PlayerInjury) {
        let severity = injury.severity();

        self.change_morale(-severity.morale_hit());
        self.reinjury_risk = self.reinjury_risk.max(severity.reinjury_risk());
        self.injury = Some(injury);
        self.rotation_minutes = 0;
    }

    /// Played a full game without breaking down, the lingering risk fades
    pub fn decay_reinjury_risk(&mut self) {
        self.reinjury_risk = (self.reinjury_risk - REINJURY_RISK_DECAY).max(0.0);
    }

    /// Weekly upkeep between games: injury countdown and morale drift
    pub fn process_week(&mut self) {
        if let Some(ref mut injury) = self.injury {
            injury.weeks_remaining = injury.weeks_remaining.saturating_sub(1);

            if injury.weeks_remaining == 0 {
                self.injury = None;
            }
        }

        if self.morale > MORALE_BASELINE {
            self.morale = (self.morale - 1.0).max(MORALE_BASELINE);
        } else if self.morale < MORALE_BASELINE {
            self.morale = (self.morale + 1.0).min(MORALE_BASELINE);
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} ({}, {})",
            self.full_name,
            self.position.get_short_name(),
            self.overall()
        )
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[derive(Debug)]
pub struct PlayerCollection {
    pub players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerCollection { players }
    }

    pub fn add(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    pub fn players(&self) -> Vec<&Player> {
        self.players.iter().collect()
    }

    pub fn by_id(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn by_id_mut(&mut self, player_id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn by_position(&self, position: CourtPosition) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.position == position)
            .collect()
    }

    pub fn available_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_available()).collect()
    }

    pub fn take_player(&mut self, player_id: &u32) -> Option<Player> {
        let player_idx = self.players.iter().position(|p| p.id == *player_id);
        match player_idx {
            Some(idx) => Some(self.players.remove(idx)),
            None => None,
        }
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl Index<u32> for PlayerCollection {
    type Output = Player;

    fn index(&self, player_id: u32) -> &Self::Output {
        self.players
            .iter()
            .find(|p| p.id == player_id)
            .unwrap_or_else(|| panic!("no player with id = {}", player_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::injury::{InjuryType, SEASON_ENDING_WEEKS};
    use crate::club::player::streak::StreakType;

    fn generate_test_player(id: u32, level: u8) -> Player {
        Player::builder()
            .id(id)
            .full_name(FullName::with_full(
                String::from("Test"),
                String::from("Player"),
            ))
            .birth_date(NaiveDate::from_ymd_opt(2004, 3, 11).unwrap())
            .position(CourtPosition::SmallForward)
            .skills(BasketballSkills::with_level(level))
            .potential(level.saturating_add(5))
            .build()
            .unwrap()
    }

    #[test]
    fn test_effective_skills_follow_streak() {
        let mut player = generate_test_player(1, 70);

        assert_eq!(player.effective_skills().inside_scoring, 70);

        player.streak = PlayerStreak::start(StreakType::Hot);
        let hot = player.effective_skills();

        assert_eq!(hot.inside_scoring, 75);
        assert_eq!(hot.outside_scoring, 75);
        assert_eq!(hot.playmaking, 73);
        // stored skills untouched
        assert_eq!(player.skills.inside_scoring, 70);

        player.streak = PlayerStreak::start(StreakType::Cold);
        assert_eq!(player.effective_skills().inside_scoring, 65);
    }

    #[test]
    fn test_injury_blocks_availability_and_clears_minutes() {
        let mut player = generate_test_player(2, 75);
        player.rotation_minutes = 28;

        player.apply_injury(PlayerInjury::new(InjuryType::HamstringStrain, 4));

        assert!(!player.is_available());
        assert_eq!(player.rotation_minutes, 0);
        assert!(player.reinjury_risk > 0.0);
        assert!(player.morale < MORALE_BASELINE);
    }

    #[test]
    fn test_weekly_recovery_countdown() {
        let mut player = generate_test_player(3, 75);
        player.apply_injury(PlayerInjury::new(InjuryType::AnkleRoll, 1));

        player.process_week();

        assert!(player.is_available());
        // risk lingers after the injury clears
        assert!(player.reinjury_risk > 0.0);
    }

    #[test]
    fn test_season_ending_injury_outlasts_a_season() {
        let mut player = generate_test_player(4, 80);
        player.apply_injury(PlayerInjury::new(InjuryType::AclTear, SEASON_ENDING_WEEKS));

        for _ in 0..30 {
            player.process_week();
        }

        assert!(!player.is_available());
    }

    #[test]
    fn test_morale_clamps_and_drifts() {
        let mut player = generate_test_player(5, 70);

        player.change_morale(500.0);
        assert_eq!(player.morale, MORALE_MAX_VALUE);

        player.process_week();
        assert_eq!(player.morale, MORALE_MAX_VALUE - 1.0);

        player.change_morale(-500.0);
        assert_eq!(player.morale, 0.0);
    }

    #[test]
    fn test_collection_lookup_and_take() {
        let mut collection = PlayerCollection::new(vec![
            generate_test_player(10, 70),
            generate_test_player(11, 75),
        ]);

        assert!(collection.contains(10));
        assert_eq!(collection.by_id(11).unwrap().overall(), 75);
        assert_eq!(collection[10].id, 10);

        let taken = collection.take_player(&10).unwrap();
        assert_eq!(taken.id, 10);
        assert!(!collection.contains(10));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_available_players_filter() {
        let mut injured = generate_test_player(20, 70);
        injured.apply_injury(PlayerInjury::new(InjuryType::CalfStrain, 3));

        let collection = PlayerCollection::new(vec![injured, generate_test_player(21, 70)]);

        let available = collection.available_players();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, 21);
    }
}
