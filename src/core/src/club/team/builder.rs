use crate::club::player::player::PlayerCollection;
use crate::club::staff::staff::StaffCollection;
use crate::club::team::team::{Team, TeamFacilities};
use crate::r#match::GameAdjustment;

#[derive(Default)]
pub struct TeamBuilder {
    id: Option<u32>,
    name: Option<String>,
    abbreviation: Option<String>,
    players: Option<PlayerCollection>,
    staffs: Option<StaffCollection>,
    facilities: Option<TeamFacilities>,
    chemistry: Option<f32>,
    playbook_familiarity: Option<f32>,
    is_user_team: bool,
    player_focus_id: Option<u32>,
    team_captain_id: Option<u32>,
    game_adjustment: Option<GameAdjustment>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn abbreviation(mut self, abbreviation: String) -> Self {
        self.abbreviation = Some(abbreviation);
        self
    }

    pub fn players(mut self, players: PlayerCollection) -> Self {
        self.players = Some(players);
        self
    }

    pub fn staffs(mut self, staffs: StaffCollection) -> Self {
        self.staffs = Some(staffs);
        self
    }

    pub fn facilities(mut self, facilities: TeamFacilities) -> Self {
        self.facilities = Some(facilities);
        self
    }

    pub fn chemistry(mut self, chemistry: f32) -> Self {
        self.chemistry = Some(chemistry.clamp(0.0, 100.0));
        self
    }

    pub fn playbook_familiarity(mut self, playbook_familiarity: f32) -> Self {
        self.playbook_familiarity = Some(playbook_familiarity.clamp(0.0, 100.0));
        self
    }

    pub fn user_team(mut self) -> Self {
        self.is_user_team = true;
        self
    }

    pub fn player_focus(mut self, player_id: u32) -> Self {
        self.player_focus_id = Some(player_id);
        self
    }

    pub fn team_captain(mut self, player_id: u32) -> Self {
        self.team_captain_id = Some(player_id);
        self
    }

    pub fn game_adjustment(mut self, adjustment: GameAdjustment) -> Self {
        self.game_adjustment = Some(adjustment);
        self
    }

    pub fn build(self) -> Result<Team, String> {
        Ok(Team {
            id: self.id.ok_or("id is required")?,
            name: self.name.ok_or("name is required")?,
            abbreviation: self.abbreviation.ok_or("abbreviation is required")?,
            players: self.players.ok_or("players is required")?,
            staffs: self.staffs.ok_or("staffs is required")?,
            facilities: self.facilities.unwrap_or_default(),
            chemistry: self.chemistry.unwrap_or(50.0),
            playbook_familiarity: self.playbook_familiarity.unwrap_or(30.0),
            is_user_team: self.is_user_team,
            player_focus_id: self.player_focus_id,
            team_captain_id: self.team_captain_id,
            game_adjustment: self.game_adjustment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_identity() {
        let result = TeamBuilder::new()
            .players(PlayerCollection::new(Vec::new()))
            .staffs(StaffCollection::new(Vec::new()))
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_defaults() {
        let team = TeamBuilder::new()
            .id(7)
            .name(String::from("River City"))
            .abbreviation(String::from("RIV"))
            .players(PlayerCollection::new(Vec::new()))
            .staffs(StaffCollection::new(Vec::new()))
            .build()
            .unwrap();

        assert_eq!(team.chemistry, 50.0);
        assert_eq!(team.playbook_familiarity, 30.0);
        assert_eq!(team.facilities.medical_quality, 60);
        assert!(!team.is_user_team);
        assert!(team.game_adjustment.is_none());
    }
}
