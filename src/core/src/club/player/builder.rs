use crate::club::player::player::{ClassYear, Player, PlayerRole, MORALE_BASELINE};
use crate::club::player::position::CourtPosition;
use crate::club::player::skills::BasketballSkills;
use crate::club::player::statistics::PlayerSeasonStatistics;
use crate::club::player::streak::PlayerStreak;
use crate::shared::fullname::FullName;
use chrono::NaiveDate;

pub struct PlayerBuilder {
    id: Option<u32>,
    full_name: Option<FullName>,
    birth_date: Option<NaiveDate>,
    class_year: ClassYear,
    position: Option<CourtPosition>,
    secondary_position: Option<CourtPosition>,
    starter_position: Option<CourtPosition>,
    skills: Option<BasketballSkills>,
    potential: Option<u8>,
    morale: f32,
    role: PlayerRole,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        PlayerBuilder {
            id: None,
            full_name: None,
            birth_date: None,
            class_year: ClassYear::Freshman,
            position: None,
            secondary_position: None,
            starter_position: None,
            skills: None,
            potential: None,
            morale: MORALE_BASELINE,
            role: PlayerRole::Regular,
        }
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: FullName) -> Self {
        self.full_name = Some(full_name);
        self
    }

    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn class_year(mut self, class_year: ClassYear) -> Self {
        self.class_year = class_year;
        self
    }

    pub fn position(mut self, position: CourtPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn secondary_position(mut self, position: CourtPosition) -> Self {
        self.secondary_position = Some(position);
        self
    }

    pub fn starter_position(mut self, position: CourtPosition) -> Self {
        self.starter_position = Some(position);
        self
    }

    pub fn skills(mut self, skills: BasketballSkills) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn potential(mut self, potential: u8) -> Self {
        self.potential = Some(potential);
        self
    }

    pub fn morale(mut self, morale: f32) -> Self {
        self.morale = morale.clamp(0.0, 100.0);
        self
    }

    pub fn role(mut self, role: PlayerRole) -> Self {
        self.role = role;
        self
    }

    pub fn build(self) -> Result<Player, String> {
        let skills = self.skills.ok_or("skills are required")?;
        let potential = self.potential.unwrap_or_else(|| skills.overall());

        Ok(Player {
            id: self.id.ok_or("id is required")?,
            full_name: self.full_name.ok_or("full_name is required")?,
            birth_date: self.birth_date.ok_or("birth_date is required")?,
            class_year: self.class_year,
            position: self.position.ok_or("position is required")?,
            secondary_position: self.secondary_position,
            starter_position: self.starter_position,
            skills,
            potential: potential.max(skills.overall()),
            rotation_minutes: 0,
            morale: self.morale,
            role: self.role,
            streak: PlayerStreak::neutral(),
            injury: None,
            reinjury_risk: 0.0,
            statistics: PlayerSeasonStatistics::default(),
        })
    }
}

impl Default for PlayerBuilder {
    fn default() -> Self {
        PlayerBuilder::new()
    }
}
