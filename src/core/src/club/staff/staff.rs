use crate::shared::fullname::FullName;
use chrono::NaiveDate;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffRole {
    HeadCoach,
    AssistantCoach,
    Trainer,
}

impl Display for StaffRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            StaffRole::HeadCoach => write!(f, "Head Coach"),
            StaffRole::AssistantCoach => write!(f, "Assistant Coach"),
            StaffRole::Trainer => write!(f, "Trainer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StaffGrade {
    A,
    B,
    C,
    D,
    F,
}

impl StaffGrade {
    /// Flat team power bonus contributed by a coach of this grade.
    pub fn power_bonus(&self) -> f32 {
        match self {
            StaffGrade::A => 3.0,
            StaffGrade::B => 2.25,
            StaffGrade::C => 1.5,
            StaffGrade::D => 0.75,
            StaffGrade::F => 0.0,
        }
    }

    /// Per-game injury chance reduction contributed by a trainer of this grade.
    pub fn injury_protection(&self) -> f32 {
        match self {
            StaffGrade::A => 0.012,
            StaffGrade::B => 0.008,
            StaffGrade::C => 0.005,
            StaffGrade::D => 0.002,
            StaffGrade::F => 0.0,
        }
    }
}

impl Display for StaffGrade {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            StaffGrade::A => write!(f, "A"),
            StaffGrade::B => write!(f, "B"),
            StaffGrade::C => write!(f, "C"),
            StaffGrade::D => write!(f, "D"),
            StaffGrade::F => write!(f, "F"),
        }
    }
}

/// Head coach specialty. Feeds team ratings and, for `ClutchCoach`,
/// only the run that resumes after a late-game decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoachingSkill {
    Motivator,
    OffensiveGuru,
    DefensiveGuru,
    ClutchCoach,
    Balanced,
}

impl CoachingSkill {
    pub fn offense_bonus(&self, from_crunch_decision: bool) -> f32 {
        match self {
            CoachingSkill::Motivator => 1.5,
            CoachingSkill::OffensiveGuru => 2.0,
            CoachingSkill::ClutchCoach => {
                if from_crunch_decision {
                    1.0
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }

    pub fn defense_bonus(&self) -> f32 {
        match self {
            CoachingSkill::Motivator => 1.5,
            CoachingSkill::DefensiveGuru => 2.0,
            _ => 0.0,
        }
    }
}

#[derive(Debug)]
pub struct Staff {
    pub id: u32,
    pub full_name: FullName,
    pub birth_date: NaiveDate,
    pub role: StaffRole,
    pub grade: StaffGrade,
    pub coaching_skill: CoachingSkill,
}

impl Staff {
    pub fn new(
        id: u32,
        full_name: FullName,
        birth_date: NaiveDate,
        role: StaffRole,
        grade: StaffGrade,
        coaching_skill: CoachingSkill,
    ) -> Self {
        Staff {
            id,
            full_name,
            birth_date,
            role,
            grade,
            coaching_skill,
        }
    }
}

pub struct StaffStub;

impl StaffStub {
    /// Placeholder used when a team has no one hired for a role.
    pub fn default() -> Staff {
        Staff {
            id: 0,
            full_name: FullName::with_full(String::from("Interim"), String::from("Staff")),
            birth_date: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            role: StaffRole::AssistantCoach,
            grade: StaffGrade::C,
            coaching_skill: CoachingSkill::Balanced,
        }
    }
}

#[derive(Debug)]
pub struct StaffCollection {
    pub staffs: Vec<Staff>,

    stub: Staff,
}

impl StaffCollection {
    pub fn new(staffs: Vec<Staff>) -> Self {
        StaffCollection {
            staffs,
            stub: StaffStub::default(),
        }
    }

    pub fn head_coach(&self) -> &Staff {
        self.by_role(StaffRole::HeadCoach)
    }

    pub fn assistant_coach(&self) -> &Staff {
        self.by_role(StaffRole::AssistantCoach)
    }

    pub fn trainer(&self) -> &Staff {
        self.by_role(StaffRole::Trainer)
    }

    fn by_role(&self, role: StaffRole) -> &Staff {
        self.staffs
            .iter()
            .find(|staff| staff.role == role)
            .unwrap_or(&self.stub)
    }

    pub fn len(&self) -> usize {
        self.staffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staffs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_test_staff(id: u32, role: StaffRole, grade: StaffGrade) -> Staff {
        Staff::new(
            id,
            FullName::with_full(String::from("Test"), String::from("Coach")),
            NaiveDate::from_ymd_opt(1975, 5, 10).unwrap(),
            role,
            grade,
            CoachingSkill::Balanced,
        )
    }

    #[test]
    fn test_collection_finds_staff_by_role() {
        let collection = StaffCollection::new(vec![
            generate_test_staff(1, StaffRole::HeadCoach, StaffGrade::A),
            generate_test_staff(2, StaffRole::Trainer, StaffGrade::B),
        ]);

        assert_eq!(collection.head_coach().id, 1);
        assert_eq!(collection.trainer().id, 2);
    }

    #[test]
    fn test_missing_role_falls_back_to_stub() {
        let collection = StaffCollection::new(Vec::new());

        let coach = collection.head_coach();

        assert_eq!(coach.id, 0);
        assert_eq!(coach.grade, StaffGrade::C);
    }

    #[test]
    fn test_grade_bonuses_are_ordered() {
        assert!(StaffGrade::A.power_bonus() > StaffGrade::B.power_bonus());
        assert!(StaffGrade::B.injury_protection() > StaffGrade::D.injury_protection());
        assert_eq!(StaffGrade::F.power_bonus(), 0.0);
    }

    #[test]
    fn test_clutch_coach_bonus_needs_decision_restart() {
        let skill = CoachingSkill::ClutchCoach;

        assert_eq!(skill.offense_bonus(false), 0.0);
        assert_eq!(skill.offense_bonus(true), 1.0);
        assert_eq!(skill.defense_bonus(), 0.0);
    }

    #[test]
    fn test_motivator_lifts_both_ends() {
        let skill = CoachingSkill::Motivator;

        assert_eq!(skill.offense_bonus(false), 1.5);
        assert_eq!(skill.defense_bonus(), 1.5);
    }
}
