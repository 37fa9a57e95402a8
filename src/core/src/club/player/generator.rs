use crate::club::player::player::{ClassYear, Player, PlayerRole};
use crate::club::player::position::CourtPosition;
use crate::club::player::skills::BasketballSkills;
use crate::shared::fullname::FullName;
use crate::utils::IntegerUtils;
use chrono::{Datelike, NaiveDate};
use std::sync::atomic::{AtomicU32, Ordering};

static PLAYER_ID_SEQUENCE: AtomicU32 = AtomicU32::new(1);

const FIRST_NAMES: &[&str] = &[
    "Jalen", "Marcus", "Darius", "Trey", "DeShawn", "Malik", "Isaiah", "Jaylen", "Caleb",
    "Andre", "Devin", "Tyrese", "Zion", "Cam", "Elijah", "Jordan", "Kyle", "Brandon",
    "Anthony", "Chris", "Luka", "Nikola", "Tobias", "Grant", "Reggie",
];

const LAST_NAMES: &[&str] = &[
    "Williams", "Johnson", "Carter", "Mitchell", "Robinson", "Brooks", "Thompson", "Harris",
    "Jackson", "Edwards", "Murray", "Turner", "Bryant", "Holiday", "Porter", "Reed",
    "Banks", "Coleman", "Simmons", "Dawson", "Vaughn", "Ellis", "Greer", "Fox", "Hayes",
];

pub struct PlayerGenerator;

impl PlayerGenerator {
    /// Generate a player around the given skill level. Position shapes the
    /// skill profile: guards handle and shoot, bigs defend the paint and board.
    pub fn generate(
        position: CourtPosition,
        class_year: ClassYear,
        level: u8,
        now: NaiveDate,
    ) -> Player {
        let id = PLAYER_ID_SEQUENCE.fetch_add(1, Ordering::SeqCst);

        let first_name = FIRST_NAMES[IntegerUtils::random(0, FIRST_NAMES.len() as i32 - 1) as usize];
        let last_name = LAST_NAMES[IntegerUtils::random(0, LAST_NAMES.len() as i32 - 1) as usize];

        let skills = Self::generate_skills(position, level);
        let overall = skills.overall();
        let potential_gap = Self::potential_gap(class_year);

        Player::builder()
            .id(id)
            .full_name(FullName::with_full(
                String::from(first_name),
                String::from(last_name),
            ))
            .birth_date(Self::generate_birth_date(class_year, now))
            .class_year(class_year)
            .position(position)
            .skills(skills)
            .potential(overall.saturating_add(potential_gap))
            .build()
            .unwrap_or_else(|err| panic!("player generation failed: {}", err))
    }

    /// A twelve man roster with two players per position, starters marked,
    /// locker room roles spread the way real rosters shake out.
    pub fn generate_roster(level: u8, now: NaiveDate) -> Vec<Player> {
        let slots = [
            (CourtPosition::PointGuard, ClassYear::Junior),
            (CourtPosition::ShootingGuard, ClassYear::Senior),
            (CourtPosition::SmallForward, ClassYear::Sophomore),
            (CourtPosition::PowerForward, ClassYear::Junior),
            (CourtPosition::Center, ClassYear::Senior),
            (CourtPosition::PointGuard, ClassYear::Freshman),
            (CourtPosition::ShootingGuard, ClassYear::Sophomore),
            (CourtPosition::SmallForward, ClassYear::Freshman),
            (CourtPosition::PowerForward, ClassYear::Sophomore),
            (CourtPosition::Center, ClassYear::Freshman),
            (CourtPosition::ShootingGuard, ClassYear::Freshman),
            (CourtPosition::PowerForward, ClassYear::Freshman),
        ];

        let mut players: Vec<Player> = slots
            .iter()
            .enumerate()
            .map(|(slot_idx, &(position, class_year))| {
                // starters run a notch above the bench
                let slot_level = if slot_idx < 5 {
                    level.saturating_add(IntegerUtils::random(2, 6) as u8)
                } else {
                    level.saturating_sub(IntegerUtils::random(0, 6) as u8)
                };

                let mut player = Self::generate(position, class_year, slot_level, now);

                if slot_idx < 5 {
                    player.starter_position = Some(position);
                }

                player
            })
            .collect();

        Self::assign_roles(&mut players);

        players
    }

    fn assign_roles(players: &mut [Player]) {
        if let Some(floor_general) = players
            .iter_mut()
            .find(|p| p.is_starter() && p.position == CourtPosition::PointGuard)
        {
            floor_general.role = PlayerRole::FloorGeneral;
        }

        if let Some(scorer_idx) = players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.role == PlayerRole::Regular)
            .max_by_key(|(_, p)| p.skills.offense_sum())
            .map(|(idx, _)| idx)
        {
            players[scorer_idx].role = PlayerRole::VolumeScorer;
        }

        if let Some(stopper_idx) = players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.role == PlayerRole::Regular)
            .max_by_key(|(_, p)| p.skills.defense_sum())
            .map(|(idx, _)| idx)
        {
            players[stopper_idx].role = PlayerRole::LockdownDefender;
        }

        if let Some(glue_idx) = players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_starter() && p.role == PlayerRole::Regular)
            .map(|(idx, _)| idx)
            .next()
        {
            players[glue_idx].role = PlayerRole::GlueGuy;
        }
    }

    fn generate_skills(position: CourtPosition, level: u8) -> BasketballSkills {
        let roll = |spread: i32| -> u8 {
            (level as i32 + IntegerUtils::random(-spread, spread)).clamp(25, 99) as u8
        };

        let base = BasketballSkills::new(
            roll(8),
            roll(8),
            roll(8),
            roll(8),
            roll(8),
            roll(8),
            roll(6),
        );

        let boost = |value: u8, amount: i32| -> u8 { (value as i32 + amount).clamp(25, 99) as u8 };

        match position {
            CourtPosition::PointGuard => BasketballSkills::new(
                boost(base.inside_scoring, -6),
                boost(base.outside_scoring, 4),
                boost(base.playmaking, 8),
                boost(base.perimeter_defense, 4),
                boost(base.interior_defense, -8),
                boost(base.rebounding, -8),
                base.stamina,
            ),
            CourtPosition::ShootingGuard => BasketballSkills::new(
                boost(base.inside_scoring, -2),
                boost(base.outside_scoring, 8),
                boost(base.playmaking, 2),
                boost(base.perimeter_defense, 3),
                boost(base.interior_defense, -6),
                boost(base.rebounding, -5),
                base.stamina,
            ),
            CourtPosition::SmallForward => base,
            CourtPosition::PowerForward => BasketballSkills::new(
                boost(base.inside_scoring, 5),
                boost(base.outside_scoring, -5),
                boost(base.playmaking, -5),
                boost(base.perimeter_defense, -4),
                boost(base.interior_defense, 6),
                boost(base.rebounding, 7),
                base.stamina,
            ),
            CourtPosition::Center => BasketballSkills::new(
                boost(base.inside_scoring, 8),
                boost(base.outside_scoring, -10),
                boost(base.playmaking, -8),
                boost(base.perimeter_defense, -8),
                boost(base.interior_defense, 9),
                boost(base.rebounding, 9),
                base.stamina,
            ),
        }
    }

    fn potential_gap(class_year: ClassYear) -> u8 {
        let (min_gap, max_gap) = match class_year {
            ClassYear::Freshman => (4, 14),
            ClassYear::Sophomore => (3, 10),
            ClassYear::Junior => (2, 7),
            ClassYear::Senior => (0, 4),
        };

        IntegerUtils::random(min_gap, max_gap) as u8
    }

    fn generate_birth_date(class_year: ClassYear, now: NaiveDate) -> NaiveDate {
        let age = match class_year {
            ClassYear::Freshman => 18,
            ClassYear::Sophomore => 19,
            ClassYear::Junior => 20,
            ClassYear::Senior => 21,
        } + IntegerUtils::random(0, 1);

        let year = now.year() - age;
        let month = IntegerUtils::random(1, 12) as u32;
        let day = IntegerUtils::random(1, 28) as u32;

        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
    }

    #[test]
    fn test_generated_players_have_unique_ids() {
        let first = PlayerGenerator::generate(
            CourtPosition::PointGuard,
            ClassYear::Freshman,
            70,
            test_date(),
        );
        let second = PlayerGenerator::generate(
            CourtPosition::Center,
            ClassYear::Senior,
            70,
            test_date(),
        );

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_center_profile_leans_inside() {
        for _ in 0..20 {
            let center = PlayerGenerator::generate(
                CourtPosition::Center,
                ClassYear::Junior,
                70,
                test_date(),
            );

            assert!(center.skills.inside_scoring > center.skills.outside_scoring);
            assert!(center.skills.rebounding > center.skills.playmaking);
        }
    }

    #[test]
    fn test_roster_shape() {
        let roster = PlayerGenerator::generate_roster(68, test_date());

        assert_eq!(roster.len(), 12);
        assert_eq!(roster.iter().filter(|p| p.is_starter()).count(), 5);
        assert!(roster.iter().any(|p| p.role == PlayerRole::FloorGeneral));
        assert!(roster.iter().any(|p| p.role == PlayerRole::VolumeScorer));
        assert!(roster.iter().any(|p| p.role == PlayerRole::GlueGuy));
        assert!(roster.iter().all(|p| p.potential >= p.overall()));
    }

    #[test]
    fn test_ages_match_class_years() {
        let freshman = PlayerGenerator::generate(
            CourtPosition::ShootingGuard,
            ClassYear::Freshman,
            60,
            test_date(),
        );
        let senior = PlayerGenerator::generate(
            CourtPosition::ShootingGuard,
            ClassYear::Senior,
            60,
            test_date(),
        );

        let freshman_age = freshman.age(test_date());
        let senior_age = senior.age(test_date());

        assert!(freshman_age >= 17 && freshman_age <= 19);
        assert!(senior_age >= 20 && senior_age <= 22);
    }
}
