use crate::club::staff::staff::{CoachingSkill, Staff, StaffCollection, StaffGrade, StaffRole};
use crate::shared::fullname::FullName;
use crate::utils::IntegerUtils;
use chrono::{Datelike, NaiveDate};
use std::sync::atomic::{AtomicU32, Ordering};

static STAFF_ID_SEQUENCE: AtomicU32 = AtomicU32::new(1000);

const COACH_FIRST_NAMES: &[&str] = &[
    "Rick", "Tom", "Bill", "Mike", "John", "Dan", "Bruce", "Kelvin", "Mark", "Scott",
    "Greg", "Jay", "Leonard", "Frank", "Buzz",
];

const COACH_LAST_NAMES: &[&str] = &[
    "Hargrove", "Izzo", "Calipari", "Boeheim", "Painter", "Few", "Bennett", "Sampson",
    "Drew", "Oats", "Pearl", "McDermott", "Hoiberg", "Musselman", "Beard",
];

const GRADES: [StaffGrade; 5] = [
    StaffGrade::A,
    StaffGrade::B,
    StaffGrade::C,
    StaffGrade::D,
    StaffGrade::F,
];

const COACHING_SKILLS: [CoachingSkill; 5] = [
    CoachingSkill::Motivator,
    CoachingSkill::OffensiveGuru,
    CoachingSkill::DefensiveGuru,
    CoachingSkill::ClutchCoach,
    CoachingSkill::Balanced,
];

pub struct StaffGenerator;

impl StaffGenerator {
    pub fn generate(
        role: StaffRole,
        grade: StaffGrade,
        coaching_skill: CoachingSkill,
        now: NaiveDate,
    ) -> Staff {
        let id = STAFF_ID_SEQUENCE.fetch_add(1, Ordering::SeqCst);

        let first_name =
            COACH_FIRST_NAMES[IntegerUtils::random(0, COACH_FIRST_NAMES.len() as i32 - 1) as usize];
        let last_name =
            COACH_LAST_NAMES[IntegerUtils::random(0, COACH_LAST_NAMES.len() as i32 - 1) as usize];

        let age = IntegerUtils::random(35, 68);
        let birth_date = NaiveDate::from_ymd_opt(
            now.year() - age,
            IntegerUtils::random(1, 12) as u32,
            IntegerUtils::random(1, 28) as u32,
        )
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(now.year() - age, 1, 1).unwrap());

        Staff::new(
            id,
            FullName::with_full(String::from(first_name), String::from(last_name)),
            birth_date,
            role,
            grade,
            coaching_skill,
        )
    }

    /// Full coaching bench: head coach at the given grade, assistant and
    /// trainer within a grade of them.
    pub fn generate_bench(head_grade: StaffGrade, now: NaiveDate) -> StaffCollection {
        let head_skill =
            COACHING_SKILLS[IntegerUtils::random(0, COACHING_SKILLS.len() as i32 - 1) as usize];

        StaffCollection::new(vec![
            Self::generate(StaffRole::HeadCoach, head_grade, head_skill, now),
            Self::generate(
                StaffRole::AssistantCoach,
                Self::nearby_grade(head_grade),
                CoachingSkill::Balanced,
                now,
            ),
            Self::generate(
                StaffRole::Trainer,
                Self::nearby_grade(head_grade),
                CoachingSkill::Balanced,
                now,
            ),
        ])
    }

    fn nearby_grade(grade: StaffGrade) -> StaffGrade {
        let idx = GRADES
            .iter()
            .position(|g| *g == grade)
            .unwrap_or(2) as i32;

        let shifted = (idx + IntegerUtils::random(-1, 1)).clamp(0, GRADES.len() as i32 - 1);

        GRADES[shifted as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
    }

    #[test]
    fn test_generated_bench_covers_all_roles() {
        let bench = StaffGenerator::generate_bench(StaffGrade::B, test_date());

        assert_eq!(bench.len(), 3);
        assert_eq!(bench.head_coach().grade, StaffGrade::B);
        assert_ne!(bench.trainer().id, 0);
        assert_ne!(bench.assistant_coach().id, bench.head_coach().id);
    }

    #[test]
    fn test_nearby_grade_stays_in_range() {
        for _ in 0..50 {
            let grade = StaffGenerator::nearby_grade(StaffGrade::A);
            assert!(grade == StaffGrade::A || grade == StaffGrade::B);
        }
    }
}
