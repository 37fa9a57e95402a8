use rand::Rng;
use serde::Serialize;

/// Sentinel duration for season-ending injuries
pub const SEASON_ENDING_WEEKS: u8 = 52;

pub const MIN_GAME_INJURY_CHANCE: f32 = 0.005;
pub const MAX_GAME_INJURY_CHANCE: f32 = 0.28;
pub const MIN_REINJURY_CHANCE: f32 = 0.01;
pub const MAX_REINJURY_CHANCE: f32 = 0.40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InjurySeverity {
    Minor,
    Moderate,
    Severe,
}

impl InjurySeverity {
    pub fn morale_hit(&self) -> f32 {
        match self {
            InjurySeverity::Minor => 4.0,
            InjurySeverity::Moderate => 8.0,
            InjurySeverity::Severe => 15.0,
        }
    }

    pub fn chemistry_hit(&self) -> f32 {
        match self {
            InjurySeverity::Minor => 1.0,
            InjurySeverity::Moderate => 2.5,
            InjurySeverity::Severe => 5.0,
        }
    }

    /// Lingering risk carried after the player returns
    pub fn reinjury_risk(&self) -> f32 {
        match self {
            InjurySeverity::Minor => 0.05,
            InjurySeverity::Moderate => 0.12,
            InjurySeverity::Severe => 0.20,
        }
    }

    pub fn is_season_ending(&self) -> bool {
        matches!(self, InjurySeverity::Severe)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InjuryType {
    // Minor (1-2 weeks)
    AnkleRoll,
    KneeSoreness,
    BackTightness,
    ThighBruise,
    FingerSprain,
    // Moderate (3-6 weeks)
    HighAnkleSprain,
    HamstringStrain,
    GroinStrain,
    CalfStrain,
    WristSprain,
    StressReaction,
    // Severe (season-ending)
    AclTear,
    AchillesRupture,
    PatellarTendonRupture,
    BrokenFoot,
}

impl InjuryType {
    /// Returns (min_weeks, max_weeks) for this injury type
    pub fn duration_range(&self) -> (u8, u8) {
        match self {
            // Minor: 1-2 weeks
            InjuryType::AnkleRoll => (1, 1),
            InjuryType::KneeSoreness => (1, 2),
            InjuryType::BackTightness => (1, 2),
            InjuryType::ThighBruise => (1, 1),
            InjuryType::FingerSprain => (1, 2),
            // Moderate: 3-6 weeks
            InjuryType::HighAnkleSprain => (4, 6),
            InjuryType::HamstringStrain => (3, 5),
            InjuryType::GroinStrain => (3, 5),
            InjuryType::CalfStrain => (3, 4),
            InjuryType::WristSprain => (3, 6),
            InjuryType::StressReaction => (4, 6),
            // Severe: the season is over
            InjuryType::AclTear
            | InjuryType::AchillesRupture
            | InjuryType::PatellarTendonRupture
            | InjuryType::BrokenFoot => (SEASON_ENDING_WEEKS, SEASON_ENDING_WEEKS),
        }
    }

    pub fn severity(&self) -> InjurySeverity {
        match self {
            InjuryType::AnkleRoll
            | InjuryType::KneeSoreness
            | InjuryType::BackTightness
            | InjuryType::ThighBruise
            | InjuryType::FingerSprain => InjurySeverity::Minor,

            InjuryType::HighAnkleSprain
            | InjuryType::HamstringStrain
            | InjuryType::GroinStrain
            | InjuryType::CalfStrain
            | InjuryType::WristSprain
            | InjuryType::StressReaction => InjurySeverity::Moderate,

            InjuryType::AclTear
            | InjuryType::AchillesRupture
            | InjuryType::PatellarTendonRupture
            | InjuryType::BrokenFoot => InjurySeverity::Severe,
        }
    }

    pub fn random_for_severity<R: Rng>(rng: &mut R, severity: InjurySeverity) -> InjuryType {
        match severity {
            InjurySeverity::Minor => match rng.random_range(0..5u8) {
                0 => InjuryType::AnkleRoll,
                1 => InjuryType::KneeSoreness,
                2 => InjuryType::BackTightness,
                3 => InjuryType::ThighBruise,
                _ => InjuryType::FingerSprain,
            },
            InjurySeverity::Moderate => match rng.random_range(0..6u8) {
                0 => InjuryType::HighAnkleSprain,
                1 => InjuryType::HamstringStrain,
                2 => InjuryType::GroinStrain,
                3 => InjuryType::CalfStrain,
                4 => InjuryType::WristSprain,
                _ => InjuryType::StressReaction,
            },
            InjurySeverity::Severe => match rng.random_range(0..4u8) {
                0 => InjuryType::AclTear,
                1 => InjuryType::AchillesRupture,
                2 => InjuryType::PatellarTendonRupture,
                _ => InjuryType::BrokenFoot,
            },
        }
    }
}

impl std::fmt::Display for InjuryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InjuryType::AnkleRoll => write!(f, "Ankle Roll"),
            InjuryType::KneeSoreness => write!(f, "Knee Soreness"),
            InjuryType::BackTightness => write!(f, "Back Tightness"),
            InjuryType::ThighBruise => write!(f, "Thigh Bruise"),
            InjuryType::FingerSprain => write!(f, "Finger Sprain"),
            InjuryType::HighAnkleSprain => write!(f, "High Ankle Sprain"),
            InjuryType::HamstringStrain => write!(f, "Hamstring Strain"),
            InjuryType::GroinStrain => write!(f, "Groin Strain"),
            InjuryType::CalfStrain => write!(f, "Calf Strain"),
            InjuryType::WristSprain => write!(f, "Wrist Sprain"),
            InjuryType::StressReaction => write!(f, "Stress Reaction"),
            InjuryType::AclTear => write!(f, "ACL Tear"),
            InjuryType::AchillesRupture => write!(f, "Achilles Rupture"),
            InjuryType::PatellarTendonRupture => write!(f, "Patellar Tendon Rupture"),
            InjuryType::BrokenFoot => write!(f, "Broken Foot"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerInjury {
    pub injury_type: InjuryType,
    pub weeks_remaining: u8,
}

impl PlayerInjury {
    pub fn new(injury_type: InjuryType, weeks_remaining: u8) -> Self {
        PlayerInjury {
            injury_type,
            weeks_remaining,
        }
    }

    pub fn severity(&self) -> InjurySeverity {
        self.injury_type.severity()
    }

    /// Per-game injury chance for a healthy player.
    /// High minutes and a stamina deficit raise it, `protection`
    /// (trainer grade plus medical facilities) lowers it.
    pub fn game_chance(minutes: u8, stamina: u8, protection: f32) -> f32 {
        let load = minutes as f32 * 0.0006;
        let fatigue = (60.0 - stamina as f32).max(0.0) * 0.0008;

        (load + fatigue - protection).clamp(MIN_GAME_INJURY_CHANCE, MAX_GAME_INJURY_CHANCE)
    }

    /// Players carrying a lingering risk break down more easily
    pub fn reinjury_chance(reinjury_risk: f32, protection: f32) -> f32 {
        (0.05 + reinjury_risk - protection).clamp(MIN_REINJURY_CHANCE, MAX_REINJURY_CHANCE)
    }

    /// Severity split: 65% minor, 25% moderate, 10% severe
    pub fn roll<R: Rng>(rng: &mut R) -> PlayerInjury {
        let severity_roll: f32 = rng.random();

        let severity = if severity_roll < 0.65 {
            InjurySeverity::Minor
        } else if severity_roll < 0.90 {
            InjurySeverity::Moderate
        } else {
            InjurySeverity::Severe
        };

        let injury_type = InjuryType::random_for_severity(rng, severity);
        let (min_weeks, max_weeks) = injury_type.duration_range();

        let weeks = if min_weeks >= max_weeks {
            min_weeks
        } else {
            rng.random_range(min_weeks..=max_weeks)
        };

        PlayerInjury::new(injury_type, weeks)
    }
}

impl std::fmt::Display for PlayerInjury {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} weeks)", self.injury_type, self.weeks_remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_injury_duration_ranges() {
        assert_eq!(InjuryType::AnkleRoll.duration_range(), (1, 1));
        assert_eq!(InjuryType::KneeSoreness.duration_range(), (1, 2));
        assert_eq!(InjuryType::HamstringStrain.duration_range(), (3, 5));
        assert_eq!(InjuryType::HighAnkleSprain.duration_range(), (4, 6));
        assert_eq!(InjuryType::AclTear.duration_range(), (52, 52));
        assert_eq!(InjuryType::AchillesRupture.duration_range(), (52, 52));
    }

    #[test]
    fn test_injury_severity() {
        assert_eq!(InjuryType::AnkleRoll.severity(), InjurySeverity::Minor);
        assert_eq!(InjuryType::ThighBruise.severity(), InjurySeverity::Minor);
        assert_eq!(InjuryType::HamstringStrain.severity(), InjurySeverity::Moderate);
        assert_eq!(InjuryType::WristSprain.severity(), InjurySeverity::Moderate);
        assert_eq!(InjuryType::StressReaction.severity(), InjurySeverity::Moderate);
        assert_eq!(InjuryType::AclTear.severity(), InjurySeverity::Severe);
        assert_eq!(InjuryType::BrokenFoot.severity(), InjurySeverity::Severe);
    }

    #[test]
    fn test_severe_injuries_end_the_season() {
        assert!(InjurySeverity::Severe.is_season_ending());
        assert!(!InjurySeverity::Moderate.is_season_ending());

        let (min_weeks, max_weeks) = InjuryType::PatellarTendonRupture.duration_range();
        assert_eq!(min_weeks, SEASON_ENDING_WEEKS);
        assert_eq!(max_weeks, SEASON_ENDING_WEEKS);
    }

    #[test]
    fn test_game_chance_clamps() {
        // Well protected low-minutes player floors out
        let low = PlayerInjury::game_chance(9, 95, 0.03);
        assert_eq!(low, MIN_GAME_INJURY_CHANCE);

        // Heavy minutes with zero stamina stays inside the ceiling
        let high = PlayerInjury::game_chance(48, 0, 0.0);
        assert!(high <= MAX_GAME_INJURY_CHANCE);
        assert!(high > low);
    }

    #[test]
    fn test_game_chance_rises_with_minutes() {
        let short = PlayerInjury::game_chance(12, 70, 0.0);
        let long = PlayerInjury::game_chance(38, 70, 0.0);

        assert!(long > short);
    }

    #[test]
    fn test_reinjury_chance_exceeds_base_chance() {
        let base = PlayerInjury::game_chance(30, 70, 0.005);
        let reinjury = PlayerInjury::reinjury_chance(0.12, 0.005);

        assert!(reinjury > base);
        assert!(reinjury <= MAX_REINJURY_CHANCE);
    }

    #[test]
    fn test_roll_weeks_within_type_range() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let injury = PlayerInjury::roll(&mut rng);
            let (min_weeks, max_weeks) = injury.injury_type.duration_range();

            assert!(injury.weeks_remaining >= min_weeks);
            assert!(injury.weeks_remaining <= max_weeks);
        }
    }

    #[test]
    fn test_roll_severity_distribution_leans_minor() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut minor = 0;
        let mut severe = 0;

        for _ in 0..1000 {
            match PlayerInjury::roll(&mut rng).severity() {
                InjurySeverity::Minor => minor += 1,
                InjurySeverity::Severe => severe += 1,
                InjurySeverity::Moderate => {}
            }
        }

        assert!(minor > 500);
        assert!(severe < 200);
        assert!(minor > severe);
    }

    #[test]
    fn test_display_includes_weeks() {
        let injury = PlayerInjury::new(InjuryType::HamstringStrain, 4);

        assert_eq!(format!("{}", injury), "Hamstring Strain (4 weeks)");
    }
}
