use std::sync::atomic::{AtomicBool, Ordering};

static STORE_PLAY_LOG_MODE: AtomicBool = AtomicBool::new(true);

pub fn set_play_log_mode(enabled: bool) {
    STORE_PLAY_LOG_MODE.store(enabled, Ordering::SeqCst);
}

pub fn is_play_log_enabled() -> bool {
    STORE_PLAY_LOG_MODE.load(Ordering::SeqCst)
}

pub mod club;
pub mod league;
pub mod r#match;

pub mod shared;
pub mod utils;

// Re-export club items
pub use club::{
    // Player exports
    BasketballSkills, ClassYear, CourtPosition, InjurySeverity, InjuryType, Player,
    PlayerBuilder, PlayerCollection, PlayerGenerator, PlayerInjury, PlayerRole,
    PlayerSeasonStatistics, PlayerStreak, SkillKind, StreakType,
    // Staff exports
    CoachingSkill, Staff, StaffCollection, StaffGenerator, StaffGrade, StaffRole, StaffStub,
    // Team exports
    Team, TeamBuilder, TeamFacilities,
};

// Re-export league items
pub use league::{League, LeagueTable, LeagueTableRow, Schedule, ScheduleItem};

// Re-export match items
pub use r#match::{
    Game, GameAdjustment, GameBoxScore, GameFormat, GameHalf, GameOptions, GameOutcome,
    PartialBoxScore, PlayByPlayEvent, PlayerBoxScoreLine, SuspendedPhase, TeamBoxScore, TeamSide,
};

pub use chrono::NaiveDate;
pub use shared::*;
pub use utils::*;
