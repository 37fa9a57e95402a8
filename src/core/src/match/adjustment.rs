use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// One-game coaching call. Staged on the team before tipoff or handed in
/// with the options of a crunch-time restart; cleared by post-game feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameAdjustment {
    FocusInside,
    FocusOutside,
    AggressiveDefense,
    ConservativeDefense,
    TempoPush,
    TempoSlow,
}

impl GameAdjustment {
    pub fn offense_power_delta(&self) -> f32 {
        match self {
            GameAdjustment::FocusInside | GameAdjustment::FocusOutside => 1.0,
            _ => 0.0,
        }
    }

    pub fn defense_power_delta(&self) -> f32 {
        match self {
            GameAdjustment::AggressiveDefense => 2.0,
            GameAdjustment::ConservativeDefense => -1.0,
            _ => 0.0,
        }
    }

    /// Shift applied to the issuing team's three point attempt rate.
    pub fn three_rate_shift(&self) -> f32 {
        match self {
            GameAdjustment::FocusInside => -0.15,
            GameAdjustment::FocusOutside => 0.15,
            _ => 0.0,
        }
    }

    /// Percentage-point shift on the issuing team's own turnover chance.
    pub fn own_turnover_shift(&self) -> f32 {
        match self {
            GameAdjustment::TempoPush => 0.5,
            GameAdjustment::TempoSlow => -0.5,
            _ => 0.0,
        }
    }

    /// Percentage-point shift forced onto the opponent's turnover chance.
    pub fn opponent_turnover_shift(&self) -> f32 {
        match self {
            GameAdjustment::AggressiveDefense => 1.5,
            GameAdjustment::ConservativeDefense => -1.0,
            _ => 0.0,
        }
    }

    /// Percentage-point shift on the issuing team's shooting-foul chance
    /// while defending.
    pub fn own_foul_shift(&self) -> f32 {
        match self {
            GameAdjustment::AggressiveDefense => 1.5,
            GameAdjustment::ConservativeDefense => -1.5,
            _ => 0.0,
        }
    }

    /// Possession budget shift, applied once when a fresh game is set up.
    pub fn budget_shift(&self) -> i16 {
        match self {
            GameAdjustment::TempoPush => 4,
            GameAdjustment::TempoSlow => -4,
            _ => 0,
        }
    }
}

impl Display for GameAdjustment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            GameAdjustment::FocusInside => write!(f, "Focus Inside"),
            GameAdjustment::FocusOutside => write!(f, "Focus Outside"),
            GameAdjustment::AggressiveDefense => write!(f, "Aggressive Defense"),
            GameAdjustment::ConservativeDefense => write!(f, "Conservative Defense"),
            GameAdjustment::TempoPush => write!(f, "Push the Tempo"),
            GameAdjustment::TempoSlow => write!(f, "Slow It Down"),
        }
    }
}

impl FromStr for GameAdjustment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "focus_inside" => Ok(GameAdjustment::FocusInside),
            "focus_outside" => Ok(GameAdjustment::FocusOutside),
            "aggressive_defense" => Ok(GameAdjustment::AggressiveDefense),
            "conservative_defense" => Ok(GameAdjustment::ConservativeDefense),
            "tempo_push" => Ok(GameAdjustment::TempoPush),
            "tempo_slow" => Ok(GameAdjustment::TempoSlow),
            _ => Err(format!("unknown game adjustment: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_adjustments_shift_shot_mix_not_defense() {
        assert_eq!(GameAdjustment::FocusInside.three_rate_shift(), -0.15);
        assert_eq!(GameAdjustment::FocusOutside.three_rate_shift(), 0.15);
        assert_eq!(GameAdjustment::FocusInside.defense_power_delta(), 0.0);
        assert_eq!(GameAdjustment::FocusInside.offense_power_delta(), 1.0);
    }

    #[test]
    fn test_aggressive_defense_trades_fouls_for_turnovers() {
        let adjustment = GameAdjustment::AggressiveDefense;

        assert_eq!(adjustment.defense_power_delta(), 2.0);
        assert_eq!(adjustment.opponent_turnover_shift(), 1.5);
        assert_eq!(adjustment.own_foul_shift(), 1.5);
        assert_eq!(adjustment.budget_shift(), 0);
    }

    #[test]
    fn test_tempo_adjustments_move_the_budget() {
        assert_eq!(GameAdjustment::TempoPush.budget_shift(), 4);
        assert_eq!(GameAdjustment::TempoSlow.budget_shift(), -4);
        assert_eq!(GameAdjustment::TempoPush.own_turnover_shift(), 0.5);
        assert_eq!(GameAdjustment::TempoSlow.own_turnover_shift(), -0.5);
    }

    #[test]
    fn test_adjustment_parsing() {
        assert_eq!(
            GameAdjustment::from_str("tempo_push").unwrap(),
            GameAdjustment::TempoPush
        );
        assert!(GameAdjustment::from_str("zone_press").is_err());
    }
}
