use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CourtPosition {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
}

pub const COURT_POSITIONS: [CourtPosition; 5] = [
    CourtPosition::PointGuard,
    CourtPosition::ShootingGuard,
    CourtPosition::SmallForward,
    CourtPosition::PowerForward,
    CourtPosition::Center,
];

impl CourtPosition {
    pub fn get_short_name(&self) -> &'static str {
        match self {
            CourtPosition::PointGuard => "PG",
            CourtPosition::ShootingGuard => "SG",
            CourtPosition::SmallForward => "SF",
            CourtPosition::PowerForward => "PF",
            CourtPosition::Center => "C",
        }
    }

    pub fn is_guard(&self) -> bool {
        matches!(
            self,
            CourtPosition::PointGuard | CourtPosition::ShootingGuard
        )
    }

    pub fn is_big(&self) -> bool {
        matches!(self, CourtPosition::PowerForward | CourtPosition::Center)
    }
}

impl Display for CourtPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CourtPosition::PointGuard => write!(f, "Point Guard"),
            CourtPosition::ShootingGuard => write!(f, "Shooting Guard"),
            CourtPosition::SmallForward => write!(f, "Small Forward"),
            CourtPosition::PowerForward => write!(f, "Power Forward"),
            CourtPosition::Center => write!(f, "Center"),
        }
    }
}

impl FromStr for CourtPosition {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PG" => Ok(CourtPosition::PointGuard),
            "SG" => Ok(CourtPosition::ShootingGuard),
            "SF" => Ok(CourtPosition::SmallForward),
            "PF" => Ok(CourtPosition::PowerForward),
            "C" => Ok(CourtPosition::Center),
            _ => Err(format!("unknown position: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names_round_trip() {
        for position in COURT_POSITIONS {
            let parsed = CourtPosition::from_str(position.get_short_name()).unwrap();
            assert_eq!(parsed, position);
        }
    }

    #[test]
    fn test_unknown_position_is_rejected() {
        assert!(CourtPosition::from_str("GK").is_err());
    }

    #[test]
    fn test_position_groups() {
        assert!(CourtPosition::PointGuard.is_guard());
        assert!(!CourtPosition::Center.is_guard());
        assert!(CourtPosition::Center.is_big());
        assert!(!CourtPosition::SmallForward.is_big());
    }

    #[test]
    fn test_display_full_names() {
        assert_eq!(format!("{}", CourtPosition::PointGuard), "Point Guard");
        assert_eq!(format!("{}", CourtPosition::Center), "Center");
    }
}
