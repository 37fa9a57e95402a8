use crate::club::team::team::Team;
use crate::r#match::game::GameFormat;

const MINUTES_SHARE_FLOOR: f32 = 0.05;
const STARTER_WEIGHT: f32 = 1.4;
const BENCH_WEIGHT: f32 = 0.8;
const CAPTAIN_WEIGHT: f32 = 1.1;
const CAPTAIN_FLAT_BONUS: f32 = 2.5;

/// Composite team strength for a single game. Recomputed before every run
/// because rotation minutes and availability change game to game.
#[derive(Debug, Clone, Copy)]
pub struct TeamRatings {
    pub offense: f32,
    pub defense: f32,
    pub tempo: f32,
}

pub struct RatingAggregator;

impl RatingAggregator {
    pub fn aggregate(team: &Team, format: GameFormat) -> TeamRatings {
        let budget = format.team_minutes_budget() as f32;

        let mut offense_sum = 0.0f32;
        let mut defense_sum = 0.0f32;
        let mut tempo_sum = 0.0f32;
        let mut weight_sum = 0.0f32;

        for player in team.players.available_players() {
            let minutes_share = player.rotation_minutes as f32 / budget;

            let mut weight = minutes_share.max(MINUTES_SHARE_FLOOR);
            weight *= if player.is_starter() {
                STARTER_WEIGHT
            } else {
                BENCH_WEIGHT
            };
            if team.team_captain_id == Some(player.id) {
                weight *= CAPTAIN_WEIGHT;
            }

            let skills = player.effective_skills();

            offense_sum += skills.offense_sum() as f32 * weight;
            defense_sum += skills.defense_sum() as f32 * weight;
            tempo_sum += skills.playmaking as f32 * weight;
            weight_sum += weight;
        }

        let denominator = weight_sum.max(1.0);

        let mut ratings = TeamRatings {
            offense: offense_sum / denominator,
            defense: defense_sum / denominator,
            tempo: tempo_sum / denominator,
        };

        if let Some(captain) = team.captain() {
            if captain.is_available() {
                ratings.offense += CAPTAIN_FLAT_BONUS;
                ratings.defense += CAPTAIN_FLAT_BONUS;
            }
        }

        ratings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::injury::{InjuryType, PlayerInjury};
    use crate::club::player::player::{Player, PlayerCollection};
    use crate::club::player::position::CourtPosition;
    use crate::club::player::skills::BasketballSkills;
    use crate::club::staff::staff::StaffCollection;
    use crate::shared::fullname::FullName;
    use chrono::NaiveDate;

    fn generate_test_player(id: u32, level: u8, minutes: u8, starter: bool) -> Player {
        let mut builder = Player::builder()
            .id(id)
            .full_name(FullName::with_full(
                String::from("Test"),
                format!("Player{}", id),
            ))
            .birth_date(NaiveDate::from_ymd_opt(2004, 6, 1).unwrap())
            .position(CourtPosition::SmallForward)
            .skills(BasketballSkills::with_level(level));

        if starter {
            builder = builder.starter_position(CourtPosition::SmallForward);
        }

        let mut player = builder.build().unwrap();
        player.rotation_minutes = minutes;

        player
    }

    fn generate_test_team(levels: &[(u8, u8, bool)]) -> Team {
        let players = levels
            .iter()
            .enumerate()
            .map(|(idx, &(level, minutes, starter))| {
                generate_test_player(idx as u32 + 1, level, minutes, starter)
            })
            .collect();

        Team::builder()
            .id(1)
            .name(String::from("Test State"))
            .abbreviation(String::from("TST"))
            .players(PlayerCollection::new(players))
            .staffs(StaffCollection::new(Vec::new()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_stronger_roster_rates_higher() {
        let strong = generate_test_team(&[(85, 30, true), (80, 28, true), (78, 26, false)]);
        let weak = generate_test_team(&[(55, 30, true), (52, 28, true), (50, 26, false)]);

        let strong_ratings = RatingAggregator::aggregate(&strong, GameFormat::College);
        let weak_ratings = RatingAggregator::aggregate(&weak, GameFormat::College);

        assert!(strong_ratings.offense > weak_ratings.offense);
        assert!(strong_ratings.defense > weak_ratings.defense);
        assert!(strong_ratings.tempo > weak_ratings.tempo);
    }

    #[test]
    fn test_captain_adds_flat_bonus() {
        let team = generate_test_team(&[(70, 30, true), (70, 28, false)]);

        let without_captain = RatingAggregator::aggregate(&team, GameFormat::College);

        let mut with_captain_team = generate_test_team(&[(70, 30, true), (70, 28, false)]);
        with_captain_team.team_captain_id = Some(1);
        let with_captain = RatingAggregator::aggregate(&with_captain_team, GameFormat::College);

        // flat bonus dominates the small captain weight shift
        assert!(with_captain.offense > without_captain.offense + 2.0);
        assert!(with_captain.defense > without_captain.defense + 2.0);
    }

    #[test]
    fn test_injured_captain_gives_no_bonus() {
        let mut team = generate_test_team(&[(70, 30, true), (70, 28, false)]);
        team.team_captain_id = Some(1);
        team.players.by_id_mut(1).unwrap().injury =
            Some(PlayerInjury::new(InjuryType::AnkleRoll, 2));

        let healthy_captain_team = {
            let mut t = generate_test_team(&[(70, 30, true), (70, 28, false)]);
            t.team_captain_id = Some(1);
            t
        };

        let injured = RatingAggregator::aggregate(&team, GameFormat::College);
        let healthy = RatingAggregator::aggregate(&healthy_captain_team, GameFormat::College);

        assert!(injured.offense < healthy.offense);
    }

    #[test]
    fn test_empty_roster_rates_zero() {
        let team = generate_test_team(&[]);

        let ratings = RatingAggregator::aggregate(&team, GameFormat::College);

        assert_eq!(ratings.offense, 0.0);
        assert_eq!(ratings.defense, 0.0);
        assert_eq!(ratings.tempo, 0.0);
    }
}
