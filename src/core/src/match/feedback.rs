use crate::club::player::injury::PlayerInjury;
use crate::club::player::player::{Player, PlayerRole};
use crate::club::player::skills::SKILL_KINDS;
use crate::club::player::streak::{PlayerStreak, StreakType};
use crate::club::team::team::Team;
use crate::r#match::game::GameFormat;
use crate::r#match::result::{GameBoxScore, PlayerBoxScoreLine, TeamBoxScore};
use log::{debug, info};
use rand::Rng;

const CHEMISTRY_WIN_BONUS: f32 = 1.5;
const CHEMISTRY_LOSS_PENALTY: f32 = -1.0;

const MORALE_RESULT_SWING: f32 = 2.0;

/// Gap between promised and delivered minutes that players notice
const MINUTES_DEVIATION_THRESHOLD: i16 = 6;
const MINUTES_SHORTED_MORALE_HIT: f32 = 2.0;
const MINUTES_EXTRA_MORALE_BONUS: f32 = 1.0;

const STREAK_MIN_PRIOR_GAMES: u16 = 3;
const STREAK_POINTS_SWING: f32 = 9.0;
/// A quiet night off the bench is not a cold streak
const COLD_STREAK_MIN_MINUTES: f32 = 12.0;

const GLUE_GUY_MIN_MINUTES: f32 = 15.0;
const GLUE_GUY_CHEMISTRY_BONUS: f32 = 0.8;
const VOLUME_SCORER_MIN_ATTEMPTS: u16 = 15;
const VOLUME_SCORER_BRICK_PCT: f32 = 0.38;
const VOLUME_SCORER_CHEMISTRY_HIT: f32 = -1.2;

const FAMILIARITY_PER_GAME: f32 = 0.5;

/// Injury rolls only apply to meaningful participation
const INJURY_MINUTES_GATE: f32 = 8.0;
const MEDICAL_PROTECTION_SCALE: f32 = 0.01;

const PROGRESSION_BASE_CHANCE: f32 = 0.08;
const PROGRESSION_GAP_SCALE: f32 = 0.012;
const PROGRESSION_ROLLS: u8 = 2;

/// Applies the aftermath of a completed game to both rosters: morale and
/// streaks, team chemistry, season statistics, injury rolls and skill
/// progression. Runs exactly once per game, on completion.
pub struct GameFeedback;

impl GameFeedback {
    pub fn apply<R: Rng>(home: &mut Team, away: &mut Team, box_score: &GameBoxScore, rng: &mut R) {
        let home_won = box_score.home.score > box_score.away.score;

        Self::apply_team(home, &box_score.home, home_won, box_score.format, rng);
        Self::apply_team(away, &box_score.away, !home_won, box_score.format, rng);
    }

    fn apply_team<R: Rng>(
        team: &mut Team,
        team_box: &TeamBoxScore,
        won: bool,
        format: GameFormat,
        rng: &mut R,
    ) {
        let protection = team.staffs.trainer().grade.injury_protection()
            + team.facilities.medical_quality as f32 / 100.0 * MEDICAL_PROTECTION_SCALE;

        let mut chemistry_delta = if won {
            CHEMISTRY_WIN_BONUS
        } else {
            CHEMISTRY_LOSS_PENALTY
        };

        for line in &team_box.lines {
            let Some(player) = team.players.by_id_mut(line.player_id) else {
                continue;
            };

            player.change_morale(if won {
                MORALE_RESULT_SWING
            } else {
                -MORALE_RESULT_SWING
            });

            let deviation = line.minutes.round() as i16 - line.rotation_minutes as i16;
            if deviation <= -MINUTES_DEVIATION_THRESHOLD {
                player.change_morale(-MINUTES_SHORTED_MORALE_HIT);
            } else if deviation >= MINUTES_DEVIATION_THRESHOLD {
                player.change_morale(MINUTES_EXTRA_MORALE_BONUS);
            }

            // streaks compare tonight against the season before tonight
            Self::update_streak(player, line);

            chemistry_delta += Self::role_chemistry(player.role, line);

            Self::accumulate_statistics(player, line);

            let mut injured_now = false;
            if line.minutes > INJURY_MINUTES_GATE {
                let chance = if player.reinjury_risk > 0.0 {
                    PlayerInjury::reinjury_chance(player.reinjury_risk, protection)
                } else {
                    PlayerInjury::game_chance(
                        line.minutes.round() as u8,
                        player.skills.stamina,
                        protection,
                    )
                };

                if rng.random::<f32>() < chance {
                    let injury = PlayerInjury::roll(rng);
                    chemistry_delta -= injury.severity().chemistry_hit();
                    info!("{}: {} went down, {}", team_box.team_name, player.full_name, injury);
                    player.apply_injury(injury);
                    injured_now = true;
                }
            }

            if !injured_now {
                player.decay_reinjury_risk();
                Self::roll_progression(player, line, format, rng);
            }
        }

        team.change_chemistry(chemistry_delta);
        team.change_familiarity(FAMILIARITY_PER_GAME);
        team.game_adjustment = None;
    }

    fn update_streak(player: &mut Player, line: &PlayerBoxScoreLine) {
        if player.statistics.games_played < STREAK_MIN_PRIOR_GAMES {
            player.streak.decay();
            return;
        }

        let baseline = player.statistics.points_per_game();
        let points = line.points as f32;

        if points >= baseline + STREAK_POINTS_SWING {
            player.streak = PlayerStreak::start(StreakType::Hot);
        } else if points <= baseline - STREAK_POINTS_SWING && line.minutes >= COLD_STREAK_MIN_MINUTES
        {
            player.streak = PlayerStreak::start(StreakType::Cold);
        } else {
            player.streak.decay();
        }
    }

    fn role_chemistry(role: PlayerRole, line: &PlayerBoxScoreLine) -> f32 {
        match role {
            PlayerRole::GlueGuy if line.minutes >= GLUE_GUY_MIN_MINUTES => GLUE_GUY_CHEMISTRY_BONUS,
            PlayerRole::VolumeScorer
                if line.field_goals_attempted >= VOLUME_SCORER_MIN_ATTEMPTS
                    && line.field_goal_pct() < VOLUME_SCORER_BRICK_PCT =>
            {
                VOLUME_SCORER_CHEMISTRY_HIT
            }
            _ => 0.0,
        }
    }

    fn accumulate_statistics(player: &mut Player, line: &PlayerBoxScoreLine) {
        let statistics = &mut player.statistics;

        statistics.games_played += 1;
        statistics.minutes += line.minutes.round() as u32;
        statistics.points += line.points as u32;
        statistics.rebounds += line.rebounds as u32;
        statistics.assists += line.assists as u32;
        statistics.steals += line.steals as u32;
        statistics.blocks += line.blocks as u32;
        statistics.turnovers += line.turnovers as u32;
        statistics.field_goals_made += line.field_goals_made as u32;
        statistics.field_goals_attempted += line.field_goals_attempted as u32;
        statistics.three_points_made += line.three_points_made as u32;
        statistics.three_points_attempted += line.three_points_attempted as u32;
        statistics.free_throws_made += line.free_throws_made as u32;
        statistics.free_throws_attempted += line.free_throws_attempted as u32;
    }

    /// Young players close the gap to their potential through game reps.
    /// Court time scales the chance, the cap is hard.
    fn roll_progression<R: Rng>(
        player: &mut Player,
        line: &PlayerBoxScoreLine,
        format: GameFormat,
        rng: &mut R,
    ) {
        if line.minutes <= 0.0 || player.overall() >= player.potential {
            return;
        }

        let gap = (player.potential - player.overall()) as f32;
        let share = line.minutes / format.game_minutes() as f32;
        let chance =
            (PROGRESSION_BASE_CHANCE + PROGRESSION_GAP_SCALE * gap) * (share * 2.0).clamp(0.5, 1.5);

        for _ in 0..PROGRESSION_ROLLS {
            if player.overall() >= player.potential {
                break;
            }

            if rng.random::<f32>() < chance {
                let kind = SKILL_KINDS[rng.random_range(0..SKILL_KINDS.len())];
                player.skills.increase(kind, 1);
                debug!("{} improved {:?}", player.full_name, kind);
            }
        }
    }
}
