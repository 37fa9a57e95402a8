use crate::r#match::engine::context::{CourtPlayer, TeamContext};
use crate::r#match::engine::selection::WeightedDraw;
use crate::r#match::game::TeamSide;
use crate::r#match::result::{GameBoxScore, PlayByPlayEvent, PlayKind};
use log::debug;
use rand::Rng;

pub const CRUNCH_CLOCK_SECS: f32 = 180.0;
pub const CRUNCH_MARGIN: i32 = 5;

const SHOOTER_WEIGHT_SCALE: f32 = 8.0;
const AND_ONE_BASE_CHANCE: f32 = 0.05;
const BLOCK_BASE_CHANCE: f32 = 0.06;
const FOUL_BASE_CHANCE: f32 = 0.115;
const ASSIST_CHANCE: f32 = 0.60;
const STEAL_CREDIT_CHANCE: f32 = 0.45;
const TURNOVER_FLOOR_PCT: f32 = 2.0;

/// How far a single engine run is allowed to go.
pub struct RunPlan {
    /// Possession count (within the shared budget) at which this run stops.
    pub run_until: u16,
    /// Crunch-time interrupts only fire on live full-game user runs.
    pub crunch_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineVerdict {
    RunComplete,
    CrunchInterrupt,
}

pub struct GameEngine;

impl GameEngine {
    /// Runs possessions until the plan target is reached or a crunch-time
    /// interrupt fires. The box score carries all mutable game state, so a
    /// run can stop and a later run can pick up where it left off.
    pub fn play<R: Rng>(
        home: &TeamContext,
        away: &TeamContext,
        box_score: &mut GameBoxScore,
        plan: &RunPlan,
        rng: &mut R,
    ) -> EngineVerdict {
        let tick_secs =
            box_score.format.game_seconds() / box_score.possession_budget.max(1) as f32;

        while box_score.possessions_run < plan.run_until {
            box_score.clock_remaining_secs =
                (box_score.clock_remaining_secs - tick_secs).max(0.0);

            if plan.crunch_enabled
                && box_score.clock_remaining_secs <= CRUNCH_CLOCK_SECS
                && box_score.score_differential().abs() <= CRUNCH_MARGIN
            {
                debug!(
                    "crunch time in {}: {:.0}s left, differential {}",
                    box_score.game_id,
                    box_score.clock_remaining_secs,
                    box_score.score_differential()
                );
                return EngineVerdict::CrunchInterrupt;
            }

            let (offense, defense) = match box_score.possession_side {
                TeamSide::Home => (home, away),
                TeamSide::Away => (away, home),
            };

            box_score.possession_side = Self::resolve_possession(offense, defense, box_score, rng);
            box_score.possessions_run += 1;
        }

        EngineVerdict::RunComplete
    }

    /// Resolves one possession and returns the side with the ball next.
    fn resolve_possession<R: Rng>(
        offense: &TeamContext,
        defense: &TeamContext,
        box_score: &mut GameBoxScore,
        rng: &mut R,
    ) -> TeamSide {
        let contest = offense.contest_factor(defense);
        let clock = box_score.clock_remaining_secs;

        // ball flips unless an offensive rebound keeps it alive
        let mut next_side = defense.side;

        let shooter_weights: Vec<f32> = offense
            .players
            .iter()
            .map(|player| {
                player.minutes_share
                    * SHOOTER_WEIGHT_SCALE
                    * if player.is_starter { 1.2 } else { 0.8 }
                    * if player.is_focus { 1.35 } else { 1.0 }
            })
            .collect();

        let Some(shooter_idx) = WeightedDraw::pick(rng, &shooter_weights) else {
            // nobody on the floor, dead possession
            return next_side;
        };
        let shooter = &offense.players[shooter_idx];

        let three_rate = (0.30
            + (shooter.skills.outside_scoring as f32 - shooter.skills.inside_scoring as f32)
                / 300.0
            + offense.three_rate_shift)
            .clamp(0.18, 0.48);
        let is_three = rng.random::<f32>() < three_rate;

        let shot_skill = if is_three {
            shooter.skills.outside_scoring
        } else {
            shooter.skills.inside_scoring
        } as f32;

        let mut make_probability = 0.22
            + 0.30 * shot_skill / 100.0
            + 0.10 * shooter.overall as f32 / 100.0
            + 0.06 * shooter.minutes_share;
        if shooter.is_focus {
            make_probability += 0.02;
        }
        if is_three {
            make_probability *= 0.70;
        }

        let made = rng.random::<f32>() * contest < make_probability;

        {
            let offense_box = box_score.team_mut(offense.side);
            if let Some(line) = offense_box.line_mut(shooter.player_id) {
                line.field_goals_attempted += 1;
                if is_three {
                    line.three_points_attempted += 1;
                }
            }
        }

        if made {
            let points = if is_three { 3 } else { 2 };

            {
                let offense_box = box_score.team_mut(offense.side);
                if let Some(line) = offense_box.line_mut(shooter.player_id) {
                    line.field_goals_made += 1;
                    if is_three {
                        line.three_points_made += 1;
                    }
                }
                offense_box.add_points(shooter.player_id, points);
            }

            let verb = if is_three {
                "drains a three"
            } else {
                "scores inside"
            };
            box_score.push_event(PlayByPlayEvent::new(
                PlayKind::Score,
                offense.team_id,
                shooter.player_id,
                format!("{} {}", shooter.player_name, verb),
                clock,
            ));

            if rng.random::<f32>() < AND_ONE_BASE_CHANCE * contest {
                Self::shoot_free_throws(shooter, offense, 1, box_score, rng);
            }

            if rng.random::<f32>() < ASSIST_CHANCE {
                Self::credit_assist(offense, shooter_idx, box_score, rng, clock);
            }
        } else {
            if rng.random::<f32>() < BLOCK_BASE_CHANCE * contest {
                let block_weights: Vec<f32> = defense
                    .players
                    .iter()
                    .map(|p| p.minutes_share * p.skills.interior_defense as f32)
                    .collect();

                if let Some(idx) = WeightedDraw::pick(rng, &block_weights) {
                    let defense_box = box_score.team_mut(defense.side);
                    if let Some(line) = defense_box.line_mut(defense.players[idx].player_id) {
                        line.blocks += 1;
                    }
                }
            }

            let foul_probability =
                (FOUL_BASE_CHANCE * contest + defense.foul_shift / 100.0).clamp(0.02, 0.30);

            if rng.random::<f32>() < foul_probability {
                let attempts = if is_three { 3 } else { 2 };
                Self::shoot_free_throws(shooter, offense, attempts, box_score, rng);
                // possession flips after the last attempt
            } else {
                next_side = Self::resolve_rebound(offense, defense, box_score, rng, clock);
            }
        }

        // Turnover roll, independent of the shot outcome. Stats above stand;
        // only the possession flip is overridden.
        let mut turnover_pct = 10.0 - offense.offense_power / 20.0
            - offense.familiarity / 100.0 * 2.0
            + offense.own_turnover_shift
            + defense.opponent_turnover_shift;
        if offense.captain_in_lineup {
            turnover_pct -= 1.0;
        }
        let turnover_pct = turnover_pct.max(TURNOVER_FLOOR_PCT);

        if rng.random::<f32>() * 100.0 < turnover_pct {
            let victim_weights: Vec<f32> = offense
                .players
                .iter()
                .map(|p| (1.0 - p.minutes_share * 2.5).max(0.15))
                .collect();

            if let Some(idx) = WeightedDraw::pick(rng, &victim_weights) {
                let victim = &offense.players[idx];

                {
                    let offense_box = box_score.team_mut(offense.side);
                    if let Some(line) = offense_box.line_mut(victim.player_id) {
                        line.turnovers += 1;
                    }
                }

                box_score.push_event(PlayByPlayEvent::new(
                    PlayKind::Turnover,
                    offense.team_id,
                    victim.player_id,
                    format!("{} turns it over", victim.player_name),
                    clock,
                ));

                if rng.random::<f32>() < STEAL_CREDIT_CHANCE {
                    let steal_weights: Vec<f32> = defense
                        .players
                        .iter()
                        .map(|p| p.minutes_share * p.skills.perimeter_defense as f32)
                        .collect();

                    if let Some(defender_idx) = WeightedDraw::pick(rng, &steal_weights) {
                        let defense_box = box_score.team_mut(defense.side);
                        if let Some(line) =
                            defense_box.line_mut(defense.players[defender_idx].player_id)
                        {
                            line.steals += 1;
                        }
                    }
                }
            }

            next_side = defense.side;
        }

        next_side
    }

    fn credit_assist<R: Rng>(
        offense: &TeamContext,
        shooter_idx: usize,
        box_score: &mut GameBoxScore,
        rng: &mut R,
        clock: f32,
    ) {
        let assist_weights: Vec<f32> = offense
            .players
            .iter()
            .enumerate()
            .map(|(idx, p)| {
                if idx == shooter_idx {
                    0.0
                } else {
                    p.minutes_share * p.skills.playmaking as f32
                }
            })
            .collect();

        // lone shooter on the floor, nobody to credit
        if assist_weights.iter().sum::<f32>() <= 0.0 {
            return;
        }

        if let Some(idx) = WeightedDraw::pick(rng, &assist_weights) {
            let passer = &offense.players[idx];

            {
                let offense_box = box_score.team_mut(offense.side);
                if let Some(line) = offense_box.line_mut(passer.player_id) {
                    line.assists += 1;
                }
            }

            box_score.push_event(PlayByPlayEvent::new(
                PlayKind::Assist,
                offense.team_id,
                passer.player_id,
                format!("assisted by {}", passer.player_name),
                clock,
            ));
        }
    }

    fn resolve_rebound<R: Rng>(
        offense: &TeamContext,
        defense: &TeamContext,
        box_score: &mut GameBoxScore,
        rng: &mut R,
        clock: f32,
    ) -> TeamSide {
        // both teams compete on equal footing, no extra defensive weighting
        let mut candidates: Vec<(TeamSide, u32, &CourtPlayer)> =
            Vec::with_capacity(offense.players.len() + defense.players.len());
        for player in &offense.players {
            candidates.push((offense.side, offense.team_id, player));
        }
        for player in &defense.players {
            candidates.push((defense.side, defense.team_id, player));
        }

        let rebound_weights: Vec<f32> = candidates
            .iter()
            .map(|(_, _, p)| (p.skills.rebounding as f32 / 100.0 + 0.3) * p.minutes_share)
            .collect();

        let Some(idx) = WeightedDraw::pick(rng, &rebound_weights) else {
            return defense.side;
        };
        let (side, team_id, rebounder) = candidates[idx];

        {
            let team_box = box_score.team_mut(side);
            if let Some(line) = team_box.line_mut(rebounder.player_id) {
                line.rebounds += 1;
            }
        }

        box_score.push_event(PlayByPlayEvent::new(
            PlayKind::Rebound,
            team_id,
            rebounder.player_id,
            format!("{} grabs the rebound", rebounder.player_name),
            clock,
        ));

        side
    }

    fn shoot_free_throws<R: Rng>(
        shooter: &CourtPlayer,
        offense: &TeamContext,
        attempts: u8,
        box_score: &mut GameBoxScore,
        rng: &mut R,
    ) {
        let ft_probability = 0.50 + 0.40 * shooter.skills.free_throw() / 100.0;

        for attempt in 1..=attempts {
            let clock = box_score.clock_remaining_secs;
            let made = rng.random::<f32>() < ft_probability;

            {
                let team_box = box_score.team_mut(offense.side);
                if let Some(line) = team_box.line_mut(shooter.player_id) {
                    line.free_throws_attempted += 1;
                    if made {
                        line.free_throws_made += 1;
                    }
                }
                if made {
                    team_box.add_points(shooter.player_id, 1);
                }
            }

            let verb = if made { "makes" } else { "misses" };
            box_score.push_event(PlayByPlayEvent::new(
                PlayKind::FreeThrow,
                offense.team_id,
                shooter.player_id,
                format!(
                    "{} {} free throw {} of {}",
                    shooter.player_name, verb, attempt, attempts
                ),
                clock,
            ));
        }
    }
}
