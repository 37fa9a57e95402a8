use crate::club::staff::staff::CoachingSkill;
use crate::club::team::team::Team;
use crate::r#match::adjustment::GameAdjustment;
use crate::r#match::engine::{EngineVerdict, GameEngine, RunPlan, TeamContext};
use crate::r#match::feedback::GameFeedback;
use crate::r#match::result::{
    GameBoxScore, PartialBoxScore, PlayByPlayEvent, PlayKind, PlayerBoxScoreLine, SuspendedPhase,
    TeamBoxScore,
};
use crate::r#match::rotation::RotationAllocator;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameFormat {
    College,
    Pro,
}

impl GameFormat {
    pub fn game_minutes(&self) -> u8 {
        match self {
            GameFormat::College => 40,
            GameFormat::Pro => 48,
        }
    }

    pub fn game_seconds(&self) -> f32 {
        self.game_minutes() as f32 * 60.0
    }

    /// Five court slots for the whole game.
    pub fn team_minutes_budget(&self) -> u16 {
        self.game_minutes() as u16 * 5
    }

    pub fn baseline_minutes(&self) -> u8 {
        match self {
            GameFormat::College => 6,
            GameFormat::Pro => 8,
        }
    }

    /// Pro conditioning standards stretch the stamina cap.
    pub fn stamina_scale(&self) -> f32 {
        match self {
            GameFormat::College => 1.0,
            GameFormat::Pro => 1.2,
        }
    }

    /// Minutes ceiling by overall rating tier.
    pub fn tier_cap(&self, overall: u8) -> u8 {
        match self {
            GameFormat::College => match overall {
                95.. => 29,
                90..=94 => 28,
                85..=89 => 27,
                80..=84 => 26,
                75..=79 => 24,
                70..=74 => 22,
                _ => 20,
            },
            GameFormat::Pro => match overall {
                95.. => 38,
                90..=94 => 36,
                85..=89 => 35,
                80..=84 => 33,
                75..=79 => 31,
                70..=74 => 28,
                _ => 25,
            },
        }
    }

    pub fn budget_bounds(&self) -> (u16, u16) {
        match self {
            GameFormat::College => (108, 150),
            GameFormat::Pro => (180, 220),
        }
    }

    /// Total possession budget for both teams, driven by the average of the
    /// two tempo ratings.
    pub fn possession_budget(&self, average_tempo: f32) -> u16 {
        let (base, slope) = match self {
            GameFormat::College => (126.0, 0.5),
            GameFormat::Pro => (196.0, 0.6),
        };

        let raw = (base + (average_tempo - 50.0) * slope).round() as i32;
        let (low, high) = self.budget_bounds();

        raw.clamp(low as i32, high as i32) as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn opponent(&self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameHalf {
    First,
    Second,
}

/// Everything a single call into the resolver can carry. The adjustment
/// targets the user team and overrides whatever that team had staged;
/// coaching skills are one-game effects listed per call.
#[derive(Debug)]
pub struct GameOptions {
    pub game_id: String,
    pub format: GameFormat,
    pub adjustment: Option<GameAdjustment>,
    pub half: Option<GameHalf>,
    pub resume: Option<PartialBoxScore>,
    pub coaching_skills: Vec<(TeamSide, CoachingSkill)>,
}

impl GameOptions {
    pub fn new(game_id: &str, format: GameFormat) -> Self {
        GameOptions {
            game_id: String::from(game_id),
            format,
            adjustment: None,
            half: None,
            resume: None,
            coaching_skills: Vec::new(),
        }
    }

    pub fn adjustment(mut self, adjustment: GameAdjustment) -> Self {
        self.adjustment = Some(adjustment);
        self
    }

    pub fn half(mut self, half: GameHalf) -> Self {
        self.half = Some(half);
        self
    }

    pub fn resume(mut self, partial: PartialBoxScore) -> Self {
        self.resume = Some(partial);
        self
    }

    pub fn coaching_skill(mut self, side: TeamSide, skill: CoachingSkill) -> Self {
        self.coaching_skills.push((side, skill));
        self
    }
}

/// Closed result set: a game either finishes or hands control back at one of
/// the two defined stopping points.
#[derive(Debug)]
pub enum GameOutcome {
    Completed(GameBoxScore),
    SuspendedAtHalftime(PartialBoxScore),
    /// Crunch time reached in a live user game; the second value is the game
    /// clock remaining in minutes.
    SuspendedForDecision(PartialBoxScore, f32),
}

pub struct Game;

impl Game {
    pub fn play(home: &mut Team, away: &mut Team, options: GameOptions) -> GameOutcome {
        Self::play_with_rng(home, away, options, &mut rand::rng())
    }

    /// Same game, reproducible: a fixed seed with the same teams and options
    /// replays the identical possession sequence.
    pub fn play_seeded(
        home: &mut Team,
        away: &mut Team,
        options: GameOptions,
        seed: u64,
    ) -> GameOutcome {
        Self::play_with_rng(home, away, options, &mut StdRng::seed_from_u64(seed))
    }

    pub fn play_with_rng<R: Rng>(
        home: &mut Team,
        away: &mut Team,
        mut options: GameOptions,
        rng: &mut R,
    ) -> GameOutcome {
        match options.resume.take() {
            Some(partial) => Self::resume_run(home, away, partial, options, rng),
            None => Self::fresh_run(home, away, options, rng),
        }
    }

    fn fresh_run<R: Rng>(
        home: &mut Team,
        away: &mut Team,
        options: GameOptions,
        rng: &mut R,
    ) -> GameOutcome {
        let format = options.format;

        RotationAllocator::allocate(home, format);
        RotationAllocator::allocate(away, format);

        Self::stage_user_adjustment(home, away, options.adjustment);

        let (home_context, away_context) =
            Self::build_contexts(home, away, format, &options.coaching_skills, false);

        let average_tempo = (home_context.ratings.tempo + away_context.ratings.tempo) / 2.0;
        let mut budget = format.possession_budget(average_tempo) as i32;
        budget += home
            .game_adjustment
            .map_or(0, |adjustment| adjustment.budget_shift()) as i32;
        budget += away
            .game_adjustment
            .map_or(0, |adjustment| adjustment.budget_shift()) as i32;
        let (low, high) = format.budget_bounds();
        let budget = budget.clamp(low as i32, high as i32) as u16;

        let mut box_score = GameBoxScore::new(
            options.game_id.clone(),
            format,
            Self::build_team_box(home),
            Self::build_team_box(away),
            budget,
        );

        debug!(
            "{}: {} possessions, tempo {:.1}",
            box_score.game_id, budget, average_tempo
        );

        let run_until = match options.half {
            Some(GameHalf::First) => budget / 2,
            _ => budget,
        };
        let crunch_enabled =
            (home.is_user_team || away.is_user_team) && options.half.is_none();

        let plan = RunPlan {
            run_until,
            crunch_enabled,
        };
        let verdict = GameEngine::play(&home_context, &away_context, &mut box_score, &plan, rng);

        match verdict {
            EngineVerdict::CrunchInterrupt => {
                Self::sync_minutes(&mut box_score);
                let minutes_remaining = box_score.clock_remaining_secs / 60.0;
                debug!(
                    "{} suspended for a decision, {:.1} minutes left",
                    box_score.game_id, minutes_remaining
                );
                GameOutcome::SuspendedForDecision(
                    PartialBoxScore::new(box_score, SuspendedPhase::CrunchTime),
                    minutes_remaining,
                )
            }
            EngineVerdict::RunComplete => {
                if options.half == Some(GameHalf::First) {
                    Self::sync_minutes(&mut box_score);
                    GameOutcome::SuspendedAtHalftime(PartialBoxScore::new(
                        box_score,
                        SuspendedPhase::Halftime,
                    ))
                } else {
                    Self::finalize(home, away, box_score, rng)
                }
            }
        }
    }

    fn resume_run<R: Rng>(
        home: &mut Team,
        away: &mut Team,
        partial: PartialBoxScore,
        options: GameOptions,
        rng: &mut R,
    ) -> GameOutcome {
        let PartialBoxScore {
            mut box_score,
            phase,
        } = partial;

        if box_score.format != options.format {
            warn!(
                "{}: resume format differs from options, keeping the game's",
                box_score.game_id
            );
        }
        let format = box_score.format;

        // the partial's lines are the allocation of record
        Self::restore_rotation(home, &box_score.home);
        Self::restore_rotation(away, &box_score.away);

        Self::stage_user_adjustment(home, away, options.adjustment);

        let from_crunch_decision = phase == SuspendedPhase::CrunchTime;
        let (home_context, away_context) = Self::build_contexts(
            home,
            away,
            format,
            &options.coaching_skills,
            from_crunch_decision,
        );

        // a resumed run always plays out the remaining budget
        let plan = RunPlan {
            run_until: box_score.possession_budget,
            crunch_enabled: false,
        };
        GameEngine::play(&home_context, &away_context, &mut box_score, &plan, rng);

        Self::finalize(home, away, box_score, rng)
    }

    fn finalize<R: Rng>(
        home: &mut Team,
        away: &mut Team,
        mut box_score: GameBoxScore,
        rng: &mut R,
    ) -> GameOutcome {
        box_score.home.recompute_score();
        box_score.away.recompute_score();

        if box_score.is_tied() {
            Self::break_tie(&mut box_score, rng);
        }

        Self::sync_minutes(&mut box_score);

        GameFeedback::apply(home, away, &box_score, rng);

        debug!(
            "{} final: {} {} - {} {}",
            box_score.game_id,
            box_score.home.team_name,
            box_score.home.score,
            box_score.away.score,
            box_score.away.team_name
        );

        GameOutcome::Completed(box_score)
    }

    /// One tie-breaking free throw to a random scorer of a coin-flipped
    /// team. Final scores are never level.
    fn break_tie<R: Rng>(box_score: &mut GameBoxScore, rng: &mut R) {
        let side = if rng.random::<f32>() < 0.5 {
            TeamSide::Home
        } else {
            TeamSide::Away
        };

        let winner_id = {
            let team_box = box_score.team(side);

            let scorers: Vec<u32> = team_box
                .lines
                .iter()
                .filter(|line| line.points > 0)
                .map(|line| line.player_id)
                .collect();

            if scorers.is_empty() {
                team_box
                    .lines
                    .iter()
                    .max_by_key(|line| line.rotation_minutes)
                    .map(|line| line.player_id)
            } else {
                Some(scorers[rng.random_range(0..scorers.len())])
            }
        };

        let Some(player_id) = winner_id else {
            return;
        };

        let (team_id, name) = {
            let team_box = box_score.team_mut(side);
            if let Some(line) = team_box.line_mut(player_id) {
                line.free_throws_attempted += 1;
                line.free_throws_made += 1;
            }
            team_box.add_points(player_id, 1);

            let name = team_box
                .line(player_id)
                .map(|line| line.player_name.clone())
                .unwrap_or_default();

            (team_box.team_id, name)
        };

        let clock = box_score.clock_remaining_secs;
        box_score.push_event(PlayByPlayEvent::new(
            PlayKind::FreeThrow,
            team_id,
            player_id,
            format!("{} wins it at the line", name),
            clock,
        ));
    }

    /// Minutes accrue proportionally to the share of the game played, so a
    /// suspended box carries believable partial minutes.
    fn sync_minutes(box_score: &mut GameBoxScore) {
        let fraction = box_score.fraction_complete();

        for line in box_score
            .home
            .lines
            .iter_mut()
            .chain(box_score.away.lines.iter_mut())
        {
            line.minutes = line.rotation_minutes as f32 * fraction;
        }
    }

    fn build_team_box(team: &Team) -> TeamBoxScore {
        let mut team_box = TeamBoxScore::new(team.id, team.name.clone());

        for player in team.players.players() {
            if player.rotation_minutes > 0 {
                team_box.add_line(PlayerBoxScoreLine::new(player));
            }
        }

        team_box
    }

    fn restore_rotation(team: &mut Team, team_box: &TeamBoxScore) {
        for player in team.players.players_mut() {
            player.rotation_minutes = 0;
        }

        for line in &team_box.lines {
            if let Some(player) = team.players.by_id_mut(line.player_id) {
                player.rotation_minutes = line.rotation_minutes;
            }
        }
    }

    fn stage_user_adjustment(
        home: &mut Team,
        away: &mut Team,
        adjustment: Option<GameAdjustment>,
    ) {
        let Some(adjustment) = adjustment else {
            return;
        };

        if home.is_user_team {
            home.game_adjustment = Some(adjustment);
        } else if away.is_user_team {
            away.game_adjustment = Some(adjustment);
        } else {
            debug!("adjustment {} ignored, no user team in this game", adjustment);
        }
    }

    fn build_contexts(
        home: &Team,
        away: &Team,
        format: GameFormat,
        coaching_skills: &[(TeamSide, CoachingSkill)],
        from_crunch_decision: bool,
    ) -> (TeamContext, TeamContext) {
        let side_skills = |side: TeamSide| -> Vec<CoachingSkill> {
            coaching_skills
                .iter()
                .filter(|(skill_side, _)| *skill_side == side)
                .map(|(_, skill)| *skill)
                .collect()
        };

        let home_context = TeamContext::build(
            home,
            TeamSide::Home,
            format,
            home.game_adjustment,
            &side_skills(TeamSide::Home),
            from_crunch_decision,
            away.playbook_familiarity,
        );
        let away_context = TeamContext::build(
            away,
            TeamSide::Away,
            format,
            away.game_adjustment,
            &side_skills(TeamSide::Away),
            from_crunch_decision,
            home.playbook_familiarity,
        );

        (home_context, away_context)
    }
}
