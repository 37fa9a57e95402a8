use crate::club::player::skills::BasketballSkills;
use crate::club::staff::staff::CoachingSkill;
use crate::club::team::team::Team;
use crate::r#match::adjustment::GameAdjustment;
use crate::r#match::game::{GameFormat, TeamSide};
use crate::r#match::ratings::{RatingAggregator, TeamRatings};

pub const HOME_COURT_BONUS: f32 = 3.0;
const PLAYBOOK_POWER_BONUS: f32 = 2.5;
const OPPONENT_FAMILIARITY_PENALTY: f32 = 1.5;

/// Frozen snapshot of a rotation player for the possession loop. Skills are
/// streak-adjusted once here instead of per possession.
#[derive(Debug, Clone)]
pub struct CourtPlayer {
    pub player_id: u32,
    pub player_name: String,
    pub skills: BasketballSkills,
    pub overall: u8,
    pub minutes_share: f32,
    pub is_starter: bool,
    pub is_focus: bool,
}

/// Per-team state the engine reads on every possession: court players,
/// aggregated ratings and the fully resolved power numbers.
#[derive(Debug)]
pub struct TeamContext {
    pub team_id: u32,
    pub side: TeamSide,
    pub players: Vec<CourtPlayer>,
    pub ratings: TeamRatings,

    pub offense_power: f32,
    pub defense_power: f32,

    pub three_rate_shift: f32,
    pub own_turnover_shift: f32,
    pub opponent_turnover_shift: f32,
    pub foul_shift: f32,

    pub familiarity: f32,
    pub captain_in_lineup: bool,
}

impl TeamContext {
    pub fn build(
        team: &Team,
        side: TeamSide,
        format: GameFormat,
        adjustment: Option<GameAdjustment>,
        coaching_skills: &[CoachingSkill],
        from_crunch_decision: bool,
        opponent_familiarity: f32,
    ) -> Self {
        let ratings = RatingAggregator::aggregate(team, format);
        let budget = format.team_minutes_budget() as f32;

        let players: Vec<CourtPlayer> = team
            .players
            .players()
            .iter()
            .filter(|player| player.rotation_minutes > 0)
            .map(|player| CourtPlayer {
                player_id: player.id,
                player_name: player.full_name.to_string(),
                skills: player.effective_skills(),
                overall: player.overall(),
                minutes_share: player.rotation_minutes as f32 / budget,
                is_starter: player.is_starter(),
                is_focus: team.player_focus_id == Some(player.id),
            })
            .collect();

        let captain_in_lineup = team
            .team_captain_id
            .map(|id| players.iter().any(|p| p.player_id == id))
            .unwrap_or(false);

        let assistant_bonus = team.staffs.assistant_coach().grade.power_bonus();
        let playbook_bonus = team.playbook_familiarity / 100.0 * PLAYBOOK_POWER_BONUS;
        let opponent_penalty = opponent_familiarity / 100.0 * OPPONENT_FAMILIARITY_PENALTY;

        let mut offense_power =
            ratings.offense + assistant_bonus + playbook_bonus - opponent_penalty;
        let mut defense_power =
            ratings.defense + assistant_bonus + playbook_bonus - opponent_penalty;

        if side == TeamSide::Home {
            offense_power += HOME_COURT_BONUS;
        }

        for skill in coaching_skills {
            offense_power += skill.offense_bonus(from_crunch_decision);
            defense_power += skill.defense_bonus();
        }

        let mut context = TeamContext {
            team_id: team.id,
            side,
            players,
            ratings,
            offense_power,
            defense_power,
            three_rate_shift: 0.0,
            own_turnover_shift: 0.0,
            opponent_turnover_shift: 0.0,
            foul_shift: 0.0,
            familiarity: team.playbook_familiarity,
            captain_in_lineup,
        };

        if let Some(adjustment) = adjustment {
            context.offense_power += adjustment.offense_power_delta();
            context.defense_power += adjustment.defense_power_delta();
            context.three_rate_shift = adjustment.three_rate_shift();
            context.own_turnover_shift = adjustment.own_turnover_shift();
            context.opponent_turnover_shift = adjustment.opponent_turnover_shift();
            context.foul_shift = adjustment.own_foul_shift();
        }

        context
    }

    /// How hard the opposing defense contests this team's shots.
    pub fn contest_factor(&self, opponent: &TeamContext) -> f32 {
        (opponent.defense_power / self.offense_power.max(1.0)).clamp(0.75, 1.25)
    }
}
