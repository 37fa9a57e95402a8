use crate::club::player::player::Player;
use crate::club::team::team::Team;
use crate::r#match::game::GameFormat;
use log::{debug, warn};
use std::cmp::Ordering;

pub struct RotationAllocator;

const MIN_ROTATION_SIZE: usize = 9;
const ROTATION_SHARE: f32 = 0.70;
const STARTER_RANK_WEIGHT: f32 = 1.6;
const FOCUS_RANK_WEIGHT: f32 = 1.35;

#[derive(Debug, Clone)]
struct RotationCandidate {
    player_id: u32,
    weight: f32,
    overall: u8,
    stamina: u8,
    minutes: u16,
    cap: u16,
}

impl RotationAllocator {
    /// Distributes the team minutes budget (5 x game length) across the
    /// roster and writes the result into each player's `rotation_minutes`.
    /// Deterministic: no randomness, ties broken by overall then id.
    pub fn allocate(team: &mut Team, format: GameFormat) {
        let budget = format.team_minutes_budget();
        let game_length = format.game_minutes() as u16;

        for player in team.players.players_mut() {
            if !player.is_available() {
                player.rotation_minutes = 0;
            }
        }

        if team.is_user_team && Self::hand_set_allocation_is_valid(team, budget, game_length) {
            debug!("keeping hand-set rotation for user team {}", team.id);
            return;
        }

        let mut candidates = Self::build_candidates(&team.players.available_players(), team);

        if candidates.is_empty() {
            warn!(
                "team {} has no available players, allocating over the full roster",
                team.id
            );
            candidates = Self::build_candidates(&team.players.players(), team);
        }

        if candidates.is_empty() {
            warn!("team {} has an empty roster, nothing to allocate", team.id);
            return;
        }

        candidates.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(Ordering::Equal)
                .then(b.overall.cmp(&a.overall))
                .then(a.player_id.cmp(&b.player_id))
        });

        let rotation_size = ((candidates.len() as f32 * ROTATION_SHARE).ceil() as usize)
            .max(MIN_ROTATION_SIZE)
            .min(candidates.len());

        candidates.truncate(rotation_size);

        for (rank, candidate) in candidates.iter_mut().enumerate() {
            candidate.cap = Self::minutes_cap(candidate.overall, candidate.stamina, rank, format);
        }

        Self::distribute(&mut candidates, budget, game_length, format);

        for player in team.players.players_mut() {
            player.rotation_minutes = 0;
        }
        for candidate in &candidates {
            if let Some(player) = team.players.by_id_mut(candidate.player_id) {
                player.rotation_minutes = candidate.minutes as u8;
            }
        }

        debug!(
            "allocated rotation for team {}: {} players, {} minutes",
            team.id,
            candidates.len(),
            candidates.iter().map(|c| c.minutes).sum::<u16>()
        );
    }

    fn hand_set_allocation_is_valid(team: &Team, budget: u16, game_length: u16) -> bool {
        let available = team.players.available_players();

        let sum: u32 = available
            .iter()
            .map(|player| player.rotation_minutes as u32)
            .sum();
        let within_game = available
            .iter()
            .all(|player| (player.rotation_minutes as u16) <= game_length);

        sum == budget as u32 && within_game
    }

    fn build_candidates(players: &[&Player], team: &Team) -> Vec<RotationCandidate> {
        players
            .iter()
            .map(|player| {
                let mut weight = if player.is_starter() {
                    STARTER_RANK_WEIGHT
                } else {
                    1.0
                };
                weight *= player.overall() as f32 / 100.0 + 0.5;
                if team.player_focus_id == Some(player.id) {
                    weight *= FOCUS_RANK_WEIGHT;
                }

                RotationCandidate {
                    player_id: player.id,
                    weight,
                    overall: player.overall(),
                    stamina: player.skills.stamina,
                    minutes: 0,
                    cap: 0,
                }
            })
            .collect()
    }

    fn distribute(
        candidates: &mut [RotationCandidate],
        budget: u16,
        game_length: u16,
        format: GameFormat,
    ) {
        let size = candidates.len() as u16;

        let mut baseline = format.baseline_minutes() as u16;
        if baseline * size > budget {
            baseline = budget / size;
        }

        let weight_total: f32 = candidates.iter().map(|c| c.weight).sum();

        for candidate in candidates.iter_mut() {
            candidate.minutes = baseline.min(candidate.cap);
        }

        let assigned: u16 = candidates.iter().map(|c| c.minutes).sum();
        let leftover = budget.saturating_sub(assigned);

        for candidate in candidates.iter_mut() {
            let extra =
                (leftover as f32 * candidate.weight / weight_total.max(0.0001)).floor() as u16;
            candidate.minutes = (candidate.minutes + extra).min(candidate.cap);
        }

        let mut total: u16 = candidates.iter().map(|c| c.minutes).sum();
        let mut caps_relaxed = false;

        while total < budget {
            if let Some(candidate) = candidates.iter_mut().find(|c| c.minutes < c.cap) {
                candidate.minutes += 1;
                total += 1;
            } else if let Some(candidate) =
                candidates.iter_mut().find(|c| c.minutes < game_length)
            {
                if !caps_relaxed {
                    warn!("rotation caps cannot absorb the budget, relaxing to game length");
                    caps_relaxed = true;
                }
                candidate.minutes += 1;
                total += 1;
            } else {
                warn!(
                    "roster too small to absorb minutes budget: {} of {}",
                    total, budget
                );
                break;
            }
        }

        while total > budget {
            if let Some(candidate) = candidates
                .iter_mut()
                .rev()
                .find(|c| c.minutes > baseline)
            {
                candidate.minutes -= 1;
                total -= 1;
            } else if let Some(candidate) = candidates.iter_mut().rev().find(|c| c.minutes > 0) {
                candidate.minutes -= 1;
                total -= 1;
            } else {
                break;
            }
        }
    }

    fn minutes_cap(overall: u8, stamina: u8, rank: usize, format: GameFormat) -> u16 {
        let stamina_cap_raw =
            (20.0 + stamina.saturating_sub(50) as f32 * 0.3) * format.stamina_scale();
        let stamina_cap = stamina_cap_raw.round() as u16;

        let bench_penalty: u8 = match rank {
            0..=4 => 0,
            5..=6 => 1,
            7..=8 => 2,
            9..=10 => 3,
            _ => 4,
        };

        let tier_cap = format.tier_cap(overall).saturating_sub(bench_penalty) as u16;

        stamina_cap
            .min(tier_cap)
            .min(format.game_minutes() as u16)
    }
}
