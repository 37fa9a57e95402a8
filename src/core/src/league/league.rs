use crate::club::team::team::Team;
use crate::league::schedule::Schedule;
use crate::league::table::LeagueTable;
use crate::r#match::game::{Game, GameFormat, GameOptions, GameOutcome, TeamSide};
use crate::r#match::result::GameBoxScore;
use crate::utils::Logging;
use chrono::NaiveDate;
use log::{debug, info, warn};
use rayon::iter::{IntoParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

#[derive(Debug)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub format: GameFormat,
    pub teams: Vec<Team>,
    pub schedule: Schedule,
    pub table: LeagueTable,
}

impl League {
    pub fn new(
        id: u32,
        name: String,
        format: GameFormat,
        teams: Vec<Team>,
        start_date: NaiveDate,
    ) -> Self {
        let team_ids: Vec<u32> = teams.iter().map(|team| team.id).collect();
        let rows: Vec<(u32, String)> = teams
            .iter()
            .map(|team| (team.id, team.name.clone()))
            .collect();

        League {
            id,
            name,
            format,
            teams,
            schedule: Schedule::round_robin(&team_ids, start_date),
            table: LeagueTable::with_teams(&rows),
        }
    }

    pub fn team(&self, team_id: u32) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == team_id)
    }

    pub fn team_mut(&mut self, team_id: u32) -> Option<&mut Team> {
        self.teams.iter_mut().find(|team| team.id == team_id)
    }

    pub fn is_season_over(&self) -> bool {
        self.schedule.is_completed()
    }

    /// Plays the next unplayed round of the schedule, one game per fixture,
    /// in parallel. Rosters come back with all post-game feedback applied,
    /// then the whole league takes its weekly recovery step.
    pub fn play_next_week(&mut self) -> Option<Vec<GameBoxScore>> {
        let week = self.schedule.next_unplayed_week()?;

        let pending: Vec<(String, u32, u32)> = self
            .schedule
            .items_for_week(week)
            .iter()
            .filter(|item| item.result.is_none())
            .map(|item| (item.id.clone(), item.home_team_id, item.away_team_id))
            .collect();

        info!(
            "🏀 {}: week {} of {}, {} games",
            self.name,
            week + 1,
            self.schedule.total_weeks(),
            pending.len()
        );

        let mut slate = Vec::with_capacity(pending.len());
        for (game_id, home_id, away_id) in pending {
            let Some(home) = self.take_team(home_id) else {
                warn!("{}: no team with id {}", game_id, home_id);
                continue;
            };
            let Some(away) = self.take_team(away_id) else {
                warn!("{}: no team with id {}", game_id, away_id);
                self.teams.push(home);
                continue;
            };

            slate.push((game_id, home, away));
        }

        let format = self.format;
        let finished: Vec<(Team, Team, GameBoxScore)> = slate
            .into_par_iter()
            .map(|(game_id, mut home, mut away)| {
                let box_score = Self::play_to_completion(&game_id, format, &mut home, &mut away);
                (home, away, box_score)
            })
            .collect();

        let mut played = Vec::with_capacity(finished.len());
        for (home, away, box_score) in finished {
            info!(
                "🏀 {} {} - {} {}",
                box_score.home.team_name,
                box_score.home.score,
                box_score.away.score,
                box_score.away.team_name
            );

            self.schedule
                .update_result(&box_score.game_id, box_score.home.score, box_score.away.score);
            self.table.update_from_game(&box_score);

            self.teams.push(home);
            self.teams.push(away);
            played.push(box_score);
        }

        // weekly upkeep for the whole league, byes included
        self.teams
            .par_iter_mut()
            .for_each(|team| team.process_week());

        Some(played)
    }

    pub fn log_standings(&self) {
        info!("🏀 {} standings:", self.name);

        for (position, row) in self.table.standings().iter().enumerate() {
            info!(
                "{:>2}. {} {}-{} ({:.3}), {:+}",
                position + 1,
                row.team_name,
                row.wins,
                row.losses,
                row.win_pct(),
                row.point_differential()
            );
        }
    }

    /// League games always run to a final score. The engine hands back a
    /// crunch-time decision point for user teams, an unattended league run
    /// resumes it immediately with no adjustment.
    fn play_to_completion(
        game_id: &str,
        format: GameFormat,
        home: &mut Team,
        away: &mut Team,
    ) -> GameBoxScore {
        let base_options = |home: &Team, away: &Team| {
            GameOptions::new(game_id, format)
                .coaching_skill(TeamSide::Home, home.staffs.head_coach().coaching_skill)
                .coaching_skill(TeamSide::Away, away.staffs.head_coach().coaching_skill)
        };

        let message = format!("play game: {} vs {}", home.name, away.name);
        let options = base_options(home, away);
        let mut outcome =
            Logging::estimate_result(|| Game::play(home, away, options), &message);

        loop {
            match outcome {
                GameOutcome::Completed(box_score) => return box_score,
                GameOutcome::SuspendedAtHalftime(partial) => {
                    let options = base_options(home, away).resume(partial);
                    outcome = Game::play(home, away, options);
                }
                GameOutcome::SuspendedForDecision(partial, minutes_remaining) => {
                    debug!(
                        "{}: auto-resuming with {:.1} minutes left",
                        game_id, minutes_remaining
                    );
                    let options = base_options(home, away).resume(partial);
                    outcome = Game::play(home, away, options);
                }
            }
        }
    }

    fn take_team(&mut self, team_id: u32) -> Option<Team> {
        let index = self.teams.iter().position(|team| team.id == team_id)?;

        Some(self.teams.swap_remove(index))
    }
}
