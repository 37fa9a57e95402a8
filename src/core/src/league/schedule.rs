use chrono::{Duration, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScheduledGameResult {
    pub home_score: u16,
    pub away_score: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleItem {
    pub id: String,
    pub week: u16,
    pub date: NaiveDate,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub result: Option<ScheduledGameResult>,
}

#[derive(Debug, Default, Serialize)]
pub struct Schedule {
    pub items: Vec<ScheduleItem>,
}

impl Schedule {
    /// Double round robin on a weekly cadence, built with the circle method.
    /// Odd team counts get a rotating bye. The return leg mirrors home and
    /// away, so every pairing is played once in each building.
    pub fn round_robin(team_ids: &[u32], start_date: NaiveDate) -> Self {
        let mut slots: Vec<Option<u32>> = team_ids.iter().copied().map(Some).collect();
        if slots.len() % 2 == 1 {
            slots.push(None);
        }

        let slot_count = slots.len();
        if slot_count < 2 {
            return Schedule::default();
        }

        let rounds_per_leg = slot_count - 1;
        let mut items = Vec::with_capacity(rounds_per_leg * slot_count);
        let mut week: u16 = 0;

        for leg in 0..2 {
            // slot 0 stays fixed, the rest rotate one step per round
            let mut rotation = slots.clone();

            for _ in 0..rounds_per_leg {
                let date = start_date + Duration::weeks(week as i64);

                for pair in 0..slot_count / 2 {
                    let (Some(first), Some(second)) =
                        (rotation[pair], rotation[slot_count - 1 - pair])
                    else {
                        continue;
                    };

                    let (home_team_id, away_team_id) = if leg == 0 {
                        (first, second)
                    } else {
                        (second, first)
                    };

                    items.push(ScheduleItem {
                        id: format!("{}-{}-{}", week + 1, home_team_id, away_team_id),
                        week,
                        date,
                        home_team_id,
                        away_team_id,
                        result: None,
                    });
                }

                rotation[1..].rotate_right(1);
                week += 1;
            }
        }

        Schedule { items }
    }

    pub fn items_for_week(&self, week: u16) -> Vec<&ScheduleItem> {
        self.items.iter().filter(|item| item.week == week).collect()
    }

    pub fn items_for_team(&self, team_id: u32) -> Vec<&ScheduleItem> {
        self.items
            .iter()
            .filter(|item| item.home_team_id == team_id || item.away_team_id == team_id)
            .collect()
    }

    pub fn total_weeks(&self) -> u16 {
        self.items
            .iter()
            .map(|item| item.week + 1)
            .max()
            .unwrap_or(0)
    }

    /// First week that still has an unplayed game.
    pub fn next_unplayed_week(&self) -> Option<u16> {
        self.items
            .iter()
            .filter(|item| item.result.is_none())
            .map(|item| item.week)
            .min()
    }

    pub fn is_completed(&self) -> bool {
        self.items.iter().all(|item| item.result.is_some())
    }

    pub fn update_result(&mut self, game_id: &str, home_score: u16, away_score: u16) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == game_id) {
            item.result = Some(ScheduledGameResult {
                home_score,
                away_score,
            });
        }
    }
}
