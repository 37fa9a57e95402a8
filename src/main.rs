use core::utils::TimeEstimation;
use core::{
    Game, GameAdjustment, GameBoxScore, GameFormat, GameHalf, GameOptions, GameOutcome, League,
    NaiveDate, PlayerCollection, PlayerGenerator, StaffGenerator, StaffGrade, Team,
};
use env_logger::Env;
use log::info;
use std::env;

const LEAGUE_TEAMS: [(&str, &str); 8] = [
    ("Harbor City Pilots", "HCP"),
    ("Summit Ridge Owls", "SRO"),
    ("Ashland Grizzlies", "ASH"),
    ("Bayview Mariners", "BAY"),
    ("Cedar Falls Foxes", "CDF"),
    ("Northgate Comets", "NGC"),
    ("Ironwood Timberjacks", "IWT"),
    ("Lakemont Herons", "LKM"),
];

const STAFF_GRADES: [StaffGrade; 4] = [
    StaffGrade::A,
    StaffGrade::B,
    StaffGrade::C,
    StaffGrade::B,
];

fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let is_one_shot_game = env::var("MODE") == Ok(String::from("ONESHOT"));

    if is_one_shot_game {
        info!("one shot game started");
        play_one_shot_game();
    } else {
        run_season();
    }
}

fn run_season() {
    let season_start = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();

    // play-by-play logs are dead weight in a bulk season run
    core::set_play_log_mode(false);

    let (mut league, estimated) = TimeEstimation::estimate(|| build_league(season_start));
    info!("league assembled: {} ms", estimated);

    let (_, estimated) = TimeEstimation::estimate(|| {
        while league.play_next_week().is_some() {}
    });
    info!("season complete: {} ms", estimated);

    league.log_standings();
}

fn build_league(season_start: NaiveDate) -> League {
    let teams: Vec<Team> = LEAGUE_TEAMS
        .iter()
        .enumerate()
        .map(|(index, (name, abbreviation))| {
            let level = 62 + (index as u8 % 5) * 3;
            let grade = STAFF_GRADES[index % STAFF_GRADES.len()];

            build_team(index as u32 + 1, name, abbreviation, level, grade, season_start)
        })
        .collect();

    League::new(
        1,
        String::from("Coastal Conference"),
        GameFormat::College,
        teams,
        season_start,
    )
}

fn play_one_shot_game() {
    let now = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();

    let seed = env::var("SEED")
        .ok()
        .and_then(|value| value.parse::<u64>().ok());

    if let Some(seed) = seed {
        info!("seeded run: {}", seed);
    }

    let mut home = build_team(1, "Harbor City Pilots", "HCP", 74, StaffGrade::A, now);
    let mut away = build_team(2, "Summit Ridge Owls", "SRO", 72, StaffGrade::B, now);
    home.is_user_team = true;

    // first game: pause at halftime and come back with an adjustment
    let outcome = run_game(
        &mut home,
        &mut away,
        GameOptions::new("showcase-1", GameFormat::College).half(GameHalf::First),
        seed,
    );

    if let GameOutcome::SuspendedAtHalftime(partial) = outcome {
        info!(
            "halftime: {} {} - {} {}",
            partial.box_score.home.team_name,
            partial.box_score.home.score,
            partial.box_score.away.score,
            partial.box_score.away.team_name
        );

        let second_half = run_game(
            &mut home,
            &mut away,
            GameOptions::new("showcase-1", GameFormat::College)
                .resume(partial)
                .adjustment(GameAdjustment::FocusOutside),
            seed,
        );

        if let GameOutcome::Completed(box_score) = second_half {
            report_game(&box_score);
        }
    }

    // second game: live run that can stop for a crunch-time decision
    let mut outcome = run_game(
        &mut home,
        &mut away,
        GameOptions::new("showcase-2", GameFormat::College),
        seed,
    );

    if let GameOutcome::SuspendedForDecision(partial, minutes_remaining) = outcome {
        info!(
            "crunch time, {:.1} minutes left: pushing the tempo",
            minutes_remaining
        );

        outcome = run_game(
            &mut home,
            &mut away,
            GameOptions::new("showcase-2", GameFormat::College)
                .resume(partial)
                .adjustment(GameAdjustment::TempoPush),
            seed,
        );
    }

    if let GameOutcome::Completed(box_score) = outcome {
        report_game(&box_score);
    }
}

fn run_game(
    home: &mut Team,
    away: &mut Team,
    options: GameOptions,
    seed: Option<u64>,
) -> GameOutcome {
    match seed {
        Some(seed) => Game::play_seeded(home, away, options, seed),
        None => Game::play(home, away, options),
    }
}

fn report_game(box_score: &GameBoxScore) {
    info!(
        "final: {} {} - {} {}",
        box_score.home.team_name,
        box_score.home.score,
        box_score.away.score,
        box_score.away.team_name
    );

    for team_box in [&box_score.home, &box_score.away] {
        if let Some(line) = team_box.lines.iter().max_by_key(|line| line.points) {
            info!(
                "{} leader: {}, {} pts / {} reb / {} ast",
                team_box.team_name, line.player_name, line.points, line.rebounds, line.assists
            );
        }
    }

    let tail_start = box_score.events.len().saturating_sub(5);
    for event in &box_score.events[tail_start..] {
        info!("[{:>5.0}s] {}", event.clock_remaining_secs, event.description);
    }
}

fn build_team(
    id: u32,
    name: &str,
    abbreviation: &str,
    level: u8,
    grade: StaffGrade,
    now: NaiveDate,
) -> Team {
    let mut team = Team::builder()
        .id(id)
        .name(String::from(name))
        .abbreviation(String::from(abbreviation))
        .players(PlayerCollection::new(PlayerGenerator::generate_roster(
            level, now,
        )))
        .staffs(StaffGenerator::generate_bench(grade, now))
        .build()
        .unwrap();

    team.appoint_default_captain();
    team
}
