//! Headless session simulator CLI.
//!
//! Drives scripted Word Rain and Soccer Math sessions end to end without
//! a UI, to sanity-check pacing and scoring.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # 10 sessions per game
//!   cargo run --bin simulate -- -n 100 -l hard   # 100 hard sessions
//!   cargo run --bin simulate -- --seed 42        # Reproducible run

use std::env;
use std::f64::consts::{PI, TAU};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use playbox::build_info;
use playbox::constants::{DEFAULT_SESSION_SECONDS, NOMINAL_FRAME_SECS};
use playbox::games::{soccer_math, word_rain, ActiveGame, SoccerMathGame, WordRainGame};
use playbox::level::Level;
use playbox::summary::GameSummary;

struct SimConfig {
    sessions: usize,
    level: Level,
    duration_secs: u32,
    player_count: usize,
    seed: Option<u64>,
    save_json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            sessions: 10,
            level: Level::Easy,
            duration_secs: DEFAULT_SESSION_SECONDS,
            player_count: Level::Easy.default_player_count(),
            seed: None,
            save_json: false,
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              PLAYBOX SESSION SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Build:            {}", build_info::version_line());
    println!("Configuration:");
    println!("  Sessions/game:  {}", config.sessions);
    println!("  Level:          {}", config.level.name());
    println!("  Duration:       {}s", config.duration_secs);
    println!("  Players:        {}", config.player_count);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut finished: Vec<ActiveGame> = Vec::new();
    for _ in 0..config.sessions {
        finished.push(ActiveGame::WordRain(run_word_rain(&config, &mut rng)));
    }
    for _ in 0..config.sessions {
        finished.push(ActiveGame::SoccerMath(run_soccer_math(&config, &mut rng)));
    }

    let mut summaries: Vec<GameSummary> = Vec::new();
    for (i, game) in finished.iter().enumerate() {
        let summary = game.summary();
        let routes = summary
            .routes_completed
            .map(|r| format!("  routes {}", r))
            .unwrap_or_default();
        println!(
            "  [{:<11} #{:<3}] score {:<4} accuracy {:>5.1}%  ({}/{}){}",
            summary.game.name(),
            i % config.sessions + 1,
            summary.score,
            summary.accuracy,
            summary.correct,
            summary.total,
            routes
        );
        summaries.push(summary);
    }

    println!();
    print_aggregate("Word Rain", &summaries[..config.sessions]);
    print_aggregate("Soccer Math", &summaries[config.sessions..]);

    if config.save_json {
        let json =
            serde_json::to_string_pretty(&summaries).unwrap_or_else(|_| "[]".to_string());
        let filename = format!(
            "playbox_sessions_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!();
        println!("JSON report saved to: {}", filename);
    }
}

fn print_aggregate(label: &str, summaries: &[GameSummary]) {
    if summaries.is_empty() {
        return;
    }
    let n = summaries.len() as f64;
    let mean_score = summaries.iter().map(|s| s.score as f64).sum::<f64>() / n;
    let mean_accuracy = summaries.iter().map(|s| s.accuracy).sum::<f64>() / n;
    println!(
        "{:<12} mean score {:.1}, mean accuracy {:.1}%",
        label, mean_score, mean_accuracy
    );
}

/// Scripted Word Rain player: taps the target most of the time, a
/// distractor now and then, and lets the occasional round fall.
fn run_word_rain(config: &SimConfig, rng: &mut StdRng) -> WordRainGame {
    let mut game = WordRainGame::new(
        config.level,
        word_rain::starter_vocabulary(),
        config.duration_secs,
    );
    word_rain::start(&mut game, rng);

    let mut frame: u64 = 0;
    while !game.phase.is_ended() {
        frame += 1;
        word_rain::advance_tick(&mut game, NOMINAL_FRAME_SECS, rng);

        if game.is_round_active() && rng.gen_bool(0.04) {
            let want_target = rng.gen_bool(0.8);
            let pick = game
                .words
                .iter()
                .filter(|w| !w.is_resolved())
                .find(|w| w.is_target == want_target)
                .map(|w| w.id);
            if let Some(id) = pick {
                word_rain::on_tap(&mut game, id);
            }
        }

        if frame % 60 == 0 {
            word_rain::tick_second(&mut game);
        }
    }
    game
}

/// Scripted Soccer Math player: kicks about once a second, aiming true
/// three times out of four, and shoots once the route is done.
fn run_soccer_math(config: &SimConfig, rng: &mut StdRng) -> SoccerMathGame {
    let mut game = SoccerMathGame::new(
        config.level,
        config.duration_secs,
        config.player_count,
        rng,
    );
    soccer_math::start(&mut game);

    let mut frame: u64 = 0;
    while !game.phase.is_ended() {
        frame += 1;

        if frame % 60 == 30 && !game.ball_in_transit {
            let aim = choose_aim(&game, rng);
            soccer_math::process_kick(&mut game, aim, rng);
        }

        if frame % 60 == 0 {
            soccer_math::complete_transit(&mut game);
            soccer_math::tick_second(&mut game);
        }
    }
    game
}

fn choose_aim(game: &SoccerMathGame, rng: &mut StdRng) -> f64 {
    if let Some(route) = &game.route {
        if route.is_ready_for_goal() {
            return if rng.gen_bool(0.5) { 0.0 } else { PI };
        }
        if rng.gen_bool(0.75) {
            if let Some(required) = route.current_target_number() {
                if let Some(player) = game.player_by_jersey(required) {
                    return (player.y - game.ball.y).atan2(player.x - game.ball.x);
                }
            }
        }
    }
    rng.gen_range(0.0..TAU)
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();
    let mut player_count_set = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--sessions" => {
                if i + 1 < args.len() {
                    config.sessions = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "-l" | "--level" => {
                if i + 1 < args.len() {
                    config.level = match args[i + 1].to_lowercase().as_str() {
                        "medium" => Level::Medium,
                        "hard" => Level::Hard,
                        _ => Level::Easy,
                    };
                    i += 1;
                }
            }
            "-d" | "--duration" => {
                if i + 1 < args.len() {
                    config.duration_secs = args[i + 1].parse().unwrap_or(DEFAULT_SESSION_SECONDS);
                    i += 1;
                }
            }
            "-p" | "--players" => {
                if i + 1 < args.len() {
                    if let Ok(count) = args[i + 1].parse() {
                        config.player_count = count;
                        player_count_set = true;
                    }
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--json" => {
                config.save_json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    if !player_count_set {
        config.player_count = config.level.default_player_count();
    }

    config
}

fn print_help() {
    println!("Playbox Session Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --sessions <N>   Sessions per game (default: 10)");
    println!("    -l, --level <L>      easy | medium | hard (default: easy)");
    println!("    -d, --duration <S>   Session length in seconds (default: 60)");
    println!("    -p, --players <P>    Soccer Math player count (default: per level)");
    println!("    -s, --seed <S>       Random seed for reproducibility");
    println!("    --json               Save all session summaries as JSON");
    println!("    -h, --help           Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                     # Default run");
    println!("    cargo run --bin simulate -- -n 100 -l hard   # 100 hard sessions");
    println!("    cargo run --bin simulate -- --seed 42        # Reproducible");
}
