//! Integration test: Load config -> Build game -> Play -> Analyze -> Report
//!
//! These tests validate the full flow from a TOML game description to the
//! analyzer's statistics.

use dice_core::{
    load_config, Analyzer, Die, ErrorKind, Face, Game, GameConfig, Report, ShowForm,
};
use dice_tui::SimulationRun;
use rand::SeedableRng;
use std::path::Path;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

fn data_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn brute_force_jackpots(game: &Game) -> u64 {
    let wide = game.wide().unwrap();
    wide.rows()
        .iter()
        .filter(|row| row.iter().all(|f| *f == row[0]))
        .count() as u64
}

#[test]
fn test_full_config_to_report_flow() {
    // =========================================================================
    // STEP 1: Load the config
    // =========================================================================
    separator("STEP 1: Loading Game Config");

    let config = load_config(&data_path("loaded_dice.toml")).expect("Failed to load config");
    println!("  Dice: {}  Rolls: {}  Seed: {:?}", config.num_dice(), config.num_rolls, config.seed);
    assert_eq!(config.num_dice(), 3);
    assert_eq!(config.seed, Some(2024));

    // =========================================================================
    // STEP 2: Play with the configured seed
    // =========================================================================
    separator("STEP 2: Playing");

    let sim = SimulationRun::run(&config, config.seed.unwrap()).expect("Simulation failed");
    let wide = sim.game.wide().unwrap();
    assert_eq!(wide.shape(), (2000, 3));
    assert_eq!(sim.game.narrow().unwrap().shape(), (6000, 3));

    // =========================================================================
    // STEP 3: Analyze
    // =========================================================================
    separator("STEP 3: Analyzing");

    let report = sim.report();
    println!("{}", report.summary(5));

    assert_eq!(report.jackpots, brute_force_jackpots(&sim.game));
    assert_eq!(report.combinations.total(), 2000);
    assert_eq!(report.permutations.total(), 2000);
    let face_total: u64 = report.face_totals.iter().map(|t| t.count).sum();
    assert_eq!(face_total, 6000);

    // The loaded die shows six half the time; the fair ones a sixth
    let loaded_sixes = wide.column(0).filter(|f| **f == Face::Int(6)).count();
    let fair_sixes = wide.column(1).filter(|f| **f == Face::Int(6)).count();
    println!("  Loaded die sixes: {}  Fair die sixes: {}", loaded_sixes, fair_sixes);
    assert!(loaded_sixes > 800, "loaded sixes = {}", loaded_sixes);
    assert!(fair_sixes < 500, "fair sixes = {}", fair_sixes);
}

#[test]
fn test_text_face_config() {
    let config = load_config(&data_path("coins.toml")).expect("Failed to load config");
    let sim = SimulationRun::run(&config, 11).unwrap();
    let report = sim.report();

    assert_eq!(report.num_dice, 5);
    assert_eq!(report.jackpots, brute_force_jackpots(&sim.game));
    // Five coins have at most 6 combinations and 32 permutations
    assert!(report.combinations.len() <= 6);
    assert!(report.permutations.len() <= 32);
    assert!(report
        .face_totals
        .iter()
        .all(|t| t.face == Face::from("heads") || t.face == Face::from("tails")));
}

#[test]
fn test_two_fair_dice_jackpots() {
    let mut game = Game::new(vec![Die::new(1..=6).unwrap(), Die::new(1..=6).unwrap()]).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(1000);
    game.play_with_rng(1000, &mut rng).unwrap();

    let analyzer = Analyzer::new(&game).unwrap();
    let jackpots = analyzer.jackpot();
    assert_eq!(jackpots, brute_force_jackpots(&game));
    // Expected ~166
    assert!((110..=225).contains(&jackpots), "jackpots = {}", jackpots);
}

#[test]
fn test_analyzer_unaffected_by_later_changes() {
    let mut game = GameConfig::fair(6, 2).build_game().unwrap();
    game.play(300).unwrap();
    let analyzer = Analyzer::new(&game).unwrap();
    let before: Report = analyzer.report();

    for face in 1..=6 {
        game.die_mut(0).unwrap().set_weight(face, if face == 1 { 1.0 } else { 0.0 }).unwrap();
    }
    game.play(50).unwrap();

    assert_eq!(analyzer.report(), before);
    assert_eq!(Analyzer::new(&game).unwrap().num_rolls(), 50);
}

#[test]
fn test_show_forms_from_strings() {
    let mut game = GameConfig::fair(4, 3).build_game().unwrap();
    game.play(7).unwrap();

    assert_eq!(game.show("WIDE").unwrap().shape(), (7, 3));
    assert_eq!(game.show("narrow").unwrap().shape(), (21, 3));
    assert_eq!(game.show("tall").unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        game.show_as(ShowForm::Narrow).unwrap(),
        game.show("Narrow").unwrap()
    );
}

#[test]
fn test_error_taxonomy() {
    assert_eq!(
        Die::new([1, 1]).unwrap_err().kind(),
        ErrorKind::InvalidConstruction
    );

    let mut die = Die::new(["a", "b"]).unwrap();
    assert_eq!(die.set_weight("z", 1.0).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(die.set_weight("a", "heavy").unwrap_err().kind(), ErrorKind::TypeConversion);

    let game = Game::new(vec![die]).unwrap();
    assert_eq!(Analyzer::new(&game).unwrap_err().kind(), ErrorKind::InvalidArgument);
}
