//! Application state

use dice_core::{
    Analyzer, ConfigError, CountTable, DiceError, Die, Face, FaceCountTable, Game, GameConfig,
    Report, ShowForm,
};
use rand::SeedableRng;

/// Weight change per ←/→ press
const WEIGHT_STEP: f64 = 0.5;
/// Roll counts cycled through with +/-
const ROLL_COUNTS: &[usize] = &[1, 10, 100, 1_000, 10_000, 100_000];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dice,
    Results,
    Stats,
    Combos,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Dice, Tab::Results, Tab::Stats, Tab::Combos, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Dice => "Dice",
            Tab::Results => "Results",
            Tab::Stats => "Stats",
            Tab::Combos => "Combos",
            Tab::Help => "Help",
        }
    }
}

/// Statistics for the most recent play, computed once when it finishes
pub struct Analysis {
    pub analyzer: Analyzer,
    pub report: Report,
    pub face_counts: FaceCountTable,
}

impl Analysis {
    pub fn new(analyzer: Analyzer) -> Self {
        let report = analyzer.report();
        let face_counts = analyzer.roll_face_counts();
        Analysis {
            analyzer,
            report,
            face_counts,
        }
    }

    pub fn counts(&self, permutations: bool) -> &CountTable {
        if permutations {
            &self.report.permutations
        } else {
            &self.report.combinations
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub game: Game,
    /// Analysis of the most recent play
    pub analysis: Option<Analysis>,
    pub num_rolls: usize,
    pub seed: u64,
    pub rng: rand::rngs::StdRng,
    pub selected_die: usize,
    pub selected_face: usize,
    pub result_form: ShowForm,
    pub show_permutations: bool,
    pub results_scroll: usize,
    pub stats_scroll: usize,
    pub combos_scroll: usize,
    pub status: String,
}

impl App {
    /// Two fair six-sided dice
    pub fn new() -> Self {
        let config = GameConfig::fair(6, 2);
        match Self::from_config(&config) {
            Ok(app) => app,
            Err(e) => unreachable!("fair dice config is always valid: {}", e),
        }
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let game = config.build_game()?;
        let seed = config.seed.unwrap_or(42);

        Ok(App {
            current_tab: Tab::Dice,
            game,
            analysis: None,
            num_rolls: config.num_rolls,
            seed,
            rng: rand::rngs::StdRng::seed_from_u64(seed),
            selected_die: 0,
            selected_face: 0,
            result_form: ShowForm::Wide,
            show_permutations: false,
            results_scroll: 0,
            stats_scroll: 0,
            combos_scroll: 0,
            status: "Press p to play.".to_string(),
        })
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn toggle_help(&mut self) {
        self.current_tab = if self.current_tab == Tab::Help {
            Tab::Dice
        } else {
            Tab::Help
        };
    }

    pub fn selected_die(&self) -> &Die {
        &self.game.dice()[self.selected_die]
    }

    pub fn selected_face(&self) -> &Face {
        &self.selected_die().faces()[self.selected_face]
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Dice => {
                self.selected_face = self.selected_face.saturating_sub(1);
            }
            Tab::Results => self.results_scroll = self.results_scroll.saturating_sub(1),
            Tab::Stats => self.stats_scroll = self.stats_scroll.saturating_sub(1),
            Tab::Combos => self.combos_scroll = self.combos_scroll.saturating_sub(1),
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Dice => {
                if self.selected_face + 1 < self.selected_die().len() {
                    self.selected_face += 1;
                }
            }
            Tab::Results => {
                let max = self.result_rows().saturating_sub(1);
                self.results_scroll = (self.results_scroll + 1).min(max);
            }
            Tab::Stats => {
                let max = self
                    .analysis
                    .as_ref()
                    .map_or(0, |a| a.face_counts.num_rolls())
                    .saturating_sub(1);
                self.stats_scroll = (self.stats_scroll + 1).min(max);
            }
            Tab::Combos => {
                let max = self.combo_rows().saturating_sub(1);
                self.combos_scroll = (self.combos_scroll + 1).min(max);
            }
            Tab::Help => {}
        }
    }

    /// Lower the selected face's weight
    pub fn on_left(&mut self) {
        if self.current_tab == Tab::Dice {
            self.adjust_weight(-WEIGHT_STEP);
        }
    }

    /// Raise the selected face's weight
    pub fn on_right(&mut self) {
        if self.current_tab == Tab::Dice {
            self.adjust_weight(WEIGHT_STEP);
        }
    }

    /// Select the next die (wraps)
    pub fn next_die(&mut self) {
        self.selected_die = (self.selected_die + 1) % self.game.num_dice();
        self.selected_face = self.selected_face.min(self.selected_die().len() - 1);
    }

    fn adjust_weight(&mut self, delta: f64) {
        let face = self.selected_face().clone();
        let current = self.selected_die().weight(&face).unwrap_or(1.0);
        let new_weight = (current + delta).max(0.0);

        let result = self
            .game
            .die_mut(self.selected_die)
            .and_then(|die| die.set_weight(face.clone(), new_weight));
        match result {
            Ok(()) => {
                self.status = format!(
                    "Die {} face {} weight {:.1}",
                    self.selected_die, face, new_weight
                );
            }
            Err(e) => self.report_error(e),
        }
    }

    pub fn reset_weights(&mut self) {
        if let Ok(die) = self.game.die_mut(self.selected_die) {
            die.reset_weights();
            self.status = format!("Die {} weights reset", self.selected_die);
        }
    }

    pub fn increase_rolls(&mut self) {
        if let Some(next) = ROLL_COUNTS.iter().find(|n| **n > self.num_rolls) {
            self.num_rolls = *next;
        }
    }

    pub fn decrease_rolls(&mut self) {
        if let Some(prev) = ROLL_COUNTS.iter().rev().find(|n| **n < self.num_rolls) {
            self.num_rolls = *prev;
        }
    }

    /// Play the game and analyze the new results
    pub fn play(&mut self) {
        let outcome = self
            .game
            .play_with_rng(self.num_rolls, &mut self.rng)
            .and_then(|()| Analyzer::new(&self.game));

        match outcome {
            Ok(analyzer) => {
                let analysis = Analysis::new(analyzer);
                self.status = format!(
                    "Played {} rolls: {} jackpots",
                    analysis.report.num_rolls, analysis.report.jackpots
                );
                self.analysis = Some(analysis);
                self.results_scroll = 0;
                self.stats_scroll = 0;
                self.combos_scroll = 0;
            }
            Err(e) => self.report_error(e),
        }
    }

    /// Restart the RNG from a fresh random seed
    pub fn reseed(&mut self) {
        self.seed = rand::random();
        self.rng = rand::rngs::StdRng::seed_from_u64(self.seed);
        self.status = format!("Reseeded with {}", self.seed);
    }

    pub fn toggle_form(&mut self) {
        self.result_form = self.result_form.toggle();
        self.results_scroll = 0;
    }

    pub fn toggle_combo_view(&mut self) {
        self.show_permutations = !self.show_permutations;
        self.combos_scroll = 0;
    }

    /// Rows in the current results view
    pub fn result_rows(&self) -> usize {
        let Some(analysis) = &self.analysis else {
            return 0;
        };
        let results = analysis.analyzer.results();
        match self.result_form {
            ShowForm::Wide => results.num_rolls(),
            ShowForm::Narrow => results.num_rolls() * results.num_dice(),
        }
    }

    fn combo_rows(&self) -> usize {
        self.analysis
            .as_ref()
            .map_or(0, |a| a.counts(self.show_permutations).len())
    }

    fn report_error(&mut self, e: DiceError) {
        tracing::warn!("{}", e);
        self.status = format!("Error: {}", e);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        let mut app = App::new();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Dice);
        app.set_tab(2);
        assert_eq!(app.current_tab, Tab::Stats);
        app.set_tab(99);
        assert_eq!(app.current_tab, Tab::Stats);
    }

    #[test]
    fn test_adjust_weight() {
        let mut app = App::new();
        app.on_down();
        app.on_right();
        app.on_right();
        let face = app.selected_face().clone();
        assert_eq!(face, Face::Int(2));
        assert!((app.selected_die().weight(&face).unwrap() - 2.0).abs() < f64::EPSILON);

        for _ in 0..10 {
            app.on_left();
        }
        assert!(app.selected_die().weight(&face).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn test_play_caches_analysis() {
        let mut app = App::new();
        app.num_rolls = 100;
        app.play();

        let analysis = app.analysis.as_ref().unwrap();
        assert_eq!(analysis.analyzer.num_rolls(), 100);
        assert_eq!(analysis.report, analysis.analyzer.report());
        assert_eq!(analysis.face_counts.num_rolls(), 100);
        assert_eq!(app.result_rows(), 100);
        app.toggle_form();
        assert_eq!(app.result_rows(), 200);
    }

    #[test]
    fn test_failed_play_keeps_previous_analysis() {
        let mut app = App::new();
        app.num_rolls = 10;
        app.play();

        for _ in 0..6 {
            for _ in 0..4 {
                app.on_left();
            }
            app.on_down();
        }
        app.play();
        assert!(app.status.starts_with("Error"));
        assert_eq!(app.analysis.as_ref().unwrap().report.num_rolls, 10);
    }

    #[test]
    fn test_cached_analysis_tracks_latest_play() {
        let mut app = App::new();
        app.num_rolls = 10;
        app.play();
        app.num_rolls = 100;
        app.play();

        let analysis = app.analysis.as_ref().unwrap();
        assert_eq!(analysis.analyzer.results(), &app.game.wide().unwrap());
        assert_eq!(analysis.report.combinations.total(), 100);
        assert_eq!(analysis.counts(true).total(), 100);

        // Re-weighting without playing leaves the cached statistics alone
        let before = analysis.report.clone();
        app.on_right();
        assert_eq!(app.analysis.as_ref().unwrap().report, before);
    }

    #[test]
    fn test_roll_count_steps() {
        let mut app = App::new();
        assert_eq!(app.num_rolls, 1000);
        app.increase_rolls();
        assert_eq!(app.num_rolls, 10_000);
        app.decrease_rolls();
        app.decrease_rolls();
        assert_eq!(app.num_rolls, 100);
    }

    #[test]
    fn test_next_die_wraps() {
        let mut app = App::new();
        app.next_die();
        assert_eq!(app.selected_die, 1);
        app.next_die();
        assert_eq!(app.selected_die, 0);
    }
}
