//! Headless simulation runs

use dice_core::{
    Analyzer, ConfigError, DiceError, Game, GameConfig, Report, ResultView, ShowForm,
};
use rand::SeedableRng;
use serde::Serialize;
use thiserror::Error;

/// Anything that can stop a simulation run
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dice(#[from] DiceError),
    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// One seeded play of a configured game plus its analysis
pub struct SimulationRun {
    pub seed: u64,
    pub game: Game,
    pub analyzer: Analyzer,
}

impl SimulationRun {
    /// Build the game, play `config.num_rolls` rolls, and analyze them
    pub fn run(config: &GameConfig, seed: u64) -> Result<Self, SimulationError> {
        let mut game = config.build_game()?;
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        game.play_with_rng(config.num_rolls, &mut rng)?;
        let analyzer = Analyzer::new(&game)?;

        tracing::info!(
            seed,
            num_rolls = config.num_rolls,
            num_dice = game.num_dice(),
            jackpots = analyzer.jackpot(),
            "simulation complete"
        );

        Ok(SimulationRun {
            seed,
            game,
            analyzer,
        })
    }

    pub fn report(&self) -> Report {
        self.analyzer.report()
    }

    /// Output document, optionally carrying the raw results in `form`
    pub fn output(&self, form: Option<ShowForm>) -> Result<SimulationOutput, SimulationError> {
        let results = form.map(|f| self.game.show_as(f)).transpose()?;
        Ok(SimulationOutput {
            seed: self.seed,
            report: self.report(),
            results,
        })
    }
}

/// JSON output structure
#[derive(Debug, Serialize)]
pub struct SimulationOutput {
    pub seed: u64,
    pub report: Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultView>,
}

impl SimulationOutput {
    pub fn to_json(&self) -> Result<String, SimulationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text report, with at most `top` rows per count table
    pub fn to_text(&self, top: usize) -> String {
        let mut text = format!("Seed: {}\n{}", self.seed, self.report.summary(top));
        if let Some(results) = &self.results {
            text.push('\n');
            text.push_str(&render_results(results));
        }
        text
    }
}

/// Fixed-width text table of raw results
pub fn render_results(results: &ResultView) -> String {
    let (rows, cols) = results.shape();
    let mut out = format!("Results ({} x {}):\n", rows, cols);
    match results {
        ResultView::Wide(table) => {
            for (roll, row) in table.rows().iter().enumerate() {
                let cells: Vec<String> = row.iter().map(|f| format!("{:>6}", f)).collect();
                out.push_str(&format!("{:>6} {}\n", roll, cells.join(" ")));
            }
        }
        ResultView::Narrow(table) => {
            out.push_str(&format!("{:>6} {:>6} {:>8}\n", "roll", "die", "outcome"));
            for row in table.rows() {
                out.push_str(&format!("{:>6} {:>6} {:>8}\n", row.roll, row.die, row.outcome));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dice_core::{Face, WideTable};

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = GameConfig::fair(6, 3);
        let first = SimulationRun::run(&config, 99).unwrap();
        let second = SimulationRun::run(&config, 99).unwrap();

        assert_eq!(first.game.wide().unwrap(), second.game.wide().unwrap());
        assert_eq!(first.report(), second.report());
        assert_eq!(first.report().num_rolls, 1000);
        assert_eq!(first.report().num_dice, 3);
    }

    #[test]
    fn test_output_with_results() {
        let mut config = GameConfig::fair(2, 2);
        config.num_rolls = 5;
        let run = SimulationRun::run(&config, 1).unwrap();

        let output = run.output(Some(ShowForm::Narrow)).unwrap();
        assert_eq!(output.results.as_ref().unwrap().shape(), (10, 3));

        let value: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();
        assert_eq!(value["seed"], 1);
        assert_eq!(value["results"]["rows"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn test_output_without_results() {
        let mut config = GameConfig::fair(6, 2);
        config.num_rolls = 20;
        let run = SimulationRun::run(&config, 5).unwrap();

        let value = serde_json::to_value(run.output(None).unwrap()).unwrap();
        assert!(value.get("results").is_none());
        assert_eq!(value["report"]["num_rolls"], 20);
    }

    fn coin_results() -> WideTable {
        WideTable::from_rows(vec![
            vec![Face::from("h"), Face::from("t")],
            vec![Face::from("t"), Face::from("t")],
        ])
        .unwrap()
    }

    #[test]
    fn test_render_wide_results() {
        let text = render_results(&ResultView::Wide(coin_results()));
        assert_eq!(
            text,
            "Results (2 x 2):\n     0      h      t\n     1      t      t\n"
        );
    }

    #[test]
    fn test_render_narrow_results() {
        let text = render_results(&ResultView::Narrow(coin_results().to_narrow()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Results (4 x 3):");
        assert_eq!(lines[1], "  roll    die  outcome");
        assert_eq!(lines[2], "     0      0        h");
        assert_eq!(lines[5], "     1      1        t");
    }

    #[test]
    fn test_text_output_with_narrow_results() {
        let mut config = GameConfig::fair(3, 2);
        config.num_rolls = 4;
        let run = SimulationRun::run(&config, 8).unwrap();

        let text = run.output(Some(ShowForm::Narrow)).unwrap().to_text(3);
        assert!(text.starts_with("Seed: 8\nRolls: 4  Dice: 2\n"));
        assert!(text.contains("Results (8 x 3):\n  roll    die  outcome\n"));

        let text = run.output(None).unwrap().to_text(3);
        assert!(!text.contains("Results ("));
    }

    #[test]
    fn test_invalid_config_fails() {
        let mut config = GameConfig::fair(6, 2);
        config.num_rolls = 0;
        assert!(matches!(
            SimulationRun::run(&config, 1),
            Err(SimulationError::Config(ConfigError::ValidationError(_)))
        ));
    }
}
