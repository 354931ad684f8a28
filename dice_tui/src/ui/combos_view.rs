//! Combinations / permutations tab view

use super::bar;
use crate::app::App;
use dice_core::analyzer::format_key;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(analysis) = &app.analysis else {
        super::not_played(f, area, " Combos ");
        return;
    };

    let title = if app.show_permutations {
        "Permutations"
    } else {
        "Combinations"
    };
    let counts = analysis.counts(app.show_permutations);

    let visible = area.height.saturating_sub(3) as usize;
    let total = counts.total() as f64;
    let max = counts.entries().first().map_or(0, |e| e.count) as f64;

    let rows: Vec<Row> = counts
        .iter()
        .enumerate()
        .skip(app.combos_scroll)
        .take(visible)
        .map(|(rank, entry)| {
            Row::new(vec![
                (rank + 1).to_string(),
                format_key(&entry.key),
                entry.count.to_string(),
                format!("{:.2}%", entry.count as f64 / total * 100.0),
                bar(entry.count as f64, max, 20),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Min(16),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(22),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(["#", "outcome", "count", "share", ""])
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(format!(
            " {} ({} distinct, c to switch) ",
            title,
            counts.len()
        )));

    f.render_widget(table, area);
}
