//! Stats tab view

use super::{bar, section_header, value_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(analysis) = &app.analysis else {
        super::not_played(f, area, " Stats ");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(55),
        ])
        .split(area);

    // Summary and face totals
    let report = &analysis.report;
    let mut lines = vec![
        section_header("Summary"),
        value_line("Rolls", report.num_rolls.to_string()),
        value_line("Dice", report.num_dice.to_string()),
        value_line(
            "Jackpots",
            format!("{} ({:.2}%)", report.jackpots, report.jackpot_rate() * 100.0),
        ),
        value_line("Distinct combos", report.combinations.len().to_string()),
        value_line("Distinct perms", report.permutations.len().to_string()),
        Line::from(""),
        section_header("Face Totals"),
    ];

    let max_count = report.face_totals.iter().map(|t| t.count).max().unwrap_or(0);
    let total_faces = (report.num_rolls * report.num_dice) as f64;
    for total in &report.face_totals {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>8} ", total.face), Style::default().fg(Color::Gray)),
            Span::styled(
                bar(total.count as f64, max_count as f64, 16),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!(" {:>7} ({:.1}%)", total.count, total.count as f64 / total_faces * 100.0),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    let summary = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Statistics "));
    f.render_widget(summary, chunks[0]);

    // Per-roll face counts
    let counts = &analysis.face_counts;
    let visible = chunks[1].height.saturating_sub(3) as usize;

    let mut header = vec!["roll".to_string()];
    header.extend(counts.faces().iter().map(|face| face.to_string()));

    let rows: Vec<Row> = (app.stats_scroll..counts.num_rolls())
        .take(visible)
        .filter_map(|roll| {
            let row = counts.row(roll)?;
            let mut cells = vec![roll.to_string()];
            cells.extend(row.iter().map(|c| c.to_string()));
            Some(Row::new(cells))
        })
        .collect();

    let widths = vec![Constraint::Length(6); counts.faces().len() + 1];
    let table = Table::new(rows, widths)
        .header(
            Row::new(header)
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Face Counts per Roll "),
        );
    f.render_widget(table, chunks[1]);
}
