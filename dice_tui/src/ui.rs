//! UI rendering

mod combos_view;
mod dice_view;
mod help_view;
mod results_view;
mod stats_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Dice => dice_view::draw(f, app, chunks[1]),
        Tab::Results => results_view::draw(f, app, chunks[1]),
        Tab::Stats => stats_view::draw(f, app, chunks[1]),
        Tab::Combos => combos_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_status(f, app, chunks[2]);
    draw_keybindings(f, app, chunks[3]);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled("Rolls: ", Style::default().fg(Color::Gray)),
        Span::styled(app.num_rolls.to_string(), Style::default().fg(Color::White)),
        Span::styled("  Seed: ", Style::default().fg(Color::Gray)),
        Span::styled(app.seed.to_string(), Style::default().fg(Color::White)),
        Span::styled("  │  ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.status.clone(), Style::default().fg(Color::Green)),
    ]);

    let paragraph =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Status "));
    f.render_widget(paragraph, area);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![
        ("p", "Play"),
        ("Tab", "Next tab"),
        ("q", "Quit"),
    ];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Dice => vec![
            ("↑/↓", "Select face"),
            ("←/→", "Weight"),
            ("d", "Next die"),
            ("r", "Reset die"),
            ("+/-", "Rolls"),
        ],
        Tab::Results => vec![
            ("w", "Wide/narrow"),
            ("↑/↓", "Scroll"),
        ],
        Tab::Stats => vec![
            ("↑/↓", "Scroll"),
        ],
        Tab::Combos => vec![
            ("c", "Combos/perms"),
            ("↑/↓", "Scroll"),
        ],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    // Add tab-specific keys first
    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    // Add separator if we have tab-specific keys
    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    // Add common keys
    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Dice Simulator "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// Horizontal bar scaled so `max` fills `width` cells
pub fn bar(value: f64, max: f64, width: u16) -> String {
    let percent = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = (percent * width as f64).round() as usize;
    let empty = width as usize - filled;

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

pub fn value_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:20}", name),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

pub fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

/// Placeholder shown on tabs that need a played game
pub fn not_played(f: &mut Frame, area: Rect, title: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        "No results yet - press p to play.",
        Style::default().fg(Color::DarkGray),
    )))
    .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar() {
        assert_eq!(bar(5.0, 10.0, 4), "██░░");
        assert_eq!(bar(0.0, 0.0, 3), "░░░");
        assert_eq!(bar(20.0, 10.0, 2), "██");
    }
}
