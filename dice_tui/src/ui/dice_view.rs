//! Dice tab view

use super::{bar, section_header, value_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(70),
        ])
        .split(area);

    draw_dice_list(f, app, chunks[0]);
    draw_weights(f, app, chunks[1]);
}

fn draw_dice_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .game
        .dice()
        .iter()
        .enumerate()
        .map(|(i, die)| {
            let style = if i == app.selected_die {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let prefix = if i == app.selected_die { "► " } else { "  " };
            let fair = die
                .current_state()
                .iter()
                .all(|(_, w)| (w - 1.0).abs() < f64::EPSILON);
            ListItem::new(Line::from(Span::styled(
                format!(
                    "{}Die {} ({} faces{})",
                    prefix,
                    i,
                    die.len(),
                    if fair { "" } else { ", weighted" }
                ),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Dice (d to switch) "),
        );

    f.render_widget(list, area);
}

fn draw_weights(f: &mut Frame, app: &App, area: Rect) {
    let die = app.selected_die();
    let state = die.current_state();
    let max_weight = state.iter().map(|(_, w)| w).fold(0.0, f64::max);

    let mut lines = vec![
        section_header(&format!("Die {}", app.selected_die)),
        value_line("Total weight", format!("{:.2}", die.total_weight())),
        Line::from(""),
    ];

    for (i, (face, weight)) in state.iter().enumerate() {
        let selected = i == app.selected_face;
        let label_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let probability = state.probability(face).unwrap_or(0.0);

        lines.push(Line::from(vec![
            Span::styled(
                format!("{}{:>8}", if selected { "► " } else { "  " }, face),
                label_style,
            ),
            Span::styled(
                format!("  {:>6.2}  ", weight),
                Style::default().fg(Color::White),
            ),
            Span::styled(bar(weight, max_weight, 20), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("  {:>5.1}%", probability * 100.0),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Weights (←/→ to adjust) "));

    f.render_widget(paragraph, area);
}
