//! Help tab view

use super::section_header;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        section_header("Navigation"),
        key_line("1-5", "Jump to tab (Dice/Results/Stats/Combos/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select face / scroll"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section_header("Dice"),
        key_line("d", "Select next die"),
        key_line("←/h  →/l", "Lower/raise the selected face's weight by 0.5"),
        key_line("r", "Reset the selected die to fair weights"),
        Line::from(""),
        section_header("Playing"),
        key_line("p / Enter", "Roll every die, replacing previous results"),
        key_line("+ / -", "Change the number of rolls"),
        key_line("s", "Reseed the random generator"),
        key_line("w", "Switch results between wide and narrow form"),
        key_line("c", "Switch between combinations and permutations"),
        Line::from(""),
        section_header("Statistics"),
        Line::from(""),
        Line::from(Span::styled("Weighted rolls:", Style::default().fg(Color::Yellow))),
        Line::from("  P(face) = weight / sum of weights on that die"),
        Line::from(""),
        Line::from(Span::styled("Jackpot:", Style::default().fg(Color::Yellow))),
        Line::from("  A roll where every die shows the same face"),
        Line::from(""),
        Line::from(Span::styled("Combination:", Style::default().fg(Color::Yellow))),
        Line::from("  Faces of one roll ignoring die order: (1, 2) = (2, 1)"),
        Line::from(""),
        Line::from(Span::styled("Permutation:", Style::default().fg(Color::Yellow))),
        Line::from("  Faces of one roll in die order: (1, 2) ≠ (2, 1)"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
