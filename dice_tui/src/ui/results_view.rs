//! Results tab view

use crate::app::App;
use dice_core::{NarrowTable, ShowForm, WideTable};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(analysis) = &app.analysis else {
        super::not_played(f, area, " Results ");
        return;
    };
    let results = analysis.analyzer.results();

    // Borders and header take three lines
    let visible = area.height.saturating_sub(3) as usize;
    let (rows, cols) = match app.result_form {
        ShowForm::Wide => results.shape(),
        ShowForm::Narrow => (
            results.num_rolls() * results.num_dice(),
            NarrowTable::COLUMNS.len(),
        ),
    };
    let title = format!(
        " Results: {} ({} x {}), rows {}-{} ",
        app.result_form.name(),
        rows,
        cols,
        app.results_scroll.min(rows),
        (app.results_scroll + visible).min(rows),
    );

    let table = match app.result_form {
        ShowForm::Wide => wide_table(results, app.results_scroll, visible),
        ShowForm::Narrow => narrow_table(results, app.results_scroll, visible),
    };

    f.render_widget(
        table.block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn header_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

fn wide_table(wide: &WideTable, offset: usize, visible: usize) -> Table<'static> {
    let mut header = vec!["roll".to_string()];
    header.extend((0..wide.num_dice()).map(|i| format!("die {}", i)));

    let rows: Vec<Row> = wide
        .rows()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(roll, faces)| {
            let mut cells = vec![roll.to_string()];
            cells.extend(faces.iter().map(|face| face.to_string()));
            Row::new(cells)
        })
        .collect();

    let widths = vec![Constraint::Length(8); wide.num_dice() + 1];
    Table::new(rows, widths).header(Row::new(header).style(header_style()))
}

/// Narrow rows for the visible window only, read straight from the wide table
fn narrow_table(wide: &WideTable, offset: usize, visible: usize) -> Table<'static> {
    let num_dice = wide.num_dice();
    let rows: Vec<Row> = (offset..wide.num_rolls() * num_dice)
        .take(visible)
        .filter_map(|index| {
            let (roll, die) = (index / num_dice, index % num_dice);
            let outcome = wide.get(roll, die)?;
            Some(Row::new(vec![
                roll.to_string(),
                die.to_string(),
                outcome.to_string(),
            ]))
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(12),
    ];
    Table::new(rows, widths).header(Row::new(NarrowTable::COLUMNS).style(header_style()))
}
