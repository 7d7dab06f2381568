//! History charts: average emissions, water and population over time.

use crate::core::state::HistoryLog;
use crate::error::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::tty::IsTty;
use crossterm::ExecutableCommand;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame, Terminal,
};
use std::io;

/// One of the three stacked panels.
struct Panel<'a> {
    title: &'a str,
    y_label: &'a str,
    color: Color,
    points: Vec<(f64, f64)>,
}

/// Draw the three history charts stacked vertically inside `area`.
pub fn draw_history_chart(frame: &mut Frame, area: Rect, history: &HistoryLog) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let panels = [
        Panel {
            title: "Carbon Emissions Over Time",
            y_label: "Carbon Emissions (grams/day)",
            color: Color::Red,
            points: history.emissions_series(),
        },
        Panel {
            title: "Water Supply Over Time",
            y_label: "Water Supply (liters)",
            color: Color::Blue,
            points: history.water_series(),
        },
        Panel {
            title: "Population Over Time",
            y_label: "Population",
            color: Color::Green,
            points: history.population_series(),
        },
    ];

    let x_bounds = day_bounds(history);
    for (panel, chunk) in panels.iter().zip(chunks.iter()) {
        draw_panel(frame, *chunk, panel, x_bounds);
    }

    let footer = Paragraph::new("Press any key to continue...")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[3]);
}

fn draw_panel(frame: &mut Frame, area: Rect, panel: &Panel, x_bounds: [f64; 2]) {
    let y_bounds = value_bounds(&panel.points);

    // Legend uses the same wording as the y axis
    let datasets = vec![Dataset::default()
        .name(panel.y_label)
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(panel.color))
        .data(&panel.points)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(panel.title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(panel.color)),
        )
        .x_axis(
            Axis::default()
                .title("Days")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title(panel.y_label)
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );

    frame.render_widget(chart, area);
}

/// Day range covered by the history; day 0 to 1 when empty.
pub fn day_bounds(history: &HistoryLog) -> [f64; 2] {
    match (history.entries().first(), history.last()) {
        (Some(first), Some(last)) if last.day > first.day => [first.day as f64, last.day as f64],
        (Some(first), Some(_)) => [first.day as f64 - 1.0, first.day as f64 + 1.0],
        _ => [0.0, 1.0],
    }
}

/// Value range of a series, padded so flat lines stay visible.
pub fn value_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &(_, y) in points {
        min = min.min(y);
        max = max.max(y);
    }

    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    if (max - min).abs() < f64::EPSILON {
        return [min - 1.0, max + 1.0];
    }
    let pad = (max - min) * 0.05;
    [min - pad, max + pad]
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![
        Span::raw(format!("{:.0}", bounds[0])),
        Span::raw(format!("{:.0}", mid)),
        Span::raw(format!("{:.0}", bounds[1])),
    ]
}

/// Raw mode plus alternate screen, restored on drop.
struct RawScreen;

impl RawScreen {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        // From here on, Drop undoes raw mode even if the screen switch fails
        let screen = RawScreen;
        io::stdout().execute(EnterAlternateScreen)?;
        Ok(screen)
    }
}

impl Drop for RawScreen {
    fn drop(&mut self) {
        let _ = io::stdout().execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// True when both ends are a terminal, so the full-screen chart can be shown.
pub fn interactive_chart_available() -> bool {
    io::stdin().is_tty() && io::stdout().is_tty()
}

/// Show the charts full screen and block until a key is pressed.
pub fn show_history_chart(history: &HistoryLog) -> Result<()> {
    let _screen = RawScreen::enter()?;
    draw_and_wait(history)
}

fn draw_and_wait(history: &HistoryLog) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.draw(|frame| {
        let area = frame.size();
        draw_history_chart(frame, area, history);
    })?;

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
