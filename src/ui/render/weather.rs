use super::{panel_block, Frame};
use crate::state::weather::LookupStatus;
use crate::state::{Mode, Panel, State};
use crate::ui::widgets::{spinner::spinner, styling};
use crate::weather::Snapshot;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the weather panel: search box, latest snapshot and lookup status.
///
pub fn weather(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let labels = state.labels();
    let panel = state.weather();

    let block = panel_block(
        format!("🌤 {}", labels.weather),
        state.focus() == Panel::Weather,
        theme,
    );
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    // Search box
    let searching = state.mode() == Mode::Search;
    let search_line = if searching {
        Line::from(vec![
            Span::styled(panel.search_input(), styling::normal_text_style(theme)),
            Span::styled("▏", Style::default().fg(theme.primary.to_color())),
        ])
    } else if panel.search_input().is_empty() {
        Line::from(Span::styled(labels.search_city, styling::muted_text_style(theme)))
    } else {
        Line::from(Span::styled(panel.search_input(), styling::normal_text_style(theme)))
    };
    let search_border = if searching {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let search = Paragraph::new(search_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(search_border)
            .title("🔍"),
    );
    frame.render_widget(search, rows[0]);

    // Snapshot and status
    let mut text = vec![];
    if let Some(snapshot) = panel.snapshot() {
        text.extend(snapshot_lines(snapshot, state));
    }
    match panel.status() {
        LookupStatus::Loading => text.push(Line::from(vec![
            spinner(*state.get_spinner_index(), theme),
            Span::styled(
                format!(" {}", labels.loading),
                styling::muted_text_style(theme),
            ),
        ])),
        LookupStatus::Failed => text.push(Line::from(Span::styled(
            format!("⚠ {}", labels.lookup_failed),
            Style::default().fg(theme.error.to_color()),
        ))),
        LookupStatus::Idle => (),
    }

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, rows[1]);
}

fn snapshot_lines(snapshot: &Snapshot, state: &State) -> Vec<Line<'static>> {
    let theme = state.get_theme();
    let labels = state.labels();
    let reading = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{}: ", label), styling::muted_text_style(theme)),
            Span::styled(value, styling::normal_text_style(theme)),
        ])
    };
    vec![
        Line::from(Span::styled(
            format!("{} {}", snapshot.condition.icon(), snapshot.city),
            Style::default()
                .fg(theme.secondary.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        reading(labels.temperature, snapshot.temperature_text()),
        reading(labels.humidity, snapshot.humidity_text()),
        reading(labels.wind_speed, snapshot.wind_text()),
        Line::from(""),
    ]
}
