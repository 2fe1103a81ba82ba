use super::Frame;
use crate::i18n::Language;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the title banner and the language selector.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let labels = state.labels();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let mut languages = vec![Span::styled(
        format!("{}: ", labels.language),
        styling::muted_text_style(theme),
    )];
    for language in Language::ALL {
        let code = language.code().to_uppercase();
        if language == state.language() {
            languages.push(Span::styled(
                format!("[{}]", code),
                Style::default()
                    .fg(theme.primary.to_color())
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            languages.push(Span::styled(
                format!(" {} ", code),
                styling::muted_text_style(theme),
            ));
        }
    }
    let languages = Line::from(languages);
    let languages_width = languages.width() as u16;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(languages_width)])
        .split(inner);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(labels.title, styling::banner_style(theme))),
        Line::from(Span::styled(labels.subtitle, styling::muted_text_style(theme))),
    ]);
    frame.render_widget(title, columns[0]);
    frame.render_widget(
        Paragraph::new(languages).alignment(Alignment::Right),
        columns[1],
    );
}
