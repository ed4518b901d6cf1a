use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
};

use super::shared::popup_block;
use crate::{
    app::{events::wants_suggestions, state::AppState},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    frame.render_widget(Clear, area);
    let block = popup_block(" Search city ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [input, list, hint] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let search = &state.search;
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("› ", Style::default().fg(theme.accent)),
            Span::styled(search.query.clone(), Style::default().fg(theme.text)),
            Span::styled("▏", Style::default().fg(theme.accent)),
        ])),
        input,
    );

    if search.suggestions.is_empty() {
        let message = if search.has_pending() {
            "Searching..."
        } else if wants_suggestions(&search.query) {
            "No matches yet. Press Enter to search anyway."
        } else {
            "Type at least two letters"
        };
        frame.render_widget(
            Paragraph::new(Line::styled(message, Style::default().fg(theme.muted_text))),
            list,
        );
    } else {
        let items: Vec<ListItem> = search
            .suggestions
            .iter()
            .map(|location| ListItem::new(location.display_name()))
            .collect();
        let mut list_state = ListState::default().with_selected(search.selected);
        frame.render_stateful_widget(
            List::new(items)
                .style(Style::default().fg(theme.text))
                .highlight_style(
                    Style::default()
                        .bg(theme.highlight)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ "),
            list,
            &mut list_state,
        );
    }

    frame.render_widget(
        Paragraph::new(Line::styled(
            "↑/↓ choose · Enter search · Esc cancel",
            Style::default().fg(theme.muted_text),
        )),
        hint,
    );
}
