//! Dialog rendering for collaborator assignment.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::Translator;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, STATUS_OK};

use super::state::CollaboratorsDialogState;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render_collaborators_dialog(
    frame: &mut Frame,
    state: &CollaboratorsDialogState,
    t: &dyn Translator,
    animation_tick: u8,
) {
    let CollaboratorsDialogState::Visible {
        users,
        selected,
        focused,
        refreshing,
    } = state
    else {
        return;
    };

    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);

    let title = format!(" {} ", t.translate("Assign Collaborators"));
    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(users.len() + 4);
    if *refreshing {
        let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled(
                t.translate("Syncing Collaborators…"),
                Style::default().fg(HEADER_TEXT),
            ),
        ]));
    } else {
        let all = if state.all_selected() { "[x]" } else { "[ ]" };
        lines.push(Line::from(Span::styled(
            format!("  {} {}", all, t.translate("Select All")),
            Style::default().fg(HEADER_SEPARATOR),
        )));
    }
    lines.push(Line::from(""));

    if users.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {}", t.translate("No collaborators available")),
            Style::default().fg(HEADER_SEPARATOR),
        )));
    }

    for (index, user) in users.iter().enumerate() {
        let mark = if selected.contains(&user.id) { "[x]" } else { "[ ]" };
        let style = if index == *focused {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        lines.push(Line::from(Span::styled(
            format!("  {} {}", mark, user.login),
            style,
        )));
    }

    let list_area = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    frame.render_widget(Paragraph::new(lines), list_area);

    let hint_area = Rect {
        y: inner.y + inner.height.saturating_sub(1),
        height: inner.height.min(1),
        ..inner
    };
    let hint = Line::from(Span::styled(
        "  Space toggle  a all  r refresh  Enter save  Esc close",
        Style::default().fg(HEADER_SEPARATOR),
    ));
    frame.render_widget(Paragraph::new(hint), hint_area);
}
