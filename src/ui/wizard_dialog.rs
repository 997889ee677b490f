//! Rendering for the wizard modal.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::form::FormState;
use crate::i18n::Translator;
use crate::ui::app::App;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};
use crate::wizard::project::{FIELD_GITHUB_USERS, FIELD_NAME, FIELD_ORGANIZATION, FIELD_REPO_NAME};
use crate::wizard::{
    ButtonOptions, ButtonVariant, FieldKind, FieldSpec, ProgressIndicator, StepContent,
    StepStatus,
};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render_wizard_dialog(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = app.wizard();
    if !wizard.is_open() {
        return;
    }
    let t = wizard.translator();

    let area = centered_rect(80, 80, area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", wizard.heading()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [progress_area, body_area, buttons_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

    frame.render_widget(Paragraph::new(progress_line(&wizard.progress())), progress_area);

    let form = wizard.form();
    let lines = match &wizard.current_step().content {
        StepContent::Details { fields } => details_lines(fields, form, app.focused_field(), t),
        StepContent::Collaborators { field } => collaborator_lines(form.list(field), t),
        StepContent::Placeholder { message } => vec![Line::from(Span::styled(
            format!("  {}", t.translate(message)),
            Style::default().fg(HEADER_SEPARATOR),
        ))],
        StepContent::Confirm => confirm_lines(form, t),
    };
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        body_area,
    );

    let footer = wizard.footer();
    let line = Line::from(vec![
        Span::raw("  "),
        button_span(&footer.leading, app.animation_tick()),
        Span::raw("    "),
        button_span(&footer.trailing, app.animation_tick()),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Right),
        buttons_area,
    );
}

fn progress_line(progress: &ProgressIndicator) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (index, step) in progress.steps.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" ─ ", Style::default().fg(HEADER_SEPARATOR)));
        }
        let (marker, style) = match step.status {
            StepStatus::Completed => ("✓", Style::default().fg(STATUS_OK)),
            StepStatus::Selected => (
                "●",
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ),
            StepStatus::Pending => ("○", Style::default().fg(HEADER_TEXT)),
            StepStatus::Disabled => (
                "○",
                Style::default()
                    .fg(HEADER_SEPARATOR)
                    .add_modifier(Modifier::DIM),
            ),
        };
        spans.push(Span::styled(format!("{} {}", marker, step.label), style));
    }
    Line::from(spans)
}

fn details_lines(
    fields: &[FieldSpec],
    form: &FormState,
    focused: usize,
    t: &dyn Translator,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(fields.len() * 2);
    for (index, spec) in fields.iter().enumerate() {
        let required = if spec.required { "*" } else { "" };
        let value = form.text(&spec.name);
        let shown = match spec.kind {
            FieldKind::Text if index == focused => format!("{}▏", value),
            FieldKind::Text => value.to_string(),
            FieldKind::Select { .. } => format!("‹ {} ›", value),
        };
        let value_style = if index == focused {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}{}: ", t.translate(&spec.label), required),
                Style::default().fg(HEADER_SEPARATOR),
            ),
            Span::styled(shown, value_style),
        ]));
        if let Some(error) = form.error(&spec.name) {
            lines.push(Line::from(Span::styled(
                format!("    {}", error),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }
    lines
}

fn collaborator_lines(logins: &[String], t: &dyn Translator) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!("  {}", t.translate("Press Space to assign collaborators")),
        Style::default().fg(HEADER_SEPARATOR),
    ))];
    lines.push(Line::from(""));
    if logins.is_empty() {
        lines.push(Line::from(format!(
            "  {}",
            t.translate("No collaborators assigned")
        )));
    }
    lines.extend(
        logins
            .iter()
            .map(|login| Line::from(Span::styled(format!("  • {}", login), Style::default().fg(HEADER_TEXT)))),
    );
    lines
}

fn confirm_lines(form: &FormState, t: &dyn Translator) -> Vec<Line<'static>> {
    let label = Style::default().fg(HEADER_SEPARATOR);
    let value = Style::default().fg(HEADER_TEXT);
    let row = |name: &str, text: String| {
        Line::from(vec![
            Span::styled(format!("  {}: ", t.translate(name)), label),
            Span::styled(text, value),
        ])
    };

    let mut lines = vec![
        row("Project Name", form.text(FIELD_NAME).to_string()),
        row("Organization", form.text(FIELD_ORGANIZATION).to_string()),
        row("Repository Name", form.text(FIELD_REPO_NAME).to_string()),
        row(
            "Collaborators",
            form.list(FIELD_GITHUB_USERS).join(", "),
        ),
    ];

    // Server-side errors surface here; the offending fields live on earlier steps.
    for (field, message) in &form.errors {
        if message.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(
            format!("  {}: {}", field, message),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    lines
}

fn button_span(button: &ButtonOptions, animation_tick: u8) -> Span<'static> {
    let label = if button.busy {
        let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
        format!(" {} {} ", spinner, button.label)
    } else {
        format!(" {} ", button.label)
    };

    let style = match (button.disabled, button.variant) {
        (true, _) => Style::default()
            .fg(HEADER_SEPARATOR)
            .add_modifier(Modifier::DIM),
        (false, ButtonVariant::Brand) => Style::default()
            .fg(HEADER_TEXT)
            .bg(BRAND)
            .add_modifier(Modifier::BOLD),
        (false, ButtonVariant::Outline) => Style::default()
            .fg(BRAND)
            .add_modifier(Modifier::BOLD),
        (false, ButtonVariant::Neutral) => Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT),
    };
    Span::styled(label, style)
}
