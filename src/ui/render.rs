use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::collaborators::render_collaborators_dialog;
use crate::ui::footer::{Footer, HintSet};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::HEADER_SEPARATOR;
use crate::ui::wizard_dialog::render_wizard_dialog;
use crate::wizard::StepContent;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let t = app.wizard().translator();
    frame.render_widget(Header::new(app.created(), app.status(), t).widget(), header);
    frame.render_widget(Clear, body);

    if app.wizard().is_open() {
        render_wizard_dialog(frame, body, app);
    } else {
        let landing = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", t.translate("Press n to create a project.")),
                Style::default().fg(HEADER_SEPARATOR),
            )),
        ]);
        frame.render_widget(landing, body);
    }

    render_collaborators_dialog(
        frame,
        app.collaborators_dialog(),
        t,
        app.animation_tick(),
    );

    frame.render_widget(Footer::new(hint_set(app), t).widget(footer), footer);
}

fn hint_set(app: &App) -> HintSet {
    if app.collaborators_dialog().is_visible() {
        return HintSet::Dialog;
    }
    let wizard = app.wizard();
    if !wizard.is_open() {
        return HintSet::Landing;
    }
    match wizard.current_step().content {
        StepContent::Details { .. } => HintSet::Details,
        StepContent::Collaborators { .. } => HintSet::Collaborators,
        StepContent::Placeholder { .. } | StepContent::Confirm => HintSet::Step,
    }
}
