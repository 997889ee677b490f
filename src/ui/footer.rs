use crate::i18n::Translator;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which key hints to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintSet {
    Landing,
    Details,
    Collaborators,
    Step,
    Dialog,
}

impl HintSet {
    /// Untranslated hint line; also the translation key.
    pub fn key(self) -> &'static str {
        match self {
            HintSet::Landing => " n: New Project │ q: Quit",
            HintSet::Details => {
                " Tab: Next Field │ ←/→: Choose │ Enter: Next │ Ctrl+B: Back │ Esc: Cancel │ Ctrl+Q: Quit"
            }
            HintSet::Collaborators => {
                " Space: Assign │ Enter: Next │ Ctrl+B: Back │ Esc: Cancel │ Ctrl+Q: Quit"
            }
            HintSet::Step => " Enter: Continue │ Ctrl+B: Back │ Esc: Cancel │ Ctrl+Q: Quit",
            HintSet::Dialog => " ↑/↓: Move │ Space: Toggle │ a: All │ r: Refresh │ Enter: Save │ Esc: Close",
        }
    }
}

pub struct Footer<'a> {
    hints: HintSet,
    translator: &'a dyn Translator,
}

impl<'a> Footer<'a> {
    pub fn new(hints: HintSet, translator: &'a dyn Translator) -> Self {
        Self { hints, translator }
    }

    pub fn hint_text(&self) -> String {
        self.translator.translate(self.hints.key())
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hint_text();
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: hints contain box-drawing characters.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Passthrough};
    use std::collections::HashMap;

    #[test]
    fn hints_go_through_translator() {
        let key = HintSet::Landing.key();
        let catalog = Catalog::new(HashMap::from([(
            key.to_string(),
            " n: Nouveau projet │ q: Quitter".to_string(),
        )]));
        assert_eq!(
            Footer::new(HintSet::Landing, &catalog).hint_text(),
            " n: Nouveau projet │ q: Quitter"
        );
        assert_eq!(Footer::new(HintSet::Step, &catalog).hint_text(), HintSet::Step.key());
        assert_eq!(Footer::new(HintSet::Landing, &Passthrough).hint_text(), key);
    }
}
