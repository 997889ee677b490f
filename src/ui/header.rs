use crate::i18n::Translator;
use crate::ui::app::StatusLine;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    created: usize,
    status: Option<&'a StatusLine>,
    translator: &'a dyn Translator,
}

impl<'a> Header<'a> {
    pub fn new(
        created: usize,
        status: Option<&'a StatusLine>,
        translator: &'a dyn Translator,
    ) -> Self {
        Self {
            created,
            status,
            translator,
        }
    }

    pub fn created_label(&self) -> String {
        format!("{} {}", self.created, self.translator.translate("created"))
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("stepform", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.created_label(), text_style),
        ];
        match self.status {
            Some(StatusLine::Info(message)) => {
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled(message.clone(), Style::default().fg(STATUS_OK)));
            }
            Some(StatusLine::Error(message)) => {
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled(
                    message.clone(),
                    Style::default().fg(STATUS_ERROR),
                ));
            }
            None => {}
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
