//! Overlay Widget
//!
//! Draws the feed's [`OverlayView`] as a bordered panel: title and toggle hint
//! in the top border, one line per event (or the placeholder) inside.

use crate::theme::Theme;
use gh_activity_feed::{ListItem, OverlayView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Key that toggles the list, shown next to the toggle icon
const TOGGLE_KEY: &str = "h";

pub struct OverlayWidget<'a> {
    view: &'a OverlayView,
    theme: &'a Theme,
}

impl<'a> OverlayWidget<'a> {
    pub fn new(view: &'a OverlayView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    /// Rows the panel needs, borders included
    pub fn height(&self) -> u16 {
        let body = if self.view.list.visible {
            self.view.list.items.len() as u16
        } else {
            0
        };
        body + 2
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let theme = self.theme;

        self.view
            .list
            .items
            .iter()
            .map(|item| match item {
                ListItem::Event(event) => {
                    let icon = Span::styled(
                        format!("{} ", event.icon.glyph()),
                        Style::default().fg(theme.icon_color(event.icon)),
                    );
                    let sentence = if event.flash {
                        Span::styled(event.sentence.as_str(), theme.flash_style())
                    } else {
                        Span::styled(
                            event.sentence.as_str(),
                            Style::default().fg(theme.text_primary),
                        )
                    };
                    Line::from(vec![icon, sentence])
                }
                ListItem::Placeholder { icon, text } => Line::from(vec![
                    Span::styled(
                        format!("{} ", icon.glyph()),
                        Style::default().fg(theme.icon_color(*icon)),
                    ),
                    Span::styled(*text, theme.placeholder_style()),
                ]),
            })
            .collect()
    }
}

impl Widget for OverlayWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || area.width < 4 {
            return;
        }

        let header = &self.view.header;
        let toggle_hint = format!(
            " {} [{}] {} ",
            header.toggle.icon.glyph(),
            TOGGLE_KEY,
            header.toggle.title
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.bg_primary))
            .title_top(Line::from(format!(" {} ", header.title)).style(self.theme.header_style()))
            .title_top(
                Line::from(toggle_hint)
                    .style(Style::default().fg(self.theme.text_muted))
                    .right_aligned(),
            );

        if !self.view.list.visible {
            block.render(area, buf);
            return;
        }

        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
