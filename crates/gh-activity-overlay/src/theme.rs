use gh_activity_feed::Icon;
use ratatui::{prelude::*, style::palette::tailwind};

/// Overlay theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_primary: Color,
    pub border: Color,

    pub text_primary: Color,
    pub text_muted: Color,
    pub text_header: Color,

    /// Highlight of the newest entry while it flashes
    pub flash_bg: Color,
    pub flash_fg: Color,

    pub status_success: Color,
    pub status_error: Color,
    pub accent_pull_request: Color,
    pub accent_issue: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            border: tailwind::SLATE.c600,

            text_primary: tailwind::SLATE.c100,
            text_muted: tailwind::SLATE.c400,
            text_header: tailwind::SLATE.c200,

            flash_bg: tailwind::AMBER.c400,
            flash_fg: tailwind::SLATE.c950,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            accent_pull_request: tailwind::VIOLET.c400,
            accent_issue: tailwind::CYAN.c400,
        }
    }

    pub fn icon_color(&self, icon: Icon) -> Color {
        match icon {
            Icon::PullRequest => self.accent_pull_request,
            Icon::Issue => self.accent_issue,
            Icon::CheckPass => self.status_success,
            Icon::CheckFail => self.status_error,
            Icon::Coffee | Icon::Eye | Icon::EyeOff => self.text_muted,
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.text_header)
            .add_modifier(Modifier::BOLD)
    }

    pub fn flash_style(&self) -> Style {
        Style::default()
            .fg(self.flash_fg)
            .bg(self.flash_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::ITALIC)
    }
}
