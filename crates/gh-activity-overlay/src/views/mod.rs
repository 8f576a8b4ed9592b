mod overlay;

pub use overlay::OverlayWidget;

use crate::state::AppState;
use ratatui::{Frame, layout::Rect};

/// Widest the panel grows, wider terminals leave the rest empty
const MAX_WIDTH: u16 = 80;

/// Render the overlay into the top-left corner of `area`
pub fn render(state: &AppState, area: Rect, frame: &mut Frame) {
    let view = gh_activity_feed::render(&state.feed, &state.config.title);
    let widget = OverlayWidget::new(&view, &state.theme);

    let panel = Rect {
        x: area.x,
        y: area.y,
        width: area.width.min(MAX_WIDTH),
        height: area.height.min(widget.height()),
    };

    frame.render_widget(widget, panel);
}
