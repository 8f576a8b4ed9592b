//! HTML output of the view tree, for embedding the overlay in a browser panel.

use crate::format::Icon;
use crate::view::{ListItem, OverlayView};
use std::fmt::Write;

const EVENT_ICON_HEIGHT: u32 = 15;
const TOGGLE_ICON_HEIGHT: u32 = 13;

/// Render the overlay as an HTML fragment.
///
/// Icon sources are resolved relative to `assets_dir`.
pub fn to_html(view: &OverlayView, assets_dir: &str) -> String {
    let mut out = String::new();

    out.push_str("<div>");
    let _ = write!(
        out,
        "<div id=\"header\"><span>{}</span><button id=\"hideButton\" title=\"{}\">{}</button></div>",
        escape(&view.header.title),
        view.header.toggle.title,
        img(view.header.toggle.icon, assets_dir, TOGGLE_ICON_HEIGHT),
    );

    let _ = write!(out, "<ul class=\"{}\">", view.list.css_class());
    for item in &view.list.items {
        match item {
            ListItem::Event(event) => {
                let _ = write!(
                    out,
                    "<li class=\"{}\">{}<a target=\"_blank\" href=\"{}\">{}</a></li>",
                    event.css_class(),
                    img(event.icon, assets_dir, EVENT_ICON_HEIGHT),
                    escape(&event.html_url),
                    escape(&event.sentence),
                );
            }
            ListItem::Placeholder { icon, text } => {
                let _ = write!(
                    out,
                    "<li>{}{}</li>",
                    img(*icon, assets_dir, EVENT_ICON_HEIGHT),
                    escape(text),
                );
            }
        }
    }
    out.push_str("</ul></div>");

    out
}

fn img(icon: Icon, assets_dir: &str, height: u32) -> String {
    format!(
        "<img src=\"{}\" height=\"{}\"/>",
        escape(&icon.asset_path(assets_dir)),
        height
    )
}

/// Escape text for use in element content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::FeedAction;
    use crate::event::GithubEvent;
    use crate::reducer::reduce;
    use crate::state::FeedState;
    use crate::view::render;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_placeholder_html() {
        let view = render(&FeedState::default(), "Code Activity");
        assert_eq!(
            to_html(&view, "assets"),
            concat!(
                "<div>",
                "<div id=\"header\"><span>Code Activity</span>",
                "<button id=\"hideButton\" title=\"hide\"><img src=\"assets/images/eye-off.svg\" height=\"13\"/></button></div>",
                "<ul class=\"\"><li><img src=\"assets/images/coffee.svg\" height=\"15\"/>No activity yet!</li></ul>",
                "</div>"
            )
        );
    }

    #[test]
    fn test_flashing_event_html() {
        let event = GithubEvent {
            event_name: "issues".to_string(),
            sender: Some("<script>".to_string()),
            action: Some("opened".to_string()),
            number: Some(9),
            repository: "octo/repo".to_string(),
            html_url: "https://github.com/octo/repo/issues/9?a=1&b=2".to_string(),
            conclusion: None,
            head_branch: None,
            merged: None,
        };
        let state = reduce(FeedState::default(), &FeedAction::EventReceived(event));
        let state = reduce(state, &FeedAction::ToggleVisibility);
        let html = to_html(&render(&state, "Code Activity"), "static");

        assert!(html.contains("<ul class=\"hide\">"));
        assert!(html.contains("title=\"show\""));
        assert!(html.contains("<li class=\"animate\"><img src=\"static/images/alert-circle.svg\" height=\"15\"/>"));
        assert!(html.contains("href=\"https://github.com/octo/repo/issues/9?a=1&amp;b=2\""));
        assert!(html.contains("&lt;script&gt; opened issue #9 on octo/repo</a>"));
        assert!(!html.contains("coffee.svg"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&#39;");
    }
}
