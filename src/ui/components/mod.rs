pub mod copy_button;
pub mod status_bar;

use crate::app::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Copy button
            Constraint::Length(1), // Payload preview
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    copy_button::render(f, state, chunks[0]);
    render_payload_preview(f, state, chunks[1]);
    status_bar::render(f, state, chunks[2]);
}

fn render_payload_preview(f: &mut Frame, state: &AppState, area: Rect) {
    let available = area.width.saturating_sub(12) as usize;
    let preview = truncate_to_width(state.control.content(), available);

    let line = Line::from(vec![
        Span::styled(" payload: ", Style::default().fg(state.theme.foreground)),
        Span::styled(
            format!("\"{preview}\""),
            Style::default().fg(state.theme.foreground),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

/// Truncate `s` to at most `max_width` display columns, appending an
/// ellipsis when anything was cut. Newlines are flattened for the preview.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.width() <= max_width {
        return flat;
    }

    let mut out = String::new();
    let mut used = 0;
    for c in flat.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        let out = truncate_to_width("hello clipboard world", 10);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 10);
    }

    #[test]
    fn test_truncate_flattens_newlines() {
        assert_eq!(truncate_to_width("a\nb", 10), "a b");
    }
}
