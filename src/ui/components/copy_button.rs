use crate::app::AppState;
use crate::control::CopyState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Render the copy affordance centered in `area`.
///
/// The block title carries the accessible label for the current state.
/// Idle and Failed share the glyph shape; the failure color is the only
/// visual distinction between them.
pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let control = &state.control;
    let theme = &state.theme;

    let glyph_color = match control.state() {
        CopyState::Idle => theme.button_fg,
        CopyState::Copied => theme.confirm,
        CopyState::Failed => theme.failure,
    };

    let base_style = Style::default()
        .fg(theme.button_fg)
        .bg(theme.button_bg)
        .patch(control.extra_style());

    let pad = " ".repeat(control.size().padding() as usize);
    let glyph = control.glyph().symbol();
    let text = control.display_text();

    let label = Line::from(vec![
        Span::styled(pad.clone(), base_style),
        Span::styled(
            glyph,
            base_style.fg(glyph_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ", base_style),
        Span::styled(text, base_style),
        Span::styled(pad.clone(), base_style),
    ]);

    let inner_width = (pad.width() * 2 + glyph.width() + 1 + text.width()) as u16;
    let button_area = centered_fixed(inner_width + 2, 3, area);

    let title = format!(" {} ", control.accessible_label());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(base_style);

    let button = Paragraph::new(label).block(block);
    f.render_widget(button, button_area);
}

/// A `width` x `height` rect centered inside `r`, clamped to fit.
fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fixed() {
        let outer = Rect::new(0, 0, 20, 10);
        let rect = centered_fixed(10, 4, outer);
        assert_eq!(rect, Rect::new(5, 3, 10, 4));
    }

    #[test]
    fn test_centered_fixed_clamps_to_outer() {
        let outer = Rect::new(0, 0, 8, 2);
        let rect = centered_fixed(10, 4, outer);
        assert_eq!(rect, Rect::new(0, 0, 8, 2));
    }
}
