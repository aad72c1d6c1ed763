use crate::app::AppState;
use crate::clipboard::CopyOutcome;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let state_text = format!("{}", state.control.state());
    let revert_indicator = if state.control.has_pending_revert() {
        " [revert pending]"
    } else {
        ""
    };
    let outcome_text = match state.last_outcome {
        Some(CopyOutcome::Success) => " | last: ok",
        Some(CopyOutcome::Failure) => " | last: failed",
        None => "",
    };

    let left_content = format!(
        " {} | {} chars | {} copies{}{}",
        state_text,
        state.control.content().chars().count(),
        state.activation_count,
        outcome_text,
        revert_indicator,
    );

    let nav_hint = "c/Enter copy  q quit";
    let version_text = format!("v{VERSION}");

    let padding = area
        .width
        .saturating_sub(left_content.len() as u16 + nav_hint.len() as u16 + version_text.len() as u16 + 3);

    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let style = if state.control.state().is_transient() {
        base_style.add_modifier(Modifier::BOLD)
    } else {
        base_style
    };

    let status_line = format!(
        "{} {} {:>padding$} {}",
        left_content,
        nav_hint,
        "",
        version_text,
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));

    f.render_widget(status, area);
}
