pub mod state;
pub mod timer;

pub use state::CopyState;
pub use timer::RevertTimer;

use crate::clipboard::{self, CommandFallback, CopyOutcome};
use ratatui::style::Style;
use std::time::{Duration, Instant};

/// How long `Copied`/`Failed` feedback stays visible before reverting.
pub const DEFAULT_REVERT_DELAY: Duration = Duration::from_millis(2000);

/// Requested glyph size tier. Affects glyph geometry only, never behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// Logical glyph size in pixels for each tier.
    pub fn glyph_px(&self) -> u16 {
        match self {
            Self::Small => 16,
            Self::Medium => 20,
            Self::Large => 24,
        }
    }

    /// Horizontal padding used by the terminal renderer for each tier.
    pub fn padding(&self) -> u16 {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }
}

impl Default for SizeClass {
    fn default() -> Self {
        SizeClass::Medium
    }
}

/// Glyph requested from the rendering layer by logical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Copy,
    Confirmed,
}

impl Glyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Copy => "⧉",
            Self::Confirmed => "✓",
        }
    }
}

/// A copy-to-clipboard control with transient visual feedback.
///
/// Owns a three-state machine (`Idle`/`Copied`/`Failed`) and a single
/// revert timer. Activating the control runs one copy attempt through
/// [`clipboard::copy`] and applies the resulting transition; entering
/// `Copied` or `Failed` always cancels any pending revert before
/// scheduling a new one, so at most one deadline is ever outstanding.
/// Dropping the control drops the timer, which makes disposal safe by
/// construction.
pub struct ClipboardCopyControl {
    content: String,
    size: SizeClass,
    extra_style: Style,
    revert_delay: Duration,
    fallback: Option<CommandFallback>,
    state: CopyState,
    revert: RevertTimer,
}

impl ClipboardCopyControl {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: SizeClass::default(),
            extra_style: Style::default(),
            revert_delay: DEFAULT_REVERT_DELAY,
            fallback: None,
            state: CopyState::Idle,
            revert: RevertTimer::new(),
        }
    }

    pub fn with_size(mut self, size: SizeClass) -> Self {
        self.size = size;
        self
    }

    /// Cosmetic style patched over the theme's base button style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.extra_style = style;
        self
    }

    pub fn with_revert_delay(mut self, delay: Duration) -> Self {
        self.revert_delay = delay;
        self
    }

    /// Override the command used when the native clipboard is absent.
    pub fn with_fallback(mut self, fallback: CommandFallback) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn size(&self) -> SizeClass {
        self.size
    }

    pub fn extra_style(&self) -> Style {
        self.extra_style
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    pub fn has_pending_revert(&self) -> bool {
        self.revert.is_pending()
    }

    /// Run one copy attempt and apply the resulting transition.
    pub fn activate(&mut self) -> CopyOutcome {
        let outcome = match &self.fallback {
            Some(fallback) => clipboard::copy_with(&self.content, fallback.clone()),
            None => clipboard::copy(&self.content),
        };
        self.apply_outcome(outcome, Instant::now());
        outcome
    }

    /// Apply a copy outcome at `now`: transition into `Copied` or `Failed`,
    /// cancelling any pending revert before scheduling the new one.
    pub fn apply_outcome(&mut self, outcome: CopyOutcome, now: Instant) {
        self.revert.cancel();
        self.state = match outcome {
            CopyOutcome::Success => CopyState::Copied,
            CopyOutcome::Failure => CopyState::Failed,
        };
        self.revert.schedule(now, self.revert_delay);
    }

    /// Advance time. Reverts to `Idle` when the pending deadline is due;
    /// returns true when a revert happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.revert.fire_if_due(now) {
            self.state = CopyState::Idle;
            true
        } else {
            false
        }
    }

    /// Accessible label for the activation affordance.
    pub fn accessible_label(&self) -> &'static str {
        match self.state {
            CopyState::Idle => "Copy to clipboard",
            CopyState::Copied => "Copied to clipboard",
            CopyState::Failed => "Failed to copy",
        }
    }

    /// Text rendered inside the affordance.
    pub fn display_text(&self) -> &'static str {
        match self.state {
            CopyState::Copied => "Copied!",
            _ => "Copy",
        }
    }

    /// Idle and Failed share the glyph shape; Failed is distinguished by
    /// color emphasis only.
    pub fn glyph(&self) -> Glyph {
        match self.state {
            CopyState::Copied => Glyph::Confirmed,
            _ => Glyph::Copy,
        }
    }
}
