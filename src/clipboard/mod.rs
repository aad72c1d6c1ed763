//! Copy-strategy selection.
//!
//! One activation runs exactly one mechanism. The native clipboard is
//! probed at call time: when it is present its outcome is final, even on
//! failure; the command fallback runs only when the native capability is
//! entirely absent. No error escapes this module — every fault becomes
//! [`CopyOutcome::Failure`].

pub mod fallback;
pub mod native;

pub use fallback::CommandFallback;
pub use native::NativeClipboard;

use thiserror::Error;
use tracing::{debug, warn};

/// Result of one copy attempt as seen by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Success,
    Failure,
}

#[derive(Debug, Error)]
pub enum CopyError {
    /// No native capability and the fallback command could not be spawned.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// A mechanism ran but reported failure.
    #[error("copy command failed: {0}")]
    CommandFailed(String),
}

/// A single copy mechanism: place the payload on the clipboard or say why not.
pub trait CopyMechanism {
    fn attempt(&mut self, payload: &str) -> Result<(), CopyError>;
}

/// Copy `payload` using the platform-default fallback command.
pub fn copy(payload: &str) -> CopyOutcome {
    copy_with(payload, CommandFallback::platform_default())
}

/// Copy `payload`, using `fallback` when the native capability is absent.
pub fn copy_with(payload: &str, fallback: CommandFallback) -> CopyOutcome {
    dispatch(NativeClipboard::probe(), fallback, payload)
}

/// A present native clipboard always handles the attempt, even when it then
/// fails; the fallback is reached only when the probe found nothing.
fn dispatch<N, F>(native: Option<N>, fallback: F, payload: &str) -> CopyOutcome
where
    N: CopyMechanism,
    F: CopyMechanism,
{
    match native {
        Some(native) => run(native, payload),
        None => {
            debug!("native clipboard absent, using command fallback");
            run(fallback, payload)
        }
    }
}

fn run(mut mechanism: impl CopyMechanism, payload: &str) -> CopyOutcome {
    match mechanism.attempt(payload) {
        Ok(()) => CopyOutcome::Success,
        Err(err) => {
            warn!("copy attempt failed: {err}");
            CopyOutcome::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeMechanism {
        fail: bool,
        calls: Rc<Cell<usize>>,
    }

    impl FakeMechanism {
        fn new(fail: bool) -> (Self, Rc<Cell<usize>>) {
            let calls = Rc::new(Cell::new(0));
            (
                Self {
                    fail,
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    impl CopyMechanism for FakeMechanism {
        fn attempt(&mut self, _payload: &str) -> Result<(), CopyError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(CopyError::CommandFailed("simulated".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_native_success() {
        let (native, native_calls) = FakeMechanism::new(false);
        let (fallback, fallback_calls) = FakeMechanism::new(false);

        let outcome = dispatch(Some(native), fallback, "hello");

        assert_eq!(outcome, CopyOutcome::Success);
        assert_eq!(native_calls.get(), 1);
        assert_eq!(fallback_calls.get(), 0);
    }

    #[test]
    fn test_native_failure_does_not_reach_fallback() {
        let (native, native_calls) = FakeMechanism::new(true);
        let (fallback, fallback_calls) = FakeMechanism::new(false);

        let outcome = dispatch(Some(native), fallback, "hello");

        // Present-but-failing routes straight to failure.
        assert_eq!(outcome, CopyOutcome::Failure);
        assert_eq!(native_calls.get(), 1);
        assert_eq!(fallback_calls.get(), 0);
    }

    #[test]
    fn test_absent_native_uses_fallback() {
        let (fallback, fallback_calls) = FakeMechanism::new(false);

        let outcome = dispatch(None::<FakeMechanism>, fallback, "hello");

        assert_eq!(outcome, CopyOutcome::Success);
        assert_eq!(fallback_calls.get(), 1);
    }

    #[test]
    fn test_fallback_failure_is_failure() {
        let (fallback, _) = FakeMechanism::new(true);
        let outcome = dispatch(None::<FakeMechanism>, fallback, "hello");
        assert_eq!(outcome, CopyOutcome::Failure);
    }

    #[test]
    fn test_empty_payload_dispatches_normally() {
        let (native, native_calls) = FakeMechanism::new(false);
        let (fallback, _) = FakeMechanism::new(false);

        let outcome = dispatch(Some(native), fallback, "");

        assert_eq!(outcome, CopyOutcome::Success);
        assert_eq!(native_calls.get(), 1);
    }
}
