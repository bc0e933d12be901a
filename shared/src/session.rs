use crate::constants::{ALREADY_PLAYED_MESSAGE, SPIN_DURATION_MS};
use crate::wheel::{classify, resolve_outcome, Decision, OutcomeLabel};

/// Where the session is in its lifecycle. `Locked` and `Finished` are
/// terminal for the page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Asking the backend whether this device has already played.
    Checking,
    /// The backend knows this device; the game never starts.
    Locked,
    /// The user may spin.
    Playable,
    /// A spin is in flight, waiting for the animation timer.
    Resolving,
    /// A decisive outcome is being reported to the backend.
    Reporting,
    /// The session is over; the last decision stays on screen.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The "already played?" round-trip finished. Call sites map a network
    /// failure to `already_played: false` (fail-open).
    CheckCompleted { already_played: bool },
    /// The user triggered a spin.
    SpinStarted,
    /// The animation timer fired; `angle` is the resting angle in `[0, 360)`.
    WheelStopped { angle: u32 },
    /// The outcome report finished, successfully or not.
    ReportCompleted { accepted: bool },
}

/// Side effects requested by a transition. The caller performs them; the
/// session itself never touches the network or a timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Schedule the one-shot spin animation timer.
    StartSpinTimer { duration_ms: u32 },
    /// Report the decisive outcome for this device, exactly once.
    RecordOutcome { decision: Decision },
}

/// The play-session gate: enforces one completed play per device and keeps
/// every piece of session state in one place. Transitions are pure; all I/O
/// is returned as [`Effect`]s, so the whole protocol is testable without a
/// rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaySession {
    phase: Phase,
    decision: Decision,
    last_outcome: Option<OutcomeLabel>,
    message: Option<&'static str>,
}

impl Default for PlaySession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaySession {
    pub fn new() -> Self {
        Self {
            phase: Phase::Checking,
            decision: Decision::Pending,
            last_outcome: None,
            message: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn decision(&self) -> Decision {
        self.decision
    }

    pub fn last_outcome(&self) -> Option<OutcomeLabel> {
        self.last_outcome
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    pub fn can_spin(&self) -> bool {
        self.phase == Phase::Playable
    }

    pub fn is_locked(&self) -> bool {
        self.phase == Phase::Locked
    }

    /// Applies one event and returns the side effects the caller must run.
    /// Events that do not fit the current phase are ignored, so a stray
    /// timer or a duplicated callback can never corrupt the session.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<Effect> {
        match (self.phase, event) {
            (Phase::Checking, SessionEvent::CheckCompleted { already_played }) => {
                if already_played {
                    self.phase = Phase::Locked;
                    self.message = Some(ALREADY_PLAYED_MESSAGE);
                } else {
                    self.phase = Phase::Playable;
                }
                vec![]
            }
            (Phase::Playable, SessionEvent::SpinStarted) => {
                self.phase = Phase::Resolving;
                self.message = None;
                vec![Effect::StartSpinTimer { duration_ms: SPIN_DURATION_MS }]
            }
            (Phase::Resolving, SessionEvent::WheelStopped { angle }) => {
                let label = resolve_outcome(angle);
                let verdict = classify(label);
                self.last_outcome = Some(label);
                self.message = Some(verdict.message);
                if verdict.retry_allowed {
                    // Retry outcome: the decision stays pending and the
                    // spin control comes back.
                    self.phase = Phase::Playable;
                    vec![]
                } else {
                    self.decision = verdict.decision;
                    self.phase = Phase::Reporting;
                    vec![Effect::RecordOutcome { decision: self.decision }]
                }
            }
            (Phase::Reporting, SessionEvent::ReportCompleted { accepted }) => {
                // The user already sees their result; a rejected report only
                // means the backend record is out of sync.
                if !accepted {
                    log::warn!("outcome report was not accepted; backend record may be stale");
                }
                self.phase = Phase::Finished;
                vec![]
            }
            (phase, event) => {
                log::debug!("ignoring {event:?} in phase {phase:?}");
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{LOSS_MESSAGE, RETRY_MESSAGE, WIN_MESSAGE};

    fn playable_session() -> PlaySession {
        let mut session = PlaySession::new();
        let effects = session.handle(SessionEvent::CheckCompleted { already_played: false });
        assert!(effects.is_empty());
        assert!(session.can_spin());
        session
    }

    #[test]
    fn test_fresh_session_win_flow() {
        let mut session = playable_session();

        let effects = session.handle(SessionEvent::SpinStarted);
        assert_eq!(effects, vec![Effect::StartSpinTimer { duration_ms: SPIN_DURATION_MS }]);
        assert_eq!(session.phase(), Phase::Resolving);

        // Angle 80 lands in the `win` bucket
        let effects = session.handle(SessionEvent::WheelStopped { angle: 80 });
        assert_eq!(effects, vec![Effect::RecordOutcome { decision: Decision::Win }]);
        assert_eq!(session.phase(), Phase::Reporting);
        assert_eq!(session.decision(), Decision::Win);
        assert_eq!(session.last_outcome(), Some(OutcomeLabel::Win));
        assert_eq!(session.message(), Some(WIN_MESSAGE));
        assert!(!session.can_spin());

        let effects = session.handle(SessionEvent::ReportCompleted { accepted: true });
        assert!(effects.is_empty());
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.decision(), Decision::Win);
    }

    #[test]
    fn test_retry_outcome_reenables_spin() {
        let mut session = playable_session();
        session.handle(SessionEvent::SpinStarted);

        // Angle 350 buckets to floor(330 / 60) = 5, `lucky`
        let effects = session.handle(SessionEvent::WheelStopped { angle: 350 });
        assert!(effects.is_empty(), "a retry outcome must not report anything");
        assert_eq!(session.phase(), Phase::Playable);
        assert_eq!(session.decision(), Decision::Pending);
        assert_eq!(session.message(), Some(RETRY_MESSAGE));
        assert!(session.can_spin());

        // The user can spin again and lose for real this time
        session.handle(SessionEvent::SpinStarted);
        let effects = session.handle(SessionEvent::WheelStopped { angle: 140 });
        assert_eq!(effects, vec![Effect::RecordOutcome { decision: Decision::Loss }]);
        assert_eq!(session.message(), Some(LOSS_MESSAGE));
    }

    #[test]
    fn test_returning_device_is_locked() {
        let mut session = PlaySession::new();
        let effects = session.handle(SessionEvent::CheckCompleted { already_played: true });
        assert!(effects.is_empty());
        assert!(session.is_locked());
        assert!(!session.can_spin());

        // The spin control never works on a locked session
        let effects = session.handle(SessionEvent::SpinStarted);
        assert!(effects.is_empty());
        assert_eq!(session.phase(), Phase::Locked);
        assert_eq!(session.last_outcome(), None, "the outcome engine never ran");
    }

    #[test]
    fn test_report_failure_still_finishes() {
        let mut session = playable_session();
        session.handle(SessionEvent::SpinStarted);
        session.handle(SessionEvent::WheelStopped { angle: 260 });
        assert_eq!(session.decision(), Decision::Loss);

        let effects = session.handle(SessionEvent::ReportCompleted { accepted: false });
        assert!(effects.is_empty());
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.decision(), Decision::Loss);
    }

    #[test]
    fn test_duplicate_wheel_stop_is_ignored() {
        let mut session = playable_session();
        session.handle(SessionEvent::SpinStarted);
        let effects = session.handle(SessionEvent::WheelStopped { angle: 80 });
        assert_eq!(effects.len(), 1);

        // A stray second stop must not change the decision or report again
        let effects = session.handle(SessionEvent::WheelStopped { angle: 140 });
        assert!(effects.is_empty());
        assert_eq!(session.decision(), Decision::Win);
        assert_eq!(session.last_outcome(), Some(OutcomeLabel::Win));
    }

    #[test]
    fn test_spin_ignored_while_resolving() {
        let mut session = playable_session();
        let first = session.handle(SessionEvent::SpinStarted);
        assert_eq!(first.len(), 1);

        // Double-click: no second timer may be scheduled
        let second = session.handle(SessionEvent::SpinStarted);
        assert!(second.is_empty());
        assert_eq!(session.phase(), Phase::Resolving);
    }

    #[test]
    fn test_terminal_phases_stay_terminal() {
        let mut locked = PlaySession::new();
        locked.handle(SessionEvent::CheckCompleted { already_played: true });
        for event in [
            SessionEvent::CheckCompleted { already_played: false },
            SessionEvent::SpinStarted,
            SessionEvent::WheelStopped { angle: 80 },
            SessionEvent::ReportCompleted { accepted: true },
        ] {
            assert!(locked.handle(event).is_empty());
            assert!(locked.is_locked());
        }

        let mut finished = playable_session();
        finished.handle(SessionEvent::SpinStarted);
        finished.handle(SessionEvent::WheelStopped { angle: 80 });
        finished.handle(SessionEvent::ReportCompleted { accepted: true });
        for event in [
            SessionEvent::SpinStarted,
            SessionEvent::WheelStopped { angle: 140 },
            SessionEvent::ReportCompleted { accepted: true },
        ] {
            assert!(finished.handle(event).is_empty());
            assert_eq!(finished.phase(), Phase::Finished);
            assert_eq!(finished.decision(), Decision::Win);
        }
    }
}
