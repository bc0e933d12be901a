use serde::{Serialize, Deserialize};
use rand::Rng;

use crate::constants::{
    LOSS_MESSAGE, MIN_FULL_ROTATIONS, RETRY_MESSAGE, SEGMENT_ARC_DEGREES,
    SEGMENT_OFFSET_DEGREES, WIN_MESSAGE,
};

/// The six labels printed on the wheel, in bucket order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeLabel {
    NoWin,
    Win,
    Bad,
    Good,
    Unlucky,
    Lucky,
}

pub const WHEEL_LABELS: [OutcomeLabel; 6] = [
    OutcomeLabel::NoWin,
    OutcomeLabel::Win,
    OutcomeLabel::Bad,
    OutcomeLabel::Good,
    OutcomeLabel::Unlucky,
    OutcomeLabel::Lucky,
];

impl OutcomeLabel {
    pub fn display_name(&self) -> &'static str {
        match self {
            OutcomeLabel::NoWin => "NO WIN",
            OutcomeLabel::Win => "WIN",
            OutcomeLabel::Bad => "BAD",
            OutcomeLabel::Good => "GOOD",
            OutcomeLabel::Unlucky => "UNLUCKY",
            OutcomeLabel::Lucky => "LUCKY",
        }
    }
}

/// The session-level decision a spin can produce. This is also the wire
/// `status` value reported to the backend.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Pending,
    Win,
    Loss,
}

/// What a resolved label means for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub decision: Decision,
    pub message: &'static str,
    pub retry_allowed: bool,
}

/// Maps a stopping angle (degrees in `[0, 360)`) to the label under the
/// pointer. Buckets are 60 degrees wide and start 20 degrees past the
/// pointer; an angle before the first bucket falls back to the last label,
/// which grants a retry rather than failing.
pub fn resolve_outcome(angle: u32) -> OutcomeLabel {
    let bucket = (angle as i32 - SEGMENT_OFFSET_DEGREES as i32)
        .div_euclid(SEGMENT_ARC_DEGREES as i32);
    usize::try_from(bucket)
        .ok()
        .and_then(|i| WHEEL_LABELS.get(i))
        .copied()
        .unwrap_or(WHEEL_LABELS[WHEEL_LABELS.len() - 1])
}

/// Turns a label into the decision, user message and retry permission for
/// this spin. `Good` and `Lucky` leave the decision untouched and hand the
/// spin control back to the user.
pub fn classify(label: OutcomeLabel) -> Verdict {
    match label {
        OutcomeLabel::Win => Verdict {
            decision: Decision::Win,
            message: WIN_MESSAGE,
            retry_allowed: false,
        },
        OutcomeLabel::NoWin | OutcomeLabel::Bad | OutcomeLabel::Unlucky => Verdict {
            decision: Decision::Loss,
            message: LOSS_MESSAGE,
            retry_allowed: false,
        },
        OutcomeLabel::Good | OutcomeLabel::Lucky => Verdict {
            decision: Decision::Pending,
            message: RETRY_MESSAGE,
            retry_allowed: true,
        },
    }
}

/// Absolute rotation for the next spin: a fresh random angle plus at least
/// ten full rotations on top of the current resting rotation, so the wheel
/// always visibly spins forward no matter where it stopped.
pub fn next_spin_target(previous: u32, rng: &mut impl Rng) -> u32 {
    rng.gen_range(0..360) + MIN_FULL_ROTATIONS * 360 + previous
}

/// The angle the wheel actually rests at after reaching `target`.
pub fn landing_angle(target: u32) -> u32 {
    target % 360
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_resolve_outcome_pinned_angles() {
        assert_eq!(resolve_outcome(20), OutcomeLabel::NoWin);
        assert_eq!(resolve_outcome(80), OutcomeLabel::Win);
        assert_eq!(resolve_outcome(140), OutcomeLabel::Bad);
        assert_eq!(resolve_outcome(200), OutcomeLabel::Good);
        assert_eq!(resolve_outcome(260), OutcomeLabel::Unlucky);
        assert_eq!(resolve_outcome(320), OutcomeLabel::Lucky);
        // (0 - 20) / 60 floors to -1, an invalid bucket, so the last label
        // is used as the retry fallback
        assert_eq!(resolve_outcome(0), OutcomeLabel::Lucky);
        assert_eq!(resolve_outcome(19), OutcomeLabel::Lucky);
        assert_eq!(resolve_outcome(350), OutcomeLabel::Lucky);
        assert_eq!(resolve_outcome(359), OutcomeLabel::Lucky);
    }

    #[test]
    fn test_resolve_outcome_total_and_deterministic() {
        assert_eq!(WHEEL_LABELS.len() as u32, crate::constants::WHEEL_SEGMENTS);
        for angle in 0..360 {
            let first = resolve_outcome(angle);
            assert!(WHEEL_LABELS.contains(&first));
            assert_eq!(first, resolve_outcome(angle));
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        // Each bucket covers exactly [20 + 60i, 80 + 60i)
        assert_eq!(resolve_outcome(79), OutcomeLabel::NoWin);
        assert_eq!(resolve_outcome(80), OutcomeLabel::Win);
        assert_eq!(resolve_outcome(139), OutcomeLabel::Win);
        assert_eq!(resolve_outcome(140), OutcomeLabel::Bad);
        assert_eq!(resolve_outcome(319), OutcomeLabel::Unlucky);
    }

    #[test]
    fn test_classify_table() {
        let win = classify(OutcomeLabel::Win);
        assert_eq!(win.decision, Decision::Win);
        assert!(!win.retry_allowed);
        assert_eq!(win.message, WIN_MESSAGE);

        for label in [OutcomeLabel::NoWin, OutcomeLabel::Bad, OutcomeLabel::Unlucky] {
            let loss = classify(label);
            assert_eq!(loss.decision, Decision::Loss);
            assert!(!loss.retry_allowed);
            assert_eq!(loss.message, LOSS_MESSAGE);
        }

        for label in [OutcomeLabel::Good, OutcomeLabel::Lucky] {
            let retry = classify(label);
            assert_eq!(retry.decision, Decision::Pending);
            assert!(retry.retry_allowed);
            assert_eq!(retry.message, RETRY_MESSAGE);
        }
    }

    #[test]
    fn test_next_spin_target_always_moves_forward() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut previous = 0;
        for _ in 0..50 {
            let target = next_spin_target(previous, &mut rng);
            assert!(target >= previous + MIN_FULL_ROTATIONS * 360);
            assert!(target < previous + MIN_FULL_ROTATIONS * 360 + 360);
            assert!(landing_angle(target) < 360);
            previous = target;
        }
    }
}
