//! Turn state types.

/// Stage of the current turn.
///
/// Each turn walks `PickingFirst` -> `PickingSecond` -> `ShowingResult` and
/// back to `PickingFirst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Waiting for the first card of the turn to be picked.
    PickingFirst,
    /// One card is face up; waiting for the second pick.
    PickingSecond,
    /// Both picks are face up and the result banner is showing; the next
    /// click resolves the turn.
    ShowingResult,
}
