//! Focus trap for the lightbox
//!
//! While the lightbox is open, Tab and Shift+Tab cycle through the close,
//! previous and next controls only, skipping any that are disabled or not
//! rendered. The computation is pure: the caller supplies which controls are
//! eligible and which one currently holds focus.

/// The three focusable controls inside the lightbox, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalControl {
    Close,
    Prev,
    Next,
}

impl ModalControl {
    pub const TAB_ORDER: [ModalControl; 3] =
        [ModalControl::Close, ModalControl::Prev, ModalControl::Next];
}

/// Where a trapped Tab press sends focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapStep {
    /// Nothing is eligible. Swallow the key so focus can't escape.
    Suppress,
    MoveTo(ModalControl),
}

/// Compute the next focus target inside the trap.
///
/// `eligible` must be in tab order. When `current` is not one of them, a
/// forward Tab lands on the first eligible control and a reverse Tab on the
/// last.
pub fn trap_step(
    eligible: &[ModalControl],
    current: Option<ModalControl>,
    backwards: bool,
) -> TrapStep {
    let (Some(first), Some(last)) = (eligible.first(), eligible.last()) else {
        return TrapStep::Suppress;
    };

    let position = current.and_then(|c| eligible.iter().position(|e| *e == c));
    let target = match position {
        None if backwards => *last,
        None => *first,
        Some(pos) => {
            let len = eligible.len();
            let next = if backwards {
                (pos + len - 1) % len
            } else {
                (pos + 1) % len
            };
            eligible[next]
        }
    };
    TrapStep::MoveTo(target)
}
