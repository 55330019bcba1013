pub const PENDING_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "visible";

/// What to do with an observed element after an intersection notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Mark visible and stop observing; the mark is never removed.
    Reveal,
    Ignore,
}

pub fn on_intersection(is_intersecting: bool) -> RevealAction {
    if is_intersecting {
        RevealAction::Reveal
    } else {
        RevealAction::Ignore
    }
}
