//! Outbound notifications to the surrounding navigation.

/// Marker left for the shop screen when the user leaves a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GachaMarker {
    /// The shop is being re-entered from the gacha reveal.
    CameFromGacha,
}

/// Navigation/camera collaborator that owns screen switching.
///
/// Calls are fire-and-forget; the flow never reads anything back.
pub trait Navigator: Send + Sync {
    fn mark_transition(&self, marker: GachaMarker);

    fn leave_reveal_screen(&self);
}
