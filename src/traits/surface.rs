/// Handle for referencing on-screen pads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PadId(pub usize);

/// Style properties animated by the pad highlight.
///
/// Each highlight animates several properties at once, but only the
/// transform completion ends it; the other channels finish on their own
/// schedules and the reset logic must ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleProperty {
    Transform,
    BorderColor,
    Glow,
}

/// Notification that one animated property finished changing on one pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionEnd {
    pub pad: PadId,
    pub property: StyleProperty,
}

/// Abstraction over the visual pad surface.
/// Implementations: PadBoard (egui-painted), MockSurface (testing).
pub trait PadSurface {
    /// Pads currently present, in display order.
    fn pads(&self) -> Vec<PadId>;

    /// Add the pad to the highlighted set. Adding a pad that is already
    /// highlighted changes nothing, not even its running transitions.
    fn set_active(&mut self, pad: PadId);

    /// Remove the pad from the highlighted set. Idempotent.
    fn clear_active(&mut self, pad: PadId);

    fn is_active(&self, pad: PadId) -> bool;
}
