use std::time::Duration;

use crate::input::KeyCode;
use crate::traits::{PadId, PadSurface, StyleProperty, TransitionEnd};
use crate::view::transition::{PadStyle, StyleTiming};

/// One on-screen drum pad.
#[derive(Debug, Clone)]
pub struct Pad {
    key: KeyCode,
    label: String,
    active: bool,
    style: PadStyle,
}

impl Pad {
    pub fn key(&self) -> &KeyCode {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style_value(&self, property: StyleProperty) -> f32 {
        self.style.value(property)
    }
}

/// The row of pads: owns every pad's highlight flag and style channels.
///
/// The board only ever starts transitions. It never drops a highlight on
/// its own; that is driven from outside by the completion events `advance`
/// hands back, so a pad whose completions nobody listens to stays lit.
pub struct PadBoard {
    timing: StyleTiming,
    pads: Vec<Pad>,
}

impl PadBoard {
    pub fn new(timing: StyleTiming) -> Self {
        Self {
            timing,
            pads: Vec::new(),
        }
    }

    /// Append a pad and return its id. Pads are never removed, so ids are
    /// stable for the life of the board.
    pub fn add_pad(&mut self, key: KeyCode, label: impl Into<String>) -> PadId {
        let id = PadId(self.pads.len());
        self.pads.push(Pad {
            key,
            label: label.into(),
            active: false,
            style: PadStyle::idle(&self.timing),
        });
        id
    }

    pub fn len(&self) -> usize {
        self.pads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }

    pub fn pad(&self, id: PadId) -> Option<&Pad> {
        self.pads.get(id.0)
    }

    /// Iterate pads with their ids in display order.
    pub fn iter(&self) -> impl Iterator<Item = (PadId, &Pad)> {
        self.pads
            .iter()
            .enumerate()
            .map(|(index, pad)| (PadId(index), pad))
    }

    /// Tick every pad's style channels, returning the transitions that
    /// finished this tick in pad order.
    pub fn advance(&mut self, dt: Duration) -> Vec<TransitionEnd> {
        let mut events = Vec::new();
        for (index, pad) in self.pads.iter_mut().enumerate() {
            for property in pad.style.advance(dt) {
                events.push(TransitionEnd {
                    pad: PadId(index),
                    property,
                });
            }
        }
        events
    }
}

impl PadSurface for PadBoard {
    fn pads(&self) -> Vec<PadId> {
        (0..self.pads.len()).map(PadId).collect()
    }

    fn set_active(&mut self, pad: PadId) {
        if let Some(slot) = self.pads.get_mut(pad.0) {
            if !slot.active {
                slot.active = true;
                slot.style.set_pressed(true);
            }
        }
    }

    fn clear_active(&mut self, pad: PadId) {
        if let Some(slot) = self.pads.get_mut(pad.0) {
            if slot.active {
                slot.active = false;
                slot.style.set_pressed(false);
            }
        }
    }

    fn is_active(&self, pad: PadId) -> bool {
        self.pads.get(pad.0).is_some_and(|slot| slot.active)
    }
}
