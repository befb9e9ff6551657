use std::collections::HashSet;

use anyhow::Result;

use crate::input::KeyCode;
use crate::traits::{
    AudioBackend, KeyPress, KitLookup, PadId, PadSurface, StyleProperty, TransitionEnd,
};

/// Routes key presses to sample playback and pad highlighting, and drops
/// each highlight again when the pad's transform transition completes.
///
/// The controller owns no collaborators. The lookup, audio backend, and
/// surface are passed per call, and everything runs on the one UI thread in
/// host delivery order, so there is no locking anywhere in this path.
pub struct KitController {
    /// Pads present when the controller was wired up. Completions from
    /// pads that appear later are ignored; nothing was registered for them.
    wired: HashSet<PadId>,
}

impl KitController {
    /// Wire a controller to the pads currently on the surface.
    pub fn new(pads: impl IntoIterator<Item = PadId>) -> Self {
        Self {
            wired: pads.into_iter().collect(),
        }
    }

    /// Entry point for one key-down notification.
    pub fn handle_key_down(
        &self,
        press: &KeyPress,
        lookup: &dyn KitLookup,
        audio: &mut dyn AudioBackend,
        surface: &mut dyn PadSurface,
    ) -> Result<()> {
        // Auto-repeat flows through unfiltered: a held key keeps
        // re-triggering, which is half the fun.
        self.trigger(&press.code, lookup, audio, surface)
    }

    /// Resolve a key and fire its sample and highlight.
    fn trigger(
        &self,
        code: &KeyCode,
        lookup: &dyn KitLookup,
        audio: &mut dyn AudioBackend,
        surface: &mut dyn PadSurface,
    ) -> Result<()> {
        // Unbound keys are the common case while typing; no effect, no log.
        let Some(sound) = lookup.sample_for(code) else {
            return Ok(());
        };

        // Rewind before playing. Play on an audible voice changes nothing,
        // so the rewind is what makes rapid re-presses start from the top.
        audio.seek_to_start(sound)?;
        audio.play(sound)?;

        // A key with a sample always has a pad; a lookup that breaks this
        // is misbuilt beyond what the runtime checks for.
        let pad = lookup
            .pad_for(code)
            .expect("key resolved to a sample but not to a pad");
        surface.set_active(pad);
        Ok(())
    }

    /// Entry point for one transition-completion notification.
    pub fn handle_transition_end(&self, event: &TransitionEnd, surface: &mut dyn PadSurface) {
        // Only pads wired at construction are listened to.
        if !self.wired.contains(&event.pad) {
            return;
        }
        // Each highlight finishes several properties; only the transform
        // ends it. The clear is idempotent, so the reverse transition's
        // own transform completion lands harmlessly.
        if event.property != StyleProperty::Transform {
            return;
        }
        surface.clear_active(event.pad);
    }
}
