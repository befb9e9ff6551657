use crate::input::KeyCode;
use crate::traits::audio::SoundId;
use crate::traits::surface::PadId;

/// Lookup from a key identifier to the resources bound to it.
/// Implementations: KitLayout (table built at startup), ad-hoc maps in tests.
///
/// Contract: whenever `sample_for` returns a sound for a key, `pad_for`
/// must return the pad sharing that binding. Callers rely on this instead
/// of re-checking.
pub trait KitLookup {
    /// The sample bound to this key, if any.
    fn sample_for(&self, code: &KeyCode) -> Option<SoundId>;

    /// The pad bound to this key, if any.
    fn pad_for(&self, code: &KeyCode) -> Option<PadId>;
}
