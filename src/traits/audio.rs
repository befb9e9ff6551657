use anyhow::Result;

/// Handle for referencing loaded samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u64);

/// Abstraction over audio backends.
/// Implementations: KiraDriver (kira), MockAudio (testing).
pub trait AudioBackend {
    fn load_sample(&mut self, path: &std::path::Path) -> Result<SoundId>;

    /// Rewind the sample's live voice to the beginning, if it has one.
    ///
    /// Playback position is state of the sample itself: each sample has at
    /// most one live voice, and re-triggering rewinds that voice instead of
    /// layering a second one.
    fn seek_to_start(&mut self, id: SoundId) -> Result<()>;

    /// Start the sample unless it is already audible.
    ///
    /// Calling play on a sound that is still playing changes nothing, so a
    /// rapid re-press is only audible because of the rewind that precedes it.
    fn play(&mut self, id: SoundId) -> Result<()>;
}
