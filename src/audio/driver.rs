use std::collections::HashMap;
use std::path::Path;

use anyhow::{Result, anyhow};
use kira::backend::DefaultBackend;
use kira::sound::PlaybackState;
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};
use kira::{AudioManager, AudioManagerSettings};

use crate::traits::{AudioBackend, SoundId};

/// Audio driver backed by kira for low-latency sample playback.
///
/// Each sample keeps at most one live voice. Re-triggering rewinds the
/// current voice instead of layering a fresh one, which is what gives fast
/// key mashing its clean restart on every hit.
pub struct KiraDriver {
    manager: AudioManager,
    /// Decoded sample data keyed by SoundId.
    sounds: HashMap<u64, StaticSoundData>,
    /// Most recent voice per sample.
    handles: HashMap<u64, StaticSoundHandle>,
    /// Next sound ID to assign.
    next_id: u64,
}

impl KiraDriver {
    /// Create a new audio driver on the default output device.
    pub fn new() -> Result<Self> {
        let settings = AudioManagerSettings::default();
        let manager = AudioManager::<DefaultBackend>::new(settings)
            .map_err(|e| anyhow!("Failed to create audio manager: {e}"))?;
        Ok(Self {
            manager,
            sounds: HashMap::new(),
            handles: HashMap::new(),
            next_id: 1,
        })
    }

    /// Check if a sample's voice is currently audible.
    pub fn is_playing(&self, id: SoundId) -> bool {
        self.handles
            .get(&id.0)
            .is_some_and(|h| h.state() == PlaybackState::Playing)
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl AudioBackend for KiraDriver {
    fn load_sample(&mut self, path: &Path) -> Result<SoundId> {
        let data = StaticSoundData::from_file(path)
            .map_err(|e| anyhow!("Failed to load sample {}: {e}", path.display()))?;
        let id = self.alloc_id();
        self.sounds.insert(id, data);
        Ok(SoundId(id))
    }

    fn seek_to_start(&mut self, id: SoundId) -> Result<()> {
        if self.is_playing(id) {
            if let Some(handle) = self.handles.get_mut(&id.0) {
                handle.seek_to(0.0);
            }
        }
        Ok(())
    }

    fn play(&mut self, id: SoundId) -> Result<()> {
        if self.is_playing(id) {
            // The live voice keeps going; the caller's rewind already put
            // it back at the top.
            return Ok(());
        }
        let data = self
            .sounds
            .get(&id.0)
            .ok_or_else(|| anyhow!("Sample not found: {:?}", id))?
            .clone();
        let handle = self
            .manager
            .play(data)
            .map_err(|e| anyhow!("Failed to play sample: {e}"))?;
        self.handles.insert(id.0, handle);
        Ok(())
    }
}
