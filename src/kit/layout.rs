use std::collections::HashMap;

use log::warn;

use crate::config::PadBinding;
use crate::input::KeyCode;
use crate::traits::{AudioBackend, KitLookup, PadId, SoundId};

/// A key's resolved resources: the sample to re-trigger and the pad to
/// light up.
#[derive(Debug, Clone, Copy)]
struct Binding {
    sound: SoundId,
    pad: PadId,
}

/// Display data for one configured pad, bound or not.
#[derive(Debug, Clone)]
pub struct PadSpec {
    pub key: KeyCode,
    pub label: String,
}

/// Lookup table from key identifiers to their bound resources, built once
/// at startup from the configured bindings.
///
/// Every configured pad gets a [`PadSpec`] and shows on screen either way,
/// but only keys whose sample actually decoded get an entry in the table.
/// By construction an entry always carries both a sound and a pad.
pub struct KitLayout {
    bindings: HashMap<KeyCode, Binding>,
}

impl KitLayout {
    /// Load each binding's sample through the backend and assemble the
    /// table, plus the pad specs in configured order.
    ///
    /// Load failures and duplicate keys are logged and skipped; the pad
    /// still appears, its key just stays silent.
    pub fn build(pads: &[PadBinding], audio: &mut dyn AudioBackend) -> (Self, Vec<PadSpec>) {
        let mut bindings = HashMap::new();
        let mut specs = Vec::with_capacity(pads.len());

        for binding in pads {
            let pad = PadId(specs.len());
            specs.push(PadSpec {
                key: binding.key.clone(),
                label: binding.label.clone(),
            });

            if bindings.contains_key(&binding.key) {
                warn!("duplicate binding for {}; keeping the first", binding.key);
                continue;
            }

            match audio.load_sample(&binding.sample) {
                Ok(sound) => {
                    bindings.insert(binding.key.clone(), Binding { sound, pad });
                }
                Err(e) => {
                    warn!(
                        "{} stays silent, sample {} failed to load: {e:#}",
                        binding.key,
                        binding.sample.display()
                    );
                }
            }
        }

        (Self { bindings }, specs)
    }

    /// Number of keys that resolved to a playable sample.
    pub fn bound_count(&self) -> usize {
        self.bindings.len()
    }
}

impl KitLookup for KitLayout {
    fn sample_for(&self, code: &KeyCode) -> Option<SoundId> {
        self.bindings.get(code).map(|b| b.sound)
    }

    fn pad_for(&self, code: &KeyCode) -> Option<PadId> {
        self.bindings.get(code).map(|b| b.pad)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use anyhow::{Result, bail};

    use super::*;

    /// Counts loads and fails for any path containing "broken".
    #[derive(Default)]
    struct RecordingAudio {
        next_id: u64,
        loaded: Vec<PathBuf>,
    }

    impl AudioBackend for RecordingAudio {
        fn load_sample(&mut self, path: &Path) -> Result<SoundId> {
            if path.to_string_lossy().contains("broken") {
                bail!("undecodable sample");
            }
            self.loaded.push(path.to_path_buf());
            self.next_id += 1;
            Ok(SoundId(self.next_id))
        }

        fn seek_to_start(&mut self, _id: SoundId) -> Result<()> {
            Ok(())
        }

        fn play(&mut self, _id: SoundId) -> Result<()> {
            Ok(())
        }
    }

    fn binding(key: &str, label: &str, sample: &str) -> PadBinding {
        PadBinding {
            key: KeyCode::new(key),
            label: label.to_string(),
            sample: PathBuf::from(sample),
        }
    }

    #[test]
    fn test_bound_key_resolves_sound_and_pad() {
        let pads = vec![
            binding("KeyA", "clap", "clap.wav"),
            binding("KeyS", "hihat", "hihat.wav"),
        ];
        let mut audio = RecordingAudio::default();
        let (layout, specs) = KitLayout::build(&pads, &mut audio);

        assert_eq!(specs.len(), 2);
        assert_eq!(layout.bound_count(), 2);
        assert_eq!(layout.sample_for(&KeyCode::new("KeyS")), Some(SoundId(2)));
        assert_eq!(layout.pad_for(&KeyCode::new("KeyS")), Some(PadId(1)));
    }

    #[test]
    fn test_unknown_key_resolves_to_nothing() {
        let pads = vec![binding("KeyA", "clap", "clap.wav")];
        let mut audio = RecordingAudio::default();
        let (layout, _) = KitLayout::build(&pads, &mut audio);

        assert_eq!(layout.sample_for(&KeyCode::new("KeyZ")), None);
        assert_eq!(layout.pad_for(&KeyCode::new("KeyZ")), None);
    }

    #[test]
    fn test_duplicate_key_keeps_first_binding() {
        let pads = vec![
            binding("KeyA", "clap", "clap.wav"),
            binding("KeyA", "snare", "snare.wav"),
        ];
        let mut audio = RecordingAudio::default();
        let (layout, specs) = KitLayout::build(&pads, &mut audio);

        // Both pads are shown, only the first is wired to the key.
        assert_eq!(specs.len(), 2);
        assert_eq!(layout.bound_count(), 1);
        assert_eq!(layout.sample_for(&KeyCode::new("KeyA")), Some(SoundId(1)));
        assert_eq!(layout.pad_for(&KeyCode::new("KeyA")), Some(PadId(0)));
        // The duplicate's sample is never even loaded.
        assert_eq!(audio.loaded, vec![PathBuf::from("clap.wav")]);
    }

    #[test]
    fn test_failed_sample_leaves_key_unbound() {
        let pads = vec![
            binding("KeyA", "clap", "clap.wav"),
            binding("KeyS", "hihat", "broken.wav"),
        ];
        let mut audio = RecordingAudio::default();
        let (layout, specs) = KitLayout::build(&pads, &mut audio);

        assert_eq!(specs.len(), 2);
        assert_eq!(layout.bound_count(), 1);
        assert_eq!(layout.sample_for(&KeyCode::new("KeyS")), None);
    }

    #[test]
    fn test_pad_ids_follow_configured_order() {
        let pads = vec![
            binding("KeyJ", "snare", "snare.wav"),
            binding("KeyK", "tom", "tom.wav"),
            binding("KeyL", "tink", "tink.wav"),
        ];
        let mut audio = RecordingAudio::default();
        let (layout, _) = KitLayout::build(&pads, &mut audio);

        assert_eq!(layout.pad_for(&KeyCode::new("KeyJ")), Some(PadId(0)));
        assert_eq!(layout.pad_for(&KeyCode::new("KeyK")), Some(PadId(1)));
        assert_eq!(layout.pad_for(&KeyCode::new("KeyL")), Some(PadId(2)));
    }
}
