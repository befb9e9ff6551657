use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use drumkit::config::PadBinding;
use drumkit::input::KeyCode;
use drumkit::kit::{KitController, KitLayout};
use drumkit::traits::{AudioBackend, KeyPress, PadSurface, SoundId};
use drumkit::view::{PadBoard, StyleTiming};

/// Backend that accepts everything instantly.
#[derive(Default)]
struct NullAudio {
    next_id: u64,
}

impl AudioBackend for NullAudio {
    fn load_sample(&mut self, _path: &Path) -> Result<SoundId> {
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

fn nine_pad_kit() -> Vec<PadBinding> {
    ["KeyA", "KeyS", "KeyD", "KeyF", "KeyG", "KeyH", "KeyJ", "KeyK", "KeyL"]
        .iter()
        .enumerate()
        .map(|(i, key)| PadBinding {
            key: KeyCode::new(*key),
            label: format!("pad{i}"),
            sample: format!("pad{i}.wav").into(),
        })
        .collect()
}

fn trigger_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("trigger");

    group.bench_function("bound_key", |b| {
        let mut audio = NullAudio::default();
        let (layout, specs) = KitLayout::build(&nine_pad_kit(), &mut audio);
        let mut board = PadBoard::new(StyleTiming::default());
        for spec in &specs {
            board.add_pad(spec.key.clone(), spec.label.clone());
        }
        let controller = KitController::new(board.pads());
        let press = KeyPress::new(KeyCode::new("KeyG"));

        b.iter(|| {
            controller
                .handle_key_down(black_box(&press), &layout, &mut audio, &mut board)
                .unwrap();
        });
    });

    group.bench_function("unbound_key", |b| {
        let mut audio = NullAudio::default();
        let (layout, _) = KitLayout::build(&nine_pad_kit(), &mut audio);
        let mut board = PadBoard::new(StyleTiming::default());
        let controller = KitController::new(board.pads());
        let press = KeyPress::new(KeyCode::new("Slash"));

        b.iter(|| {
            controller
                .handle_key_down(black_box(&press), &layout, &mut audio, &mut board)
                .unwrap();
        });
    });

    group.finish();
}

fn board_benchmark(c: &mut Criterion) {
    c.bench_function("board_advance_frame", |b| {
        let mut board = PadBoard::new(StyleTiming::default());
        for i in 0..9 {
            board.add_pad(KeyCode::new(format!("Key{i}")), format!("pad{i}"));
        }
        let pads = board.pads();
        let frame = Duration::from_millis(16);

        let mut i = 0usize;
        b.iter(|| {
            // Toggle a pad every few frames so transitions stay live.
            if i % 5 == 0 {
                let pad = pads[(i / 5) % pads.len()];
                if board.is_active(pad) {
                    board.clear_active(pad);
                } else {
                    board.set_active(pad);
                }
            }
            i += 1;
            black_box(board.advance(black_box(frame)));
        });
    });
}

criterion_group!(benches, trigger_benchmark, board_benchmark);
criterion_main!(benches);
