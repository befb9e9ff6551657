use crate::input::KeyCode;
use crate::traits::KeyPress;

/// Collect the key presses delivered this frame, in host order.
///
/// Auto-repeat presses are kept: the kit listens to the raw key-down
/// stream, which keeps firing while a key is held. Releases and keys with
/// no stable code are dropped. When the platform reports the physical key
/// separately from the logical one, the physical key wins.
pub fn key_presses(input: &egui::InputState) -> Vec<KeyPress> {
    input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                physical_key,
                pressed: true,
                repeat,
                ..
            } => {
                let code = KeyCode::from_egui(physical_key.unwrap_or(*key))?;
                Some(KeyPress {
                    code,
                    repeat: *repeat,
                })
            }
            _ => None,
        })
        .collect()
}
