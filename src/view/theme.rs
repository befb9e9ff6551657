use egui::Color32;

/// Board palette: dark stage with a gold accent, after the classic look of
/// keyboard drum kits.
pub struct Theme {
    pub background: Color32,
    pub pad_fill: Color32,
    pub pad_fill_active: Color32,
    pub border: Color32,
    pub accent: Color32,
    pub label: Color32,
    pub key_label: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(18, 18, 20),
            pad_fill: Color32::from_rgb(28, 28, 32),
            pad_fill_active: Color32::from_rgb(46, 42, 26),
            border: Color32::from_rgb(70, 70, 78),
            accent: Color32::from_rgb(255, 198, 0),
            label: Color32::from_rgb(230, 230, 235),
            key_label: Color32::from_rgb(255, 198, 0),
        }
    }
}

/// Linear blend between two colors, `t` clamped to [0, 1].
pub fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let a = Color32::from_rgb(10, 20, 30);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
    }

    #[test]
    fn test_blend_clamps_t() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(100, 100, 100);
        assert_eq!(blend(a, b, -1.0), a);
        assert_eq!(blend(a, b, 2.0), b);
    }
}
