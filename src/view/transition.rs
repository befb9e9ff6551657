use std::time::Duration;

use crate::traits::StyleProperty;

/// Smoothstep easing, close in feel to the css `ease` timing curve.
fn ease(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// One animated style channel of one pad, as a scalar from 0.0 (idle) to
/// 1.0 (pressed).
///
/// Follows stylesheet transition semantics: retargeting mid-flight starts a
/// fresh run from the currently shown value over the full duration, and
/// retargeting to the value already shown runs nothing and completes
/// nothing. A finished run reports its completion exactly once.
#[derive(Debug, Clone)]
pub struct Transition {
    start: f32,
    end: f32,
    duration: Duration,
    elapsed: Duration,
    running: bool,
}

impl Transition {
    /// A channel at rest showing `value`.
    pub fn at_rest(value: f32, duration: Duration) -> Self {
        Self {
            start: value,
            end: value,
            duration,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    /// Begin moving toward `target` from the currently shown value.
    pub fn retarget(&mut self, target: f32) {
        let shown = self.value();
        self.elapsed = Duration::ZERO;
        if (target - shown).abs() < f32::EPSILON || self.duration.is_zero() {
            // Nothing animates: the value snaps and no completion fires.
            self.start = target;
            self.end = target;
            self.running = false;
            return;
        }
        self.start = shown;
        self.end = target;
        self.running = true;
    }

    /// Advance by `dt`. Returns true on exactly the call that finishes the
    /// current run.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.start = self.end;
            self.elapsed = Duration::ZERO;
            self.running = false;
            return true;
        }
        false
    }

    /// The value currently shown on screen.
    pub fn value(&self) -> f32 {
        if !self.running {
            return self.end;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.start + (self.end - self.start) * ease(t.clamp(0.0, 1.0))
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Transition durations per animated property.
///
/// The default kit runs all three properties over the same 70 ms, so their
/// completions land on the same frame. Each property keeps its own duration
/// and they may be pulled apart freely.
#[derive(Debug, Clone, Copy)]
pub struct StyleTiming {
    pub transform: Duration,
    pub border_color: Duration,
    pub glow: Duration,
}

impl Default for StyleTiming {
    fn default() -> Self {
        let uniform = Duration::from_millis(70);
        Self {
            transform: uniform,
            border_color: uniform,
            glow: uniform,
        }
    }
}

/// The three animated channels of one pad's highlight.
#[derive(Debug, Clone)]
pub struct PadStyle {
    transform: Transition,
    border_color: Transition,
    glow: Transition,
}

impl PadStyle {
    pub fn idle(timing: &StyleTiming) -> Self {
        Self {
            transform: Transition::at_rest(0.0, timing.transform),
            border_color: Transition::at_rest(0.0, timing.border_color),
            glow: Transition::at_rest(0.0, timing.glow),
        }
    }

    /// Retarget every channel toward the pressed (1.0) or idle (0.0) pose.
    pub fn set_pressed(&mut self, pressed: bool) {
        let target = if pressed { 1.0 } else { 0.0 };
        self.transform.retarget(target);
        self.border_color.retarget(target);
        self.glow.retarget(target);
    }

    /// Advance every channel, returning the properties whose runs finished.
    ///
    /// The order is fixed (border color, glow, transform) so event delivery
    /// is deterministic when several finish on the same tick.
    pub fn advance(&mut self, dt: Duration) -> Vec<StyleProperty> {
        let mut completed = Vec::new();
        if self.border_color.advance(dt) {
            completed.push(StyleProperty::BorderColor);
        }
        if self.glow.advance(dt) {
            completed.push(StyleProperty::Glow);
        }
        if self.transform.advance(dt) {
            completed.push(StyleProperty::Transform);
        }
        completed
    }

    pub fn value(&self, property: StyleProperty) -> f32 {
        match property {
            StyleProperty::Transform => self.transform.value(),
            StyleProperty::BorderColor => self.border_color.value(),
            StyleProperty::Glow => self.glow.value(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transform.is_running() || self.border_color.is_running() || self.glow.is_running()
    }
}
