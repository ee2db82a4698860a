//! Easing curves carried inside transition timing.
//!
//! The animation layer never interpolates pixels itself; it hands the curve
//! to the visual layer as data. `apply` exists so hosts (and tests) can
//! evaluate the curve without re-implementing it.

/// Easing curve identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    /// Fast start, gentle settle. The default for entrance transitions.
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Maps linear time `t` onto the eased curve. Inputs are clamped to
    /// [0, 1] first, so callers can feed raw phase values.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}
