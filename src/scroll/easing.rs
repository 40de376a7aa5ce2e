//! Easing curves for timed animations.
//!
//! Every curve maps progress `t` in `[0, 1]` onto `[0, 1]` with fixed
//! endpoints: `f(0) = 0` and `f(1) = 1`. Inputs outside the range are clamped.

/// Named easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic ease-in-out, the scroll-to-top curve.
    #[default]
    EaseInOutCubic,
    /// Quadratic ease-in-out.
    EaseInOutQuad,
}

impl Easing {
    /// Apply the curve to progress `t`.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t.clamp(0.0, 1.0),
            Self::EaseInOutCubic => ease_in_out_cubic(t),
            Self::EaseInOutQuad => ease_in_out_quad(t),
        }
    }
}

/// Cubic ease-in-out: slow start, fast middle, slow finish.
///
/// ```
/// use neuroverse_nav::scroll::easing::ease_in_out_cubic;
///
/// assert_eq!(ease_in_out_cubic(0.0), 0.0);
/// assert_eq!(ease_in_out_cubic(0.5), 0.5);
/// assert_eq!(ease_in_out_cubic(1.0), 1.0);
/// ```
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Quadratic ease-in-out.
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
