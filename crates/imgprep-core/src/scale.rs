//! Target dimension computation with bounded scaling.
//!
//! Output dimensions honor a maximum width and height while preserving the
//! source aspect ratio. The clamps are applied sequentially: width first
//! (which may shrink the height), then height against the already-adjusted
//! value (which recomputes the width). For images that exceed both bounds
//! the order matters, and downstream consumers depend on the dimensions it
//! produces, so the sequence must not be collapsed into a single
//! min-ratio fit.

use crate::Dimensions;

/// Maximum output width in pixels.
pub const MAX_WIDTH: u32 = 1920;

/// Maximum output height in pixels.
pub const MAX_HEIGHT: u32 = 1080;

/// Maximum output dimensions for the scaling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
        }
    }
}

impl Bounds {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }
}

/// Compute output dimensions for `natural` within `bounds`, preserving
/// aspect ratio.
///
/// Clamp order: width, then height. The height clamp sees the height the
/// width clamp may already have produced and recomputes the width from it.
/// Images inside both bounds pass through unchanged. Non-exact divisions
/// round to nearest, with a 1 px floor per axis; zero-sized input is
/// returned as-is (decode rejects it before this point).
pub fn fit_dimensions(natural: Dimensions, bounds: Bounds) -> Dimensions {
    if natural.width == 0 || natural.height == 0 {
        return natural;
    }

    let mut width = natural.width as f64;
    let mut height = natural.height as f64;
    let max_width = bounds.max_width as f64;
    let max_height = bounds.max_height as f64;

    if width > max_width {
        height = height * max_width / width;
        width = max_width;
    }

    if height > max_height {
        width = width * max_height / height;
        height = max_height;
    }

    Dimensions {
        width: (width.round() as u32).max(1),
        height: (height.round() as u32).max(1),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn natural_strategy() -> impl Strategy<Value = Dimensions> {
        (1u32..=20_000, 1u32..=20_000).prop_map(|(w, h)| Dimensions::new(w, h))
    }

    proptest! {
        /// Property: fitted dimensions never exceed the bounds.
        #[test]
        fn prop_result_within_bounds(natural in natural_strategy()) {
            let fitted = fit_dimensions(natural, Bounds::default());
            prop_assert!(fitted.width <= MAX_WIDTH);
            prop_assert!(fitted.height <= MAX_HEIGHT);
        }

        /// Property: in-bounds inputs pass through unchanged.
        #[test]
        fn prop_in_bounds_identity(
            width in 1u32..=MAX_WIDTH,
            height in 1u32..=MAX_HEIGHT,
        ) {
            let natural = Dimensions::new(width, height);
            prop_assert_eq!(fit_dimensions(natural, Bounds::default()), natural);
        }

        /// Property: aspect ratio survives within rounding error.
        #[test]
        fn prop_aspect_ratio_preserved(natural in natural_strategy()) {
            let fitted = fit_dimensions(natural, Bounds::default());
            // 1 px of rounding on either axis bounds the ratio drift
            prop_assume!(fitted.width > 10 && fitted.height > 10);
            let drift = (natural.aspect_ratio() - fitted.aspect_ratio()).abs();
            let tolerance = natural.aspect_ratio() * 0.25;
            prop_assert!(
                drift <= tolerance,
                "ratio drifted from {} to {}",
                natural.aspect_ratio(),
                fitted.aspect_ratio()
            );
        }

        /// Property: fitting is idempotent on its own output.
        #[test]
        fn prop_idempotent(natural in natural_strategy()) {
            let once = fit_dimensions(natural, Bounds::default());
            let twice = fit_dimensions(once, Bounds::default());
            prop_assert_eq!(once, twice);
        }
    }
}
