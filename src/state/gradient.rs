//! Page border gradient sets and random selection.
//!
//! Seven predefined triples drive the three `--blocky-page-border-color-*`
//! custom properties. Selection is uniform over the sets, repeats allowed,
//! and goes through [`RandomSource`] so tests can pin or seed it.

#[cfg(test)]
#[path = "gradient_test.rs"]
mod gradient_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// CSS custom properties holding the page border colors, in order.
pub const BORDER_COLOR_VARS: [&str; 3] = [
    "--blocky-page-border-color-1",
    "--blocky-page-border-color-2",
    "--blocky-page-border-color-3",
];

/// Immutable ordered triple of border colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientSet {
    pub name: &'static str,
    pub colors: [&'static str; 3],
}

impl GradientSet {
    /// Inline `style` declaration assigning the three border variables.
    #[must_use]
    pub fn style_declaration(&self) -> String {
        BORDER_COLOR_VARS
            .iter()
            .zip(self.colors)
            .map(|(var, color)| format!("{var}: {color}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

pub static GRADIENT_SETS: [GradientSet; 7] = [
    GradientSet {
        name: "warm-sunset",
        colors: ["rgba(255, 100, 100, 0.8)", "rgba(255, 150, 100, 0.8)", "rgba(255, 200, 100, 0.8)"],
    },
    GradientSet {
        name: "cool-ocean",
        colors: ["rgba(100, 150, 255, 0.8)", "rgba(100, 200, 255, 0.8)", "rgba(100, 255, 220, 0.8)"],
    },
    GradientSet {
        name: "purple-magic",
        colors: ["rgba(150, 100, 255, 0.8)", "rgba(200, 100, 255, 0.8)", "rgba(255, 100, 200, 0.8)"],
    },
    GradientSet {
        name: "green-forest",
        colors: ["rgba(100, 200, 100, 0.8)", "rgba(150, 255, 100, 0.8)", "rgba(200, 255, 150, 0.8)"],
    },
    GradientSet {
        name: "rainbow-spectrum",
        colors: ["rgba(255, 100, 100, 0.8)", "rgba(100, 255, 100, 0.8)", "rgba(100, 150, 255, 0.8)"],
    },
    GradientSet {
        name: "golden-hour",
        colors: ["rgba(255, 150, 50, 0.8)", "rgba(255, 200, 80, 0.8)", "rgba(255, 230, 120, 0.8)"],
    },
    GradientSet {
        name: "neon-glow",
        colors: ["rgba(100, 255, 255, 0.8)", "rgba(255, 100, 255, 0.8)", "rgba(255, 255, 100, 0.8)"],
    },
];

/// Source of uniform indices.
pub trait RandomSource {
    /// Uniform index in `[0, bound)`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Adapter exposing any `rand` generator as a [`RandomSource`].
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

/// Default source: `SmallRng` seeded from the environment's entropy.
#[must_use]
pub fn default_source() -> Box<dyn RandomSource> {
    Box::new(RngSource(SmallRng::seed_from_u64(entropy_seed())))
}

#[cfg(feature = "hydrate")]
fn entropy_seed() -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    {
        (js_sys::Math::random() * u64::MAX as f64) as u64
    }
}

#[cfg(not(feature = "hydrate"))]
fn entropy_seed() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);
    #[allow(clippy::cast_possible_truncation)]
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64);
    nanos ^ COUNTER.fetch_add(0x9E37_79B9_7F4A_7C15, Ordering::Relaxed)
}

/// Pick a gradient index uniformly from [`GRADIENT_SETS`].
pub fn pick_gradient(source: &mut dyn RandomSource) -> usize {
    source.next_index(GRADIENT_SETS.len()) % GRADIENT_SETS.len()
}

/// Color cycle state of one page overlay.
///
/// Holds the currently assigned set and how many ticks replaced it. Sets
/// are only ever replaced wholesale.
pub struct ColorCycle {
    current: usize,
    updates: u64,
    source: Box<dyn RandomSource>,
}

impl ColorCycle {
    /// Select the initial set.
    pub fn new(mut source: Box<dyn RandomSource>) -> Self {
        let current = pick_gradient(source.as_mut());
        Self { current, updates: 0, source }
    }

    #[must_use]
    pub fn current(&self) -> &'static GradientSet {
        &GRADIENT_SETS[self.current]
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of timer ticks applied since creation.
    #[must_use]
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Re-select independently of the previous set and count the tick.
    pub fn advance(&mut self) -> &'static GradientSet {
        self.current = pick_gradient(self.source.as_mut());
        self.updates += 1;
        self.current()
    }
}
