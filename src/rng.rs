//! Seedable generator for particle placement (not crypto secure).

use web_sys::window;

/// Thin wrapper over [`fastrand::Rng`]. Seed it explicitly for reproducible
/// layouts, or use [`FxRng::from_entropy`] in the browser.
#[derive(Clone, Debug)]
pub struct FxRng {
    inner: fastrand::Rng,
}

impl FxRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: fastrand::Rng::with_seed(seed),
        }
    }

    /// Seed from getrandom when the `rng` feature is on, otherwise from the
    /// page's performance clock.
    pub fn from_entropy() -> Self {
        Self::seeded(entropy_seed())
    }

    pub fn next_u64(&mut self) -> u64 {
        self.inner.u64(..)
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.inner.f64()
    }
}

#[cfg(feature = "rng")]
fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(_) => clock_seed(),
    }
}

#[cfg(not(feature = "rng"))]
fn entropy_seed() -> u64 {
    clock_seed()
}

fn clock_seed() -> u64 {
    let now = window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    (now * 1000.0) as u64
}
