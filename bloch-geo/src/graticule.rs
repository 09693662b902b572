//! Latitude/longitude grid lines
//!
//! The grid is generated in geographic coordinates (degrees) and projected
//! afterwards. It always has four meridians, 90° apart, running pole to
//! pole, and the equator. Further parallels are placed at every multiple of
//! the configured step inside ±80° latitude, so a step of π/2 draws only the
//! equator and a step of π/4 adds the ±45° circles.

use bloch_core::angle::degrees;

/// Meridians are placed every 90° of longitude
const MERIDIAN_STEP: f64 = 90.0;

/// Parallels are not drawn closer to the poles than this
const PARALLEL_LIMIT: f64 = 80.0;

/// Parallels are never closer together than this, in degrees
const MIN_PARALLEL_STEP: f64 = 1.0;

/// Sampling distance along each line, in degrees
const DEFAULT_PRECISION: f64 = 2.0;

/// Tolerance for range ends and for recognising the equator
const EPSILON: f64 = 1e-6;

/// Graticule generator
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Graticule {
    parallel_step: f64,
    precision: f64,
}

impl Graticule {
    /// Graticule with parallels every `step` radians
    ///
    /// A step that is zero, negative or not finite yields only the meridians
    /// and the equator. Positive steps under 1° are widened to 1°.
    pub fn new(step: f64) -> Self {
        Self {
            parallel_step: degrees(step),
            precision: DEFAULT_PRECISION,
        }
    }

    /// Override the sampling distance along each line (degrees)
    pub fn with_precision(mut self, precision: f64) -> Self {
        if precision.is_finite() && precision > 0.0 {
            self.precision = precision;
        }
        self
    }

    /// Parallel spacing in degrees
    #[inline]
    pub fn parallel_step(&self) -> f64 {
        self.parallel_step
    }

    /// Latitudes (degrees) of the parallels, equator first
    pub fn parallels(&self) -> Vec<f64> {
        let mut latitudes = vec![0.0];
        let step = self.parallel_step;
        if !(step.is_finite() && step > 0.0) {
            return latitudes;
        }
        let step = step.max(MIN_PARALLEL_STEP);

        let first = (-(PARALLEL_LIMIT + EPSILON) / step).ceil() as i64;
        let last = ((PARALLEL_LIMIT + EPSILON) / step).floor() as i64;
        latitudes.extend(
            (first..=last)
                .filter(|&i| i != 0)
                .map(|i| i as f64 * step),
        );
        latitudes
    }

    /// Longitudes (degrees) of the meridians
    pub fn meridians(&self) -> Vec<f64> {
        let mut longitudes = Vec::new();
        let mut lon = -180.0;
        while lon < 180.0 - EPSILON {
            longitudes.push(lon);
            lon += MERIDIAN_STEP;
        }
        longitudes
    }

    /// Every grid line as a list of (longitude, latitude) samples in degrees
    pub fn lines(&self) -> Vec<Vec<(f64, f64)>> {
        let meridians = self
            .meridians()
            .into_iter()
            .map(|lon| sample(-90.0, 90.0, self.precision).map(|lat| (lon, lat)).collect());
        let parallels = self
            .parallels()
            .into_iter()
            .map(|lat| sample(-180.0, 180.0, self.precision).map(|lon| (lon, lat)).collect());

        meridians.chain(parallels).collect()
    }
}

/// `from`, `from + step`, … up to but not including `to`, then `to` itself
fn sample(from: f64, to: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = ((to - EPSILON - from) / step).ceil().max(0.0) as usize;
    (0..count).map(move |i| from + i as f64 * step).chain(std::iter::once(to))
}
