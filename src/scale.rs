//! Scale functions for data-to-visual mappings.
//!
//! Scales transform data values to visual properties (color bucket, opacity).
//! Based on the Grammar of Graphics [Wilkinson 2005].

use crate::error::{Error, Result};

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

fn check_finite(domain: (f64, f64)) -> Result<()> {
    if domain.0.is_finite() && domain.1.is_finite() {
        Ok(())
    } else {
        Err(Error::ScaleDomain(format!("Domain [{}, {}] must be finite", domain.0, domain.1)))
    }
}

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
    clamp: bool,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if domain_min equals domain_max or either is not finite.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        check_finite(domain)?;
        if (domain.0 - domain.1).abs() < f64::EPSILON {
            return Err(Error::ScaleDomain("Domain min and max cannot be equal".to_string()));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
            clamp: false,
        })
    }

    /// Restrict outputs to the range extent.
    #[must_use]
    pub fn clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }
}

impl Scale<f64, f64> for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        let t = if self.clamp { t.clamp(0.0, 1.0) } else { t };
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}

/// Quantize scale: splits the domain into `k` equal-width buckets, one per
/// range entry.
///
/// Buckets are half-open `[min + j*w, min + (j+1)*w)` except the last, which
/// also contains `max`. Values outside the domain fall into the nearest
/// boundary bucket.
#[derive(Debug, Clone)]
pub struct QuantizeScale<T> {
    entries: Vec<T>,
    domain_min: f64,
    domain_max: f64,
}

/// Quantize scale over CSS color strings.
pub type ColorScale = QuantizeScale<String>;

impl<T> QuantizeScale<T> {
    /// Create a new quantize scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `entries` is empty or the domain is not an
    /// increasing finite interval.
    pub fn new(entries: Vec<T>, domain: (f64, f64)) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::ScaleDomain("Quantize scale requires at least one entry".to_string()));
        }
        check_finite(domain)?;
        if domain.0 >= domain.1 {
            return Err(Error::ScaleDomain(format!(
                "Domain min {} must be less than max {}",
                domain.0, domain.1
            )));
        }

        Ok(Self { entries, domain_min: domain.0, domain_max: domain.1 })
    }

    /// Bucket index for a value.
    #[must_use]
    pub fn quantize(&self, value: f64) -> usize {
        let k = self.entries.len();
        let kx = k as f64 / (self.domain_max - self.domain_min);
        let bucket = (kx * (value - self.domain_min)).floor();

        if bucket.is_nan() || bucket <= 0.0 {
            0
        } else {
            (bucket as usize).min(k - 1)
        }
    }

    /// Range entry for a value.
    #[must_use]
    pub fn entry(&self, value: f64) -> &T {
        &self.entries[self.quantize(value)]
    }

    /// All range entries, in bucket order.
    #[must_use]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects empty ranges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Scale<f64, usize> for QuantizeScale<T> {
    fn scale(&self, value: f64) -> usize {
        self.quantize(value)
    }

    fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (usize, usize) {
        (0, self.entries.len() - 1)
    }
}
