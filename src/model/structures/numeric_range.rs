use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::error::ConfigurationError;

/// Float drift allowed when walking a range up to its inclusive upper bound.
const STEP_TOLERANCE: f64 = 1e-9;

/// A closed interval `[min, max]` with a minimum meaningful step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    pub resolution: f64
}

impl NumericRange {
    pub fn new(min: f64, max: f64, resolution: f64) -> Result<NumericRange, ConfigurationError> {
        let range = NumericRange { min, max, resolution };
        range.validate()?;

        Ok(range)
    }

    /// A zero-width range that always samples `value`.
    pub fn point(value: f64, resolution: f64) -> NumericRange {
        NumericRange {
            min: value,
            max: value,
            resolution
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let finite = self.min.is_finite() && self.max.is_finite() && self.resolution.is_finite();
        if !finite || self.min > self.max || self.resolution <= 0.0 {
            return Err(ConfigurationError::InvalidRange {
                min: self.min,
                max: self.max,
                resolution: self.resolution
            });
        }

        Ok(())
    }

    pub fn delta(&self) -> f64 {
        self.max - self.min
    }

    /// Draws a uniform value in `[min, max)` (or exactly `min` for a zero-width range).
    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        self.min + rng.random::<f64>() * self.delta()
    }

    /// The interval used when walking this range in `step_count` steps.
    ///
    /// The resolution is used unless it would produce more than `step_count` steps, in which case the
    /// range is split evenly instead. Integral resolutions keep integral intervals.
    pub fn step_interval(&self, step_count: usize) -> f64 {
        let step_count = step_count.max(1) as f64;
        let allow_floats = self.resolution.fract() != 0.0;

        let even = self.delta() / step_count;
        if even > self.resolution {
            if allow_floats {
                even
            } else {
                even.floor()
            }
        } else {
            self.resolution
        }
    }

    /// Every value from `min` to `max` inclusive, spaced by [`NumericRange::step_interval`].
    pub fn steps(&self, step_count: usize) -> Vec<f64> {
        let interval = self.step_interval(step_count);
        if self.delta() <= 0.0 {
            return vec![self.min];
        }

        let count = (self.delta() / interval + STEP_TOLERANCE).floor() as usize;

        (0..=count).map(|i| self.min + i as f64 * interval).collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::model::{error::ConfigurationError, structures::numeric_range::NumericRange};

    #[test]
    fn test_new_rejects_inverted_range() {
        assert_eq!(
            NumericRange::new(1.0, 0.5, 0.1),
            Err(ConfigurationError::InvalidRange {
                min: 1.0,
                max: 0.5,
                resolution: 0.1
            })
        );
    }

    #[test]
    fn test_new_rejects_non_positive_resolution() {
        assert!(NumericRange::new(0.0, 1.0, 0.0).is_err());
        assert!(NumericRange::new(0.0, 1.0, -1.0).is_err());
        assert!(NumericRange::new(0.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_sample_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let range = NumericRange::new(0.25, 1.0, 0.1).unwrap();

        for _ in 0..1000 {
            let value = range.sample(&mut rng);
            assert!((0.25..1.0).contains(&value), "{value} out of range");
        }
    }

    #[test]
    fn test_sample_point_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let range = NumericRange::point(0.4, 0.1);

        assert_eq!(range.sample(&mut rng), 0.4);
    }

    #[test]
    fn test_steps_use_resolution_when_fine_enough() {
        let range = NumericRange::new(0.1, 1.0, 0.1).unwrap();
        let steps = range.steps(10);

        assert_eq!(steps.len(), 10);
        assert_abs_diff_eq!(steps[0], 0.1);
        assert_abs_diff_eq!(steps[9], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_steps_coarsen_to_step_count() {
        // 99_900 / 10 = 9990 > 1000, so the even split wins
        let range = NumericRange::new(100.0, 100_000.0, 1000.0).unwrap();

        assert_eq!(range.step_interval(10), 9990.0);

        let steps = range.steps(10);
        assert_eq!(steps.len(), 11);
        assert_eq!(steps[1], 10_090.0);
        assert_eq!(*steps.last().unwrap(), 100_000.0);
    }

    #[test]
    fn test_steps_floor_integral_interval() {
        // 47 / 10 = 4.7, floored to 4 because the resolution is integral
        let range = NumericRange::new(3.0, 50.0, 1.0).unwrap();

        assert_eq!(range.step_interval(10), 4.0);
        assert_eq!(range.steps(10), vec![3.0, 7.0, 11.0, 15.0, 19.0, 23.0, 27.0, 31.0, 35.0, 39.0, 43.0, 47.0]);
    }

    #[test]
    fn test_steps_zero_width() {
        let range = NumericRange::point(5.0, 1.0);

        assert_eq!(range.steps(10), vec![5.0]);
    }

    #[test]
    fn test_steps_zero_step_count_treated_as_one() {
        let range = NumericRange::new(0.0, 1.0, 0.5).unwrap();

        assert_eq!(range.steps(0), vec![0.0, 1.0]);
    }
}
