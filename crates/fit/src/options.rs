use crate::error::FitError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FitOptions {
    pub min: f64,
    pub max: f64,
    pub iterations: u32,
    pub initial: f64,
    /// Largest acceptable page count.
    pub max_pages: usize,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            min: 0.8,
            max: 1.6,
            iterations: 8,
            initial: 1.0,
            max_pages: 1,
        }
    }
}

impl FitOptions {
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_initial(mut self, initial: f64) -> Self {
        self.initial = initial;
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn validate(&self) -> Result<(), FitError> {
        let finite = [self.min, self.max, self.initial].iter().all(|v| v.is_finite());
        if !finite || self.min <= 0.0 {
            return Err(FitError::InvalidOptions(format!(
                "scales must be finite and positive (min {}, max {}, initial {})",
                self.min, self.max, self.initial
            )));
        }
        if self.min > self.max {
            return Err(FitError::InvalidOptions(format!(
                "min {} exceeds max {}",
                self.min, self.max
            )));
        }
        if self.max_pages == 0 {
            return Err(FitError::InvalidOptions("maxPages must be at least 1".into()));
        }
        Ok(())
    }
}
