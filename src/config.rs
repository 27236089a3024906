use crate::error::{Result, TableError};

/// Number of buckets a table starts with unless told otherwise.
pub const DEFAULT_CAPACITY: usize = 8;

/// Element count / capacity ratio above which a table doubles.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Construction parameters for a [`HashTable`](crate::HashTable).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub initial_capacity: usize,
    pub load_factor: f64,
}

impl TableConfig {
    pub fn new(initial_capacity: usize, load_factor: f64) -> Self {
        Self {
            initial_capacity,
            load_factor,
        }
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks that the capacity is positive and the load factor lies in `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(TableError::invalid_configuration(
                "initial capacity must be positive",
            ));
        }
        // NaN fails both comparisons
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(TableError::invalid_configuration(format!(
                "load factor must be in (0, 1], got {}",
                self.load_factor
            )));
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = TableConfig::default();
        assert_eq!(config.initial_capacity, 8);
        assert_eq!(config.load_factor, 0.75);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let base = TableConfig::default();
        assert!(base.with_initial_capacity(0).validate().is_err());
        assert!(base.with_load_factor(0.0).validate().is_err());
        assert!(base.with_load_factor(-0.5).validate().is_err());
        assert!(base.with_load_factor(1.5).validate().is_err());
        assert!(base.with_load_factor(f64::NAN).validate().is_err());
        assert!(base.with_load_factor(1.0).validate().is_ok());
    }
}
