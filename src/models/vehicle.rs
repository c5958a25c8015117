//! Delivery vehicle with capacity, shift, and cost parameters.

use serde::{Deserialize, Serialize};

/// A delivery truck used to price candidate routes.
///
/// Times are in seconds, rates per hour. Defaults: capacity 25 units
/// (one below the physical 26 to leave slack), unloading 450 s per unit,
/// 4 h standard shift at 225/h, overtime at 275/h, 6 h hard limit.
///
/// # Examples
///
/// ```
/// use u_routegen::models::Vehicle;
///
/// let v = Vehicle::default().with_capacity(26.0);
/// assert_eq!(v.capacity(), 26.0);
/// assert_eq!(v.max_duration(), Some(6.0 * 3600.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    capacity: f64,
    unload_time_per_unit: f64,
    standard_duration: f64,
    hourly_rate: f64,
    overtime_rate: f64,
    max_duration: Option<f64>,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            capacity: 25.0,
            unload_time_per_unit: 7.5 * 60.0,
            standard_duration: 4.0 * 3600.0,
            hourly_rate: 225.0,
            overtime_rate: 275.0,
            max_duration: Some(6.0 * 3600.0),
        }
    }
}

impl Vehicle {
    /// Sets the load capacity.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets unloading time per demand unit.
    pub fn with_unload_time_per_unit(mut self, seconds: f64) -> Self {
        self.unload_time_per_unit = seconds;
        self
    }

    /// Sets the standard shift length and its hourly rate.
    pub fn with_standard_shift(mut self, seconds: f64, hourly_rate: f64) -> Self {
        self.standard_duration = seconds;
        self.hourly_rate = hourly_rate;
        self
    }

    /// Sets the hourly rate beyond the standard shift.
    pub fn with_overtime_rate(mut self, rate: f64) -> Self {
        self.overtime_rate = rate;
        self
    }

    /// Sets or clears the maximum route duration.
    pub fn with_max_duration(mut self, max: Option<f64>) -> Self {
        self.max_duration = max;
        self
    }

    /// Maximum load.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Unloading seconds per demand unit.
    pub fn unload_time_per_unit(&self) -> f64 {
        self.unload_time_per_unit
    }

    /// Standard shift length in seconds.
    pub fn standard_duration(&self) -> f64 {
        self.standard_duration
    }

    /// Hourly rate within the standard shift.
    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    /// Hourly rate beyond the standard shift.
    pub fn overtime_rate(&self) -> f64 {
        self.overtime_rate
    }

    /// Maximum route duration in seconds, if limited.
    pub fn max_duration(&self) -> Option<f64> {
        self.max_duration
    }

    /// Cost of a route lasting `duration` seconds.
    pub fn cost_for(&self, duration: f64) -> f64 {
        if duration <= self.standard_duration {
            duration / 3600.0 * self.hourly_rate
        } else {
            self.standard_duration / 3600.0 * self.hourly_rate
                + (duration - self.standard_duration) / 3600.0 * self.overtime_rate
        }
    }
}
