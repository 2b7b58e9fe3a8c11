// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

const MINUTE_EPSILON: f64 = 1e-9;

/// Constants used to turn a route's weighted distance into travel estimates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostRates {
    /// Fuel consumption, in liters per kilometer.
    pub fuel_per_km: f64,

    /// Average travel speed, in kilometers per hour.
    pub average_speed_kmh: f64,

    /// Price of a liter of fuel.
    pub fuel_price: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            fuel_per_km: 0.12,
            average_speed_kmh: 40.0,
            fuel_price: 1.5,
        }
    }
}

/// Fuel, time and money needed to travel a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostEstimate {
    pub fuel_liters: f64,
    pub hours: i64,
    pub minutes: i64,
    pub fuel_cost: f64,
}

impl CostRates {
    /// Estimates the cost of travelling `total_distance` (weighted) kilometers.
    ///
    /// Travel time is truncated to whole minutes, and then split into hours and minutes.
    pub fn estimate(&self, total_distance: i64) -> CostEstimate {
        debug_assert!(total_distance >= 0);

        let distance = total_distance as f64;
        let fuel_liters = distance * self.fuel_per_km;

        // Exact minute counts must not be truncated down to the previous minute
        let total_minutes =
            (distance * 60.0 / self.average_speed_kmh + MINUTE_EPSILON).trunc() as i64;

        CostEstimate {
            fuel_liters,
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
            fuel_cost: fuel_liters * self.fuel_price,
        }
    }
}

/// Estimates the cost of travelling `total_distance` with the [default rates](CostRates::default).
pub fn estimate_cost(total_distance: i64) -> CostEstimate {
    CostRates::default().estimate(total_distance)
}
