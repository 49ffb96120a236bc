use crate::session::{VehicleClass, LAPS_PER_SESSION};
use rand::Rng;

/// Offsets are drawn in hundredths of a second: 0..1000 -> 0.00..=9.99.
const OFFSET_STEPS: u32 = 1000;
const STEPS_PER_SECOND: f64 = 100.0;

pub fn random_offset<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(0..OFFSET_STEPS) as f64 / STEPS_PER_SECOND
}

pub fn generate_lap_times<R: Rng + ?Sized>(
    vehicle: VehicleClass,
    rng: &mut R,
) -> [f64; LAPS_PER_SESSION] {
    let base = vehicle.base_lap_time();
    std::array::from_fn(|_| base + random_offset(&mut *rng))
}

pub fn average_lap(laps: &[f64; LAPS_PER_SESSION]) -> f64 {
    laps.iter().sum::<f64>() / LAPS_PER_SESSION as f64
}
