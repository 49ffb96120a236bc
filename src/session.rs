use crate::error::UnknownVehicle;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

pub const LAPS_PER_SESSION: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleClass {
    GT3,
    Formula,
    Rally,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [VehicleClass::GT3, VehicleClass::Formula, VehicleClass::Rally];

    /// Nominal lap duration in seconds before random variation.
    pub fn base_lap_time(self) -> f64 {
        match self {
            VehicleClass::GT3 => 95.0,
            VehicleClass::Formula => 70.0,
            VehicleClass::Rally => 120.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VehicleClass::GT3 => "GT3",
            VehicleClass::Formula => "Formula",
            VehicleClass::Rally => "Rally",
        }
    }

    pub fn menu_label(self) -> &'static str {
        match self {
            VehicleClass::GT3 => "GT3 Car",
            VehicleClass::Formula => "Formula Car",
            VehicleClass::Rally => "Rally Car",
        }
    }

    /// Menu numbering starts at 1: GT3, Formula, Rally.
    pub fn from_menu_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(VehicleClass::GT3),
            2 => Some(VehicleClass::Formula),
            3 => Some(VehicleClass::Rally),
            _ => None,
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment flags working for the report columns.
        f.pad(self.name())
    }
}

impl FromStr for VehicleClass {
    type Err = UnknownVehicle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleClass::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVehicle(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Excellent,
    Solid,
    NeedsImprovement,
}

impl Pace {
    pub const FORMULA_EXCELLENT_BELOW: f64 = 75.0;
    pub const SOLID_MIN: f64 = 75.0;
    pub const SOLID_MAX: f64 = 100.0;

    /// The Formula check wins over the solid band.
    pub fn classify(vehicle: VehicleClass, average: f64) -> Self {
        if vehicle == VehicleClass::Formula && average < Self::FORMULA_EXCELLENT_BELOW {
            Pace::Excellent
        } else if (Self::SOLID_MIN..=Self::SOLID_MAX).contains(&average) {
            Pace::Solid
        } else {
            Pace::NeedsImprovement
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Pace::Excellent => "Excellent pace for a Formula car!",
            Pace::Solid => "Solid and consistent driving.",
            Pace::NeedsImprovement => "Room for improvement. Keep practicing!",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    driver_name: String,
    track_name: String,
    vehicle: VehicleClass,
    lap_times: [f64; LAPS_PER_SESSION],
}

impl Session {
    /// Records a run with freshly generated lap times for `vehicle`.
    pub fn record<R: Rng + ?Sized>(
        driver_name: impl Into<String>,
        track_name: impl Into<String>,
        vehicle: VehicleClass,
        rng: &mut R,
    ) -> Self {
        let lap_times = crate::lap_generator::generate_lap_times(vehicle, rng);
        Self::new(driver_name, track_name, vehicle, lap_times)
    }

    pub(crate) fn new(
        driver_name: impl Into<String>,
        track_name: impl Into<String>,
        vehicle: VehicleClass,
        lap_times: [f64; LAPS_PER_SESSION],
    ) -> Self {
        Self {
            driver_name: driver_name.into(),
            track_name: track_name.into(),
            vehicle,
            lap_times,
        }
    }

    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    pub fn track_name(&self) -> &str {
        &self.track_name
    }

    pub fn vehicle(&self) -> VehicleClass {
        self.vehicle
    }

    pub fn lap_times(&self) -> &[f64; LAPS_PER_SESSION] {
        &self.lap_times
    }

    pub fn average_lap(&self) -> f64 {
        crate::lap_generator::average_lap(&self.lap_times)
    }

    pub fn pace(&self) -> Pace {
        Pace::classify(self.vehicle, self.average_lap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_times_are_fixed_per_class() {
        assert_eq!(VehicleClass::GT3.base_lap_time(), 95.0);
        assert_eq!(VehicleClass::Formula.base_lap_time(), 70.0);
        assert_eq!(VehicleClass::Rally.base_lap_time(), 120.0);
    }

    #[test]
    fn menu_choice_maps_to_class() {
        assert_eq!(VehicleClass::from_menu_choice(1), Some(VehicleClass::GT3));
        assert_eq!(VehicleClass::from_menu_choice(2), Some(VehicleClass::Formula));
        assert_eq!(VehicleClass::from_menu_choice(3), Some(VehicleClass::Rally));
        assert_eq!(VehicleClass::from_menu_choice(0), None);
        assert_eq!(VehicleClass::from_menu_choice(4), None);
    }

    #[test]
    fn names_parse_back() {
        for v in VehicleClass::ALL {
            assert_eq!(v.name().parse::<VehicleClass>(), Ok(v));
        }
        assert!("Kart".parse::<VehicleClass>().is_err());
    }

    #[test]
    fn display_honours_padding() {
        assert_eq!(format!("{:<12}|", VehicleClass::GT3), "GT3         |");
    }

    #[test]
    fn recorded_laps_follow_the_vehicle_base() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(99);
        for vehicle in VehicleClass::ALL {
            let s = Session::record("Ana", "Monza", vehicle, &mut rng);
            assert_eq!(s.driver_name(), "Ana");
            assert_eq!(s.vehicle(), vehicle);
            let base = vehicle.base_lap_time();
            assert!(s.lap_times().iter().all(|lap| (base..base + 10.0).contains(lap)));
        }
    }

    #[test]
    fn formula_under_75_is_excellent() {
        let s = Session::new("Ana", "Monza", VehicleClass::Formula, [68.40, 71.20, 69.90]);
        assert_eq!(format!("{:.2}", s.average_lap()), "69.83");
        assert_eq!(s.pace(), Pace::Excellent);
        assert_eq!(s.pace().message(), "Excellent pace for a Formula car!");
    }

    #[test]
    fn gt3_in_band_is_solid() {
        let s = Session::new("Ben", "Spa", VehicleClass::GT3, [95.10, 98.30, 96.75]);
        assert_eq!(format!("{:.2}", s.average_lap()), "96.72");
        assert_eq!(s.pace(), Pace::Solid);
        assert_eq!(s.pace().message(), "Solid and consistent driving.");
    }

    #[test]
    fn band_edges_are_inclusive() {
        assert_eq!(Pace::classify(VehicleClass::GT3, 75.0), Pace::Solid);
        assert_eq!(Pace::classify(VehicleClass::GT3, 100.0), Pace::Solid);
        assert_eq!(Pace::classify(VehicleClass::Formula, 75.0), Pace::Solid);
    }

    #[test]
    fn outside_band_needs_improvement() {
        assert_eq!(Pace::classify(VehicleClass::Rally, 125.0), Pace::NeedsImprovement);
        assert_eq!(Pace::classify(VehicleClass::GT3, 100.01), Pace::NeedsImprovement);
        // Only Formula cars get the fast-lap praise.
        assert_eq!(Pace::classify(VehicleClass::GT3, 70.0), Pace::NeedsImprovement);
    }
}
