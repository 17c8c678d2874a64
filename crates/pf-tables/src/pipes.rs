use pf_core::UnitSystem;

/// Internal diameter of one nominal size in one schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSizeEntry {
    /// Nominal size in inches.
    pub nominal_in: f64,
    pub schedule: u32,
    /// Internal diameter in metres.
    pub diameter_m: f64,
}

const fn sch40(nominal_in: f64, diameter_m: f64) -> PipeSizeEntry {
    PipeSizeEntry {
        nominal_in,
        schedule: 40,
        diameter_m,
    }
}

const PIPE_SIZES: [PipeSizeEntry; 23] = [
    sch40(0.125, 0.0068),
    sch40(0.25, 0.0092),
    sch40(0.375, 0.0125),
    sch40(0.5, 0.0158),
    sch40(0.75, 0.0209),
    sch40(1.0, 0.0266),
    sch40(1.25, 0.0351),
    sch40(1.5, 0.0409),
    sch40(2.0, 0.0525),
    sch40(2.5, 0.0627),
    sch40(3.0, 0.0779),
    sch40(3.5, 0.0901),
    sch40(4.0, 0.1023),
    sch40(5.0, 0.128),
    sch40(6.0, 0.154),
    sch40(8.0, 0.203),
    sch40(10.0, 0.255),
    sch40(12.0, 0.303),
    sch40(14.0, 0.333),
    sch40(16.0, 0.381),
    sch40(18.0, 0.429),
    sch40(20.0, 0.478),
    sch40(24.0, 0.575),
];

pub fn schedules() -> &'static [PipeSizeEntry] {
    &PIPE_SIZES
}

/// Tabulated internal diameter in metres, if `(nominal, schedule)` is known.
pub fn tabulated_diameter_m(nominal: f64, schedule: u32) -> Option<f64> {
    PIPE_SIZES
        .iter()
        .find(|e| e.nominal_in == nominal && e.schedule == schedule)
        .map(|e| e.diameter_m)
}

/// Internal diameter in the active system's length unit.
///
/// Pairs missing from the table are read as a diameter already expressed in
/// the active unit and returned unchanged.
pub fn pipe_diameter(nominal: f64, schedule: u32, system: UnitSystem) -> f64 {
    match tabulated_diameter_m(nominal, schedule) {
        Some(d_m) => system.length_from_meters(d_m),
        None => nominal,
    }
}
