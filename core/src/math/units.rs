/// Converts a speed entered in km/h to m/s.
pub fn kmh_to_ms(kmh: f64) -> f64 {
    kmh * 1000.0 / 3600.0
}

pub fn ms_to_kmh(ms: f64) -> f64 {
    ms * 3600.0 / 1000.0
}
