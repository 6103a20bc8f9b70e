//! Minimal end-to-end example: combine units, convert to a reference unit, collapse a ratio.

use phys_units::dimensions::SpeedD;
use phys_units::{Quantity, HOUR, KILO, METER, SECOND};

fn main() {
    let d = 42.195 * KILO * METER;
    let t = 2.0 * HOUR + 35.0 * 60.0 * SECOND;
    let v: Quantity<SpeedD> = d / t;
    assert!((v.to(KILO * METER / HOUR) - 16.33).abs() < 0.01);

    let laps: f64 = d / (400.0 * METER);
    assert!((laps - 105.4875).abs() < 1e-9);

    println!("pace = {v}");
    println!("laps = {laps}");
}
