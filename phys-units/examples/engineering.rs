//! Plain and engineering-notation output of the same quantity.

use phys_units::dimensions::ElectricResistanceD;
use phys_units::io::EngineeringFormat;
use phys_units::literals::kV;
use phys_units::{Quantity, AMPERE};

fn main() {
    let r: Quantity<ElectricResistanceD> = kV(4.7) / AMPERE;

    println!("R = {r}");
    println!("R = {}", r.engineering());
    println!("R = {}", r.engineering_with(EngineeringFormat::new().exponential(true)));
}
