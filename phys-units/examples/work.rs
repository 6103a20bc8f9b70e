//! Work done by a constant force: the dimensions of `F * dx` are checked by the compiler.

use phys_units::dimensions::{EnergyD, ForceD, LengthD};
use phys_units::literals::{m, N};
use phys_units::Quantity;

fn work(force: Quantity<ForceD>, dx: Quantity<LengthD>) -> Quantity<EnergyD> {
    force * dx
}

fn main() {
    let force = N(2.0);
    let dx = m(2.0);
    let energy = work(force, dx);

    println!("F  = {force}");
    println!("dx = {dx}");
    println!("E  = {energy}");
}
