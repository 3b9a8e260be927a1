//! Basic vector arithmetic demo.
//!
//! Run with: `cargo run --example basic_ops`

use fastvector::prelude::*;
use fastvector::vector;

fn main() -> Result<(), VectorError> {
    let v1 = vector![-1.0, 1.0];
    let v2 = vector![2.5, -2.5];

    println!("v1           = {}", v1);
    println!("v2           = {}", v2);
    println!("v1 + v2      = {}", v1.add(&v2)?);
    println!("v1 - v2      = {}", v1.sub(&v2)?);
    println!("v1 . v2      = {:?}", v1.dot(&v2)?);
    println!("v2 * 2       = {}", &v2 * 2.0);
    println!("v2 / 5       = {}", v2.div(5.0)?);
    println!("|v2|         = {}", v2.magnitude());
    println!("debug form   = {:?}", v2);

    // Equality compares numeric values across element kinds.
    let ints = vector![1_i32, 2, 3];
    let floats = ints.cast::<f64>()?;
    println!("{:?} == {:?} -> {}", ints, floats, ints == floats);

    Ok(())
}
