//! Clip operation demo.
//!
//! Run with: `cargo run --example clipping`

use fastvector::prelude::*;
use fastvector::vector;

fn main() -> Result<(), VectorError> {
    let input = vector![-2.0, -0.5, 0.0, 0.5, 2.0];
    println!("input     = {}", input);

    let mut out = Vector::zeros(input.len())?;

    checked_clip_vector(&input, -1.0, 1.0, &mut out)?;
    println!("checked   = {}", out);

    naive_clip_vector(&input, -1.0, 1.0, &mut out)?;
    println!("naive     = {}", out);

    clip_vector(&input, -1.0, 1.0, &mut out)?;
    println!("optimized = {}", out);

    // Inverted bounds are rejected before any element is written.
    match clip_vector(&input, 1.0, -1.0, &mut out) {
        Err(e) => println!("inverted bounds: {}", e),
        Ok(()) => unreachable!(),
    }

    Ok(())
}
