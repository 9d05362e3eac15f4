#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use crate::domain::Accumulator;

/// Runs `steps` iterations of the sqrt/sin recurrence on `acc`.
///
/// Pure computation with no side effects. It exists to keep one core busy.
/// The result is passed through `black_box` so the optimizer keeps the work.
pub fn burn(acc: &mut Accumulator, steps: u32) -> f64 {
    for _ in 0..steps {
        acc.step();
    }
    std::hint::black_box(acc.value())
}
