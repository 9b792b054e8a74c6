use crate::domain::ports::Calculator;
use crate::utils::error::{Result, TickerError};

/// Stateless adder. A new one is built for every iteration of the loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculationMachine;

impl CalculationMachine {
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for CalculationMachine {
    fn sum(&self, lhs: i32, rhs: i32) -> Result<i32> {
        lhs.checked_add(rhs)
            .ok_or(TickerError::OverflowError { lhs, rhs })
    }
}
