//! Assignment

use crate::config::GhoConfig;
use crate::error::GhoResult;
use crate::operand::scalar::Exact;
use crate::operand::{Coperand, Operand};

impl<C: GhoConfig> Operand<'_, C> {
    /// Copies the value of `rhs` into the target, narrowing if needed
    ///
    /// Narrowing follows `C::CHECK_OVERFLOW`.
    pub fn set<D: GhoConfig>(&mut self, rhs: &Coperand<'_, D>) -> GhoResult<()> {
        self.binary("set", rhs, |_, value| Ok(value.to_exact()))
    }

    /// [`set`](Self::set) from an immediate
    pub fn set_i64(&mut self, value: i64) -> GhoResult<()> {
        self.unary("set", |_| Ok(Exact::Fixed(i128::from(value))))
    }

    /// Sets the target to 0
    pub fn set_zero(&mut self) -> GhoResult<()> {
        self.unary("set_zero", |_| Ok(Exact::Fixed(0)))
    }

    /// Sets the target to 1
    pub fn set_one(&mut self) -> GhoResult<()> {
        self.unary("set_one", |_| Ok(Exact::Fixed(1)))
    }

    /// Sets the target to -1
    pub fn set_minus_one(&mut self) -> GhoResult<()> {
        self.unary("set_minus_one", |_| Ok(Exact::Fixed(-1)))
    }
}
