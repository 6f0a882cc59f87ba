//! Conversions out of an operand

use crate::config::GhoConfig;
use crate::error::{GhoError, GhoResult};
use crate::operand::scalar::narrow;
use crate::operand::{Coperand, CoperandRef, Integer, Operand};
use crate::types::TypeTag;

impl<C: GhoConfig> Coperand<'_, C> {
    /// Value as an `i64`, range-checked or truncated per `C::CHECK_OVERFLOW`
    pub fn to_i64(&self) -> GhoResult<i64> {
        narrow("to_i64", self.scalar_or("to_i64")?, C::CHECK_OVERFLOW)
    }

    /// Value as an `i128`, range-checked or truncated per `C::CHECK_OVERFLOW`
    pub fn to_i128(&self) -> GhoResult<i128> {
        narrow("to_i128", self.scalar_or("to_i128")?, C::CHECK_OVERFLOW)
    }

    /// Owned copy in the same representation
    pub fn to_integer(&self) -> GhoResult<Integer> {
        Ok(match self.source {
            CoperandRef::Null => {
                return Err(GhoError::unsupported("to_integer", TypeTag::Null));
            }
            CoperandRef::Int(value) => Integer::Int(*value),
            CoperandRef::Long(value) => Integer::Long(*value),
            CoperandRef::LongLong(value) => Integer::LongLong(*value),
            CoperandRef::Big(value) => Integer::Big(value.clone()),
        })
    }
}

impl<C: GhoConfig> Operand<'_, C> {
    /// See [`Coperand::to_i64`]
    pub fn to_i64(&self) -> GhoResult<i64> {
        self.as_coperand().to_i64()
    }

    /// See [`Coperand::to_i128`]
    pub fn to_i128(&self) -> GhoResult<i128> {
        self.as_coperand().to_i128()
    }

    /// See [`Coperand::to_integer`]
    pub fn to_integer(&self) -> GhoResult<Integer> {
        self.as_coperand().to_integer()
    }
}
