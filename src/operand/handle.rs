//! Operand handles
//!
//! An [`Operand`] mutably borrows an integer in one of the four
//! representations; a [`Coperand`] borrows one read-only. Both can be null,
//! in which case every operation reports an unsupported type.

use core::fmt;
use core::marker::PhantomData;

use num_bigint::BigInt;

use crate::config::{DefaultConfig, GhoConfig};
use crate::error::{GhoError, GhoResult};
use crate::operand::Integer;
use crate::operand::scalar::{Exact, Scalar, narrow};
use crate::traits::Printable;
use crate::types::TypeTag;

/// Mutable reference to an integer of any representation
#[derive(Debug, Default)]
pub enum OperandRef<'a> {
    /// No target
    #[default]
    Null,
    /// `int` target
    Int(&'a mut i32),
    /// `long` target
    Long(&'a mut i64),
    /// Widest fixed-width target
    LongLong(&'a mut i128),
    /// Arbitrary-precision target
    Big(&'a mut BigInt),
}

/// Shared reference to an integer of any representation
#[derive(Debug, Clone, Copy, Default)]
pub enum CoperandRef<'a> {
    /// No source
    #[default]
    Null,
    /// `int` source
    Int(&'a i32),
    /// `long` source
    Long(&'a i64),
    /// Widest fixed-width source
    LongLong(&'a i128),
    /// Arbitrary-precision source
    Big(&'a BigInt),
}

impl OperandRef<'_> {
    /// Tag of the referenced representation
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Null => TypeTag::Null,
            Self::Int(_) => TypeTag::Int,
            Self::Long(_) => TypeTag::Long,
            Self::LongLong(_) => TypeTag::LongLong,
            Self::Big(_) => TypeTag::BigInt,
        }
    }

    /// Read-only view of the same target
    pub fn as_coperand_ref(&self) -> CoperandRef<'_> {
        match self {
            Self::Null => CoperandRef::Null,
            Self::Int(value) => CoperandRef::Int(value),
            Self::Long(value) => CoperandRef::Long(value),
            Self::LongLong(value) => CoperandRef::LongLong(value),
            Self::Big(value) => CoperandRef::Big(value),
        }
    }
}

impl<'a> CoperandRef<'a> {
    /// Tag of the referenced representation
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Null => TypeTag::Null,
            Self::Int(_) => TypeTag::Int,
            Self::Long(_) => TypeTag::Long,
            Self::LongLong(_) => TypeTag::LongLong,
            Self::Big(_) => TypeTag::BigInt,
        }
    }

    pub(crate) fn scalar(self) -> Option<Scalar<'a>> {
        match self {
            Self::Null => None,
            Self::Int(value) => Some(Scalar::Fixed(i128::from(*value))),
            Self::Long(value) => Some(Scalar::Fixed(i128::from(*value))),
            Self::LongLong(value) => Some(Scalar::Fixed(*value)),
            Self::Big(value) => Some(Scalar::Big(value)),
        }
    }
}

/// Values an operand can point at
pub trait AsOperand {
    /// Mutable view of the value
    fn operand_ref(&mut self) -> OperandRef<'_>;

    /// Shared view of the value
    fn coperand_ref(&self) -> CoperandRef<'_>;
}

macro_rules! impl_as_operand {
    ($($ty:ty => $variant:ident),*) => {$(
        impl AsOperand for $ty {
            fn operand_ref(&mut self) -> OperandRef<'_> {
                OperandRef::$variant(self)
            }

            fn coperand_ref(&self) -> CoperandRef<'_> {
                CoperandRef::$variant(self)
            }
        }
    )*};
}

impl_as_operand!(i32 => Int, i64 => Long, i128 => LongLong, BigInt => Big);

impl AsOperand for Integer {
    fn operand_ref(&mut self) -> OperandRef<'_> {
        match self {
            Integer::Int(value) => OperandRef::Int(value),
            Integer::Long(value) => OperandRef::Long(value),
            Integer::LongLong(value) => OperandRef::LongLong(value),
            Integer::Big(value) => OperandRef::Big(value),
        }
    }

    fn coperand_ref(&self) -> CoperandRef<'_> {
        match self {
            Integer::Int(value) => CoperandRef::Int(value),
            Integer::Long(value) => CoperandRef::Long(value),
            Integer::LongLong(value) => CoperandRef::LongLong(value),
            Integer::Big(value) => CoperandRef::Big(value),
        }
    }
}

/// Mutable integer handle
///
/// Arithmetic on an operand computes the exact result and stores it back
/// into the target representation. With `C::CHECK_OVERFLOW` a result that
/// does not fit is an error and the target is left unchanged; without it the
/// result wraps around.
///
/// # Example
/// ```rust
/// use gho::prelude::*;
/// use num_bigint::BigInt;
///
/// let mut total = BigInt::from(0);
/// let step = i64::MAX;
///
/// let mut operand = Operand::new(&mut total);
/// operand.add(&Coperand::new(&step))?;
/// operand.add(&Coperand::new(&step))?;
/// assert_eq!(total, BigInt::from(i64::MAX) * 2);
/// # Ok::<(), GhoError>(())
/// ```
pub struct Operand<'a, C: GhoConfig = DefaultConfig> {
    pub(super) target: OperandRef<'a>,
    _config: PhantomData<C>,
}

/// Read-only integer handle
pub struct Coperand<'a, C: GhoConfig = DefaultConfig> {
    pub(super) source: CoperandRef<'a>,
    _config: PhantomData<C>,
}

impl<'a> Operand<'a, DefaultConfig> {
    /// Operand over `target` with the default configuration
    pub fn new<T: AsOperand + ?Sized>(target: &'a mut T) -> Self {
        Self::with_config(target)
    }
}

impl<'a, C: GhoConfig> Operand<'a, C> {
    /// Operand over `target` with a custom configuration
    pub fn with_config<T: AsOperand + ?Sized>(target: &'a mut T) -> Self {
        Self::from_ref(target.operand_ref())
    }

    /// Operand over an explicit reference
    pub fn from_ref(target: OperandRef<'a>) -> Self {
        Self {
            target,
            _config: PhantomData,
        }
    }

    /// Operand with no target
    pub fn null() -> Self {
        Self::from_ref(OperandRef::Null)
    }

    /// Tag of the target representation
    pub const fn type_tag(&self) -> TypeTag {
        self.target.type_tag()
    }

    /// Returns true if the operand has no target
    pub const fn is_null(&self) -> bool {
        matches!(self.target, OperandRef::Null)
    }

    /// Releases the target
    pub fn reset(&mut self) {
        self.target = OperandRef::Null;
    }

    /// Read-only handle over the same target
    pub fn as_coperand(&self) -> Coperand<'_, C> {
        Coperand::from_ref(self.target.as_coperand_ref())
    }

    /// Shorter-lived operand over the same target
    pub fn reborrow(&mut self) -> Operand<'_, C> {
        let target = match &mut self.target {
            OperandRef::Null => OperandRef::Null,
            OperandRef::Int(value) => OperandRef::Int(value),
            OperandRef::Long(value) => OperandRef::Long(value),
            OperandRef::LongLong(value) => OperandRef::LongLong(value),
            OperandRef::Big(value) => OperandRef::Big(value),
        };
        Operand::from_ref(target)
    }

    /// Releases the underlying reference
    pub fn into_ref(self) -> OperandRef<'a> {
        self.target
    }

    pub(super) fn scalar(&self) -> Option<Scalar<'_>> {
        self.target.as_coperand_ref().scalar()
    }

    /// Applies `op` to the target and `rhs`, then stores the result
    pub(super) fn binary<D: GhoConfig>(
        &mut self,
        operation: &'static str,
        rhs: &Coperand<'_, D>,
        op: impl FnOnce(Scalar<'_>, Scalar<'_>) -> GhoResult<Exact>,
    ) -> GhoResult<()> {
        let (Some(a), Some(b)) = (self.scalar(), rhs.source.scalar()) else {
            let (lhs, rhs) = (self.type_tag(), rhs.type_tag());
            tracing::debug!(operation, %lhs, %rhs, "operand types not supported");
            return Err(GhoError::unsupported_pair(operation, lhs, rhs));
        };
        let result = op(a, b)?;
        self.store(operation, result)
    }

    /// Applies `op` to the target, then stores the result
    pub(super) fn unary(
        &mut self,
        operation: &'static str,
        op: impl FnOnce(Scalar<'_>) -> GhoResult<Exact>,
    ) -> GhoResult<()> {
        let Some(a) = self.scalar() else {
            tracing::debug!(operation, "operation on a null operand");
            return Err(GhoError::unsupported(operation, self.type_tag()));
        };
        let result = op(a)?;
        self.store(operation, result)
    }

    /// Narrows `value` into the target; the target is untouched on error
    pub(super) fn store(&mut self, operation: &'static str, value: Exact) -> GhoResult<()> {
        let check = C::CHECK_OVERFLOW;
        match &mut self.target {
            OperandRef::Null => return Err(GhoError::unsupported(operation, TypeTag::Null)),
            OperandRef::Int(slot) => **slot = narrow(operation, value.as_scalar(), check)?,
            OperandRef::Long(slot) => **slot = narrow(operation, value.as_scalar(), check)?,
            OperandRef::LongLong(slot) => **slot = narrow(operation, value.as_scalar(), check)?,
            OperandRef::Big(slot) => **slot = value.into_big(),
        }
        Ok(())
    }
}

impl<C: GhoConfig> Default for Operand<'_, C> {
    fn default() -> Self {
        Self::null()
    }
}

impl<C: GhoConfig> fmt::Debug for Operand<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Operand").field(&self.target).finish()
    }
}

impl<C: GhoConfig> Printable for Operand<'_, C> {
    fn write_indented(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        self.as_coperand().write_indented(out, indent)
    }
}

impl<'a> Coperand<'a, DefaultConfig> {
    /// Read-only operand over `source` with the default configuration
    pub fn new<T: AsOperand + ?Sized>(source: &'a T) -> Self {
        Self::with_config(source)
    }
}

impl<'a, C: GhoConfig> Coperand<'a, C> {
    /// Read-only operand over `source` with a custom configuration
    pub fn with_config<T: AsOperand + ?Sized>(source: &'a T) -> Self {
        Self::from_ref(source.coperand_ref())
    }

    /// Read-only operand over an explicit reference
    pub fn from_ref(source: CoperandRef<'a>) -> Self {
        Self {
            source,
            _config: PhantomData,
        }
    }

    /// Read-only operand with no source
    pub fn null() -> Self {
        Self::from_ref(CoperandRef::Null)
    }

    /// Tag of the source representation
    pub const fn type_tag(&self) -> TypeTag {
        self.source.type_tag()
    }

    /// Returns true if the operand has no source
    pub const fn is_null(&self) -> bool {
        matches!(self.source, CoperandRef::Null)
    }

    /// Releases the source
    pub fn reset(&mut self) {
        self.source = CoperandRef::Null;
    }

    /// Underlying reference
    pub const fn source_ref(&self) -> CoperandRef<'a> {
        self.source
    }

    pub(super) fn scalar_or(&self, operation: &'static str) -> GhoResult<Scalar<'a>> {
        self.source.scalar().ok_or_else(|| {
            tracing::debug!(operation, "operation on a null operand");
            GhoError::unsupported(operation, TypeTag::Null)
        })
    }
}

impl<C: GhoConfig> Clone for Coperand<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: GhoConfig> Copy for Coperand<'_, C> {}

impl<C: GhoConfig> Default for Coperand<'_, C> {
    fn default() -> Self {
        Self::null()
    }
}

impl<C: GhoConfig> fmt::Debug for Coperand<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Coperand").field(&self.source).finish()
    }
}

impl<C: GhoConfig> Printable for Coperand<'_, C> {
    fn write_indented(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        crate::io::write_indent(out, indent)?;
        match self.source {
            CoperandRef::Null => out.write_str("null"),
            CoperandRef::Int(value) => write!(out, "{value}"),
            CoperandRef::Long(value) => write!(out, "{value}"),
            CoperandRef::LongLong(value) => write!(out, "{value}"),
            CoperandRef::Big(value) => write!(out, "{value}"),
        }
    }
}
