use crate::error::InterpreterError;
use std::fmt;

type Result<T> = std::result::Result<T, InterpreterError>;

/// Runtime value of an expression or variable.
///
/// Integer operands stay integers under `+`, `-`, `*` and `DIV`. Any real
/// operand promotes the operation to real arithmetic, and `/` always
/// produces a real.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point number.
    Real(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(integer) => write!(f, "{}", integer),
            // Debug keeps the trailing ".0" on whole reals.
            Number::Real(real) => write!(f, "{:?}", real),
        }
    }
}

impl From<i64> for Number {
    fn from(integer: i64) -> Self {
        Number::Integer(integer)
    }
}

impl From<f64> for Number {
    fn from(real: f64) -> Self {
        Number::Real(real)
    }
}

#[allow(clippy::should_implement_trait)]
impl Number {
    #[allow(clippy::cast_precision_loss)]
    fn as_real(self) -> f64 {
        match self {
            Number::Integer(integer) => integer as f64,
            Number::Real(real) => real,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Number::Integer(integer) => integer == 0,
            Number::Real(real) => real == 0.0,
        }
    }

    fn integer_op<I, R>(
        self,
        rhs: Number,
        name: &'static str,
        integer_op: I,
        real_op: R,
    ) -> Result<Number>
    where
        I: FnOnce(i64, i64) -> Option<i64>,
        R: FnOnce(f64, f64) -> f64,
    {
        match (self, rhs) {
            (Number::Integer(l), Number::Integer(r)) => integer_op(l, r)
                .map(Number::Integer)
                .ok_or(InterpreterError::Overflow(name)),
            (l, r) => Ok(Number::Real(real_op(l.as_real(), r.as_real()))),
        }
    }

    /// `self + rhs`
    pub fn add(self, rhs: Number) -> Result<Number> {
        self.integer_op(rhs, "addition", i64::checked_add, |l, r| l + r)
    }

    /// `self - rhs`
    pub fn sub(self, rhs: Number) -> Result<Number> {
        self.integer_op(rhs, "subtraction", i64::checked_sub, |l, r| l - r)
    }

    /// `self * rhs`
    pub fn mul(self, rhs: Number) -> Result<Number> {
        self.integer_op(rhs, "multiplication", i64::checked_mul, |l, r| l * r)
    }

    /// `self DIV rhs`, rounded towards negative infinity.
    pub fn integer_div(self, rhs: Number) -> Result<Number> {
        if rhs.is_zero() {
            return Err(InterpreterError::DivisionByZero);
        }

        self.integer_op(rhs, "division", floored_div, |l, r| (l / r).floor())
    }

    /// `self / rhs`, always real.
    pub fn float_div(self, rhs: Number) -> Result<Number> {
        if rhs.is_zero() {
            return Err(InterpreterError::DivisionByZero);
        }

        Ok(Number::Real(self.as_real() / rhs.as_real()))
    }

    /// `-self`
    pub fn neg(self) -> Result<Number> {
        match self {
            Number::Integer(integer) => integer
                .checked_neg()
                .map(Number::Integer)
                .ok_or(InterpreterError::Overflow("negation")),
            Number::Real(real) => Ok(Number::Real(-real)),
        }
    }
}

fn floored_div(lhs: i64, rhs: i64) -> Option<i64> {
    let quotient = lhs.checked_div(rhs)?;

    if lhs % rhs != 0 && (lhs < 0) != (rhs < 0) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}
