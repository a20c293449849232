use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Value},
};

/// Adds two values, failing on overflow.
///
/// ## Parameters
/// - `lhs`, `rhs`: The operands.
/// - `position`: Character offset of the operator, for error reporting.
///
/// ## Example
/// ```
/// use calcr::{error::EvalError, util::num::checked_add};
///
/// assert_eq!(checked_add(2, 3, 1), Ok(5));
/// assert_eq!(checked_add(i64::MAX, 1, 7), Err(EvalError::Overflow { position: 7 }));
/// ```
pub const fn checked_add(lhs: Value, rhs: Value, position: usize) -> EvalResult<Value> {
    match lhs.checked_add(rhs) {
        Some(value) => Ok(value),
        None => Err(EvalError::Overflow { position }),
    }
}

/// Subtracts `rhs` from `lhs`, failing on overflow.
pub const fn checked_sub(lhs: Value, rhs: Value, position: usize) -> EvalResult<Value> {
    match lhs.checked_sub(rhs) {
        Some(value) => Ok(value),
        None => Err(EvalError::Overflow { position }),
    }
}

/// Multiplies two values, failing on overflow.
pub const fn checked_mul(lhs: Value, rhs: Value, position: usize) -> EvalResult<Value> {
    match lhs.checked_mul(rhs) {
        Some(value) => Ok(value),
        None => Err(EvalError::Overflow { position }),
    }
}

/// Divides `lhs` by `rhs`, truncating toward zero.
///
/// ## Errors
/// - `DivisionByZero` if `rhs` is `0`.
/// - `Overflow` for `Value::MIN / -1`.
///
/// ## Example
/// ```
/// use calcr::{error::EvalError, util::num::checked_div};
///
/// assert_eq!(checked_div(7, 2, 1), Ok(3));
/// assert_eq!(checked_div(-7, 2, 2), Ok(-3));
/// assert_eq!(checked_div(5, 0, 1), Err(EvalError::DivisionByZero { position: 1 }));
/// ```
pub const fn checked_div(lhs: Value, rhs: Value, position: usize) -> EvalResult<Value> {
    if rhs == 0 {
        return Err(EvalError::DivisionByZero { position });
    }
    match lhs.checked_div(rhs) {
        Some(value) => Ok(value),
        None => Err(EvalError::Overflow { position }),
    }
}
