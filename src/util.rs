/// Checked integer arithmetic.
///
/// Every operation either yields the exact result or an `EvalError` carrying
/// the position of the operator, so overflow never wraps silently and
/// division by zero never panics.
pub mod num;
