use crate::core::{Helper, Number, Result, Value};
use crate::utils::error::HelperError;
use std::ops::Add;
use tracing::debug;

/// Adds two values of the same numeric type.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// How an integer sum that does not fit in `i64` is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    #[default]
    Checked,
    Wrapping,
    Saturating,
}

impl OverflowPolicy {
    pub const NAMES: [&'static str; 3] = ["checked", "wrapping", "saturating"];
}

/// Adds two numbers; any float operand promotes the sum to float.
///
/// A float sum that is not finite is an error, except under `Saturating`,
/// which clamps it to `f64::MAX` with the sign of the overflow.
pub fn add_numbers(a: Number, b: Number, policy: OverflowPolicy) -> Result<Number> {
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => match policy {
            OverflowPolicy::Checked => x
                .checked_add(y)
                .map(Number::Integer)
                .ok_or(HelperError::Overflow { lhs: x, rhs: y }),
            OverflowPolicy::Wrapping => Ok(Number::Integer(x.wrapping_add(y))),
            OverflowPolicy::Saturating => Ok(Number::Integer(x.saturating_add(y))),
        },
        _ => {
            let (x, y) = (a.as_f64(), b.as_f64());
            let sum = x + y;
            if sum.is_finite() {
                return Ok(Number::Float(sum));
            }
            match policy {
                OverflowPolicy::Saturating if !sum.is_nan() => {
                    Ok(Number::Float(f64::MAX.copysign(sum)))
                }
                _ => Err(HelperError::FloatOverflow { lhs: x, rhs: y }),
            }
        }
    }
}

/// Sums two numeric arguments. Text and boolean operands are rejected
/// rather than concatenated or coerced.
#[derive(Debug, Clone, Copy, Default)]
pub struct Adder {
    policy: OverflowPolicy,
}

impl Adder {
    pub fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    fn operand(&self, value: &Value) -> Result<Number> {
        match value {
            Value::Number(n) => Ok(*n),
            other => Err(HelperError::type_mismatch(self.name(), "numeric", other.kind())),
        }
    }
}

impl Helper for Adder {
    fn name(&self) -> &'static str {
        "add"
    }

    fn arity(&self) -> usize {
        2
    }

    fn apply(&self, args: &[Value]) -> Result<Value> {
        self.check_arity(args)?;
        let a = self.operand(&args[0])?;
        let b = self.operand(&args[1])?;
        debug!(%a, %b, policy = ?self.policy, "performing addition");
        add_numbers(a, b, self.policy).map(Value::Number)
    }
}
