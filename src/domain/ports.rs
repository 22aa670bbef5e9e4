use crate::domain::model::Value;
use crate::utils::error::{HelperError, Result};

/// A named, stateless operation over dynamic values.
pub trait Helper: Send + Sync {
    fn name(&self) -> &'static str;
    fn arity(&self) -> usize;
    fn apply(&self, args: &[Value]) -> Result<Value>;

    fn check_arity(&self, args: &[Value]) -> Result<()> {
        if args.len() != self.arity() {
            return Err(HelperError::ArgumentCount {
                operation: self.name().to_string(),
                expected: self.arity(),
                found: args.len(),
            });
        }
        Ok(())
    }
}
