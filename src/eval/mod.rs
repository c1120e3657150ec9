//! Lisp evaluator.
//!
//! At this stage evaluation is the identity: the form read is the form printed.

use crate::data::Value;

/// Evaluate a form.
pub fn eval(form: Value) -> Value {
    tracing::trace!("eval: {:?}", form);
    form
}
