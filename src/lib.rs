//! Integer arithmetic expression evaluator.
//!
//! ```
//! assert_eq!(rdcalc::evaluate("2 + 3 * 4"), Ok(14));
//! assert_eq!(rdcalc::evaluate("5 / 0"), Err(rdcalc::EvalError::DivisionByZero));
//! ```

pub mod calc_engine;

pub use calc_engine::{evaluate, evaluate_traced, EvalError, EvalResult, EvaluationTrace};
