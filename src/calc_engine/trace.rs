use super::parser::BinaryOp;

/// One folded operation, e.g. `2 * 3` producing `6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub operation: String,
    pub result: i64,
}

/// Records the arithmetic performed during an evaluation, in the order it
/// happened. Nothing is recorded unless `detailed_mode` is set.
#[derive(Debug, Default)]
pub struct EvaluationTrace {
    pub steps: Vec<Step>,
    pub detailed_mode: bool,
}

impl EvaluationTrace {
    pub fn new(detailed_mode: bool) -> Self {
        EvaluationTrace {
            steps: Vec::new(),
            detailed_mode,
        }
    }

    pub fn add_step(&mut self, op: BinaryOp, left: i64, right: i64, result: i64) {
        if self.detailed_mode {
            self.steps.push(Step {
                operation: format!("{} {} {}", left, op.symbol(), right),
                result,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_trace_records_nothing() {
        let mut trace = EvaluationTrace::new(false);
        trace.add_step(BinaryOp::Add, 1, 2, 3);
        assert!(trace.steps.is_empty());
    }

    #[test]
    fn step_text_uses_operator_symbol() {
        let mut trace = EvaluationTrace::new(true);
        trace.add_step(BinaryOp::Divide, 7, 2, 3);
        assert_eq!(
            trace.steps,
            vec![Step {
                operation: "7 / 2".to_string(),
                result: 3,
            }]
        );
    }
}
