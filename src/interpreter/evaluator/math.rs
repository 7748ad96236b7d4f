use crate::{
    ast::{MathOp, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::i64_to_f64_checked,
};

impl Interpreter {
    /// Evaluates both operands left to right, then applies the operator.
    pub(crate) fn eval_math(&mut self,
                            op: MathOp,
                            left: &Statement,
                            right: &Statement,
                            line: usize)
                            -> EvalResult<Value> {
        let left = self.eval_statement(left)?.unwrap_returned();
        let right = self.eval_statement(right)?.unwrap_returned();
        Self::apply_math(op, &left, &right, line)
    }

    /// Applies one arithmetic operator to two evaluated operands.
    ///
    /// Both operands must be numeric. Integer arithmetic is checked —
    /// overflow is an error, as is an integer operand too large to promote
    /// losslessly. Mixed integer/decimal operands promote to decimal.
    /// Division by zero is an error in both domains.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    pub(crate) fn apply_math(op: MathOp,
                             left: &Value,
                             right: &Value,
                             line: usize)
                             -> EvalResult<Value> {
        use MathOp::{Addition, Division, Multiplication, Subtraction};
        use Value::{Decimal, Integer};

        match (left, right) {
            (Integer(a), Integer(b)) => match op {
                Addition => {
                    a.checked_add(*b)
                     .map(Integer)
                     .ok_or(RuntimeError::Overflow { line })
                },
                Subtraction => {
                    a.checked_sub(*b)
                     .map(Integer)
                     .ok_or(RuntimeError::Overflow { line })
                },
                Multiplication => {
                    a.checked_mul(*b)
                     .map(Integer)
                     .ok_or(RuntimeError::Overflow { line })
                },
                Division => {
                    if *b == 0 {
                        Err(RuntimeError::DivisionByZero { line })
                    } else {
                        a.checked_div(*b)
                         .map(Integer)
                         .ok_or(RuntimeError::Overflow { line })
                    }
                },
            },
            (Decimal(_) | Integer(_), Decimal(_) | Integer(_)) => {
                let a = Self::decimal_operand(left, line)?;
                let b = Self::decimal_operand(right, line)?;

                Ok(Decimal(match op {
                               Addition => a + b,
                               Subtraction => a - b,
                               Multiplication => a * b,
                               Division => {
                                   if b == 0.0 {
                                       return Err(RuntimeError::DivisionByZero { line });
                                   }
                                   a / b
                               },
                           }))
            },
            _ => {
                Err(RuntimeError::TypeError { details: format!("Cannot apply {op} to {} and {}",
                                                               left.type_name(),
                                                               right.type_name()),
                                              line })
            },
        }
    }

    fn decimal_operand(value: &Value, line: usize) -> EvalResult<f64> {
        match value {
            Value::Decimal(d) => Ok(*d),
            Value::Integer(n) => i64_to_f64_checked(*n, RuntimeError::Overflow { line }),
            other => {
                Err(RuntimeError::TypeError { details: format!("Expected a numeric operand, found {}",
                                                               other.type_name()),
                                              line })
            },
        }
    }
}
