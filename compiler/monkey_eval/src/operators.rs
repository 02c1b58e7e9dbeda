//! Prefix and infix operator semantics.
//!
//! Operand types form a small closed set, so dispatch is a direct match on
//! the operand pair.
//!
//! | operands            | operators                   |
//! |---------------------|-----------------------------|
//! | integer, integer    | `+ - * / < > == !=`         |
//! | boolean, boolean    | `== !=`                     |
//! | string, string      | `+`                         |
//!
//! Any other pair of the same type is an unknown operator; a pair of
//! different types is a type mismatch. Integer arithmetic wraps on
//! overflow.

use monkey_ir::ast::{InfixOperator, PrefixOperator};
use monkey_object::{EvalError, EvalResult, Object};

pub fn evaluate_prefix(operator: PrefixOperator, right: &Object) -> EvalResult {
    match operator {
        PrefixOperator::Bang => Ok(Object::from_bool(!right.is_truthy())),
        PrefixOperator::Minus => match right {
            Object::Integer(n) => Ok(Object::Integer(n.wrapping_neg())),
            other => Err(EvalError::unknown_prefix(operator, other)),
        },
    }
}

pub fn evaluate_infix(operator: InfixOperator, left: &Object, right: &Object) -> EvalResult {
    let result = match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => return eval_integer_infix(operator, *a, *b),
        (Object::Boolean(a), Object::Boolean(b)) => eval_boolean_infix(operator, *a, *b),
        (Object::String(a), Object::String(b)) => eval_string_infix(operator, a, b),
        _ if left.kind() != right.kind() => {
            return Err(EvalError::type_mismatch(left, operator, right));
        }
        _ => None,
    };
    result.ok_or_else(|| EvalError::unknown_infix(left, operator, right))
}

fn eval_integer_infix(operator: InfixOperator, a: i64, b: i64) -> EvalResult {
    let value = match operator {
        InfixOperator::Plus => Object::Integer(a.wrapping_add(b)),
        InfixOperator::Minus => Object::Integer(a.wrapping_sub(b)),
        InfixOperator::Asterisk => Object::Integer(a.wrapping_mul(b)),
        InfixOperator::Slash => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            Object::Integer(a.wrapping_div(b))
        }
        InfixOperator::Lt => Object::from_bool(a < b),
        InfixOperator::Gt => Object::from_bool(a > b),
        InfixOperator::Eq => Object::from_bool(a == b),
        InfixOperator::NotEq => Object::from_bool(a != b),
    };
    Ok(value)
}

fn eval_boolean_infix(operator: InfixOperator, a: bool, b: bool) -> Option<Object> {
    match operator {
        InfixOperator::Eq => Some(Object::from_bool(a == b)),
        InfixOperator::NotEq => Some(Object::from_bool(a != b)),
        _ => None,
    }
}

fn eval_string_infix(operator: InfixOperator, a: &str, b: &str) -> Option<Object> {
    match operator {
        InfixOperator::Plus => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Some(Object::string(joined))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn int(n: i64) -> Object {
        Object::Integer(n)
    }

    fn message(result: EvalResult) -> String {
        match result {
            Ok(value) => format!("unexpected value {value}"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(evaluate_infix(InfixOperator::Plus, &int(2), &int(3)), Ok(int(5)));
        assert_eq!(evaluate_infix(InfixOperator::Minus, &int(2), &int(3)), Ok(int(-1)));
        assert_eq!(evaluate_infix(InfixOperator::Asterisk, &int(4), &int(3)), Ok(int(12)));
        assert_eq!(evaluate_infix(InfixOperator::Slash, &int(7), &int(2)), Ok(int(3)));
        assert_eq!(evaluate_infix(InfixOperator::Slash, &int(-7), &int(2)), Ok(int(-3)));
    }

    #[test]
    fn test_integer_comparison() {
        assert_eq!(evaluate_infix(InfixOperator::Lt, &int(1), &int(2)), Ok(Object::TRUE));
        assert_eq!(evaluate_infix(InfixOperator::Gt, &int(1), &int(2)), Ok(Object::FALSE));
        assert_eq!(evaluate_infix(InfixOperator::Eq, &int(1), &int(1)), Ok(Object::TRUE));
        assert_eq!(evaluate_infix(InfixOperator::NotEq, &int(1), &int(1)), Ok(Object::FALSE));
    }

    #[test]
    fn test_wrapping_and_division_by_zero() {
        assert_eq!(
            evaluate_infix(InfixOperator::Plus, &int(i64::MAX), &int(1)),
            Ok(int(i64::MIN))
        );
        assert_eq!(
            evaluate_infix(InfixOperator::Slash, &int(i64::MIN), &int(-1)),
            Ok(int(i64::MIN))
        );
        assert_eq!(
            evaluate_prefix(PrefixOperator::Minus, &int(i64::MIN)),
            Ok(int(i64::MIN))
        );
        assert_eq!(
            evaluate_infix(InfixOperator::Slash, &int(1), &int(0)),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_boolean_operators() {
        assert_eq!(
            evaluate_infix(InfixOperator::Eq, &Object::TRUE, &Object::TRUE),
            Ok(Object::TRUE)
        );
        assert_eq!(
            evaluate_infix(InfixOperator::NotEq, &Object::TRUE, &Object::FALSE),
            Ok(Object::TRUE)
        );
        assert_eq!(
            message(evaluate_infix(InfixOperator::Plus, &Object::TRUE, &Object::FALSE)),
            "unknown operator: BOOLEAN + BOOLEAN"
        );
        assert_eq!(
            message(evaluate_infix(InfixOperator::Lt, &Object::TRUE, &Object::FALSE)),
            "unknown operator: BOOLEAN < BOOLEAN"
        );
    }

    #[test]
    fn test_string_operators() {
        assert_eq!(
            evaluate_infix(InfixOperator::Plus, &Object::string("Hello"), &Object::string(" World")),
            Ok(Object::string("Hello World"))
        );
        assert_eq!(
            message(evaluate_infix(InfixOperator::Minus, &Object::string("a"), &Object::string("b"))),
            "unknown operator: STRING - STRING"
        );
        assert_eq!(
            message(evaluate_infix(InfixOperator::Eq, &Object::string("a"), &Object::string("a"))),
            "unknown operator: STRING == STRING"
        );
    }

    #[test]
    fn test_mismatch_and_unknown() {
        assert_eq!(
            message(evaluate_infix(InfixOperator::Plus, &int(5), &Object::TRUE)),
            "type mismatch: INTEGER + BOOLEAN"
        );
        assert_eq!(
            message(evaluate_infix(InfixOperator::Eq, &int(1), &Object::string("1"))),
            "type mismatch: INTEGER == STRING"
        );
        assert_eq!(
            message(evaluate_infix(InfixOperator::Eq, &Object::NULL, &Object::NULL)),
            "unknown operator: NULL == NULL"
        );
    }

    #[test]
    fn test_prefix_operators() {
        assert_eq!(evaluate_prefix(PrefixOperator::Bang, &Object::TRUE), Ok(Object::FALSE));
        assert_eq!(evaluate_prefix(PrefixOperator::Bang, &Object::NULL), Ok(Object::TRUE));
        assert_eq!(evaluate_prefix(PrefixOperator::Bang, &int(5)), Ok(Object::FALSE));
        assert_eq!(evaluate_prefix(PrefixOperator::Bang, &int(0)), Ok(Object::FALSE));
        assert_eq!(evaluate_prefix(PrefixOperator::Minus, &int(5)), Ok(int(-5)));
        assert_eq!(
            message(evaluate_prefix(PrefixOperator::Minus, &Object::TRUE)),
            "unknown operator: -BOOLEAN"
        );
        assert_eq!(
            message(evaluate_prefix(PrefixOperator::Minus, &Object::string("x"))),
            "unknown operator: -STRING"
        );
    }
}
