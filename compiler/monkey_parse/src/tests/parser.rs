//! Core parser tests.

use super::parse_ok;
use monkey_ir::ast::{Expression, Identifier, InfixOperator, PrefixOperator, Statement};
use pretty_assertions::assert_eq;

fn single_expression(source: &str) -> Expression {
    let mut program = parse_ok(source).program;
    assert_eq!(program.statements.len(), 1, "source: {source}");
    match program.statements.remove(0) {
        Statement::Expression(expr) => expr,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

fn int(n: i64) -> Expression {
    Expression::IntegerLiteral(n)
}

// === Statements ===

#[test]
fn test_let_statements() {
    let program = parse_ok("let x = 5; let y = true; let foobar = y;").program;
    assert_eq!(
        program.statements,
        vec![
            Statement::Let {
                name: Identifier::new("x"),
                value: int(5),
            },
            Statement::Let {
                name: Identifier::new("y"),
                value: Expression::BooleanLiteral(true),
            },
            Statement::Let {
                name: Identifier::new("foobar"),
                value: Expression::identifier("y"),
            },
        ]
    );
}

#[test]
fn test_return_statements() {
    let program = parse_ok("return 5; return true; return foobar;").program;
    let values: Vec<String> = program
        .statements
        .iter()
        .map(|stmt| match stmt {
            Statement::Return { value } => value.to_string(),
            other => panic!("expected return, got {other:?}"),
        })
        .collect();
    assert_eq!(values, vec!["5", "true", "foobar"]);
}

#[test]
fn test_semicolons_are_optional() {
    let program = parse_ok("let a = 1\nreturn a\na").program;
    assert_eq!(program.to_string(), "let a = 1;return a;a");
}

#[test]
fn test_empty_program() {
    assert!(parse_ok("").program.is_empty());
    assert!(parse_ok("  \n ").program.is_empty());
}

// === Literals ===

#[test]
fn test_literals() {
    assert_eq!(single_expression("foobar;"), Expression::identifier("foobar"));
    assert_eq!(single_expression("5;"), int(5));
    assert_eq!(
        single_expression("\"hello world\";"),
        Expression::StringLiteral("hello world".into())
    );
    assert_eq!(single_expression("false"), Expression::BooleanLiteral(false));
    assert_eq!(
        single_expression("9223372036854775807"),
        int(i64::MAX)
    );
}

#[test]
fn test_prefix_expressions() {
    assert_eq!(
        single_expression("!5;"),
        Expression::prefix(PrefixOperator::Bang, int(5))
    );
    assert_eq!(
        single_expression("-15;"),
        Expression::prefix(PrefixOperator::Minus, int(15))
    );
    assert_eq!(
        single_expression("!true;"),
        Expression::prefix(PrefixOperator::Bang, Expression::BooleanLiteral(true))
    );
    assert_eq!(
        single_expression("!-a;"),
        Expression::prefix(
            PrefixOperator::Bang,
            Expression::prefix(PrefixOperator::Minus, Expression::identifier("a"))
        )
    );
}

#[test]
fn test_infix_expressions() {
    let cases = [
        ("5 + 5;", InfixOperator::Plus),
        ("5 - 5;", InfixOperator::Minus),
        ("5 * 5;", InfixOperator::Asterisk),
        ("5 / 5;", InfixOperator::Slash),
        ("5 > 5;", InfixOperator::Gt),
        ("5 < 5;", InfixOperator::Lt),
        ("5 == 5;", InfixOperator::Eq),
        ("5 != 5;", InfixOperator::NotEq),
    ];
    for (source, operator) in cases {
        assert_eq!(
            single_expression(source),
            Expression::infix(operator, int(5), int(5)),
            "source: {source}"
        );
    }
}

// === Compound expressions ===

#[test]
fn test_if_expression() {
    let expr = single_expression("if (x < y) { x }");
    let Expression::If {
        condition,
        consequence,
        alternative,
    } = &expr
    else {
        panic!("expected if expression");
    };
    assert_eq!(condition.to_string(), "(x < y)");
    assert_eq!(consequence.to_string(), "x");
    assert!(alternative.is_none());
}

#[test]
fn test_if_else_expression() {
    let expr = single_expression("if (x < y) { x } else { y }");
    let Expression::If { alternative, .. } = &expr else {
        panic!("expected if expression");
    };
    assert_eq!(alternative.as_ref().map(ToString::to_string), Some("y".into()));
    assert_eq!(expr.to_string(), "if(x < y) xelse y");
}

#[test]
fn test_function_literal() {
    let expr = single_expression("fn(x, y) { x + y; }");
    let Expression::FunctionLiteral(literal) = &expr else {
        panic!("expected function literal");
    };
    assert_eq!(
        literal.parameters,
        vec![Identifier::new("x"), Identifier::new("y")]
    );
    assert_eq!(literal.body.to_string(), "(x + y)");
}

#[test]
fn test_function_parameters() {
    let cases: [(&str, &[&str]); 3] = [
        ("fn() {};", &[]),
        ("fn(x) {};", &["x"]),
        ("fn(x, y, z) {};", &["x", "y", "z"]),
    ];
    for (source, expected) in cases {
        let expr = single_expression(source);
        let Expression::FunctionLiteral(literal) = &expr else {
            panic!("expected function literal for {source}");
        };
        let names: Vec<&str> = literal.parameters.iter().map(|p| p.value.as_str()).collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn test_call_expression() {
    let expr = single_expression("add(1, 2 * 3, 4 + 5);");
    let Expression::Call {
        function,
        arguments,
    } = &expr
    else {
        panic!("expected call expression");
    };
    assert_eq!(**function, Expression::identifier("add"));
    assert_eq!(arguments.len(), 3);
    assert_eq!(expr.to_string(), "add(1, (2 * 3), (4 + 5))");
}

#[test]
fn test_array_literals() {
    assert_eq!(
        single_expression("[1, 2 * 2, 3 + 3]").to_string(),
        "[1, (2 * 2), (3 + 3)]"
    );
    assert_eq!(single_expression("[]"), Expression::ArrayLiteral(vec![]));
}

#[test]
fn test_index_expression() {
    assert_eq!(
        single_expression("myArray[1 + 1]"),
        Expression::Index {
            left: Box::new(Expression::identifier("myArray")),
            index: Box::new(Expression::infix(InfixOperator::Plus, int(1), int(1))),
        }
    );
}

#[test]
fn test_hash_literals() {
    let expr = single_expression(r#"{"one": 1, "two": 2, "three": 3}"#);
    let Expression::HashLiteral(pairs) = &expr else {
        panic!("expected hash literal");
    };
    let keys: Vec<String> = pairs.iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(keys, vec!["one", "two", "three"]);

    assert_eq!(single_expression("{}"), Expression::HashLiteral(vec![]));

    assert_eq!(
        single_expression(r#"{"one": 0 + 1, "two": 10 - 8, "three": 15 / 5}"#).to_string(),
        "{one: (0 + 1), two: (10 - 8), three: (15 / 5)}"
    );

    assert_eq!(
        single_expression("{1: true, false: \"x\"}").to_string(),
        "{1: true, false: x}"
    );
}

#[test]
fn test_function_shares_body_between_clones() {
    let expr = single_expression("fn(a) { a }");
    let copy = expr.clone();
    let (Expression::FunctionLiteral(a), Expression::FunctionLiteral(b)) = (&expr, &copy) else {
        panic!("expected function literals");
    };
    assert!(std::rc::Rc::ptr_eq(a, b));
}
