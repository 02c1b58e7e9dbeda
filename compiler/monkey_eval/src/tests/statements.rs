use monkey_object::{Environment, Object};
use pretty_assertions::assert_eq;

use super::{parse_ok, run};
use crate::Interpreter;

#[test]
fn test_let_statements() {
    let cases = [
        ("let a = 5; a;", 5),
        ("let a = 5 * 5; a;", 25),
        ("let a = 5; let b = a; b;", 5),
        ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), Object::Integer(expected), "{source}");
    }
}

#[test]
fn test_let_evaluates_to_bound_value() {
    assert_eq!(run("let a = 7;"), Object::Integer(7));
}

#[test]
fn test_rebinding_replaces_value() {
    assert_eq!(run("let a = 1; let a = a + 1; a"), Object::Integer(2));
}

#[test]
fn test_return_statements() {
    let cases = [
        ("return 10;", 10),
        ("return 10; 9;", 10),
        ("return 2 * 5; 9;", 10),
        ("9; return 2 * 5; 9;", 10),
        (
            "if (10 > 1) {
               if (10 > 1) {
                 return 10;
               }
               return 1;
             }",
            10,
        ),
        (
            "let f = fn() { if (true) { if (true) { return 10; } return 1; } };
             f();",
            10,
        ),
        (
            "let f = fn(x) {
               return x;
               x + 10;
             };
             f(10);",
            10,
        ),
        (
            "let f = fn(x) {
               let result = x + 10;
               return result;
               return 10;
             };
             f(10);",
            20,
        ),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), Object::Integer(expected), "{source}");
    }
}

#[test]
fn test_return_never_escapes_to_caller() {
    let program = parse_ok("return 5;");
    let value = Interpreter::new().eval(&program, &Environment::new());
    assert_eq!(value, Object::Integer(5));
    assert!(!matches!(value, Object::ReturnValue(_)));
}

#[test]
fn test_nested_return_inside_function_body() {
    let source = "let f = fn() { if (true) { if (true) { return 10; } return 1; } }; f()";
    assert_eq!(run(source), Object::Integer(10));
}

#[test]
fn test_return_statement_evaluated_alone_yields_its_value() {
    let program = parse_ok("return 5; if (true) { return 6; }");
    let env = Environment::new();
    let mut interpreter = Interpreter::new();
    assert_eq!(
        interpreter.eval(&program.statements[0], &env),
        Object::Integer(5)
    );
    match &program.statements[1] {
        monkey_ir::ast::Statement::Expression(expr) => {
            assert_eq!(interpreter.eval(expr, &env), Object::Integer(6));
        }
        other => panic!("expected expression statement, got {other:?}"),
    }
}

#[test]
fn test_bindings_persist_across_evaluations() {
    let env = Environment::new();
    let mut interpreter = Interpreter::new();
    interpreter.eval(&parse_ok("let x = 2;"), &env);
    interpreter.eval(&parse_ok("let double = fn(n) { n * 2 };"), &env);
    assert_eq!(
        interpreter.eval(&parse_ok("double(x)"), &env),
        Object::Integer(4)
    );
}

#[test]
fn test_eval_single_statement_and_expression() {
    let program = parse_ok("let y = 3; y * 3");
    let env = Environment::new();
    let mut interpreter = Interpreter::new();
    assert_eq!(
        interpreter.eval(&program.statements[0], &env),
        Object::Integer(3)
    );
    match &program.statements[1] {
        monkey_ir::ast::Statement::Expression(expr) => {
            assert_eq!(interpreter.eval(expr, &env), Object::Integer(9));
        }
        other => panic!("expected expression statement, got {other:?}"),
    }
}
