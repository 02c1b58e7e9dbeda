use super::*;
use crate::TokenKind;
use pretty_assertions::assert_eq;
use std::rc::Rc;

fn int(n: i64) -> Expression {
    Expression::IntegerLiteral(n)
}

#[test]
fn test_let_statement_rendering() {
    let program = Program {
        statements: vec![Statement::Let {
            name: Identifier::new("myVar"),
            value: Expression::identifier("anotherVar"),
        }],
    };
    assert_eq!(program.to_string(), "let myVar = anotherVar;");
}

#[test]
fn test_return_and_expression_statements() {
    let program = Program {
        statements: vec![
            Statement::Return { value: int(5) },
            Statement::Expression(Expression::infix(InfixOperator::Plus, int(1), int(2))),
        ],
    };
    assert_eq!(program.to_string(), "return 5;(1 + 2)");
}

#[test]
fn test_prefix_and_nested_infix() {
    let expr = Expression::infix(
        InfixOperator::Asterisk,
        Expression::prefix(PrefixOperator::Minus, Expression::identifier("a")),
        Expression::identifier("b"),
    );
    assert_eq!(expr.to_string(), "((-a) * b)");
}

#[test]
fn test_if_rendering() {
    let expr = Expression::If {
        condition: Box::new(Expression::infix(
            InfixOperator::Lt,
            Expression::identifier("x"),
            Expression::identifier("y"),
        )),
        consequence: BlockStatement::new(vec![Statement::Expression(Expression::identifier(
            "x",
        ))]),
        alternative: Some(BlockStatement::new(vec![Statement::Expression(
            Expression::identifier("y"),
        )])),
    };
    assert_eq!(expr.to_string(), "if(x < y) xelse y");
}

#[test]
fn test_function_call_and_collections() {
    let literal = Rc::new(FunctionLiteral {
        parameters: vec![Identifier::new("x"), Identifier::new("y")],
        body: BlockStatement::new(vec![Statement::Expression(Expression::infix(
            InfixOperator::Plus,
            Expression::identifier("x"),
            Expression::identifier("y"),
        ))]),
    });
    assert_eq!(
        Expression::FunctionLiteral(Rc::clone(&literal)).to_string(),
        "fn(x, y) (x + y)"
    );
    assert_eq!(literal.parameter_list(), "x, y");

    let call = Expression::Call {
        function: Box::new(Expression::identifier("add")),
        arguments: vec![int(1), Expression::infix(InfixOperator::Asterisk, int(2), int(3))],
    };
    assert_eq!(call.to_string(), "add(1, (2 * 3))");

    let index = Expression::Index {
        left: Box::new(Expression::ArrayLiteral(vec![int(1), int(2)])),
        index: Box::new(int(0)),
    };
    assert_eq!(index.to_string(), "([1, 2][0])");

    let hash = Expression::HashLiteral(vec![
        (Expression::StringLiteral("one".into()), int(1)),
        (Expression::BooleanLiteral(true), int(2)),
    ]);
    assert_eq!(hash.to_string(), "{one: 1, true: 2}");
    assert_eq!(Expression::HashLiteral(vec![]).to_string(), "{}");
}

#[test]
fn test_node_conversions() {
    let expr = int(7);
    let stmt = Statement::Expression(expr.clone());
    let program = Program {
        statements: vec![stmt.clone()],
    };
    assert_eq!(Node::from(&expr).to_string(), "7");
    assert_eq!(Node::from(&stmt).to_string(), "7");
    assert_eq!(Node::from(&program).to_string(), "7");
    assert!(Program::new().is_empty());
}

#[test]
fn test_operator_tokens() {
    assert_eq!(
        InfixOperator::from_token(TokenKind::NotEq),
        Some(InfixOperator::NotEq)
    );
    assert_eq!(InfixOperator::from_token(TokenKind::Bang), None);
    assert_eq!(
        PrefixOperator::from_token(TokenKind::Minus),
        Some(PrefixOperator::Minus)
    );
    assert_eq!(PrefixOperator::Bang.as_symbol(), "!");
    assert_eq!(InfixOperator::Eq.as_symbol(), "==");
}

fn left_chain(terms: usize) -> Expression {
    (1..terms).fold(int(1), |left, _| Expression::infix(InfixOperator::Plus, left, int(1)))
}

#[test]
fn test_deep_left_chain_renders_and_drops() {
    let expr = left_chain(200_000);
    let rendered = expr.to_string();
    assert!(rendered.starts_with("(((("));
    assert!(rendered.ends_with(" + 1)"));
    drop(expr);
}

#[test]
fn test_drop_leaves_shared_function_body_intact() {
    let literal = Rc::new(FunctionLiteral {
        parameters: vec![Identifier::new("x")],
        body: BlockStatement::new(vec![Statement::Return {
            value: left_chain(3),
        }]),
    });
    drop(Expression::FunctionLiteral(Rc::clone(&literal)));
    assert_eq!(literal.body.to_string(), "return ((1 + 1) + 1);");
}
