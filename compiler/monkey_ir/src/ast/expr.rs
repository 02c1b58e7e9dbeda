//! Expression nodes.

use std::fmt;
use std::rc::Rc;

use monkey_stack::ensure_sufficient_stack;

use super::operators::{InfixOperator, PrefixOperator};
use super::stmt::{BlockStatement, Statement};

/// A name reference or binding site.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identifier {
    pub value: String,
}

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Identifier {
            value: value.into(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// `fn(params) { body }`.
///
/// Held behind an `Rc` in the tree so function values created at runtime
/// can share the parameter list and body without copying the subtree.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl FunctionLiteral {
    /// Parameter names joined with `", "`.
    pub fn parameter_list(&self) -> String {
        join(&self.parameters, ", ")
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn({}) {}", self.parameter_list(), self.body)
    }
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(i64),
    StringLiteral(String),
    BooleanLiteral(bool),

    Prefix {
        operator: PrefixOperator,
        right: Box<Expression>,
    },

    Infix {
        operator: InfixOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// `if (condition) { ... } else { ... }`, an expression yielding the
    /// value of the taken branch.
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },

    FunctionLiteral(Rc<FunctionLiteral>),

    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },

    ArrayLiteral(Vec<Expression>),

    Index {
        left: Box<Expression>,
        index: Box<Expression>,
    },

    /// Key/value pairs in source order.
    HashLiteral(Vec<(Expression, Expression)>),
}

impl Expression {
    pub fn identifier(value: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(value))
    }

    pub fn prefix(operator: PrefixOperator, right: Expression) -> Self {
        Expression::Prefix {
            operator,
            right: Box::new(right),
        }
    }

    pub fn infix(operator: InfixOperator, left: Expression, right: Expression) -> Self {
        Expression::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.render(f))
    }
}

impl Expression {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::IntegerLiteral(n) => write!(f, "{n}"),
            Expression::StringLiteral(s) => f.write_str(s),
            Expression::BooleanLiteral(b) => write!(f, "{b}"),
            Expression::Prefix { operator, right } => {
                write!(f, "({}{right})", operator.as_symbol())
            }
            Expression::Infix {
                operator,
                left,
                right,
            } => write!(f, "({left} {} {right})", operator.as_symbol()),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            }
            Expression::FunctionLiteral(literal) => write!(f, "{literal}"),
            Expression::Call {
                function,
                arguments,
            } => write!(f, "{function}({})", join(arguments, ", ")),
            Expression::ArrayLiteral(elements) => write!(f, "[{}]", join(elements, ", ")),
            Expression::Index { left, index } => write!(f, "({left}[{index}])"),
            Expression::HashLiteral(pairs) => {
                let pairs: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
        }
    }
}

/// Tears the tree down through a heap work list, so a long `1 + 1 + ...`
/// chain is freed without one native frame per operator.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

impl Expression {
    /// Move every owned subexpression into `pending`, leaving `self` with
    /// leaf placeholders.
    fn take_children(&mut self, pending: &mut Vec<Expression>) {
        match self {
            Expression::Identifier(_)
            | Expression::IntegerLiteral(_)
            | Expression::StringLiteral(_)
            | Expression::BooleanLiteral(_) => {}
            Expression::Prefix { right, .. } => pending.push(take_boxed(right)),
            Expression::Infix { left, right, .. } | Expression::Index { left, index: right } => {
                pending.push(take_boxed(left));
                pending.push(take_boxed(right));
            }
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                pending.push(take_boxed(condition));
                take_block(consequence, pending);
                if let Some(alternative) = alternative {
                    take_block(alternative, pending);
                }
            }
            // Shared bodies are still owned by a function value elsewhere.
            Expression::FunctionLiteral(literal) => {
                if let Some(literal) = Rc::get_mut(literal) {
                    take_block(&mut literal.body, pending);
                }
            }
            Expression::Call {
                function,
                arguments,
            } => {
                pending.push(take_boxed(function));
                pending.append(arguments);
            }
            Expression::ArrayLiteral(elements) => pending.append(elements),
            Expression::HashLiteral(pairs) => {
                for (key, value) in pairs.drain(..) {
                    pending.push(key);
                    pending.push(value);
                }
            }
        }
    }
}

fn take_boxed(slot: &mut Expression) -> Expression {
    std::mem::replace(slot, Expression::BooleanLiteral(false))
}

fn take_block(block: &mut BlockStatement, pending: &mut Vec<Expression>) {
    let mut statements = std::mem::take(&mut block.statements);
    while let Some(stmt) = statements.pop() {
        match stmt {
            Statement::Let { value, .. }
            | Statement::Return { value }
            | Statement::Expression(value) => pending.push(value),
            Statement::Block(inner) => statements.extend(inner.statements),
        }
    }
}

pub(crate) fn join<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}
