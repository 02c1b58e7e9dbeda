//! Tree-walking interpreter.
//!
//! Internally every step returns [`EvalResult`] and failures propagate with
//! `?`. A `return` travels up as [`Object::ReturnValue`]: blocks pass it
//! through untouched, and it is unwrapped at the nearest function call or
//! at the program root. [`Interpreter::eval`] turns an error into an
//! [`Object::Error`] value at the boundary.

mod builder;
mod call_stack;

pub use builder::InterpreterBuilder;
pub use call_stack::CallStack;

use std::rc::Rc;

use monkey_ir::ast::{BlockStatement, Expression, Node, Program, Statement};
use monkey_object::{Environment, EvalError, EvalResult, FunctionObject, HashObject, Object};
use monkey_stack::ensure_sufficient_stack;

use crate::builtins;
use crate::eval_mode::EvalMode;
use crate::operators::{evaluate_infix, evaluate_prefix};

/// Evaluator state carried across calls: the policy and the live call depth.
#[derive(Clone, Debug)]
pub struct Interpreter {
    mode: EvalMode,
    call_stack: CallStack,
}

impl Default for Interpreter {
    fn default() -> Self {
        InterpreterBuilder::new().build()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter::default()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    /// Evaluate any node. Never fails: runtime errors come back as
    /// [`Object::Error`]. A `return` reached here yields its value, never
    /// the [`Object::ReturnValue`] marker.
    pub fn eval<'a>(&mut self, node: impl Into<Node<'a>>, env: &Environment) -> Object {
        let result = match node.into() {
            Node::Program(program) => self.eval_program(program, env),
            Node::Statement(stmt) => self.eval_statement(stmt, env),
            Node::Expression(expr) => self.eval_expression(expr, env),
        };
        // An error may have unwound through active calls.
        self.call_stack.reset();
        result.map_or_else(Object::Error, Object::unwrap_return)
    }

    /// Evaluate a program, unwrapping a top-level `return`.
    pub fn eval_program(&mut self, program: &Program, env: &Environment) -> EvalResult {
        let mut result = Object::NULL;
        for stmt in &program.statements {
            result = self.eval_statement(stmt, env)?;
            if let Object::ReturnValue(value) = result {
                return Ok(*value);
            }
        }
        Ok(result)
    }

    /// Evaluate a block, leaving a `return` wrapped so it keeps unwinding.
    fn eval_block(&mut self, block: &BlockStatement, env: &Environment) -> EvalResult {
        let mut result = Object::NULL;
        for stmt in &block.statements {
            result = self.eval_statement(stmt, env)?;
            if matches!(result, Object::ReturnValue(_)) {
                break;
            }
        }
        Ok(result)
    }

    fn eval_statement(&mut self, stmt: &Statement, env: &Environment) -> EvalResult {
        match stmt {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value, env)?;
                Ok(env.set(name.value.as_str(), value))
            }
            Statement::Return { value } => {
                let value = self.eval_expression(value, env)?;
                Ok(Object::ReturnValue(Box::new(value)))
            }
            Statement::Expression(expr) => self.eval_expression(expr, env),
            Statement::Block(block) => self.eval_block(block, env),
        }
    }

    fn eval_expression(&mut self, expr: &Expression, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expression_inner(expr, env))
    }

    fn eval_expression_inner(&mut self, expr: &Expression, env: &Environment) -> EvalResult {
        match expr {
            Expression::Identifier(ident) => eval_identifier(&ident.value, env),
            Expression::IntegerLiteral(n) => Ok(Object::Integer(*n)),
            Expression::StringLiteral(s) => Ok(Object::string(s.as_str())),
            Expression::BooleanLiteral(b) => Ok(Object::from_bool(*b)),
            Expression::Prefix { operator, right } => {
                let right = self.eval_expression(right, env)?;
                evaluate_prefix(*operator, &right)
            }
            Expression::Infix {
                operator,
                left,
                right,
            } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                evaluate_infix(*operator, &left, &right)
            }
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval_expression(condition, env)?;
                if condition.is_truthy() {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    Ok(Object::NULL)
                }
            }
            Expression::FunctionLiteral(literal) => Ok(Object::Function(Rc::new(
                FunctionObject::new(Rc::clone(literal), env.clone()),
            ))),
            Expression::Call {
                function,
                arguments,
            } => {
                let function = self.eval_expression(function, env)?;
                let arguments = self.eval_expressions(arguments, env)?;
                self.apply_function(&function, arguments)
            }
            Expression::ArrayLiteral(elements) => {
                let elements = self.eval_expressions(elements, env)?;
                Ok(Object::array(elements))
            }
            Expression::Index { left, index } => {
                let left = self.eval_expression(left, env)?;
                let index = self.eval_expression(index, env)?;
                eval_index(&left, &index)
            }
            Expression::HashLiteral(pairs) => self.eval_hash_literal(pairs, env),
        }
    }

    /// Evaluate left to right, stopping at the first error.
    fn eval_expressions(
        &mut self,
        exprs: &[Expression],
        env: &Environment,
    ) -> Result<Vec<Object>, EvalError> {
        exprs
            .iter()
            .map(|expr| self.eval_expression(expr, env))
            .collect()
    }

    /// Each key is checked for hashability before its value is evaluated.
    fn eval_hash_literal(
        &mut self,
        pairs: &[(Expression, Expression)],
        env: &Environment,
    ) -> EvalResult {
        let mut hash = HashObject::with_capacity(pairs.len());
        for (key_expr, value_expr) in pairs {
            let key = self.eval_expression(key_expr, env)?;
            key.hash_key()?;
            let value = self.eval_expression(value_expr, env)?;
            hash.insert(key, value)?;
        }
        Ok(Object::Hash(Rc::new(hash)))
    }

    #[tracing::instrument(level = "trace", skip_all, fields(callee = %function.kind(), argc = args.len()))]
    fn apply_function(&mut self, function: &Object, args: Vec<Object>) -> EvalResult {
        match function {
            Object::Function(function) => self.call_function(function, args),
            Object::Builtin(builtin) => builtin.call(&args),
            other => Err(EvalError::NotAFunction(other.kind())),
        }
    }

    fn call_function(&mut self, function: &FunctionObject, args: Vec<Object>) -> EvalResult {
        let parameters = function.parameters();
        if args.len() != parameters.len() {
            return Err(EvalError::WrongArgumentCount {
                got: args.len(),
                want: parameters.len(),
            });
        }

        let call_env = function.env.new_enclosed();
        for (param, arg) in parameters.iter().zip(args) {
            call_env.set(param.value.as_str(), arg);
        }

        self.call_stack.push()?;
        let result = self.eval_block(function.body(), &call_env);
        self.call_stack.pop();

        Ok(result?.unwrap_return())
    }
}

/// Environment chain first, then the builtin registry.
fn eval_identifier(name: &str, env: &Environment) -> EvalResult {
    if let Some(value) = env.get(name) {
        return Ok(value);
    }
    builtins::lookup(name)
        .map(Object::Builtin)
        .ok_or_else(|| EvalError::IdentifierNotFound(name.to_string()))
}

/// Out-of-range array indices and missing hash keys yield `null`.
fn eval_index(left: &Object, index: &Object) -> EvalResult {
    match (left, index) {
        (Object::Array(elements), Object::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(Object::NULL)),
        (Object::Hash(hash), key) => Ok(hash.get(key)?.cloned().unwrap_or(Object::NULL)),
        _ => Err(EvalError::IndexNotSupported(left.kind())),
    }
}
