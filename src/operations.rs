//! Operation Registry
//!
//! Maps operation names to pure binary arithmetic functions. The registry is
//! built once at startup and consulted per request.

use std::collections::HashMap;

/// A pure binary arithmetic function.
pub type MathFn = fn(f64, f64) -> f64;

// == Operation ==
/// The arithmetic operations served out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All built-in operations, in routing order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Name used in the URL path and in the `action` response field.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Function computing the operation.
    ///
    /// Division by zero follows IEEE 754 and yields an infinity or NaN.
    pub fn function(self) -> MathFn {
        match self {
            Operation::Add => add,
            Operation::Subtract => subtract,
            Operation::Multiply => multiply,
            Operation::Divide => divide,
        }
    }
}

fn add(x: f64, y: f64) -> f64 {
    x + y
}

fn subtract(x: f64, y: f64) -> f64 {
    x - y
}

fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

fn divide(x: f64, y: f64) -> f64 {
    x / y
}

// == Operation Registry ==
/// Name to function lookup table.
#[derive(Debug, Clone, Default)]
pub struct OperationRegistry {
    functions: HashMap<String, MathFn>,
}

impl OperationRegistry {
    /// Creates a registry with no operations.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry holding add, subtract, multiply and divide.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for op in Operation::ALL {
            registry.register(op.name(), op.function());
        }
        registry
    }

    /// Registers `function` under `name`, replacing any previous binding.
    pub fn register(&mut self, name: impl Into<String>, function: MathFn) {
        self.functions.insert(name.into(), function);
    }

    pub fn get(&self, name: &str) -> Option<MathFn> {
        self.functions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
