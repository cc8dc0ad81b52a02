use std::fmt;

// returned (with a 200!) when the operator token is not one we know
pub const INVALID_OPERATION_MESSAGE: &str =
    "Invalid operation! available operations are: add(+), multiply(*), mod(%), div(/)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
    Mod,
    Div,
}

impl Operation {
    /// Case-insensitive - `ADD`, `Add` and `add` are all the same operation.
    pub fn parse(token: &str) -> Option<Operation> {
        match token.to_lowercase().as_str() {
            "add" => Some(Self::Add),
            "multiply" => Some(Self::Multiply),
            "mod" => Some(Self::Mod),
            "div" => Some(Self::Div),
            _ => None,
        }
    }

    // the neutral element for each operation, used when no right operand is given
    pub fn default_right(&self) -> i32 {
        match self {
            Self::Add => 0,
            Self::Multiply | Self::Mod | Self::Div => 1,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Multiply => "*",
            Self::Mod => "%",
            Self::Div => "/",
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Cannot compute {0} {1} 0: division by zero")]
    DivisionByZero(i32, &'static str),
    #[error("{0} {1} {2} does not fit in a 32 bit integer")]
    Overflow(i32, &'static str, i32),
}

/// A fully specified expression - `right` already has its default applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculation {
    pub operation: Operation,
    pub left: i32,
    pub right: i32,
}

impl Calculation {
    pub fn new(operation: Operation, left: i32, right: Option<i32>) -> Self {
        Self {
            operation,
            left,
            right: right.unwrap_or_else(|| operation.default_right()),
        }
    }

    /// Division truncates toward zero and the remainder takes the sign of
    /// the left operand (Rust's `/` and `%` on integers already do this).
    pub fn evaluate(&self) -> Result<i32, CalculationError> {
        let symbol = self.operation.symbol();
        if self.right == 0 && matches!(self.operation, Operation::Mod | Operation::Div) {
            return Err(CalculationError::DivisionByZero(self.left, symbol));
        }
        let result = match self.operation {
            Operation::Add => self.left.checked_add(self.right),
            Operation::Multiply => self.left.checked_mul(self.right),
            Operation::Mod => self.left.checked_rem(self.right),
            Operation::Div => self.left.checked_div(self.right),
        };
        result.ok_or(CalculationError::Overflow(self.left, symbol, self.right))
    }

    /// "{left} {symbol} {right} = {result}"
    pub fn render(&self) -> Result<String, CalculationError> {
        let result = self.evaluate()?;
        Ok(format!("{} = {}", self, result))
    }
}

// the left hand side of the rendered equation
impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.left,
            self.operation.symbol(),
            self.right
        )
    }
}
