//! Expression AST nodes.

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Binary operation (a + b)
    Binary(Box<BinaryExpr>),
    /// Identifier reference
    Ident(Ident),
    /// Function call
    Call(Box<CallExpr>),
    /// Literal value
    Literal(Literal),
}

impl Expr {
    /// Build a numeric literal expression.
    pub fn number(value: i64) -> Self {
        Expr::Literal(Literal::Number(value))
    }

    /// Build an identifier expression.
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(Ident { name: name.into() })
    }

    /// Build a binary expression.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary(Box::new(BinaryExpr { op, left, right }))
    }

    /// Build a call expression with an identifier callee.
    pub fn call(callee: impl Into<String>, arguments: Vec<Expr>) -> Self {
        Expr::Call(Box::new(CallExpr {
            callee: Expr::ident(callee),
            arguments,
        }))
    }
}

/// A binary operation on two operands.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    /// The operator
    pub op: BinaryOp,
    /// Left operand
    pub left: Expr,
    /// Right operand
    pub right: Expr,
}

/// An identifier reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    /// The referenced name
    pub name: String,
}

/// A function call.
///
/// The callee is a full expression so that a parser may hand us any shape
/// it produced; the generator only accepts a plain identifier callee.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    /// The called expression
    pub callee: Expr,
    /// Arguments in source order
    pub arguments: Vec<Expr>,
}

/// A literal value.
///
/// Only numeric literals have a generation rule; the other kinds exist so
/// a parser can represent them and get a precise error back.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Numeric literal
    Number(i64),
    /// Boolean literal
    Bool(bool),
    /// String literal
    Str(String),
}

impl Literal {
    /// Human-readable kind name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Number(_) => "number",
            Literal::Bool(_) => "boolean",
            Literal::Str(_) => "string",
        }
    }
}

/// The closed binary operator vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
}

impl BinaryOp {
    /// Look up an operator from its source symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Sub,
            "*" => BinaryOp::Mul,
            "/" => BinaryOp::Div,
            "%" => BinaryOp::Rem,
            "==" => BinaryOp::Eq,
            "!=" => BinaryOp::Ne,
            "<" => BinaryOp::Lt,
            ">" => BinaryOp::Gt,
            "<=" => BinaryOp::Le,
            ">=" => BinaryOp::Ge,
            _ => return None,
        })
    }

    /// The source symbol for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
        }
    }
}
