//! AST node vocabulary for the Tadpole code generator.
//!
//! These nodes describe the restricted source language the generator
//! accepts. They are produced by an external parser; this crate only
//! defines the shapes and the operator vocabulary. All enums are closed,
//! so the generator can match exhaustively and a construct with no
//! generation rule is a visible gap at the type level rather than a
//! runtime surprise.

mod expr;
mod stmt;

pub use expr::{BinaryExpr, BinaryOp, CallExpr, Expr, Ident, Literal};
pub use stmt::{BlockStmt, Declarator, ExprStmt, FunctionDecl, Program, ReturnStmt, Stmt, VarDeclStmt};
