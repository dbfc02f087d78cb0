//! Tadpole code generator.
//!
//! Lowers the restricted AST from [`tadpole_ast`] to WebAssembly function
//! bodies. The output is an ordered table of [`FuncRecord`]s, each body
//! already self-contained (length-framed, locals header, end-terminated)
//! and ready for placement in a binary module's code section.
//!
//! ## Architecture
//!
//! - [`generator`]: the generation session and program entry point
//! - [`scope`]: per-function name → local-slot mapping
//! - [`registry`]: function registration, indexing, and name resolution
//! - [`error`]: the error taxonomy (all fatal, first failure aborts)
//!
//! Generation runs in two passes: a declaration pass binds every
//! top-level function name to an index, then a generation pass produces
//! bodies. Calls between top-level functions therefore resolve regardless
//! of declaration order. All run state lives in a caller-owned
//! [`Generator`]; two runs never share anything.
//!
//! # Example
//!
//! ```
//! use tadpole_ast::{Expr, Program, Stmt};
//! use tadpole_codegen::Generator;
//!
//! let program = Program {
//!     body: vec![Stmt::expr(Expr::call("print", vec![Expr::number(42)]))],
//! };
//! let records = Generator::new().generate_program(&program).unwrap();
//! assert_eq!(records.len(), 1); // just the synthetic entry function
//! ```

mod emit;
mod error;
mod expr;
mod func;
mod generator;
mod registry;
mod scope;
mod stmt;

pub use error::CodegenError;
pub use generator::{ENTRY_NAME, Generator};
pub use registry::{BASE_IMPORTS, Binding, FunctionRegistry};
pub use scope::Scope;

/// A generated function, ready for embedding in a binary module.
///
/// Created once, when its declaration is generated; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncRecord {
    /// Function name.
    pub name: String,
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    /// Encoded body: length-framed locals vector + instructions + end.
    pub body: Vec<u8>,
    /// Assigned function index (imports occupy the indices below it).
    pub index: u32,
}
