//! Tadpole — a miniature compiler back end that lowers a restricted
//! JavaScript-flavoured AST to a WebAssembly binary module.
//!
//! The heavy lifting lives in the member crates; this facade re-exports
//! them and offers [`compile_program`] for the common path.
//!
//! - [`ast`]: the node vocabulary an external parser produces
//! - [`wasm`]: opcode constants, LEB128 writers, byte framing
//! - [`Generator`]: the code-generation session (AST → function records)
//! - [`assemble`]: function records → complete binary module
//!
//! # Example
//!
//! ```
//! use tadpole::ast::{BinaryOp, BlockStmt, Expr, FunctionDecl, Program, Stmt};
//!
//! // function add(a, b) { return a + b; }
//! // print(add(1, 2));
//! let program = Program {
//!     body: vec![
//!         Stmt::Function(FunctionDecl {
//!             name: "add".into(),
//!             params: vec!["a".into(), "b".into()],
//!             body: BlockStmt {
//!                 body: vec![Stmt::ret(Expr::binary(
//!                     BinaryOp::Add,
//!                     Expr::ident("a"),
//!                     Expr::ident("b"),
//!                 ))],
//!             },
//!         }),
//!         Stmt::expr(Expr::call(
//!             "print",
//!             vec![Expr::call("add", vec![Expr::number(1), Expr::number(2)])],
//!         )),
//!     ],
//! };
//!
//! let module = tadpole::compile_program(&program).unwrap();
//! assert_eq!(&module[..4], b"\0asm");
//! ```

pub use tadpole_ast as ast;
pub use tadpole_wasm as wasm;

pub use tadpole_codegen::{
    BASE_IMPORTS, Binding, CodegenError, ENTRY_NAME, FuncRecord, FunctionRegistry, Generator,
    Scope,
};
pub use tadpole_module::{IMPORT_MODULE, assemble};

/// Generate and assemble a program with the base import configuration.
pub fn compile_program(program: &ast::Program) -> Result<Vec<u8>, CodegenError> {
    let records = Generator::new().generate_program(program)?;
    Ok(assemble(&records, BASE_IMPORTS))
}
