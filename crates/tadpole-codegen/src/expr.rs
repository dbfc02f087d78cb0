//! Expression generation.
//!
//! Each function takes the scope of the function being generated and one
//! expression node, and returns the instruction bytes that leave the
//! expression's value on the stack. Dispatch is an exhaustive match over
//! the closed [`Expr`] vocabulary.

use tadpole_ast::{BinaryExpr, BinaryOp, CallExpr, Expr, Ident, Literal};
use tadpole_wasm::Opcode;

use crate::emit::CodeBuf;
use crate::error::CodegenError;
use crate::generator::Generator;
use crate::registry::Binding;
use crate::scope::Scope;

type Result<T> = std::result::Result<T, CodegenError>;

impl Generator {
    /// Generate one expression.
    pub(crate) fn gen_expr(&mut self, scope: &Scope, expr: &Expr) -> Result<Vec<u8>> {
        match expr {
            Expr::Binary(binary) => self.gen_binary(scope, binary),
            Expr::Ident(ident) => self.gen_ident(scope, ident),
            Expr::Call(call) => self.gen_call(scope, call),
            Expr::Literal(literal) => gen_literal(literal),
        }
    }

    /// Left operand, right operand, operator.
    ///
    /// Both operands are assumed to be the single numeric value type; no
    /// type checking happens here.
    fn gen_binary(&mut self, scope: &Scope, binary: &BinaryExpr) -> Result<Vec<u8>> {
        let mut buf = CodeBuf::new();
        buf.extend(self.gen_expr(scope, &binary.left)?);
        buf.extend(self.gen_expr(scope, &binary.right)?);
        buf.emit(operator_opcode(binary.op));
        Ok(buf.into_bytes())
    }

    /// Resolve a name in value position: local, then import, then
    /// generated function. Function references become plain numeric
    /// constants, which is what an indirect-call sequence would consume
    /// (indirect calls themselves are not emitted).
    fn gen_ident(&mut self, scope: &Scope, ident: &Ident) -> Result<Vec<u8>> {
        let mut buf = CodeBuf::new();
        match self.registry.resolve(scope, &ident.name) {
            Some(Binding::Local(slot)) => buf.emit_local_get(slot),
            Some(Binding::Import(index)) | Some(Binding::Function(index)) => {
                buf.emit_i32_const(i64::from(index));
            }
            None => {
                return Err(CodegenError::UnresolvedIdentifier {
                    name: ident.name.clone(),
                    known_locals: scope.names(),
                });
            }
        }
        Ok(buf.into_bytes())
    }

    /// Arguments left to right, then a direct call.
    ///
    /// Call targets check generated functions ahead of imports, so a user
    /// function may take over an import's name.
    fn gen_call(&mut self, scope: &Scope, call: &CallExpr) -> Result<Vec<u8>> {
        let Expr::Ident(callee) = &call.callee else {
            return Err(CodegenError::UnsupportedCallee);
        };

        let index = self.registry.resolve_callee(&callee.name).ok_or_else(|| {
            CodegenError::UnresolvedCallTarget {
                name: callee.name.clone(),
                known_functions: self.registry.function_names(),
            }
        })?;

        let mut buf = CodeBuf::new();
        for argument in &call.arguments {
            buf.extend(self.gen_expr(scope, argument)?);
        }
        buf.emit_call(index);
        Ok(buf.into_bytes())
    }
}

/// Generate a literal: a constant push with a signed varint operand.
fn gen_literal(literal: &Literal) -> Result<Vec<u8>> {
    match literal {
        Literal::Number(value) => {
            let mut buf = CodeBuf::new();
            buf.emit_i32_const(*value);
            Ok(buf.into_bytes())
        }
        other => Err(CodegenError::UnsupportedConstruct {
            construct: format!("{} literal", other.kind()),
        }),
    }
}

/// The fixed operator → opcode table.
fn operator_opcode(op: BinaryOp) -> Opcode {
    match op {
        BinaryOp::Add => Opcode::I32Add,
        BinaryOp::Sub => Opcode::I32Sub,
        BinaryOp::Mul => Opcode::I32Mul,
        BinaryOp::Div => Opcode::I32DivS,
        BinaryOp::Rem => Opcode::I32RemS,
        BinaryOp::Eq => Opcode::I32Eq,
        BinaryOp::Ne => Opcode::I32Ne,
        BinaryOp::Lt => Opcode::I32LtS,
        BinaryOp::Gt => Opcode::I32GtS,
        BinaryOp::Le => Opcode::I32LeS,
        BinaryOp::Ge => Opcode::I32GeS,
    }
}
