//! Statement generation.

use tadpole_ast::{Stmt, VarDeclStmt};
use tadpole_wasm::Opcode;

use crate::emit::CodeBuf;
use crate::error::CodegenError;
use crate::generator::Generator;
use crate::scope::Scope;

type Result<T> = std::result::Result<T, CodegenError>;

impl Generator {
    /// Generate one statement.
    ///
    /// A function declaration is generated and registered on the spot but
    /// contributes no instructions to the enclosing sequence; every other
    /// statement returns its instruction bytes.
    pub(crate) fn gen_stmt(&mut self, scope: &mut Scope, stmt: &Stmt) -> Result<Vec<u8>> {
        match stmt {
            Stmt::Function(decl) => {
                self.gen_function(decl, None)?;
                Ok(Vec::new())
            }
            Stmt::Block(block) => self.gen_stmts(scope, &block.body),
            Stmt::Return(ret) => {
                let mut buf = CodeBuf::new();
                buf.extend(self.gen_expr(scope, &ret.argument)?);
                buf.emit(Opcode::Return);
                Ok(buf.into_bytes())
            }
            Stmt::Expr(stmt) => self.gen_expr(scope, &stmt.expression),
            Stmt::Var(decl) => self.gen_var_decl(scope, decl),
        }
    }

    /// Concatenate the statements of a sequence in source order.
    ///
    /// Locals keep one flat namespace per function: a block introduces no
    /// scope of its own.
    pub(crate) fn gen_stmts(&mut self, scope: &mut Scope, stmts: &[Stmt]) -> Result<Vec<u8>> {
        let mut buf = CodeBuf::new();
        for stmt in stmts {
            buf.extend(self.gen_stmt(scope, stmt)?);
        }
        Ok(buf.into_bytes())
    }

    /// Bind each declarator to a slot, generate its initializer, store.
    ///
    /// The slot is bound before the initializer is generated, so an
    /// initializer may refer to the name it is initializing.
    fn gen_var_decl(&mut self, scope: &mut Scope, decl: &VarDeclStmt) -> Result<Vec<u8>> {
        let mut buf = CodeBuf::new();
        for declarator in &decl.declarations {
            let Some(init) = &declarator.init else {
                return Err(CodegenError::UnsupportedConstruct {
                    construct: format!("declaration of '{}' without initializer", declarator.name),
                });
            };
            let slot = scope.bind(&declarator.name);
            buf.extend(self.gen_expr(scope, init)?);
            buf.emit_local_set(slot);
        }
        Ok(buf.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tadpole_ast::{BlockStmt, Declarator, Expr};

    #[test]
    fn var_decl_generates_init_then_store() {
        let mut generator = Generator::new();
        let mut scope = Scope::new();
        let stmt = Stmt::var("x", Expr::number(5));
        let code = generator.gen_stmt(&mut scope, &stmt).unwrap();
        assert_eq!(
            code,
            vec![Opcode::I32Const as u8, 0x05, Opcode::LocalSet as u8, 0x00]
        );
        assert_eq!(scope.get("x"), Some(0));
    }

    #[test]
    fn declarators_allocate_in_source_order() {
        let mut generator = Generator::new();
        let mut scope = Scope::new();
        let stmt = Stmt::Var(VarDeclStmt {
            declarations: vec![
                Declarator {
                    name: "a".into(),
                    init: Some(Expr::number(1)),
                },
                Declarator {
                    name: "b".into(),
                    init: Some(Expr::number(2)),
                },
            ],
        });
        generator.gen_stmt(&mut scope, &stmt).unwrap();
        assert_eq!(scope.get("a"), Some(0));
        assert_eq!(scope.get("b"), Some(1));
    }

    #[test]
    fn missing_initializer_rejected() {
        let mut generator = Generator::new();
        let mut scope = Scope::new();
        let stmt = Stmt::Var(VarDeclStmt {
            declarations: vec![Declarator {
                name: "x".into(),
                init: None,
            }],
        });
        let err = generator.gen_stmt(&mut scope, &stmt).unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedConstruct { .. }));
    }

    #[test]
    fn redeclaration_overwrites_slot_without_failing() {
        let mut generator = Generator::new();
        let mut scope = Scope::new();
        generator
            .gen_stmt(&mut scope, &Stmt::var("x", Expr::number(1)))
            .unwrap();
        let code = generator
            .gen_stmt(&mut scope, &Stmt::var("x", Expr::number(2)))
            .unwrap();
        // second declaration stores to the same slot 0
        assert_eq!(
            code,
            vec![Opcode::I32Const as u8, 0x02, Opcode::LocalSet as u8, 0x00]
        );
        assert_eq!(scope.slot_count(), 1);
    }

    #[test]
    fn initializer_sees_its_own_binding() {
        let mut generator = Generator::new();
        let mut scope = Scope::new();
        let code = generator
            .gen_stmt(&mut scope, &Stmt::var("x", Expr::ident("x")))
            .unwrap();
        assert_eq!(
            code,
            vec![Opcode::LocalGet as u8, 0x00, Opcode::LocalSet as u8, 0x00]
        );
    }

    #[test]
    fn return_appends_opcode() {
        let mut generator = Generator::new();
        let mut scope = Scope::new();
        let code = generator
            .gen_stmt(&mut scope, &Stmt::ret(Expr::number(3)))
            .unwrap();
        assert_eq!(
            code,
            vec![Opcode::I32Const as u8, 0x03, Opcode::Return as u8]
        );
    }

    #[test]
    fn block_shares_the_function_namespace() {
        let mut generator = Generator::new();
        let mut scope = Scope::new();
        let block = Stmt::Block(BlockStmt {
            body: vec![Stmt::var("inner", Expr::number(1))],
        });
        generator.gen_stmt(&mut scope, &block).unwrap();
        // a local declared inside a nested block lands in the same flat scope
        assert_eq!(scope.get("inner"), Some(0));
    }

    #[test]
    fn empty_sequence_is_empty_code() {
        let mut generator = Generator::new();
        let mut scope = Scope::new();
        let code = generator.gen_stmts(&mut scope, &[]).unwrap();
        assert!(code.is_empty());
    }
}
