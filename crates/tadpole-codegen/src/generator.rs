//! The generation session and program entry point.

use tadpole_ast::{Program, Stmt};

use crate::FuncRecord;
use crate::error::CodegenError;
use crate::func::frame_body;
use crate::registry::{BASE_IMPORTS, FunctionRegistry};
use crate::scope::Scope;

type Result<T> = std::result::Result<T, CodegenError>;

/// Name of the synthetic function that wraps the top-level statements.
pub const ENTRY_NAME: &str = "main";

/// One code-generation session.
///
/// A `Generator` owns every piece of run state: the function records, the
/// name → index table, the import reservations, and the index counter.
/// Construct one per program, run it to completion, and discard it; two
/// runs share nothing.
#[derive(Debug)]
pub struct Generator {
    pub(crate) registry: FunctionRegistry,
}

impl Generator {
    /// Create a session with the base import configuration (`print`
    /// reserved at index 0).
    pub fn new() -> Self {
        Self::with_imports(BASE_IMPORTS)
    }

    /// Create a session with caller-supplied host imports, reserved at
    /// indices `0..imports.len()` in the given order.
    pub fn with_imports(imports: &[&str]) -> Self {
        Self {
            registry: FunctionRegistry::new(imports),
        }
    }

    /// Generate a whole program.
    ///
    /// The declaration pass binds every top-level function name to an
    /// index before any body is generated, so top-level functions may
    /// call each other regardless of declaration order. The generation
    /// pass then wraps the top-level statement sequence in a synthetic
    /// parameterless entry function ([`ENTRY_NAME`]); function
    /// declarations met along the way are generated in place and
    /// contribute nothing to the entry body. The entry function draws its
    /// index last, after every user function.
    ///
    /// Returns the full ordered record list, entry function included.
    /// Nested declarations (inside a function body or a block) are still
    /// registered only when visited, so calling one before its
    /// declaration fails.
    pub fn generate_program(mut self, program: &Program) -> Result<Vec<FuncRecord>> {
        let reserved: Vec<u32> = program
            .body
            .iter()
            .filter_map(|stmt| match stmt {
                Stmt::Function(decl) => Some(self.registry.reserve(&decl.name)),
                _ => None,
            })
            .collect();

        let mut reserved = reserved.into_iter();
        let mut scope = Scope::new();
        let mut code = Vec::new();
        for stmt in &program.body {
            match stmt {
                Stmt::Function(decl) => {
                    let index = reserved
                        .next()
                        .expect("declaration pass reserved an index per top-level function");
                    self.gen_function(decl, Some(index))?;
                }
                other => code.extend(self.gen_stmt(&mut scope, other)?),
            }
        }

        let index = self.registry.draw_index();
        self.registry.complete(FuncRecord {
            name: ENTRY_NAME.to_string(),
            params: Vec::new(),
            body: frame_body(&scope, 0, &code),
            index,
        });
        Ok(self.registry.into_records())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tadpole_ast::{BinaryOp, BlockStmt, Expr, FunctionDecl, Stmt};

    fn add_decl() -> Stmt {
        Stmt::Function(FunctionDecl {
            name: "add".into(),
            params: vec!["a".into(), "b".into()],
            body: BlockStmt {
                body: vec![Stmt::ret(Expr::binary(
                    BinaryOp::Add,
                    Expr::ident("a"),
                    Expr::ident("b"),
                ))],
            },
        })
    }

    #[test]
    fn empty_program_yields_entry_only() {
        let records = Generator::new().generate_program(&Program::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, ENTRY_NAME);
        // the index right after the single import reservation
        assert_eq!(records[0].index, 1);
        assert!(records[0].params.is_empty());
        // size 2, zero local groups, end
        assert_eq!(records[0].body, vec![0x02, 0x00, 0x0B]);
    }

    #[test]
    fn add_then_call_matches_expected_encoding() {
        let program = Program {
            body: vec![
                add_decl(),
                Stmt::expr(Expr::call("add", vec![Expr::number(1), Expr::number(2)])),
            ],
        };
        let records = Generator::new().generate_program(&program).unwrap();
        assert_eq!(records.len(), 2);

        let add = &records[0];
        assert_eq!(add.name, "add");
        assert_eq!(add.index, 1);
        assert_eq!(add.params, vec!["a".to_string(), "b".to_string()]);
        // local.get 0, local.get 1, i32.add, return, end (no extra locals)
        assert_eq!(
            add.body,
            vec![0x08, 0x00, 0x20, 0x00, 0x20, 0x01, 0x6A, 0x0F, 0x0B]
        );

        let main = &records[1];
        assert_eq!(main.name, ENTRY_NAME);
        assert_eq!(main.index, 2);
        // i32.const 1, i32.const 2, call 1, end
        assert_eq!(main.body, vec![0x08, 0x00, 0x41, 0x01, 0x41, 0x02, 0x10, 0x01, 0x0B]);
    }

    #[test]
    fn top_level_forward_call_resolves() {
        let program = Program {
            body: vec![
                Stmt::expr(Expr::call("late", vec![])),
                Stmt::Function(FunctionDecl {
                    name: "late".into(),
                    params: Vec::new(),
                    body: BlockStmt {
                        body: vec![Stmt::ret(Expr::number(9))],
                    },
                }),
            ],
        };
        let records = Generator::new().generate_program(&program).unwrap();
        let main = records.iter().find(|r| r.name == ENTRY_NAME).unwrap();
        // call 1 targets the reserved index of `late`
        assert_eq!(main.body, vec![0x04, 0x00, 0x10, 0x01, 0x0B]);
    }

    #[test]
    fn nested_forward_call_still_fails() {
        // the callee is declared inside a later block, so it is only
        // registered when that block is visited
        let program = Program {
            body: vec![
                Stmt::expr(Expr::call("hidden", vec![])),
                Stmt::Block(BlockStmt {
                    body: vec![Stmt::Function(FunctionDecl {
                        name: "hidden".into(),
                        params: Vec::new(),
                        body: BlockStmt::default(),
                    })],
                }),
            ],
        };
        let err = Generator::new().generate_program(&program).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::UnresolvedCallTarget { name, .. } if name == "hidden"
        ));
    }

    #[test]
    fn entry_locals_get_a_header() {
        let program = Program {
            body: vec![
                Stmt::var("x", Expr::number(1)),
                Stmt::var("y", Expr::number(2)),
            ],
        };
        let records = Generator::new().generate_program(&program).unwrap();
        let main = &records[0];
        // one group of two i32 locals precedes the stores
        assert_eq!(
            main.body,
            vec![0x0C, 0x01, 0x02, 0x7F, 0x41, 0x01, 0x21, 0x00, 0x41, 0x02, 0x21, 0x01, 0x0B]
        );
    }

    #[test]
    fn custom_imports_shift_the_counter() {
        let records = Generator::with_imports(&["log", "abort"])
            .generate_program(&Program::default())
            .unwrap();
        assert_eq!(records[0].index, 2);
    }

    #[test]
    fn indices_are_unique_and_visit_ordered() {
        let program = Program {
            body: vec![
                add_decl(),
                Stmt::Function(FunctionDecl {
                    name: "wrapper".into(),
                    params: Vec::new(),
                    body: BlockStmt {
                        // nested declaration registers at visit time
                        body: vec![
                            Stmt::Function(FunctionDecl {
                                name: "helper".into(),
                                params: Vec::new(),
                                body: BlockStmt::default(),
                            }),
                            Stmt::ret(Expr::call("helper", vec![])),
                        ],
                    },
                }),
            ],
        };
        let records = Generator::new().generate_program(&program).unwrap();
        let index_of = |name: &str| records.iter().find(|r| r.name == name).unwrap().index;
        assert_eq!(index_of("add"), 1);
        assert_eq!(index_of("wrapper"), 2);
        assert_eq!(index_of("helper"), 3);
        assert_eq!(index_of(ENTRY_NAME), 4);

        let mut indices: Vec<u32> = records.iter().map(|r| r.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }
}
