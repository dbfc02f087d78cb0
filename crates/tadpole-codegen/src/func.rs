//! Function assembly.
//!
//! Turns a function declaration into a finished [`FuncRecord`]: a fresh
//! scope seeded with the parameters, the generated body, a locals header
//! for any body-declared slots, and the end marker, all length-framed.

use tadpole_ast::FunctionDecl;
use tadpole_wasm::{Opcode, ValType, encode_local_group, encode_vector, write_leb128_u32};

use crate::FuncRecord;
use crate::error::CodegenError;
use crate::generator::Generator;
use crate::scope::Scope;

type Result<T> = std::result::Result<T, CodegenError>;

impl Generator {
    /// Generate a function declaration and register the finished record.
    ///
    /// The scope is brand new: parameters take slots `0..param_count` and
    /// nothing from any enclosing function is visible (no closures). The
    /// index is the one reserved by the declaration pass when given,
    /// otherwise drawn now, after the body finished generating.
    pub(crate) fn gen_function(
        &mut self,
        decl: &FunctionDecl,
        reserved: Option<u32>,
    ) -> Result<()> {
        let mut scope = Scope::with_params(&decl.params);
        let code = self.gen_stmts(&mut scope, &decl.body.body)?;
        let index = match reserved {
            Some(index) => index,
            None => self.registry.draw_index(),
        };
        self.registry.complete(FuncRecord {
            name: decl.name.clone(),
            params: decl.params.clone(),
            body: frame_body(&scope, decl.params.len(), &code),
            index,
        });
        Ok(())
    }
}

/// Frame a generated body for the code section.
///
/// Layout: locals vector (group count, then one i32 group for the slots
/// declared beyond the parameters, if any), the instructions, the end
/// marker, the whole thing length-prefixed.
pub(crate) fn frame_body(scope: &Scope, param_count: usize, code: &[u8]) -> Vec<u8> {
    let extra = scope.slot_count() - param_count;
    let mut inner = Vec::with_capacity(code.len() + 4);
    if extra > 0 {
        write_leb128_u32(1, &mut inner);
        inner.extend(encode_local_group(extra as u32, ValType::I32));
    } else {
        write_leb128_u32(0, &mut inner);
    }
    inner.extend_from_slice(code);
    inner.push(Opcode::End as u8);
    encode_vector(&inner)
}
