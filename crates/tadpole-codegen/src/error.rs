//! Errors produced during code generation.
//!
//! Every error is fatal: generation halts on the first occurrence, there
//! is no warning tier and no batching across a run.

use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// The AST carries a construct with no generation rule (non-numeric
    /// literal kinds, declarators without an initializer).
    #[error("no generation rule for {construct}")]
    UnsupportedConstruct {
        /// What was encountered.
        construct: String,
    },

    /// A name resolved to neither a local, an import, nor a function.
    #[error("could not resolve identifier '{name}' (known locals: {})", .known_locals.join(", "))]
    UnresolvedIdentifier {
        /// The unresolved name.
        name: String,
        /// Locals visible in the scope being generated, sorted.
        known_locals: Vec<String>,
    },

    /// A call target resolved to neither a function nor an import.
    #[error("could not resolve call target '{name}' (known functions: {})", .known_functions.join(", "))]
    UnresolvedCallTarget {
        /// The unresolved callee name.
        name: String,
        /// Function names registered so far, sorted.
        known_functions: Vec<String>,
    },

    /// A call whose callee is not a plain identifier.
    #[error("unsupported callee: only plain identifiers can be called")]
    UnsupportedCallee,
}
