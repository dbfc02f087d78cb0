//! Function registration, indexing, and name resolution.
//!
//! The registry owns everything index-related for one generation run: the
//! imported-function reservations, the name → index table for generated
//! functions, the ordered record list, and the monotonically increasing
//! index counter. Indices are unique across the run; the counter starts
//! just past the import reservations.

use rustc_hash::FxHashMap;

use crate::FuncRecord;
use crate::scope::Scope;

/// The base import configuration: one host-provided `print` function,
/// reserved at index 0.
pub const BASE_IMPORTS: &[&str] = &["print"];

/// Where a name resolved to, in value position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// A local slot in the current scope.
    Local(u32),
    /// An imported function's reserved index.
    Import(u32),
    /// A generated function's index.
    Function(u32),
}

/// Registry of imported and generated functions for one run.
#[derive(Debug)]
pub struct FunctionRegistry {
    /// Host imports, each holding a reserved index below the counter start.
    imports: FxHashMap<String, u32>,
    /// Name → index for functions declared in the program.
    index: FxHashMap<String, u32>,
    /// Completed records, in completion order.
    funcs: Vec<FuncRecord>,
    next_index: u32,
}

impl FunctionRegistry {
    /// Create a registry with `imports` reserved at indices `0..len`.
    pub fn new(imports: &[&str]) -> Self {
        let imports: FxHashMap<String, u32> = imports
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), i as u32))
            .collect();
        let next_index = imports.len() as u32;
        Self {
            imports,
            index: FxHashMap::default(),
            funcs: Vec::new(),
            next_index,
        }
    }

    /// Draw the next function index from the counter.
    pub fn draw_index(&mut self) -> u32 {
        let index = self.next_index;
        self.next_index += 1;
        index
    }

    /// Bind `name` to a fresh index ahead of body generation.
    ///
    /// Used by the declaration pass so calls between top-level functions
    /// resolve regardless of declaration order.
    pub fn reserve(&mut self, name: &str) -> u32 {
        let index = self.draw_index();
        self.index.insert(name.to_string(), index);
        index
    }

    /// Record a completed function and bind its name to its index.
    pub fn complete(&mut self, record: FuncRecord) {
        self.index.insert(record.name.clone(), record.index);
        self.funcs.push(record);
    }

    /// Resolve a name in value position.
    ///
    /// Resolution order: local slot, then import, then generated
    /// function. Function references resolve to their numeric index so
    /// they can be pushed as ordinary constants.
    pub fn resolve(&self, scope: &Scope, name: &str) -> Option<Binding> {
        if let Some(slot) = scope.get(name) {
            return Some(Binding::Local(slot));
        }
        if let Some(&index) = self.imports.get(name) {
            return Some(Binding::Import(index));
        }
        if let Some(&index) = self.index.get(name) {
            return Some(Binding::Function(index));
        }
        None
    }

    /// Resolve a call target: generated functions first, then imports.
    pub fn resolve_callee(&self, name: &str) -> Option<u32> {
        self.index
            .get(name)
            .or_else(|| self.imports.get(name))
            .copied()
    }

    /// Names of all functions known so far, sorted. Used in diagnostics.
    pub fn function_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.index.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Consume the registry, yielding the completed records.
    pub fn into_records(self) -> Vec<FuncRecord> {
        self.funcs
    }
}
