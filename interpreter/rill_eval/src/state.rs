//! Program state: the symbol table and the output log.
//!
//! One `ProgramState` exists per run. The driver constructs it
//! explicitly and passes it by mutable reference into every `evaluate`
//! call; nothing here is global.

use crate::Value;
use rill_ir::Name;
use rustc_hash::FxHashMap;

/// The run's variable-name-to-value store.
///
/// Keys are unique; rebinding is last-write-wins; bindings are never
/// deleted and live for the whole execution.
#[derive(Debug, Default)]
pub struct SymbolTable {
    bindings: FxHashMap<Name, Value>,
}

impl SymbolTable {
    /// Create an empty symbol table.
    pub fn new() -> Self {
        SymbolTable {
            bindings: FxHashMap::default(),
        }
    }

    /// Bind a variable, overwriting any previous binding.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look up a variable by name. Values are cheap to clone.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.bindings.get(&name).cloned()
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if no variable has been bound yet.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// The run's accumulated output lines.
///
/// Append-only during execution; read once at termination to flush to
/// the console.
#[derive(Debug, Default)]
pub struct OutputLog {
    lines: Vec<String>,
}

impl OutputLog {
    /// Create an empty output log.
    pub fn new() -> Self {
        OutputLog { lines: Vec::new() }
    }

    /// Append one line.
    #[inline]
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// The accumulated lines, in emission order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the log, yielding the accumulated lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Number of emitted lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Mutable state for one program run: {symbol table, output log}.
#[derive(Debug, Default)]
pub struct ProgramState {
    pub symbols: SymbolTable,
    pub output: OutputLog,
}

impl ProgramState {
    /// Create fresh state: empty symbol table, empty output log.
    pub fn new() -> Self {
        ProgramState {
            symbols: SymbolTable::new(),
            output: OutputLog::new(),
        }
    }
}
