//! Per-thread symbol table behind `PropertyKey::symbol`.
//!
//! Symbol-style keys are meant for the fixed vocabulary of member names host
//! code spells out (`"name"`, `"greet"`, `"prototype"`). Interning them means
//! building the same symbol twice clones one `Rc<str>` instead of allocating,
//! and keys built that way share storage with the accessor table entries
//! derived from them. Interning is not visible in behavior: keys compare by
//! content, so `symbol("a")` and `"a".into()` are the same key.
//!
//! Symbols are never released; they live as long as the thread. Names
//! derived from data should use string keys.

use crate::prelude::*;
use crate::value::{CheapClone, JsString};

/// Deduplicating name table
pub struct SymbolTable {
    /// Box<str> keys so lookups by &str don't go through the Rc.
    names: FxHashMap<Box<str>, JsString>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            names: FxHashMap::default(),
        }
    }

    /// Table seeded with the built-in `prototype` members
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        for name in BUILTIN_NAMES {
            table.intern(name);
        }
        table
    }

    /// Existing symbol for `name`, or a newly recorded one
    pub fn intern(&mut self, name: &str) -> JsString {
        if let Some(existing) = self.names.get(name) {
            return existing.cheap_clone();
        }
        let symbol = JsString::from(name);
        self.names.insert(name.into(), symbol.cheap_clone());
        symbol
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

const BUILTIN_NAMES: &[&str] = &["prototype", "prototype="];

thread_local! {
    static SYMBOLS: RefCell<SymbolTable> = RefCell::new(SymbolTable::with_builtins());
}

/// Intern `name` in this thread's symbol table.
pub fn intern(name: &str) -> JsString {
    SYMBOLS.with(|table| table.borrow_mut().intern(name))
}

/// Number of symbols recorded on this thread so far.
pub fn interned_count() -> usize {
    SYMBOLS.with(|table| table.borrow().len())
}
