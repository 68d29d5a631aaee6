//! The closed builtin registry.
//!
//! Builtins are a fixed enumeration matched exhaustively by the
//! evaluator; extending the language means adding a variant here, not
//! registering a callback. Each builtin declares its arity constraint,
//! checked before any argument is evaluated.

use rill_ir::{Name, StringInterner};
use std::fmt;

/// Arity constraint of a builtin: an exact count, or a minimum for
/// variadic builtins.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    /// Check whether an argument count satisfies the constraint.
    #[inline]
    pub const fn admits(self, got: usize) -> bool {
        match self {
            Arity::Exactly(n) => got == n,
            Arity::AtLeast(n) => got >= n,
        }
    }
}

/// One of the fixed, closed set of named operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Builtin {
    /// `(set name expr)` — bind a variable, return the bound value.
    Set,
    /// `(puts expr)` — append a text value to the output log.
    Puts,
    /// `(concat expr...)` — concatenate text values.
    Concat,
    /// `(str expr)` — convert a number to its canonical text form.
    Str,
    /// `(add expr...)` — sum of numbers.
    Add,
    /// `(max expr...)` — greatest of numbers.
    Max,
}

impl Builtin {
    /// The surface-syntax name.
    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Set => "set",
            Builtin::Puts => "puts",
            Builtin::Concat => "concat",
            Builtin::Str => "str",
            Builtin::Add => "add",
            Builtin::Max => "max",
        }
    }

    /// The declared arity constraint.
    pub const fn arity(self) -> Arity {
        match self {
            Builtin::Set => Arity::Exactly(2),
            Builtin::Puts => Arity::Exactly(1),
            Builtin::Str => Arity::Exactly(1),
            Builtin::Concat => Arity::AtLeast(1),
            Builtin::Add => Arity::AtLeast(2),
            Builtin::Max => Arity::AtLeast(1),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pre-interned builtin names for dispatch by `Name` comparison.
///
/// Interned once at `Interpreter` construction so that resolving a
/// callee is a handful of `u32 == u32` checks instead of a string
/// lookup per call.
#[derive(Clone, Copy)]
pub struct BuiltinNames {
    set: Name,
    puts: Name,
    concat: Name,
    str_: Name,
    add: Name,
    max: Name,
}

impl BuiltinNames {
    /// Pre-intern all builtin names.
    pub fn new(interner: &StringInterner) -> Self {
        Self {
            set: interner.intern("set"),
            puts: interner.intern("puts"),
            concat: interner.intern("concat"),
            str_: interner.intern("str"),
            add: interner.intern("add"),
            max: interner.intern("max"),
        }
    }

    /// Resolve a callee name against the closed builtin set.
    pub fn resolve(&self, name: Name) -> Option<Builtin> {
        if name == self.set {
            Some(Builtin::Set)
        } else if name == self.puts {
            Some(Builtin::Puts)
        } else if name == self.concat {
            Some(Builtin::Concat)
        } else if name == self.str_ {
            Some(Builtin::Str)
        } else if name == self.add {
            Some(Builtin::Add)
        } else if name == self.max {
            Some(Builtin::Max)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_arity_admits() {
        assert!(Arity::Exactly(2).admits(2));
        assert!(!Arity::Exactly(2).admits(1));
        assert!(!Arity::Exactly(2).admits(3));

        assert!(Arity::AtLeast(1).admits(1));
        assert!(Arity::AtLeast(1).admits(5));
        assert!(!Arity::AtLeast(1).admits(0));
    }

    #[test]
    fn test_resolve_every_builtin() {
        let interner = StringInterner::new();
        let names = BuiltinNames::new(&interner);

        for builtin in [
            Builtin::Set,
            Builtin::Puts,
            Builtin::Concat,
            Builtin::Str,
            Builtin::Add,
            Builtin::Max,
        ] {
            let name = interner.intern(builtin.name());
            assert_eq!(names.resolve(name), Some(builtin));
        }
    }

    #[test]
    fn test_resolve_unknown_is_none() {
        let interner = StringInterner::new();
        let names = BuiltinNames::new(&interner);
        let unknown = interner.intern("frobnicate");
        assert_eq!(names.resolve(unknown), None);
    }

    #[test]
    fn test_display_is_surface_name() {
        assert_eq!(Builtin::Concat.to_string(), "concat");
    }
}
