//! Flag constants describing type kinds, mirroring the manual `const u32 = 1
//! << n` pattern used throughout the teacher's type representation rather
//! than a `bitflags!`-macro encoding (the retrieval pack never uses that
//! macro even where it declares the crate as a dependency).

pub mod type_flags {
    pub const NUMBER: u32 = 1 << 0;
    pub const STRING: u32 = 1 << 1;
    pub const BOOLEAN: u32 = 1 << 2;
    pub const BIG_INT: u32 = 1 << 3;
    pub const SYMBOL: u32 = 1 << 4;
    pub const NULL: u32 = 1 << 5;
    pub const UNDEFINED: u32 = 1 << 6;
    pub const VOID: u32 = 1 << 7;
    pub const NEVER: u32 = 1 << 8;
    pub const UNKNOWN: u32 = 1 << 9;
    pub const ANY: u32 = 1 << 10;

    pub const LITERAL: u32 = 1 << 11;
    pub const TYPE_VAR: u32 = 1 << 12;
    pub const TYPE_REF: u32 = 1 << 13;
    pub const OBJECT: u32 = 1 << 14;
    pub const TUPLE: u32 = 1 << 15;
    pub const FUNCTION: u32 = 1 << 16;
    pub const UNION: u32 = 1 << 17;
    pub const INTERSECTION: u32 = 1 << 18;
    pub const MUTABLE: u32 = 1 << 19;
    pub const TEMPLATE_LIT: u32 = 1 << 20;
    pub const REGEX: u32 = 1 << 21;
    pub const CONDITIONAL: u32 = 1 << 22;
    pub const NAMESPACE: u32 = 1 << 23;
    pub const UNIQUE_SYMBOL: u32 = 1 << 24;
    pub const KEY_OF: u32 = 1 << 25;
    pub const INDEXED_ACCESS: u32 = 1 << 26;
    pub const MAPPED: u32 = 1 << 27;
    pub const INFER: u32 = 1 << 28;
    pub const REST: u32 = 1 << 29;
    pub const EXTRACTOR: u32 = 1 << 30;

    pub const PRIMITIVE: u32 =
        NUMBER | STRING | BOOLEAN | BIG_INT | SYMBOL | NULL | UNDEFINED | VOID | NEVER | UNKNOWN | ANY;
    pub const STRUCTURED: u32 = OBJECT | UNION | INTERSECTION | TUPLE;
    pub const INSTANTIABLE: u32 = TYPE_VAR | CONDITIONAL | KEY_OF | INDEXED_ACCESS | MAPPED | INFER;
}

/// Flags on `ObjTypeElem::Property` / object-type identity.
pub mod object_flags {
    pub const NOMINAL: u32 = 1 << 0;
    pub const READONLY: u32 = 1 << 1;
    pub const OPTIONAL: u32 = 1 << 2;
}
