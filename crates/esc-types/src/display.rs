//! Type stringification matching the printing conventions spec §8.2 seeds
//! its end-to-end scenarios with: union `A | B`, intersection `A & B`,
//! function `fn (x: T, y: U) -> R throws E`, object `{k: T, …}`, literal
//! values rendered verbatim (strings quoted).

use crate::arena::TypeArena;
use crate::data::{LiteralValue, ObjTypeElem, Primitive, PropKeyData, Type};
use crate::ids::TypeId;
use crate::prune::prune;

pub fn display_type(arena: &mut TypeArena, id: TypeId) -> String {
    let id = prune(arena, id);
    match arena.get(id).clone() {
        Type::Primitive(p) => primitive_name(p).to_string(),
        Type::Literal(lit) => literal_str(&lit.value),
        Type::TypeVar(data) => format!("T{}", data.ordinal),
        Type::TypeRef(r) => {
            if r.args.is_empty() {
                r.name.clone()
            } else {
                let args: Vec<String> = r.args.iter().map(|&a| display_type(arena, a)).collect();
                format!("{}<{}>", r.name, args.join(", "))
            }
        }
        Type::Object(o) => {
            let parts: Vec<String> = o.members.iter().map(|m| display_member(arena, m)).collect();
            format!("{{{}}}", parts.join(", "))
        }
        Type::Tuple(t) => {
            let parts: Vec<String> = t
                .elems
                .iter()
                .map(|e| {
                    let ty = display_type(arena, e.ty);
                    let mark = if e.rest { "..." } else if e.optional { "?" } else { "" };
                    format!("{mark}{ty}")
                })
                .collect();
            format!("[{}]", parts.join(", "))
        }
        Type::Function(f) => {
            let params: Vec<String> = f
                .params
                .iter()
                .map(|p| format!("{}: {}", p.name, display_type(arena, p.ty)))
                .collect();
            let ret = display_type(arena, f.return_ty);
            let throws = display_type(arena, f.throws_ty);
            if matches!(arena.get(f.throws_ty), Type::Primitive(Primitive::Never)) {
                format!("fn ({}) -> {}", params.join(", "), ret)
            } else {
                format!("fn ({}) -> {} throws {}", params.join(", "), ret, throws)
            }
        }
        Type::Union(u) => {
            let parts: Vec<String> = u.members.iter().map(|&m| display_type(arena, m)).collect();
            parts.join(" | ")
        }
        Type::Intersection(i) => {
            let parts: Vec<String> = i.members.iter().map(|&m| display_type(arena, m)).collect();
            parts.join(" & ")
        }
        Type::Mutable(inner) => format!("mut {}", display_type(arena, inner)),
        Type::TemplateLit(t) => {
            let mut out = String::from("`");
            for (i, quasi) in t.quasis.iter().enumerate() {
                out.push_str(quasi);
                if let Some(&interp) = t.interpolations.get(i) {
                    out.push_str("${");
                    out.push_str(&display_type(arena, interp));
                    out.push('}');
                }
            }
            out.push('`');
            out
        }
        Type::Regex(r) => format!("/{}/", r.pattern),
        Type::Conditional(c) => format!(
            "if {} : {} {{ {} }} else {{ {} }}",
            display_type(arena, c.check),
            display_type(arena, c.extends),
            display_type(arena, c.then_ty),
            display_type(arena, c.else_ty)
        ),
        Type::Namespace(_) => "namespace".to_string(),
        Type::UniqueSymbol(s) => format!("unique symbol {}", s.name),
        Type::KeyOf(inner) => format!("keyof {}", display_type(arena, inner)),
        Type::IndexedAccess { object, index } => {
            format!("{}[{}]", display_type(arena, object), display_type(arena, index))
        }
        Type::Mapped(_) => "{ [K in ...]: ... }".to_string(),
        Type::Infer { name } => format!("infer {name}"),
        Type::Rest(inner) => format!("...{}", display_type(arena, inner)),
        Type::Extractor(e) => {
            let args: Vec<String> = e.args.iter().map(|&a| display_type(arena, a)).collect();
            format!("{}({})", display_type(arena, e.ctor), args.join(", "))
        }
    }
}

fn display_member(arena: &mut TypeArena, elem: &ObjTypeElem) -> String {
    match elem {
        ObjTypeElem::Property { key, value, optional, .. } => {
            let mark = if *optional { "?" } else { "" };
            format!("{}{}: {}", key_str(key), mark, display_type(arena, *value))
        }
        ObjTypeElem::Method { key, func, .. } => format!("{}{}", key_str(key), display_type(arena, *func)),
        ObjTypeElem::Getter { key, value } => format!("get {}: {}", key_str(key), display_type(arena, *value)),
        ObjTypeElem::Setter { key, value } => format!("set {}: {}", key_str(key), display_type(arena, *value)),
        ObjTypeElem::Index { key_type, value_type, .. } => {
            format!("[{}]: {}", display_type(arena, *key_type), display_type(arena, *value_type))
        }
        ObjTypeElem::Call { func } => display_type(arena, *func),
        ObjTypeElem::Constructor { func } => format!("new {}", display_type(arena, *func)),
        ObjTypeElem::Mapped { template } => display_type(arena, *template),
    }
}

fn key_str(key: &PropKeyData) -> String {
    match key {
        PropKeyData::String(s) => s.clone(),
        PropKeyData::Number(n) => n.to_string(),
        PropKeyData::UniqueSymbol(_) => "[unique symbol]".to_string(),
    }
}

fn literal_str(value: &LiteralValue) -> String {
    match value {
        LiteralValue::String(s) => format!("\"{s}\""),
        LiteralValue::Number(n) => n.to_string(),
        LiteralValue::BigInt(s) => format!("{s}n"),
        LiteralValue::Boolean(b) => b.to_string(),
    }
}

fn primitive_name(p: Primitive) -> &'static str {
    match p {
        Primitive::Number => "number",
        Primitive::String => "string",
        Primitive::Boolean => "boolean",
        Primitive::BigInt => "bigint",
        Primitive::Symbol => "symbol",
        Primitive::Null => "null",
        Primitive::Undefined => "undefined",
        Primitive::Void => "void",
        Primitive::Never => "never",
        Primitive::Unknown => "unknown",
        Primitive::Any => "any",
    }
}
