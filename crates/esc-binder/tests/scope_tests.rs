//! Scope chain and file-scoped import tests (spec §3.3, §4.1, §8.1 shadowing,
//! §8.2 scenarios 5 and 6).

use esc_ast::ImportDecl;
use esc_binder::{build_import_table, lookup_type, resolve_qualified, PackageRegistry, Resolved, ScopeArena};
use esc_common::Span;
use esc_types::{Binding, ObjectTypeData, TypeArena};

#[test]
fn shadowing_resolves_to_the_nearest_scope() {
    let mut arena = TypeArena::new();
    let mut scopes = ScopeArena::new();

    let never = arena.never();
    let unknown = arena.unknown();

    let global_ns = arena.declare_namespace();
    let global_array = arena.declare_alias(never, Vec::new(), None);
    arena.ns_mut(global_ns).types.insert("Array".to_string(), global_array);
    let global_scope = scopes.root(global_ns);

    let module_ns = arena.declare_namespace();
    let local_array = arena.declare_alias(unknown, Vec::new(), None);
    arena.ns_mut(module_ns).types.insert("Array".to_string(), local_array);
    let module_scope = scopes.child(global_scope, module_ns);

    let resolved = lookup_type(&arena, &scopes, module_scope, "Array");
    assert_eq!(resolved, Some(local_array));

    // globalThis-style direct namespace access bypasses the shadow.
    assert_eq!(arena.ns(global_ns).types.get("Array").copied(), Some(global_array));
}

#[test]
fn file_scoped_imports_are_isolated_between_files() {
    let mut arena = TypeArena::new();
    let mut registry = PackageRegistry::new();

    let package_ns = arena.declare_namespace();
    let number = arena.primitive(esc_types::Primitive::Number);
    arena.declare_binding(package_ns, "T".to_string(), Binding { ty: number, mutable: false, source: None });
    registry.register("p", package_ns).unwrap();

    let file1_imports = vec![ImportDecl::Namespace { alias: "pkg".to_string(), package: "p".to_string(), span: Span::dummy() }];
    let (file1_table, diags1) = build_import_table(&arena, &registry, &file1_imports);
    assert!(diags1.is_empty());

    let file2_imports: Vec<ImportDecl> = Vec::new();
    let (file2_table, diags2) = build_import_table(&arena, &registry, &file2_imports);
    assert!(diags2.is_empty());

    let mut scopes = ScopeArena::new();
    let root_ns = arena.declare_namespace();
    let root_scope = scopes.root(root_ns);

    let v1 = resolve_qualified(&mut arena, &scopes, root_scope, &file1_table, &["pkg".to_string(), "T".to_string()]);
    assert!(matches!(v1, Some(Resolved::Value(_))));

    let v2 = resolve_qualified(&mut arena, &scopes, root_scope, &file2_table, &["pkg".to_string(), "T".to_string()]);
    assert!(v2.is_none(), "file2 did not import 'p' and must not see 'pkg'");
}

#[test]
fn duplicate_package_registration_fails() {
    let mut arena = TypeArena::new();
    let mut registry = PackageRegistry::new();
    let ns1 = arena.declare_namespace();
    let ns2 = arena.declare_namespace();
    assert!(registry.register("p", ns1).is_ok());
    assert!(registry.register("p", ns2).is_err());
}

#[test]
fn qualified_lookup_descends_through_nested_namespaces() {
    let mut arena = TypeArena::new();
    let mut scopes = ScopeArena::new();

    let inner_ns = arena.declare_namespace();
    let identity = arena.next_identity();
    let obj = arena.object(ObjectTypeData { object_flags: 0, members: Vec::new(), extends: Vec::new(), identity }, None);
    arena.declare_binding(inner_ns, "value".to_string(), Binding { ty: obj, mutable: false, source: None });

    let outer_ns = arena.declare_namespace();
    arena.ns_mut(outer_ns).namespaces.insert("inner".to_string(), inner_ns);

    let scope = scopes.root(outer_ns);
    let table = esc_binder::ImportTable::default();

    let resolved = resolve_qualified(&mut arena, &scopes, scope, &table, &["inner".to_string(), "value".to_string()]);
    assert!(matches!(resolved, Some(Resolved::Value(_))));
}
