use tokmark_ast::{Registry, SchemaError};

// ===== Schema Composition Tests =====

#[test]
fn test_three_level_composition_order() {
    let mut registry = Registry::new();
    registry.declare("Base", None, &["a", "b"]).unwrap();
    registry.declare("Mid", Some("Base"), &["c"]).unwrap();
    let leaf = registry.declare("Leaf", Some("Mid"), &["d", "e"]).unwrap();

    assert_eq!(leaf.attrs(), &["a", "b", "c", "d", "e"]);
}

#[test]
fn test_composition_dedup_keeps_first_occurrence() {
    let mut registry = Registry::new();
    registry.declare("Base", None, &["x", "y"]).unwrap();
    let child = registry.declare("Child", Some("Base"), &["y", "z"]).unwrap();

    assert_eq!(child.attrs(), &["x", "y", "z"]);
}

#[test]
fn test_schema_shared_across_lookups() {
    let mut registry = Registry::new();
    let declared = registry.declare("Base", None, &["a"]).unwrap();
    let looked_up = registry.get("Base").unwrap();

    assert!(std::sync::Arc::ptr_eq(&declared, looked_up));
}

#[test]
fn test_parent_schema_unaffected_by_child() {
    let mut registry = Registry::new();
    let base = registry.declare("Base", None, &["a"]).unwrap();
    registry.declare("Child", Some("Base"), &["b"]).unwrap();

    assert_eq!(base.attrs(), &["a"]);
}

#[test]
fn test_duplicate_variant_rejected() {
    let mut registry = Registry::new();
    registry.declare("Base", None, &["a"]).unwrap();
    let err = registry.declare("Base", None, &["b"]).unwrap_err();

    assert_eq!(err, SchemaError::DuplicateVariant { name: "Base".to_string() });
}

#[test]
fn test_unknown_parent_rejected() {
    let mut registry = Registry::new();
    let err = registry.declare("Child", Some("Missing"), &["a"]).unwrap_err();

    assert_eq!(err, SchemaError::UnknownVariant { name: "Missing".to_string() });
}

#[test]
fn test_schema_lookup_error() {
    let registry = Registry::new();
    let err = registry.schema("Nope").unwrap_err();

    assert_eq!(err, SchemaError::UnknownVariant { name: "Nope".to_string() });
}

// ===== Ancestry Tests =====

#[test]
fn test_is_a_self() {
    let mut registry = Registry::new();
    let base = registry.declare("Base", None, &[]).unwrap();

    assert!(base.is_a("Base"));
}

#[test]
fn test_is_a_chain() {
    let mut registry = Registry::new();
    registry.declare("Base", None, &[]).unwrap();
    registry.declare("Mid", Some("Base"), &[]).unwrap();
    let leaf = registry.declare("Leaf", Some("Mid"), &[]).unwrap();

    assert!(leaf.is_a("Mid"));
    assert!(leaf.is_a("Base"));
}

#[test]
fn test_is_a_negative() {
    let mut registry = Registry::new();
    let base = registry.declare("Base", None, &[]).unwrap();
    registry.declare("Other", None, &[]).unwrap();

    assert!(!base.is_a("Other"));
    assert!(!base.is_a("Leaf"));
}

// ===== Built-in Java Table Tests =====

#[test]
fn test_java_if_statement_schema() {
    let schema = Registry::java().schema("IfStatement").unwrap();
    assert_eq!(
        schema.attrs(),
        &["label", "condition", "then_statement", "else_statement"]
    );
}

#[test]
fn test_java_field_declaration_schema() {
    let schema = Registry::java().schema("FieldDeclaration").unwrap();
    assert_eq!(
        schema.attrs(),
        &["documentation", "modifiers", "annotations", "type", "declarators"]
    );
}

#[test]
fn test_java_method_declaration_schema() {
    let schema = Registry::java().schema("MethodDeclaration").unwrap();
    assert_eq!(
        schema.attrs(),
        &[
            "documentation",
            "modifiers",
            "annotations",
            "type_parameters",
            "return_type",
            "name",
            "parameters",
            "throws",
            "body"
        ]
    );
}

#[test]
fn test_java_ancestry() {
    let registry = Registry::java();

    assert!(registry.schema("FieldDeclaration").unwrap().is_a("Member"));
    assert!(registry.schema("FieldDeclaration").unwrap().is_a("Declaration"));
    assert!(registry.schema("FieldDeclaration").unwrap().is_a("Documented"));
    assert!(registry.schema("IfStatement").unwrap().is_a("Statement"));
    assert!(registry.schema("MethodInvocation").unwrap().is_a("Expression"));
    assert!(!registry.schema("IfStatement").unwrap().is_a("Expression"));
}

#[test]
fn test_java_table_covers_default_priorities() {
    let registry = Registry::java();
    for name in [
        "StatementExpression",
        "LocalVariableDeclaration",
        "AssertStatement",
        "WhileStatement",
        "IfStatement",
        "TryStatement",
        "ThrowStatement",
        "SwitchStatement",
        "SwitchStatementCase",
        "ReturnStatement",
        "DoStatement",
        "ForStatement",
        "FieldDeclaration",
        "SynchronizedStatement",
    ] {
        assert!(registry.get(name).is_some(), "missing variant {name}");
    }
}
