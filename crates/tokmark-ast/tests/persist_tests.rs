use tokmark_ast::{persist, Node, Position, Registry, SourceTree, Token, TokenId, TokenKind, Value};

fn sample_tree() -> SourceTree {
    let registry = Registry::java();
    let block = registry.schema("BlockStatement").unwrap();
    let if_schema = registry.schema("IfStatement").unwrap();
    let field = registry.schema("FieldDeclaration").unwrap();

    let field_node = Node::with_attrs(
        field,
        [(
            "modifiers",
            Value::from(vec![Value::from("public"), Value::from("static")]),
        )],
    )
    .unwrap()
    .with_position(2, 5)
    .with_token(TokenId(0));

    // Nested sequences and absent attributes exercise the full value shape.
    let if_node = Node::with_attrs(
        if_schema,
        [(
            "then_statement",
            Value::from(vec![Value::from(field_node), Value::Int(42), Value::Absent]),
        )],
    )
    .unwrap()
    .with_position(1, 1);

    let root = Node::with_attrs(
        block,
        [("statements", Value::from(vec![Value::from(if_node)]))],
    )
    .unwrap();

    SourceTree::new(
        root,
        vec![
            Token::new("count", Position::new(2, 19), TokenKind::Identifier),
            Token::new(";", Position::new(2, 24), TokenKind::Separator),
        ],
    )
}

// ===== Round-Trip Tests =====

#[test]
fn test_round_trip_equal_tree() {
    let tree = sample_tree();
    let blob = persist::to_bytes(&tree).unwrap();
    let restored = persist::from_bytes(&blob).unwrap();

    assert_eq!(restored, tree);
}

#[test]
fn test_round_trip_preserves_positions_and_tokens() {
    // Node equality ignores positions and attachments, so check them
    // explicitly.
    let tree = sample_tree();
    let restored = persist::from_bytes(&persist::to_bytes(&tree).unwrap()).unwrap();

    assert_eq!(restored.root.position(), tree.root.position());
    assert_eq!(restored.tokens(), tree.tokens());
    assert_eq!(restored.token(TokenId(0)), tree.token(TokenId(0)));

    let original_positions: Vec<_> =
        tree.root.walk().map(|(_, n)| n.position()).collect();
    let restored_positions: Vec<_> =
        restored.root.walk().map(|(_, n)| n.position()).collect();
    assert_eq!(restored_positions, original_positions);
}

#[test]
fn test_round_trip_preserves_schemas() {
    let tree = sample_tree();
    let restored = persist::from_bytes(&persist::to_bytes(&tree).unwrap()).unwrap();

    let variants: Vec<_> =
        restored.root.walk().map(|(_, n)| n.variant().to_string()).collect();
    assert_eq!(
        variants,
        vec!["BlockStatement".to_string(), "IfStatement".to_string(), "FieldDeclaration".to_string()]
    );
    assert_eq!(
        restored.root.schema().attrs(),
        tree.root.schema().attrs()
    );
}

// ===== Failure Tests =====

#[test]
fn test_corrupt_blob_fails_opaquely() {
    let err = persist::from_bytes(b"not a tree").unwrap_err();
    assert!(matches!(err, tokmark_ast::PersistError::Decode(_)));
}

#[test]
fn test_truncated_blob_fails() {
    let tree = sample_tree();
    let blob = persist::to_bytes(&tree).unwrap();

    let err = persist::from_bytes(&blob[..blob.len() / 2]).unwrap_err();
    assert!(matches!(err, tokmark_ast::PersistError::Decode(_)));
}
