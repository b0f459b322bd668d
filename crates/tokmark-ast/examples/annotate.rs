use tokmark_ast::{
    direct_stream, statement_priorities, Assembler, Node, Position, Registry,
    SourceTree, Token, TokenId, TokenKind, Value,
};

fn main() {
    let registry = Registry::java();
    let block = registry.schema("BlockStatement").unwrap();
    let if_schema = registry.schema("IfStatement").unwrap();
    let ret = registry.schema("ReturnStatement").unwrap();

    // if (x) { return x; }
    let tokens = vec![
        Token::new("if", Position::new(1, 1), TokenKind::Keyword),
        Token::new("(", Position::new(1, 4), TokenKind::Separator),
        Token::new("x", Position::new(1, 5), TokenKind::Identifier),
        Token::new(")", Position::new(1, 6), TokenKind::Separator),
        Token::new("return", Position::new(2, 5), TokenKind::Keyword),
        Token::new("x", Position::new(2, 12), TokenKind::Identifier),
        Token::new(";", Position::new(2, 13), TokenKind::Separator),
    ];

    let return_node = Node::new(ret).with_position(2, 5).with_token(TokenId(4));
    let if_node = Node::with_attrs(
        if_schema,
        [("then_statement", Value::from(return_node))],
    )
    .unwrap()
    .with_position(1, 1)
    .with_token(TokenId(0));
    let root = Node::with_attrs(
        block,
        [("statements", Value::from(vec![Value::from(if_node)]))],
    )
    .unwrap();

    let tree = SourceTree::new(root, tokens);

    println!("Reconciled stream:");
    for token in Assembler::new(statement_priorities()).assemble(&tree) {
        println!("  {:<8} {:<12} {}", token.value, token.context, token.position);
    }

    println!("\nDirect stream:");
    for token in direct_stream(&tree, statement_priorities()) {
        println!("  {:<8} {:<12} {}", token.value, token.context, token.position);
    }
}
