use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};

/// The fixed attribute schema of one node variant.
///
/// The effective attribute list is computed once, when the variant is
/// declared: the parent's effective list first, then the variant's own
/// attributes, de-duplicated keeping the first occurrence. Instances share
/// the schema through an `Arc`, so every node of a variant sees the same
/// list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantSchema {
    name: String,
    parent: Option<Arc<VariantSchema>>,
    attrs: Vec<String>,
}

impl VariantSchema {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Effective attribute names, in schema (declaration) order.
    pub fn attrs(&self) -> &[String] {
        &self.attrs
    }

    pub fn parent(&self) -> Option<&Arc<VariantSchema>> {
        self.parent.as_ref()
    }

    /// Whether this variant is `ancestor` or declared under it.
    pub fn is_a(&self, ancestor: &str) -> bool {
        if self.name == ancestor {
            return true;
        }
        let mut parent = self.parent.as_deref();
        while let Some(schema) = parent {
            if schema.name == ancestor {
                return true;
            }
            parent = schema.parent.as_deref();
        }
        false
    }

    pub fn index_of(&self, attribute: &str) -> Option<usize> {
        self.attrs.iter().position(|a| a == attribute)
    }
}

impl PartialEq for VariantSchema {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.attrs == other.attrs
    }
}

impl Eq for VariantSchema {}

/// Central table mapping each variant name to its declared schema.
///
/// Schemas are composed at declaration time, never recomputed per instance.
#[derive(Debug, Default)]
pub struct Registry {
    variants: HashMap<String, Arc<VariantSchema>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new variant with an optional supertype and its own
    /// attributes. Fails if the name is taken or the parent is unknown.
    pub fn declare(
        &mut self,
        name: &str,
        parent: Option<&str>,
        attrs: &[&str],
    ) -> Result<Arc<VariantSchema>> {
        if self.variants.contains_key(name) {
            return Err(SchemaError::DuplicateVariant { name: name.to_string() });
        }

        let parent = match parent {
            Some(parent_name) => Some(
                self.variants
                    .get(parent_name)
                    .cloned()
                    .ok_or_else(|| SchemaError::UnknownVariant { name: parent_name.to_string() })?,
            ),
            None => None,
        };

        let mut effective: Vec<String> = match &parent {
            Some(schema) => schema.attrs.clone(),
            None => Vec::new(),
        };
        for attr in attrs {
            if !effective.iter().any(|a| a == attr) {
                effective.push((*attr).to_string());
            }
        }

        let schema =
            Arc::new(VariantSchema { name: name.to_string(), parent, attrs: effective });
        self.variants.insert(name.to_string(), schema.clone());

        Ok(schema)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<VariantSchema>> {
        self.variants.get(name)
    }

    pub fn schema(&self, name: &str) -> Result<&Arc<VariantSchema>> {
        self.variants
            .get(name)
            .ok_or_else(|| SchemaError::UnknownVariant { name: name.to_string() })
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// The built-in Java variant table.
    pub fn java() -> &'static Registry {
        &JAVA
    }
}

// (variant, supertype, own attributes), supertypes before subtypes
const JAVA_VARIANTS: &[(&str, Option<&str>, &[&str])] = &[
    ("CompilationUnit", None, &["package", "imports", "types"]),
    ("Import", None, &["path", "static", "wildcard"]),
    ("Documented", None, &["documentation"]),
    ("Declaration", Some("Documented"), &["modifiers", "annotations"]),
    ("PackageDeclaration", Some("Declaration"), &["name"]),
    ("TypeDeclaration", Some("Declaration"), &["name", "body"]),
    (
        "ClassDeclaration",
        Some("TypeDeclaration"),
        &["type_parameters", "extends", "implements"],
    ),
    ("InterfaceDeclaration", Some("TypeDeclaration"), &["type_parameters", "extends"]),
    ("EnumDeclaration", Some("TypeDeclaration"), &["implements"]),
    ("Member", Some("Declaration"), &[]),
    (
        "MethodDeclaration",
        Some("Member"),
        &["type_parameters", "return_type", "name", "parameters", "throws", "body"],
    ),
    (
        "ConstructorDeclaration",
        Some("Member"),
        &["type_parameters", "name", "parameters", "throws", "body"],
    ),
    ("FieldDeclaration", Some("Member"), &["type", "declarators"]),
    ("ConstantDeclaration", Some("FieldDeclaration"), &[]),
    ("VariableDeclaration", Some("Declaration"), &["type", "declarators"]),
    ("LocalVariableDeclaration", Some("VariableDeclaration"), &[]),
    ("VariableDeclarator", None, &["name", "dimensions", "initializer"]),
    ("FormalParameter", Some("Declaration"), &["type", "name", "varargs"]),
    ("Type", None, &["name", "dimensions"]),
    ("BasicType", Some("Type"), &[]),
    ("ReferenceType", Some("Type"), &["arguments", "sub_type"]),
    ("Annotation", None, &["name", "element"]),
    ("Statement", None, &["label"]),
    ("BlockStatement", Some("Statement"), &["statements"]),
    (
        "IfStatement",
        Some("Statement"),
        &["condition", "then_statement", "else_statement"],
    ),
    ("WhileStatement", Some("Statement"), &["condition", "body"]),
    ("DoStatement", Some("Statement"), &["condition", "body"]),
    ("ForStatement", Some("Statement"), &["control", "body"]),
    ("AssertStatement", Some("Statement"), &["condition", "value"]),
    ("ReturnStatement", Some("Statement"), &["expression"]),
    ("ThrowStatement", Some("Statement"), &["expression"]),
    ("SynchronizedStatement", Some("Statement"), &["lock", "block"]),
    (
        "TryStatement",
        Some("Statement"),
        &["resources", "block", "catches", "finally_block"],
    ),
    ("CatchClause", Some("Statement"), &["parameter", "block"]),
    ("SwitchStatement", Some("Statement"), &["expression", "cases"]),
    ("SwitchStatementCase", None, &["case", "statements"]),
    ("StatementExpression", Some("Statement"), &["expression"]),
    ("Expression", None, &[]),
    (
        "Primary",
        Some("Expression"),
        &["prefix_operators", "postfix_operators", "qualifier", "selectors"],
    ),
    ("Literal", Some("Primary"), &["value"]),
    ("MemberReference", Some("Primary"), &["member"]),
    ("MethodInvocation", Some("Primary"), &["type_arguments", "arguments", "member"]),
    ("BinaryOperation", Some("Expression"), &["operator", "operandl", "operandr"]),
    ("Assignment", Some("Expression"), &["expressionl", "value", "type"]),
];

static JAVA: Lazy<Registry> = Lazy::new(|| {
    let mut registry = Registry::new();
    for (name, parent, attrs) in JAVA_VARIANTS {
        registry
            .declare(name, *parent, attrs)
            .expect("builtin Java variant table must be consistent");
    }
    registry
});
