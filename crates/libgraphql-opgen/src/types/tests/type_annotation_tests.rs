use crate::ast;
use crate::types::DeprecationState;
use crate::types::TypeAnnotation;

fn named(name: &str) -> ast::schema::Type {
    ast::schema::Type::NamedType(name.to_string())
}

fn non_null(inner: ast::schema::Type) -> ast::schema::Type {
    ast::schema::Type::NonNullType(Box::new(inner))
}

fn list(inner: ast::schema::Type) -> ast::schema::Type {
    ast::schema::Type::ListType(Box::new(inner))
}

#[test]
fn nullable_named_type() {
    let annot = TypeAnnotation::from_ast_type(&named("Int"));

    assert!(annot.nullable());
    assert_eq!(annot.to_string(), "Int");
    assert_eq!(annot.innermost_type_name(), "Int");
    assert!(annot.as_named_annotation().is_some());
    assert!(annot.as_list_annotation().is_none());
}

#[test]
fn non_null_wrappers_fold_into_nullability() {
    let annot = TypeAnnotation::from_ast_type(&non_null(list(non_null(named("ID")))));

    assert!(!annot.nullable());
    let list_annot = annot.as_list_annotation().unwrap();
    assert!(!list_annot.inner_type_annotation().nullable());
    assert_eq!(annot.to_string(), "[ID!]!");
}

#[test]
fn nested_lists_display_as_written() {
    let annot = TypeAnnotation::from_ast_type(&list(non_null(list(named("String")))));

    assert_eq!(annot.to_string(), "[[String]!]");
    assert_eq!(annot.innermost_type_name(), "String");
    assert!(annot.innermost_named_type_annotation().nullable());
}

#[test]
fn deprecation_reason_is_read_from_directive() {
    let document = ast::schema::parse(concat!(
        "type Query {\n",
        "  a: Int @deprecated(reason: \"gone\")\n",
        "  b: Int @deprecated\n",
        "  c: Int @other\n",
        "}\n",
    )).unwrap();
    let Some(ast::schema::Definition::TypeDefinition(
        ast::schema::TypeDefinition::Object(query),
    )) = document.definitions.first() else {
        panic!("expected an object type definition");
    };

    let states: Vec<DeprecationState> = query.fields.iter()
        .map(|field| DeprecationState::from(&field.directives))
        .collect();
    assert_eq!(states, vec![
        DeprecationState::Deprecated(Some("gone".to_string())),
        DeprecationState::Deprecated(None),
        DeprecationState::NotDeprecated,
    ]);
    assert_eq!(states[0].reason(), Some("gone"));
    assert!(!states[2].is_deprecated());
}
