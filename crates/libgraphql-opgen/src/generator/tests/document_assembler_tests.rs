use crate::generator::DocumentAssembler;
use crate::generator::GeneratorConfig;
use crate::generator::VariableRegistry;
use crate::generator::tests::test_utils::build_query_field;
use crate::generator::tests::test_utils::build_schema;
use crate::operation::OperationKind;

#[test]
fn omits_variable_list_without_arguments() {
    let document = DocumentAssembler::assemble(
        OperationKind::Query,
        "version",
        "    version",
        &VariableRegistry::new(),
    );

    assert_eq!(document, "query version{\n    version\n}");
}

#[test]
fn declares_variables_in_registration_order() {
    let schema = build_schema(concat!(
        "type Query { post(id: ID!): Post }\n",
        "type Post {\n",
        "  comments(first: Int, ids: [ID!]): [String]\n",
        "}\n",
    ));
    let config = GeneratorConfig::default();
    let built = build_query_field(&schema, &config, "post");
    let document = DocumentAssembler::assemble(
        OperationKind::Query,
        "post",
        built.fragment.as_deref().unwrap(),
        &built.variables,
    );

    assert_eq!(document, concat!(
        "query post($first: Int, $ids: [ID!], $id: ID!){\n",
        "    post(id: $id){\n",
        "        comments(first: $first, ids: $ids)\n",
        "    }\n",
        "}",
    ));
}

#[test]
fn uses_the_keyword_of_the_operation_kind() {
    let registry = VariableRegistry::new();
    let mutation = DocumentAssembler::assemble(
        OperationKind::Mutation,
        "logout",
        "    logout",
        &registry,
    );
    let subscription = DocumentAssembler::assemble(
        OperationKind::Subscription,
        "ticks",
        "    ticks",
        &registry,
    );

    assert_eq!(mutation, "mutation logout{\n    logout\n}");
    assert_eq!(subscription, "subscription ticks{\n    ticks\n}");
}
