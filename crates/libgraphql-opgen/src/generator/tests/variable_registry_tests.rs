use crate::generator::VariableRegistry;
use crate::generator::tests::test_utils::build_schema;

const SCHEMA: &str = concat!(
    "type Query {\n",
    "  a(id: ID!, id1: Int): Int\n",
    "  b(id: String): Int\n",
    "  c(id: [ID]): Int\n",
    "}\n",
);

#[test]
fn first_argument_keeps_its_raw_name() {
    let schema = build_schema(SCHEMA);
    let query = schema.get_type("Query").unwrap().as_object_or_interface().unwrap();
    let a_id = &query.fields()["a"].parameters()["id"];

    let mut registry = VariableRegistry::new();
    assert_eq!(registry.register(a_id), "id");
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("id"), Some(a_id));
}

#[test]
fn re_registering_an_argument_reuses_its_variable() {
    let schema = build_schema(SCHEMA);
    let query = schema.get_type("Query").unwrap().as_object_or_interface().unwrap();
    let a_id = &query.fields()["a"].parameters()["id"];
    let b_id = &query.fields()["b"].parameters()["id"];

    let mut registry = VariableRegistry::new();
    assert_eq!(registry.register(a_id), "id");
    assert_eq!(registry.register(b_id), "id1");
    assert_eq!(registry.register(b_id), "id1");
    assert_eq!(registry.register(a_id), "id");
    assert_eq!(registry.len(), 2);
}

#[test]
fn suffixes_skip_names_that_are_already_taken() {
    let schema = build_schema(SCHEMA);
    let query = schema.get_type("Query").unwrap().as_object_or_interface().unwrap();
    let a_id = &query.fields()["a"].parameters()["id"];
    let a_id1 = &query.fields()["a"].parameters()["id1"];
    let b_id = &query.fields()["b"].parameters()["id"];
    let c_id = &query.fields()["c"].parameters()["id"];

    let mut registry = VariableRegistry::new();
    assert_eq!(registry.register(a_id), "id");
    assert_eq!(registry.register(a_id1), "id1");
    assert_eq!(registry.register(b_id), "id2");
    assert_eq!(registry.register(c_id), "id3");

    let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["id", "id1", "id2", "id3"]);
}
