use crate::generator::CustomizedOperationsError;
use crate::generator::load_customized_operation_names;
use crate::generator::parse_operation_names;
use crate::generator::tests::test_utils::scratch_dir;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, CustomizedOperationsError>;

#[test]
fn parses_names_from_operation_lines() {
    let names = parse_operation_names(concat!(
        "# hand-tuned\n",
        "query user($id: ID!) {\n",
        "  user(id: $id) { id }\n",
        "}\n",
        "mutation rename($id: ID!){\n",
        "}\n",
        "query viewer{\n",
        "}\n",
        "subscription ticks {\n",
        "}\n",
        "  query indented {\n",
        "}\n",
        "query   spaced (\n",
    ));

    assert_eq!(names, vec!["user", "rename", "viewer", "spaced"]);
}

#[test]
fn missing_directory_yields_no_names() -> Result<()> {
    let dir = scratch_dir("missing_customized_dir");

    assert_eq!(load_customized_operation_names(dir.as_path())?, HashSet::new());

    Ok(())
}

#[test]
fn scans_files_recursively() -> Result<()> {
    let dir = scratch_dir("customized_recursive");
    std::fs::create_dir_all(dir.join("nested")).unwrap();
    std::fs::write(dir.join("a.gql"), "query me{\n    me\n}").unwrap();
    std::fs::write(
        dir.join("nested").join("b.graphql"),
        "mutation logout($all: Boolean){\n    logout(all: $all)\n}",
    ).unwrap();

    let names = load_customized_operation_names(dir.as_path())?;
    assert_eq!(names, HashSet::from([
        "me".to_string(),
        "logout".to_string(),
    ]));

    std::fs::remove_dir_all(dir).unwrap();
    Ok(())
}

#[test]
fn unreadable_files_are_errors() {
    let dir = scratch_dir("customized_unreadable");
    std::fs::create_dir_all(dir.as_path()).unwrap();
    std::fs::write(dir.join("binary.gql"), [0xff, 0xfe, 0xfd]).unwrap();

    let result = load_customized_operation_names(dir.as_path());
    assert!(matches!(result, Err(CustomizedOperationsError::ReadError(_))));

    std::fs::remove_dir_all(dir).unwrap();
}
