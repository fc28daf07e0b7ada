use crate::generator::GeneratedDocument;
use crate::generator::OutputError;
use crate::generator::OutputSink;
use crate::generator::tests::test_utils::scratch_dir;
use crate::operation::OperationKind;

type Result<T> = std::result::Result<T, OutputError>;

fn document(kind: OperationKind, name: &str) -> GeneratedDocument {
    GeneratedDocument {
        content: format!("{} {name}{{\n    {name}\n}}", kind.keyword()),
        kind,
        name: name.to_string(),
    }
}

#[test]
fn writes_documents_under_their_kind_directory() -> Result<()> {
    let dest_dir = scratch_dir("writes_documents");
    let sink = OutputSink::prepare(dest_dir.as_path(), "graphql")?;

    let query_path = sink.write(&document(OperationKind::Query, "me"))?;
    let mutation_path = sink.write(&document(OperationKind::Mutation, "logout"))?;

    assert_eq!(query_path, dest_dir.join("queries").join("me.graphql"));
    assert_eq!(mutation_path, dest_dir.join("mutations").join("logout.graphql"));
    assert_eq!(
        std::fs::read_to_string(query_path).unwrap(),
        "query me{\n    me\n}",
    );
    assert!(!dest_dir.join("subscriptions").exists());

    std::fs::remove_dir_all(dest_dir).unwrap();
    Ok(())
}

#[test]
fn prepare_clears_stale_output() -> Result<()> {
    let dest_dir = scratch_dir("clears_stale");
    let stale_file = dest_dir.join("queries").join("removedField.gql");
    std::fs::create_dir_all(stale_file.parent().unwrap()).unwrap();
    std::fs::write(stale_file.as_path(), "query removedField{}").unwrap();

    let sink = OutputSink::prepare(dest_dir.as_path(), ".gql")?;
    assert!(!stale_file.exists());
    assert!(dest_dir.is_dir());

    let written = sink.write(&document(OperationKind::Subscription, "ticks"))?;
    assert_eq!(written, dest_dir.join("subscriptions").join("ticks.gql"));

    std::fs::remove_dir_all(dest_dir).unwrap();
    Ok(())
}
