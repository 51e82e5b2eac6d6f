use docstore::common::Value;
use docstore::doc;
use docstore::errors::ErrorKind;
use docstore_int_test::test_util::{cleanup, create_test_context, insert_test_documents, run_test};

#[test]
fn test_create_returns_store_generated_id() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let id = store.create_document("users", doc! { name: "Ivan", age: 30 })?;

            assert_eq!(id.as_str().len(), 20);
            assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));

            let document = store.get_document("users", &id)?.unwrap();
            assert_eq!(document.get("id"), Value::from(id.as_str()));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_create_many_yields_distinct_ids() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let mut ids = insert_test_documents(&store, "test")?;
            ids.extend(insert_test_documents(&store, "test")?);

            let total = ids.len();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), total);
            assert_eq!(store.get_all_documents("test")?.len(), 6);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_create_empty_document() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let id = store.create_document("test", doc! {})?;

            let document = store.get_document("test", &id)?.unwrap();
            assert_eq!(document.size(), 1);
            assert!(document.contains_key("id"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_create_with_id_field_is_rejected() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let result = store.create_document("test", doc! { id: "mine", a: 1 });
            assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::WriteRejected));
            assert!(store.get_all_documents("test")?.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_create_in_read_only_store() {
    run_test(
        create_test_context,
        |ctx| {
            ctx.store_config().set_read_only(true);
            let result = ctx.store().create_document("test", doc! { a: 1 });
            assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::WriteRejected));
            Ok(())
        },
        cleanup,
    )
}
