use docstore::common::Value;
use docstore::doc;
use docstore::errors::ErrorKind;
use docstore_int_test::test_util::{cleanup, create_test_context, insert_test_documents, run_test};

#[test]
fn test_update_overwrites_and_adds_fields() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let ids = insert_test_documents(&store, "test")?;

            store.update_document("test", &ids[0], doc! { age: 25, nickname: "first" })?;

            let document = store.get_document("test", &ids[0])?.unwrap();
            assert_eq!(document.get("age"), Value::from(25));
            assert_eq!(document.get("nickname"), Value::from("first"));
            assert_eq!(document.get("first_name"), Value::from("fn1"));
            assert_eq!(document.get("last_name"), Value::from("ln1"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_replaces_embedded_documents() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let ids = insert_test_documents(&store, "test")?;

            store.update_document("test", &ids[2], doc! { address: { zip: 170000 } })?;

            let document = store.get_document("test", &ids[2])?.unwrap();
            assert_eq!(document.get("address"), Value::from(doc! { zip: 170000 }));
            assert_eq!(document.get("address.city"), Value::Null);
            assert_eq!(document.get("first_name"), Value::from("fn3"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_replaces_arrays() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let ids = insert_test_documents(&store, "test")?;

            store.update_document("test", &ids[0], doc! { tags: ["guest"] })?;

            let document = store.get_document("test", &ids[0])?.unwrap();
            assert_eq!(document.get("tags"), Value::from(vec!["guest"]));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_leaves_other_documents() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let ids = insert_test_documents(&store, "test")?;
            let before = store.get_document("test", &ids[1])?;

            store.update_document("test", &ids[0], doc! { age: 99 })?;

            assert_eq!(store.get_document("test", &ids[1])?, before);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_missing_document() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_test_documents(&store, "test")?;

            let result = store.update_document("test", "doesNotExist", doc! { age: 1 });
            assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::NotFound));
            assert_eq!(store.get_all_documents("test")?.len(), 3);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_cannot_change_id() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let ids = insert_test_documents(&store, "test")?;

            let result = store.update_document("test", &ids[0], doc! { id: "other" });
            assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::WriteRejected));

            let document = store.get_document("test", &ids[0])?.unwrap();
            assert_eq!(document.get("id"), Value::from(ids[0].as_str()));
            Ok(())
        },
        cleanup,
    )
}
