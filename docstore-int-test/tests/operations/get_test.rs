use docstore::common::Value;
use docstore::errors::ErrorKind;
use docstore_int_test::test_util::{cleanup, create_test_context, insert_fake_people, insert_test_documents, run_test};

#[test]
fn test_get_document_by_id() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let ids = insert_test_documents(&store, "test")?;

            let document = store.get_document("test", &ids[1])?.unwrap();
            assert_eq!(document.get("first_name"), Value::from("fn2"));
            assert_eq!(document.get("address.city"), Value::from("Omsk"));
            assert_eq!(document.get("arr.1"), Value::from(4));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_get_missing_document() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_test_documents(&store, "test")?;

            assert!(store.get_document("test", "doesNotExist")?.is_none());
            assert!(store.get_document("other", "doesNotExist")?.is_none());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_get_with_invalid_id() {
    run_test(
        create_test_context,
        |ctx| {
            let result = ctx.store().get_document("test", "");
            assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::InvalidOperation));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_get_all_documents() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            assert!(store.get_all_documents("people")?.is_empty());

            let ids = insert_fake_people(&store, "people", 50)?;
            let documents = store.get_all_documents("people")?;
            assert_eq!(documents.len(), ids.len());

            for document in &documents {
                let id = document.get("id");
                assert!(ids.iter().any(|i| Value::from(i.as_str()) == id));
            }
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_get_all_is_per_collection() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_test_documents(&store, "first")?;
            insert_fake_people(&store, "second", 5)?;

            assert_eq!(store.get_all_documents("first")?.len(), 3);
            assert_eq!(store.get_all_documents("second")?.len(), 5);
            Ok(())
        },
        cleanup,
    )
}
