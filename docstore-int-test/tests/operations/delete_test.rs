use docstore::doc;
use docstore::errors::ErrorKind;
use docstore_int_test::test_util::{cleanup, create_strict_test_context, create_test_context, insert_test_documents, run_test};

#[test]
fn test_delete_removes_document() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let ids = insert_test_documents(&store, "test")?;

            store.delete_document("test", &ids[0])?;

            assert!(store.get_document("test", &ids[0])?.is_none());
            assert_eq!(store.get_all_documents("test")?.len(), 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_twice_is_idempotent() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let ids = insert_test_documents(&store, "test")?;

            store.delete_document("test", &ids[0])?;
            store.delete_document("test", &ids[0])?;
            store.delete_document("test", "neverExisted")?;

            assert_eq!(store.get_all_documents("test")?.len(), 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_strict_delete_of_missing_document() {
    run_test(
        create_strict_test_context,
        |ctx| {
            let store = ctx.store();
            let id = store.create_document("test", doc! { a: 1 })?;

            store.delete_document("test", &id)?;
            let result = store.delete_document("test", &id);
            assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::NotFound));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_after_delete_is_not_found() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let ids = insert_test_documents(&store, "test")?;

            store.delete_document("test", &ids[1])?;
            let result = store.update_document("test", &ids[1], doc! { age: 1 });
            assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::NotFound));
            Ok(())
        },
        cleanup,
    )
}
