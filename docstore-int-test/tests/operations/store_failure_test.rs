use docstore::doc;
use docstore::errors::ErrorKind;
use docstore_int_test::test_util::{cleanup, create_test_context, insert_test_documents, run_test};

#[test]
fn test_closed_store_is_unavailable() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let ids = insert_test_documents(&store, "test")?;
            store.close()?;

            let kinds = vec![
                store.create_document("test", doc! { a: 1 }).err(),
                store.get_document("test", &ids[0]).err(),
                store.get_all_documents("test").err(),
                store.get_documents_with_filter("test", "age", "==", 24).err(),
                store.get_documents_sorted_ascending("test", "age", None).err(),
                store.update_document("test", &ids[0], doc! { a: 1 }).err(),
                store.delete_document("test", &ids[0]).err(),
            ];

            for kind in kinds {
                assert_eq!(kind.map(|e| e.kind().clone()), Some(ErrorKind::StoreUnavailable));
            }
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_read_only_store_rejects_writes_but_serves_reads() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let ids = insert_test_documents(&store, "test")?;
            ctx.store_config().set_read_only(true);

            let result = store.update_document("test", &ids[0], doc! { age: 1 });
            assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::WriteRejected));

            let result = store.delete_document("test", &ids[0]);
            assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::WriteRejected));

            assert_eq!(store.get_all_documents("test")?.len(), 3);

            ctx.store_config().set_read_only(false);
            store.delete_document("test", &ids[0])?;
            assert_eq!(store.get_all_documents("test")?.len(), 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_invalid_collection_names() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            for name in ["", "users/123/orders"] {
                let result = store.create_document(name, doc! { a: 1 });
                assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::InvalidOperation));
            }
            Ok(())
        },
        cleanup,
    )
}
