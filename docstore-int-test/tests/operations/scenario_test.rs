use docstore::common::{SortOrder, Value};
use docstore::doc;
use docstore_int_test::test_util::{cleanup, create_test_context, run_test};

#[test]
fn test_user_lifecycle() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();

            let id = store.create_document("users", doc! { name: "Ivan", age: 30 })?;
            store.create_document("users", doc! { name: "Olga", age: 22 })?;

            let ivan = store.get_document("users", &id)?.unwrap();
            assert_eq!(ivan.get("id"), Value::from(id.as_str()));
            assert_eq!(ivan.get("name"), Value::from("Ivan"));
            assert_eq!(ivan.get("age"), Value::from(30));

            store.update_document("users", &id, doc! { age: 31 })?;
            let ivan = store.get_document("users", &id)?.unwrap();
            assert_eq!(ivan.get("name"), Value::from("Ivan"));
            assert_eq!(ivan.get("age"), Value::from(31));

            let young = store.get_documents_with_filter("users", "age", "<=", 25)?;
            assert_eq!(young.len(), 1);
            assert_eq!(young[0].get("name"), Value::from("Olga"));

            let by_age = store.get_documents_sorted("users", "age", SortOrder::Descending, Some(10))?;
            assert_eq!(by_age[0].get("name"), Value::from("Ivan"));
            assert_eq!(by_age[1].get("name"), Value::from("Olga"));

            store.delete_document("users", &id)?;
            assert!(store.get_document("users", &id)?.is_none());
            assert_eq!(store.get_all_documents("users")?.len(), 1);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_handles_share_one_store() {
    run_test(
        create_test_context,
        |ctx| {
            let writer = ctx.store();
            let reader = ctx.store();

            let id = writer.create_document("users", doc! { name: "Ivan" })?;
            assert!(reader.get_document("users", &id)?.is_some());
            Ok(())
        },
        cleanup,
    )
}
