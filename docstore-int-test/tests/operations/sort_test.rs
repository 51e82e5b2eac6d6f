use docstore::collection::order_by;
use docstore::common::{SortOrder, Value};
use docstore::errors::ErrorKind;
use docstore::filter::field;
use docstore_int_test::test_util::{cleanup, create_test_context, field_values, insert_fake_people, insert_test_documents, is_sorted, run_test};

#[test]
fn test_sort_ascending_by_default() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_fake_people(&store, "people", 40)?;

            let documents = store.get_documents_sorted_ascending("people", "age", None)?;
            assert_eq!(documents.len(), 40);
            assert!(is_sorted(field_values(&documents, "age"), true));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_sort_descending_with_limit() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_fake_people(&store, "people", 40)?;

            let documents = store.get_documents_sorted("people", "age", SortOrder::Descending, Some(10))?;
            assert_eq!(documents.len(), 10);
            assert!(is_sorted(field_values(&documents, "age"), false));

            // the limit keeps the largest values
            let all = store.get_documents_sorted("people", "age", "desc", None)?;
            assert_eq!(field_values(&documents, "age"), field_values(&all[..10], "age"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_sort_limit_larger_than_collection() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_fake_people(&store, "people", 5)?;

            let documents = store.get_documents_sorted("people", "age", "asc", Some(100))?;
            assert_eq!(documents.len(), 5);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_sort_skips_documents_without_field() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_test_documents(&store, "test")?;

            let documents = store.get_documents_sorted("test", "age", "ascending", None)?;
            assert_eq!(field_values(&documents, "first_name"), vec![Value::from("fn1"), Value::from("fn2")]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_sort_on_embedded_field() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_test_documents(&store, "test")?;

            let documents = store.get_documents_sorted("test", "address.city", "desc", None)?;
            assert_eq!(
                field_values(&documents, "address.city"),
                vec![Value::from("Tver"), Value::from("Omsk"), Value::from("Kazan")]
            );
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_with_filter_and_sort() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_fake_people(&store, "people", 60)?;

            let options = order_by("age", SortOrder::Ascending).limit(5);
            let documents = store.find("people", Some(field("age").gte(30)), &options)?;
            assert!(documents.len() <= 5);
            assert!(documents.iter().all(|d| d.get("age") >= Value::from(30)));
            assert!(is_sorted(field_values(&documents, "age"), true));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_sort_with_malformed_options() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_test_documents(&store, "test")?;

            let result = store.get_documents_sorted("test", "age", "upward", None);
            assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::InvalidQuery));

            let result = store.get_documents_sorted("test", "age", "desc", Some(0));
            assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::InvalidQuery));

            let result = store.get_documents_sorted_ascending("test", "", Some(3));
            assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::InvalidQuery));
            Ok(())
        },
        cleanup,
    )
}
