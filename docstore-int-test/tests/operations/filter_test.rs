use docstore::common::Value;
use docstore::errors::ErrorKind;
use docstore::filter::FilterOperator;
use docstore_int_test::test_util::{cleanup, create_test_context, insert_fake_people, insert_test_documents, now, parse_timestamp, run_test};

#[test]
fn test_filter_with_each_operator() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_test_documents(&store, "test")?;

            let count = |operator: &str, value: Value| -> docstore::errors::DocStoreResult<usize> {
                Ok(store.get_documents_with_filter("test", "age", operator, value)?.len())
            };

            assert_eq!(count("==", Value::from(24))?, 1);
            assert_eq!(count("!=", Value::from(24))?, 1);
            assert_eq!(count(">", Value::from(24))?, 1);
            assert_eq!(count(">=", Value::from(24))?, 2);
            assert_eq!(count("<", Value::from(35))?, 1);
            assert_eq!(count("<=", Value::from(35))?, 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_filter_with_typed_operator() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_test_documents(&store, "test")?;

            let documents =
                store.get_documents_with_filter("test", "last_name", FilterOperator::Equals, "ln2")?;
            assert_eq!(documents.len(), 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_filter_on_timestamps() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_test_documents(&store, "test")?;

            let before_now = store.get_documents_with_filter("test", "birth_day", "<", now())?;
            assert_eq!(before_now.len(), 3);

            let after_now = store.get_documents_with_filter("test", "birth_day", ">", now())?;
            assert!(after_now.is_empty());

            let cutoff = parse_timestamp("2011-01-01T00:00:00Z");
            let later = store.get_documents_with_filter("test", "birth_day", ">=", cutoff)?;
            assert_eq!(later.len(), 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_filter_on_embedded_and_array_fields() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_test_documents(&store, "test")?;

            let kazan = store.get_documents_with_filter("test", "address.city", "==", "Kazan")?;
            assert_eq!(kazan.len(), 1);
            assert_eq!(kazan[0].get("first_name"), Value::from("fn1"));

            let second_is_four = store.get_documents_with_filter("test", "arr.1", "==", 4)?;
            assert_eq!(second_is_four.len(), 2);

            let users = store.get_documents_with_filter("test", "tags", "array-contains", "user")?;
            assert_eq!(users.len(), 2);

            let admins = store.get_documents_with_filter("test", "tags", "array-contains", "admin")?;
            assert_eq!(admins.len(), 1);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_filter_results_satisfy_predicate() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_fake_people(&store, "people", 100)?;

            let young = store.get_documents_with_filter("people", "age", "<=", 25)?;
            assert!(young.iter().all(|d| d.get("age") <= Value::from(25)));

            let all = store.get_all_documents("people")?;
            let expected = all.iter().filter(|d| d.get("age") <= Value::from(25)).count();
            assert_eq!(young.len(), expected);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_filter_with_unsupported_operator() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_test_documents(&store, "test")?;

            for operator in ["in", "not-in", "array-contains-any", "=<", ""] {
                let result = store.get_documents_with_filter("test", "age", operator, 25);
                assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::InvalidQuery));
            }
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_filter_range_against_null() {
    run_test(
        create_test_context,
        |ctx| {
            let result = ctx.store().get_documents_with_filter("test", "age", ">", Value::Null);
            assert_eq!(result.err().map(|e| e.kind().clone()), Some(ErrorKind::InvalidQuery));
            Ok(())
        },
        cleanup,
    )
}
