mod create_test;
mod delete_test;
mod filter_test;
mod get_test;
mod scenario_test;
mod sort_test;
mod store_failure_test;
mod update_test;
