pub mod matching_records;
pub mod migrations;
pub mod pool;
pub mod profiles;

// Keep re-exports unique so downstream crates see a single symbol per helper.
pub use matching_records::{
    MatchingRecord, MatchingRecordInsert, MatchingRecordStorageError, fetch_matching_record,
    fetch_records_for_job, upsert_matching_record,
};
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPoolError, PgPool, create_pool_from_url, create_pool_from_url_checked};
pub use profiles::{ProfileFetchError, fetch_applicant_ids, fetch_profile_snapshot};
