// Application records: submission, storage, listing and retrieval.
// Persistence goes through the `ApplicationStore` trait held in `AppState`.

pub mod handlers;
pub mod record;
pub mod store;
pub mod submission;
