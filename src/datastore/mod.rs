mod datastore;
mod error;

pub use datastore::TaskStore;
pub use error::DataStoreError;
