pub mod object_storage_gcs;

pub use object_storage_gcs::GcsObjectStorage;
