use actix_web::web::Bytes;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::modules::media::application::ports::outgoing::{ObjectStorage, StorageError};

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn map_delete_error(msg: &str) -> StorageError {
    let m = msg.to_lowercase();

    if m.contains("404") || m.contains("not found") || m.contains("no such object") {
        StorageError::NotFound
    } else {
        StorageError::Unavailable(msg.to_string())
    }
}

/// Internal seam so the adapter is testable without google-cloud-storage types.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String>;

    async fn delete_object(&self, bucket_resource: &str, object_name: &str)
        -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.0
            .write_object(bucket_resource, object_name, content_type, bytes)
            .await
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.0.delete_object(bucket_resource, object_name).await
    }
}

#[derive(Clone)]
pub struct GcsObjectStorage {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
    service_account_json: Option<String>,
}

impl GcsObjectStorage {
    /// Client is initialized lazily on first use.
    pub fn new(bucket: impl Into<String>, service_account_json: Option<String>) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket: bucket.into(),
            service_account_json,
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, StorageError> {
        self.client
            .get_or_try_init(|| async {
                let real = RealGcsClient::new(self.service_account_json.as_deref()).await?;
                Ok::<_, String>(Box::new(real) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
            .map_err(StorageError::Unavailable)
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket: &str) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket: bucket.to_string(),
            service_account_json: None,
        }
    }
}

#[async_trait]
impl ObjectStorage for GcsObjectStorage {
    async fn put_public_object(
        &self,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        let client = self.get_client().await?;

        client
            .write_object(&bucket_resource(&self.bucket), object_name, content_type, bytes)
            .await
            .map_err(|e| {
                tracing::error!(object = object_name, "GCS write failed: {}", e);
                StorageError::Unavailable(e)
            })
    }

    async fn delete_object(&self, object_name: &str) -> Result<(), StorageError> {
        let client = self.get_client().await?;

        client
            .delete_object(&bucket_resource(&self.bucket), object_name)
            .await
            .map_err(|e| map_delete_error(&e))
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
    control: google_cloud_storage::client::StorageControl,
}

impl RealGcsClient {
    async fn new(service_account_json: Option<&str>) -> Result<Self, String> {
        tracing::info!("Initializing GCS client...");

        let credentials = match service_account_json {
            Some(raw) => {
                let key: serde_json::Value =
                    serde_json::from_str(raw).map_err(|e| format!("invalid service account: {e}"))?;
                Some(
                    google_cloud_auth::credentials::service_account::Builder::new(key)
                        .build()
                        .map_err(|e| e.to_string())?,
                )
            }
            None => None,
        };

        let mut storage_builder = google_cloud_storage::client::Storage::builder();
        let mut control_builder = google_cloud_storage::client::StorageControl::builder();
        if let Some(creds) = credentials {
            storage_builder = storage_builder.with_credentials(creds.clone());
            control_builder = control_builder.with_credentials(creds);
        }

        let storage = storage_builder.build().await.map_err(|e| {
            tracing::error!("Failed to build GCS storage client: {:?}", e);
            e.to_string()
        })?;
        let control = control_builder.build().await.map_err(|e| {
            tracing::error!("Failed to build GCS control client: {:?}", e);
            e.to_string()
        })?;

        tracing::info!("GCS clients created");

        Ok(Self { storage, control })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.storage
            .write_object(
                bucket_resource.to_string(),
                object_name.to_string(),
                Bytes::from(bytes),
            )
            .set_content_type(content_type.to_string())
            .set_predefined_acl("publicRead")
            .send_buffered()
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.control
            .delete_object()
            .set_bucket(bucket_resource.to_string())
            .set_object(object_name.to_string())
            .send()
            .await
            .map_err(|e| e.to_string())
    }
}
