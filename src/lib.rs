//! Unofficial typed client for the iconik media management API.
//!
//! ```no_run
//! # async fn run() -> Result<(), iconik_api::Error> {
//! use iconik_api::Client;
//!
//! let client = Client::new("app-id", "auth-token")?;
//! let resp = client.assets().get("asset-id").await?;
//! if resp.ok() {
//!     if let Some(asset) = resp.data {
//!         println!("{:?}", asset.title);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod assets;
mod client;
mod collections;
mod errors;
mod files;
mod metadata;
mod paths;
mod query;
mod search;
pub mod types;

pub use self::assets::AssetsApi;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::collections::CollectionsApi;
pub use self::errors::Error;
pub use self::files::{FilesApi, GCS_UPLOAD_ID_HEADER};
pub use self::metadata::MetadataApi;
pub use self::query::{PageQuery, SegmentQuery};
pub use self::search::SearchApi;
