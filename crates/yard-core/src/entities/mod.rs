//! Entity structs for Switchyard domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. None of them are persisted client-side:
//! they are either submitted to or read from the backend API.

mod analytics;
mod api_key;
mod member;

pub use analytics::{AnalyticsData, AnalyticsDataResponse, ModelData, ProjectData, ProviderData};
pub use api_key::ApiKey;
pub use member::Member;
