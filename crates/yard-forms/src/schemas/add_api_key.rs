use yard_core::entities::ApiKey;
use yard_core::enums::Provider;
use yard_core::errors::CoreError;

use crate::form::{DialogForm, FormValues, ValidationMode};
use crate::rule::Rule;
use crate::schema::Schema;

pub const PROVIDER: &str = "provider";
pub const API_KEY: &str = "api_key";

const PROVIDERS: &[&str] = &["openai", "anthropic", "gemini"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiKeyValues {
    pub provider: String,
    pub api_key: String,
}

impl FormValues for ApiKeyValues {
    const FIELDS: &'static [&'static str] = &[PROVIDER, API_KEY];

    fn get(&self, field: &str) -> Option<&str> {
        match field {
            PROVIDER => Some(&self.provider),
            API_KEY => Some(&self.api_key),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: String) -> bool {
        match field {
            PROVIDER => self.provider = value,
            API_KEY => self.api_key = value,
            _ => return false,
        }
        true
    }
}

/// "Add API Key" dialog: one key per provider, key shape checked against the
/// provider selected in the same form.
///
/// The existing keys are supplied by the caller and never fetched here.
#[derive(Debug)]
pub struct AddApiKeyForm {
    existing_keys: Vec<ApiKey>,
    schema: Schema<ApiKeyValues>,
}

impl AddApiKeyForm {
    #[must_use]
    pub fn new(existing_keys: Vec<ApiKey>) -> Self {
        let schema = build_schema(&existing_keys);
        Self {
            existing_keys,
            schema,
        }
    }

    #[must_use]
    pub fn existing_keys(&self) -> &[ApiKey] {
        &self.existing_keys
    }

    /// Replace the existing-key list. Use through
    /// [`crate::Dialog::update_form`] so the provider field is re-checked.
    pub fn set_existing_keys(&mut self, existing_keys: Vec<ApiKey>) {
        self.schema = build_schema(&existing_keys);
        self.existing_keys = existing_keys;
    }

    /// Whether the selected provider already has a stored key. The key input
    /// is disabled while this holds.
    #[must_use]
    pub fn provider_already_exists(&self, values: &ApiKeyValues) -> bool {
        self.existing_keys
            .iter()
            .any(|k| k.provider.as_str() == values.provider)
    }
}

fn build_schema(existing_keys: &[ApiKey]) -> Schema<ApiKeyValues> {
    let taken: Vec<Provider> = existing_keys.iter().map(|k| k.provider).collect();

    Schema::<ApiKeyValues>::new()
        .rule(Rule::required(PROVIDER, "Provider is required"))
        .rule(Rule::one_of(PROVIDER, PROVIDERS))
        .rule(
            Rule::custom(
                PROVIDER,
                "duplicate_provider",
                "API key for this provider already exists",
                move |provider, _| !taken.iter().any(|t| t.as_str() == provider),
            )
            .skip_empty(),
        )
        .rule(Rule::required(API_KEY, "API key is required"))
        .rule(Rule::custom(
            API_KEY,
            "valid_format",
            "API key does not match selected provider",
            |key, values: &ApiKeyValues| {
                values
                    .provider
                    .parse::<Provider>()
                    .is_ok_and(|provider| provider.accepts_key(key))
            },
        ))
        .summarize(API_KEY)
}

impl DialogForm for AddApiKeyForm {
    type Values = ApiKeyValues;
    type Output = ApiKey;

    const NAME: &'static str = "add_api_key";
    const TITLE: &'static str = "Add API Key";
    const SUBMIT_LABEL: &'static str = "Add API Key";
    const BUSY_LABEL: &'static str = "Adding...";

    fn defaults(&self) -> ApiKeyValues {
        ApiKeyValues::default()
    }

    fn schema(&self) -> &Schema<ApiKeyValues> {
        &self.schema
    }

    fn mode(&self) -> ValidationMode {
        ValidationMode::OnChange
    }

    fn dependents(&self, field: &str) -> &'static [&'static str] {
        if field == PROVIDER { &[API_KEY] } else { &[] }
    }

    fn context_dependents(&self) -> &'static [&'static str] {
        &[PROVIDER]
    }

    fn output(&self, values: &ApiKeyValues) -> Result<ApiKey, CoreError> {
        Ok(ApiKey::new(values.provider.parse()?, values.api_key.clone()))
    }
}
