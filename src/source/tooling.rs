//! REST Tooling API record source

use crate::models::{
    ComponentIdPair, CustomFieldRecord, CustomObjectRecord, DependencyRecord,
    FieldDefinitionRecord, QuickActionRecord, ValidationRuleRecord,
};
use crate::source::{RecordSource, SourceError, soql};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// How many ids go into a single IN clause. SOQL statements have a length
/// cap, so org-scale batches are split across queries.
const ID_BATCH: usize = 300;

/// One page of a Tooling API query result.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryResponse<T> {
    records: Vec<T>,
    done: bool,
    next_records_url: Option<String>,
}

/// Record source backed by the REST Tooling API `query` endpoint.
pub struct ToolingApiSource {
    client: reqwest::Client,
    instance_url: Url,
    access_token: String,
    api_version: String,
}

impl ToolingApiSource {
    /// Create a source for the given org instance.
    pub fn new(
        instance_url: &str,
        access_token: String,
        api_version: impl Into<String>,
    ) -> Result<Self> {
        let instance_url =
            Url::parse(instance_url).map_err(|e| SourceError::InvalidUrl(e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            instance_url,
            access_token,
            api_version: api_version.into(),
        })
    }

    /// Create a source reading the access token from an environment variable.
    pub fn from_env(
        instance_url: &str,
        token_var: &str,
        api_version: impl Into<String>,
    ) -> Result<Self> {
        let access_token = std::env::var(token_var)
            .map_err(|_| SourceError::MissingToken(token_var.to_string()))?;
        Self::new(instance_url, access_token, api_version)
    }

    /// Run one query, following `nextRecordsUrl` pagination to completion.
    async fn query<T: DeserializeOwned>(&self, soql: &str) -> Result<Vec<T>> {
        let mut url = self
            .instance_url
            .join(&format!("/services/data/v{}/tooling/query/", self.api_version))
            .context("Failed to build query URL")?;
        url.query_pairs_mut().append_pair("q", soql);

        let mut records = Vec::new();
        let mut next = Some(url);

        while let Some(url) = next.take() {
            tracing::debug!("Tooling query: {}", url);

            let resp = self
                .client
                .get(url.clone())
                .bearer_auth(&self.access_token)
                .send()
                .await
                .with_context(|| format!("Failed to reach {}", url))?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(SourceError::Query {
                    status: status.as_u16(),
                    body,
                }
                .into());
            }

            let page: QueryResponse<T> = resp
                .json()
                .await
                .context("Failed to parse Tooling API response")?;
            records.extend(page.records);

            next = next_page_url(&self.instance_url, page.done, page.next_records_url)?;
        }

        Ok(records)
    }

    /// Run an id-batch query in IN-clause-sized chunks.
    async fn query_chunked<T: DeserializeOwned>(
        &self,
        ids: &[String],
        build_query: impl Fn(&[String]) -> String,
    ) -> Result<Vec<T>> {
        let mut records = Vec::new();
        for soql in batched_queries(ids, build_query) {
            records.extend(self.query(&soql).await?);
        }
        Ok(records)
    }
}

/// Render an id batch as one SOQL statement per IN-clause-sized chunk.
fn batched_queries(ids: &[String], build_query: impl Fn(&[String]) -> String) -> Vec<String> {
    ids.chunks(ID_BATCH).map(|chunk| build_query(chunk)).collect()
}

/// Where to fetch the next result page, if the result is not yet complete.
fn next_page_url(
    base: &Url,
    done: bool,
    next_records_url: Option<String>,
) -> Result<Option<Url>> {
    match (done, next_records_url) {
        (false, Some(path)) => Ok(Some(
            base.join(&path).context("Failed to build pagination URL")?,
        )),
        _ => Ok(None),
    }
}

#[async_trait]
impl RecordSource for ToolingApiSource {
    async fn dependency_records(&self) -> Result<Vec<DependencyRecord>> {
        self.query(&soql::all_dependency_records()).await
    }

    async fn parented_component_ids(&self) -> Result<Vec<ComponentIdPair>> {
        self.query(&soql::parented_component_ids()).await
    }

    async fn custom_fields(&self, ids: &[String]) -> Result<Vec<CustomFieldRecord>> {
        self.query_chunked(ids, |chunk| soql::custom_fields(chunk)).await
    }

    async fn validation_rules(&self, ids: &[String]) -> Result<Vec<ValidationRuleRecord>> {
        self.query_chunked(ids, |chunk| soql::validation_rules(chunk))
            .await
    }

    async fn quick_actions(&self, ids: &[String]) -> Result<Vec<QuickActionRecord>> {
        self.query_chunked(ids, |chunk| soql::quick_actions(chunk)).await
    }

    async fn custom_objects(&self, ids: &[String]) -> Result<Vec<CustomObjectRecord>> {
        self.query_chunked(ids, |chunk| soql::custom_objects(chunk)).await
    }

    async fn field_definitions(
        &self,
        entity_ids: &[String],
    ) -> Result<Vec<FieldDefinitionRecord>> {
        self.query_chunked(entity_ids, |chunk| soql::field_definitions(chunk))
            .await
    }
}
