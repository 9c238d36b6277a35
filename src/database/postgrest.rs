// ABOUTME: PostgREST client for the hosted exercise table (Supabase REST API)
// ABOUTME: Implements ExerciseRepository over reqwest with service-key authentication
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

//! PostgREST exercise store
//!
//! All operations target `<base>/rest/v1/<table>`:
//!
//! - counts use `HEAD` with `Prefer: count=exact` and read the total from
//!   `Content-Range` (`0-24/3573` or `*/0`)
//! - filters use PostgREST operators (`is_active=eq.false`, `name=ilike.*push*`)
//! - inserts post a JSON array with `Prefer: return=minimal`

use super::{DatabaseError, ExerciseRepository};
use crate::config::StoreConfig;
use crate::constants::store::{
    APIKEY_HEADER, COLUMN_EXERCISE_ID, COLUMN_IS_ACTIVE, COLUMN_NAME, CONTENT_RANGE_HEADER,
    PREFER_COUNT_EXACT, PREFER_HEADER, PREFER_RETURN_MINIMAL, PREFER_RETURN_REPRESENTATION,
    REST_PREFIX, SEARCH_COLUMNS,
};
use crate::errors::{AppError, AppResult};
use crate::models::{ExerciseRow, StoredExercise};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use url::Url;

#[derive(Debug, Deserialize)]
struct IdRow {
    exercise_id: String,
}

/// Exercise store backed by a PostgREST endpoint
pub struct PostgrestExerciseStore {
    http_client: Client,
    table_url: Url,
    service_key: String,
}

impl PostgrestExerciseStore {
    /// Create a store client from explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the table URL cannot be built and
    /// `InternalError` if the HTTP client cannot be constructed
    pub fn new(config: StoreConfig) -> AppResult<Self> {
        let table_url = config
            .base_url
            .join(&format!("{REST_PREFIX}/{}", config.table))
            .map_err(|e| AppError::config_invalid(format!("cannot build table URL: {e}")))?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("exercise-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            table_url,
            service_key: config.service_key,
        })
    }

    /// Full URL of the exercise table endpoint
    #[must_use]
    pub const fn table_url(&self) -> &Url {
        &self.table_url
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.http_client
            .request(method, self.table_url.clone())
            .header(APIKEY_HEADER, &self.service_key)
            .bearer_auth(&self.service_key)
    }

    async fn count_where(&self, filters: &[(&str, &str)]) -> Result<u64, DatabaseError> {
        let response = self
            .request(Method::HEAD)
            .query(&[("select", COLUMN_EXERCISE_ID)])
            .query(filters)
            .header(PREFER_HEADER, PREFER_COUNT_EXACT)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let content_range = response
            .headers()
            .get(CONTENT_RANGE_HEADER)
            .ok_or_else(|| DatabaseError::InvalidResponse {
                context: "count response has no Content-Range header".to_owned(),
            })?
            .to_str()
            .map_err(|e| DatabaseError::InvalidResponse {
                context: format!("Content-Range is not valid text: {e}"),
            })?;

        parse_content_range_total(content_range)
    }
}

#[async_trait]
impl ExerciseRepository for PostgrestExerciseStore {
    async fn probe(&self) -> Result<u64, DatabaseError> {
        self.count_where(&[]).await
    }

    async fn list_identifiers(&self) -> Result<Vec<String>, DatabaseError> {
        let response = self
            .request(Method::GET)
            .query(&[("select", COLUMN_EXERCISE_ID)])
            .send()
            .await?;
        let rows: Vec<IdRow> = ensure_success(response).await?.json().await?;

        debug!("Listed {} existing exercise identifiers", rows.len());
        Ok(rows.into_iter().map(|row| row.exercise_id).collect())
    }

    async fn insert_batch(&self, rows: &[ExerciseRow]) -> Result<(), DatabaseError> {
        if rows.is_empty() {
            return Ok(());
        }

        let response = self
            .request(Method::POST)
            .header(PREFER_HEADER, PREFER_RETURN_MINIMAL)
            .json(rows)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn find_inactive_by_name_substring(
        &self,
        fragment: &str,
    ) -> Result<Vec<StoredExercise>, DatabaseError> {
        let pattern = format!("ilike.*{}*", escape_like(fragment));
        let response = self
            .request(Method::GET)
            .query(&[
                ("select", SEARCH_COLUMNS),
                (COLUMN_IS_ACTIVE, "eq.false"),
                (COLUMN_NAME, pattern.as_str()),
            ])
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    async fn activate_by_id(&self, exercise_id: &str) -> Result<(), DatabaseError> {
        let id_filter = format!("eq.{exercise_id}");
        let response = self
            .request(Method::PATCH)
            .query(&[
                (COLUMN_EXERCISE_ID, id_filter.as_str()),
                ("select", COLUMN_EXERCISE_ID),
            ])
            .header(PREFER_HEADER, PREFER_RETURN_REPRESENTATION)
            .json(&json!({ COLUMN_IS_ACTIVE: true }))
            .send()
            .await?;
        let updated: Vec<IdRow> = ensure_success(response).await?.json().await?;

        if updated.is_empty() {
            return Err(DatabaseError::NotFound {
                entity: "exercise",
                id: exercise_id.to_owned(),
            });
        }
        Ok(())
    }

    async fn count_active(&self) -> Result<u64, DatabaseError> {
        self.count_where(&[(COLUMN_IS_ACTIVE, "eq.true")]).await
    }
}

/// Turn a non-2xx response into `RequestRejected`, keeping the body for diagnostics
async fn ensure_success(response: Response) -> Result<Response, DatabaseError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(DatabaseError::RequestRejected {
        status: status.as_u16(),
        body,
    })
}

/// Total row count from a `Content-Range` value such as `0-24/3573` or `*/0`
fn parse_content_range_total(value: &str) -> Result<u64, DatabaseError> {
    let (_, total) = value
        .rsplit_once('/')
        .ok_or_else(|| DatabaseError::InvalidResponse {
            context: format!("malformed Content-Range: {value}"),
        })?;

    total
        .trim()
        .parse()
        .map_err(|_| DatabaseError::InvalidResponse {
            context: format!("Content-Range has no exact total: {value}"),
        })
}

/// Escape LIKE metacharacters so the fragment matches literally
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
