// ABOUTME: Structured error types for exercise store operations
// ABOUTME: Separates transport, rejection, and response-shape failures with context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Catalog Contributors

use thiserror::Error;

/// Errors returned by an exercise store
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The request never produced a response (DNS, TLS, connect, timeout)
    #[error("connection failed: {context}")]
    ConnectionFailed {
        /// Transport-level detail
        context: String,
    },

    /// The store answered with a non-success status
    #[error("request rejected with HTTP {status}: {body}")]
    RequestRejected {
        /// HTTP status code
        status: u16,
        /// Response body returned by the store
        body: String,
    },

    /// The store answered successfully but the payload was not understood
    #[error("invalid response: {context}")]
    InvalidResponse {
        /// What was expected and what arrived
        context: String,
    },

    /// No row matched the identifier
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record
        entity: &'static str,
        /// Identifier that was looked up
        id: String,
    },

    /// Any other query failure
    #[error("query failed: {context}")]
    QueryError {
        /// Failure detail
        context: String,
    },
}

#[cfg(feature = "store-errors")]
impl From<reqwest::Error> for DatabaseError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() || error.is_connect() {
            Self::ConnectionFailed {
                context: error.to_string(),
            }
        } else if error.is_decode() {
            Self::InvalidResponse {
                context: error.to_string(),
            }
        } else {
            Self::QueryError {
                context: error.to_string(),
            }
        }
    }
}
