use reqwest::StatusCode;
use thiserror::Error;

use crate::api::TransportError;
use crate::model::error_info::ErrorInfo;
use crate::model::record_id::RecordId;

#[derive(Debug, Error)]
pub enum PanelError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("request rejected with status {status}")]
    Rejected {
        status: StatusCode,
        errors: Vec<ErrorInfo>,
    },

    #[error("unexpected response status {status}")]
    UnexpectedStatus { status: StatusCode },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no form is open")]
    NoOpenForm,

    #[error("no record with code {0} is listed")]
    UnknownRecord(RecordId),
}
