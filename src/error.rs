use std::fmt::{Debug, Display};
use std::io::Error as IoError;

use actix_multipart::MultipartError;
use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derivative::Derivative;
use jsonwebtoken::errors::Error as TokenError;
use serde::{Serialize, Serializer};
use tracing::error;

use crate::device::DeviceId;

#[derive(Debug, Serialize, Derivative)]
#[derivative(PartialEq, Eq)]
#[serde(untagged)]
pub enum Error {
    // 400
    #[serde(serialize_with = "display")]
    InvalidJson(#[derivative(PartialEq = "ignore")] JsonPayloadError),
    #[serde(serialize_with = "display")]
    InvalidPath(#[derivative(PartialEq = "ignore")] PathError),
    #[serde(serialize_with = "display")]
    InvalidQuery(#[derivative(PartialEq = "ignore")] QueryPayloadError),
    #[serde(serialize_with = "display")]
    InvalidMultipart(#[derivative(PartialEq = "ignore")] MultipartError),
    MissingVideoFile,
    MissingFilename,
    InvalidFileType {
        extension: String,
    },

    // 401
    InvalidCredentials,
    MissingAuthToken,
    #[serde(serialize_with = "display")]
    InvalidAuthToken(#[derivative(PartialEq = "ignore")] TokenError),

    // 404
    PathNotFound,
    DeviceNotFound {
        device_id: DeviceId,
    },

    // 413
    FileTooLarge {
        limit_bytes: u64,
    },

    // 500
    ExistentialState(String),
    #[serde(serialize_with = "display")]
    FailedToSignToken(#[derivative(PartialEq = "ignore")] TokenError),
    #[serde(serialize_with = "display")]
    IoError(#[derivative(PartialEq = "ignore")] IoError),
}

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "E4001000",
            Error::InvalidPath(_) => "E4001001",
            Error::InvalidQuery(_) => "E4001002",
            Error::InvalidMultipart(_) => "E4001003",
            Error::MissingVideoFile => "E4001004",
            Error::MissingFilename => "E4001005",
            Error::InvalidFileType { .. } => "E4001006",
            Error::InvalidCredentials => "E4011000",
            Error::MissingAuthToken => "E4011001",
            Error::InvalidAuthToken(_) => "E4011002",
            Error::PathNotFound => "E4041000",
            Error::DeviceNotFound { .. } => "E4041001",
            Error::FileTooLarge { .. } => "E4131000",
            Error::ExistentialState(_) => "E5001000",
            Error::FailedToSignToken(_) => "E5001001",
            Error::IoError(_) => "E5001002",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "The given json could not be parsed",
            Error::InvalidPath(_) => "The given path could not be parsed",
            Error::InvalidQuery(_) => "The given query could not be parsed",
            Error::InvalidMultipart(_) => "The given multipart payload could not be parsed",
            Error::MissingVideoFile => "The request does not contain a video file",
            Error::MissingFilename => "The uploaded file does not have a filename",
            Error::InvalidFileType { .. } => "The uploaded file type is not allowed",
            Error::InvalidCredentials => "The given credentials are invalid",
            Error::MissingAuthToken => "The request does not carry a bearer token",
            Error::InvalidAuthToken(_) => "The given bearer token is invalid",
            Error::PathNotFound => "The requested path was not found",
            Error::DeviceNotFound { .. } => "The requested device was not found",
            Error::FileTooLarge { .. } => "The uploaded file exceeds the size limit",
            Error::ExistentialState(_) => "The server detected an invalid state",
            Error::FailedToSignToken(_) => "An error occurred when issuing a token",
            Error::IoError(_) => "An error occurred during an I/O operation",
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Error::InvalidMultipart(_) => StatusCode::BAD_REQUEST,
            Error::MissingVideoFile => StatusCode::BAD_REQUEST,
            Error::MissingFilename => StatusCode::BAD_REQUEST,
            Error::InvalidFileType { .. } => StatusCode::BAD_REQUEST,
            Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Error::MissingAuthToken => StatusCode::UNAUTHORIZED,
            Error::InvalidAuthToken(_) => StatusCode::UNAUTHORIZED,
            Error::PathNotFound => StatusCode::NOT_FOUND,
            Error::DeviceNotFound { .. } => StatusCode::NOT_FOUND,
            Error::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Error::ExistentialState(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::FailedToSignToken(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct Envelope<'a> {
            error_code: &'static str,
            error_message: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            error_meta: Option<&'a Error>,
        }

        // Internal detail stays in the logs; callers only see the
        // sanitized code and message for server-side failures.
        let meta = if self.status_code().is_server_error() {
            error!("internal error while handling request: {:?}", self);
            None
        } else {
            Some(self)
        };

        HttpResponse::build(self.status_code()).json(&Envelope {
            error_code: self.error_code(),
            error_message: self.error_message(),
            error_meta: meta,
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}

impl From<MultipartError> for Error {
    fn from(error: MultipartError) -> Error {
        Error::InvalidMultipart(error)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::IoError(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidJson(err) => Some(err),
            Error::InvalidPath(err) => Some(err),
            Error::InvalidQuery(err) => Some(err),
            Error::InvalidAuthToken(err) => Some(err),
            Error::FailedToSignToken(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

fn display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
