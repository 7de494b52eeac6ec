// src/web/types.rs
//! Wire types for the project store API. Success is `{ "data": ... }`,
//! failure is `{ "message": ... }` with a matching HTTP status. This is the exact
//! envelope [`crate::persist::RemoteStore`] consumes.

use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{ResumeDocument, StyleSettings, TemplateKind};

#[derive(Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Json<Self> {
        Json(Self { data })
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Update payload: the client sends the editable slice of a project, never
/// id or `createdAt`.
#[derive(Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub template: Option<TemplateKind>,
    pub resume: Option<ResumeDocument>,
    pub styles: Option<StyleSettings>,
}

pub type ApiError = Custom<Json<MessageResponse>>;

pub fn error_response(err: Error) -> ApiError {
    let status = match &err {
        Error::NotFound(_) => Status::NotFound,
        Error::InvalidStyleValue { .. } => Status::UnprocessableEntity,
        Error::Persistence(_) => Status::InternalServerError,
        Error::MeasurementUnavailable => Status::ServiceUnavailable,
    };
    Custom(
        status,
        Json(MessageResponse {
            message: err.to_string(),
        }),
    )
}
