// src/web/handlers.rs
//! Project CRUD handlers backed by the local store.

use chrono::Utc;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use crate::error::Error;
use crate::persist::{LocalStore, ProjectStore};
use crate::types::{Project, ProjectMetadata};
use crate::web::types::{error_response, ApiError, DataResponse, UpdateProjectRequest};

pub async fn list_metadata_handler(
    store: &State<LocalStore>,
) -> Result<Json<DataResponse<Vec<ProjectMetadata>>>, ApiError> {
    match store.list_metadata().await {
        Ok(listing) => Ok(DataResponse::new(listing)),
        Err(err) => {
            error!("metadata listing failed: {err}");
            Err(error_response(err))
        }
    }
}

pub async fn get_project_handler(
    store: &State<LocalStore>,
    id: &str,
) -> Result<Json<DataResponse<Project>>, ApiError> {
    store
        .load_project(id)
        .await
        .map(DataResponse::new)
        .map_err(error_response)
}

pub async fn create_project_handler(
    store: &State<LocalStore>,
    project: Json<Project>,
) -> Result<Json<DataResponse<Project>>, ApiError> {
    let project = project.into_inner();

    if store.load_project(&project.id).await.is_ok() {
        return Err(error_response(Error::persistence(format!(
            "project {} already exists",
            project.id
        ))));
    }

    info!("creating project {} ({})", project.id, project.template);
    store
        .save_project(&project)
        .await
        .map_err(error_response)?;
    Ok(DataResponse::new(project))
}

pub async fn update_project_handler(
    store: &State<LocalStore>,
    id: &str,
    request: Json<UpdateProjectRequest>,
) -> Result<Json<DataResponse<Project>>, ApiError> {
    let mut project = store.load_project(id).await.map_err(error_response)?;

    let request = request.into_inner();
    if let Some(name) = request.name {
        project.name = name;
    }
    if let Some(template) = request.template {
        project.template = template;
    }
    if let Some(resume) = request.resume {
        project.resume = resume;
    }
    if let Some(styles) = request.styles {
        project.styles = styles;
    }
    project.updated_at = Utc::now().timestamp_millis();

    store
        .save_project(&project)
        .await
        .map_err(error_response)?;
    Ok(DataResponse::new(project))
}

pub async fn delete_project_handler(
    store: &State<LocalStore>,
    id: &str,
) -> Result<Json<DataResponse<serde_json::Value>>, ApiError> {
    store.delete_project(id).await.map_err(error_response)?;
    info!("deleted project {id}");
    Ok(DataResponse::new(serde_json::json!({ "id": id })))
}
