// src/web/mod.rs
//! The project store REST service.
//!
//! Five JSON endpoints under `/api`: metadata listing, fetch, create,
//! update, delete, plus a health probe. Browser clients hit this from
//! another origin, so permissive CORS headers ride on every response.

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::serde::json::Json;
use rocket::{catch, catchers, delete, get, options, post, put, routes, Request, Response, State};
use std::path::Path;
use tracing::info;

use crate::persist::LocalStore;
use crate::types::{Project, ProjectMetadata};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, PUT, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/projects/metadata")]
pub async fn list_metadata(
    store: &State<LocalStore>,
) -> Result<Json<DataResponse<Vec<ProjectMetadata>>>, ApiError> {
    handlers::list_metadata_handler(store).await
}

#[get("/projects/<id>")]
pub async fn get_project(
    store: &State<LocalStore>,
    id: &str,
) -> Result<Json<DataResponse<Project>>, ApiError> {
    handlers::get_project_handler(store, id).await
}

#[post("/projects", data = "<project>")]
pub async fn create_project(
    store: &State<LocalStore>,
    project: Json<Project>,
) -> Result<Json<DataResponse<Project>>, ApiError> {
    handlers::create_project_handler(store, project).await
}

#[put("/projects/<id>", data = "<request>")]
pub async fn update_project(
    store: &State<LocalStore>,
    id: &str,
    request: Json<UpdateProjectRequest>,
) -> Result<Json<DataResponse<Project>>, ApiError> {
    handlers::update_project_handler(store, id, request).await
}

#[delete("/projects/<id>")]
pub async fn delete_project(
    store: &State<LocalStore>,
    id: &str,
) -> Result<Json<DataResponse<serde_json::Value>>, ApiError> {
    handlers::delete_project_handler(store, id).await
}

#[get("/health")]
pub fn health() -> Json<DataResponse<&'static str>> {
    Json(DataResponse { data: "ok" })
}

// Preflight requests only need the CORS headers the fairing adds.
#[options("/<_..>")]
pub fn all_options() {}

#[catch(404)]
fn not_found() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Resource not found".to_string(),
    })
}

#[catch(500)]
fn internal_error() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Internal server error".to_string(),
    })
}

pub async fn start_web_server(database_path: &Path, port: u16) -> Result<()> {
    let store = LocalStore::open(database_path).await?;

    info!("Starting resume project API server");
    info!("Database: {}", database_path.display());
    info!("Listening on http://0.0.0.0:{port}");

    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"));

    let _rocket = rocket::custom(figment)
        .attach(Cors)
        .manage(store)
        .register("/api", catchers![not_found, internal_error])
        .mount(
            "/api",
            routes![
                list_metadata,
                get_project,
                create_project,
                update_project,
                delete_project,
                health,
                all_options,
            ],
        )
        .launch()
        .await?;

    Ok(())
}
