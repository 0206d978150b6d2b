//! # Employee Service Module
//!
//! Routes for the employee records API. Each operation lives in its own
//! sub-module with a `process` handler; all of them reach the database
//! through the `EmployeeStore` registered as application data.
//!
//! ## Registered Routes:
//!
//! *   **`POST /create`**: validates the body and inserts a row.
//!     `201 {message, id}`, `400` on a missing field, `500` on store failure.
//! *   **`GET /employees`**: every row, newest id first. `200 [Employee]`.
//! *   **`PUT /update/{id}`**: overwrites all five fields of a row.
//!     `200 {message, id}`, `400`, `404` when no row has that id, `500`.
//! *   **`DELETE /delete/{id}`**: removes a row. `200 {message, id}`, `404`, `500`.

mod create;
mod delete;
mod list;
mod update;
mod validation;

#[cfg(test)]
mod tests;

use crate::errors::unmatched_route;
use actix_web::web::{delete, get, post, put, resource, scope, to};
use actix_web::{Resource, Scope};

/// The employee routes sit at the service root.
const API_PATH: &str = "";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(api_resource("/create").route(post().to(create::process)))
        .service(api_resource("/employees").route(get().to(list::process)))
        .service(api_resource("/update/{id}").route(put().to(update::process)))
        .service(api_resource("/delete/{id}").route(delete().to(delete::process)))
}

/// A known path with the wrong method is reported like an unknown path.
fn api_resource(path: &str) -> Resource {
    resource(path).default_service(to(unmatched_route))
}
