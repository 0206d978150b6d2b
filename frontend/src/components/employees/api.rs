//! HTTP client for the employees API.
//!
//! The frontend is served by the same server, so every path is relative to
//! the page origin.

use super::state::Submission;
use common::model::employee::{Employee, EmployeeFormData};
use common::responses::{ErrorResponse, MutationResponse};
use gloo_net::http::{Request, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    /// The request could not be sent or the body could not be decoded.
    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),
    /// The server answered with a non-success status.
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
}

pub async fn fetch_employees() -> Result<Vec<Employee>, RequestError> {
    let response = Request::get("/employees").send().await?;
    Ok(expect_success(response).await?.json().await?)
}

pub async fn submit(submission: &Submission) -> Result<MutationResponse, RequestError> {
    match submission {
        Submission::Create(form) => create_employee(form).await,
        Submission::Update { id, form } => update_employee(*id, form).await,
    }
}

pub async fn create_employee(form: &EmployeeFormData) -> Result<MutationResponse, RequestError> {
    let response = Request::post("/create").json(form)?.send().await?;
    Ok(expect_success(response).await?.json().await?)
}

pub async fn update_employee(
    id: i64,
    form: &EmployeeFormData,
) -> Result<MutationResponse, RequestError> {
    let response = Request::put(&format!("/update/{}", id))
        .json(form)?
        .send()
        .await?;
    Ok(expect_success(response).await?.json().await?)
}

pub async fn delete_employee(id: i64) -> Result<MutationResponse, RequestError> {
    let response = Request::delete(&format!("/delete/{}", id)).send().await?;
    Ok(expect_success(response).await?.json().await?)
}

/// Turns a non-2xx response into `RequestError::Status`, using the server's
/// JSON message when there is one.
async fn expect_success(response: Response) -> Result<Response, RequestError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(ErrorResponse {
            message,
            error: Some(detail),
        }) => format!("{} ({})", message, detail),
        Ok(ErrorResponse { message, .. }) => message,
        Err(_) => response.status_text(),
    };
    Err(RequestError::Status { status, message })
}
