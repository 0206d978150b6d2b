use super::validation::EmployeeDraft;
use crate::errors::ApiError;
use crate::store::EmployeeStore;
use actix_web::{web, HttpResponse};
use common::responses::MutationResponse;
use log::info;

const CREATED: &str = "Employee registered successfully";
const STORE_FAILED: &str = "Error registering employee";

/// Handler for `POST /create`.
pub async fn process(
    store: web::Data<dyn EmployeeStore>,
    payload: web::Json<EmployeeDraft>,
) -> Result<HttpResponse, ApiError> {
    let employee = payload.into_inner().validate()?;
    let store = store.into_inner();

    let id = web::block(move || store.insert(&employee))
        .await?
        .map_err(ApiError::store(STORE_FAILED))?;

    info!("Registered employee {}", id);
    Ok(HttpResponse::Created().json(MutationResponse {
        message: CREATED.to_string(),
        id,
    }))
}
