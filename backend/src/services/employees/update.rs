use super::validation::EmployeeDraft;
use crate::errors::ApiError;
use crate::store::EmployeeStore;
use actix_web::{web, HttpResponse};
use common::responses::MutationResponse;
use log::info;

const UPDATED: &str = "Employee updated successfully";
const STORE_FAILED: &str = "Error updating employee";

/// Handler for `PUT /update/{id}`.
///
/// All five fields are overwritten in one statement; partial updates are not
/// supported. Zero affected rows means the id does not exist.
pub async fn process(
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<i64>,
    payload: web::Json<EmployeeDraft>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let employee = payload.into_inner().validate()?;
    let store = store.into_inner();

    let affected = web::block(move || store.update(id, &employee))
        .await?
        .map_err(ApiError::store(STORE_FAILED))?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    info!("Updated employee {}", id);
    Ok(HttpResponse::Ok().json(MutationResponse {
        message: UPDATED.to_string(),
        id,
    }))
}
