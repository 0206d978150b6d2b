use crate::errors::ApiError;
use crate::store::EmployeeStore;
use actix_web::{web, HttpResponse};
use common::responses::MutationResponse;
use log::info;

const DELETED: &str = "Employee deleted successfully";
const STORE_FAILED: &str = "Error deleting employee";

/// Handler for `DELETE /delete/{id}`. Deleting twice reports 404 the second time.
pub async fn process(
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let store = store.into_inner();

    let affected = web::block(move || store.delete(id))
        .await?
        .map_err(ApiError::store(STORE_FAILED))?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    info!("Deleted employee {}", id);
    Ok(HttpResponse::Ok().json(MutationResponse {
        message: DELETED.to_string(),
        id,
    }))
}
