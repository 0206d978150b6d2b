use crate::errors::ApiError;
use crate::store::EmployeeStore;
use actix_web::{web, HttpResponse};

const STORE_FAILED: &str = "Error fetching employees";

/// Handler for `GET /employees`.
pub async fn process(store: web::Data<dyn EmployeeStore>) -> Result<HttpResponse, ApiError> {
    let store = store.into_inner();
    let employees = web::block(move || store.list_all())
        .await?
        .map_err(ApiError::store(STORE_FAILED))?;

    Ok(HttpResponse::Ok().json(employees))
}
