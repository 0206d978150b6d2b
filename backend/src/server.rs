use crate::errors;
use crate::services;
use crate::static_files;
use crate::store::EmployeeStore;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware, web, App};
use std::sync::Arc;

const JSON_LIMIT: usize = 64 * 1024; // 64 KB

/// Builds the application around an injected store.
///
/// `main` calls this once per worker with the process-wide store; tests call
/// it with in-memory or failing stores.
pub fn build_app(
    store: Arc<dyn EmployeeStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(errors::internal_error_handlers())
        .wrap(middleware::Logger::default())
        .app_data(web::Data::from(store))
        .app_data(
            web::JsonConfig::default()
                .limit(JSON_LIMIT)
                .error_handler(errors::json_error_handler),
        )
        .app_data(web::PathConfig::default().error_handler(errors::path_error_handler))
        .service(services::employees::configure_routes())
        .default_service(web::route().to(static_files::serve_embedded))
}
