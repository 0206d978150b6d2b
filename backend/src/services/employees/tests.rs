//! HTTP-level tests for the employee routes.

use crate::errors::{ALL_FIELDS_REQUIRED, EMPLOYEE_NOT_FOUND, ROUTE_NOT_FOUND};
use crate::server::build_app;
use crate::store::{EmployeeStore, NewEmployee, SqliteEmployeeStore, StoreError};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use common::model::employee::Employee;
use common::responses::{ErrorResponse, MutationResponse};
use rstest::rstest;
use serde_json::{json, Value};
use std::sync::Arc;

fn ana() -> Value {
    json!({"name": "Ana", "age": 30, "country": "Chile", "role": "Engineer", "years": 5})
}

fn memory_store() -> Arc<SqliteEmployeeStore> {
    Arc::new(SqliteEmployeeStore::open_in_memory().unwrap())
}

/// Store double whose every call fails as if the database went away.
struct UnreachableStore;

impl EmployeeStore for UnreachableStore {
    fn insert(&self, _employee: &NewEmployee) -> Result<i64, StoreError> {
        Err(StoreError::Connectivity("connection refused".to_string()))
    }

    fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        Err(StoreError::Connectivity("connection refused".to_string()))
    }

    fn update(&self, _id: i64, _employee: &NewEmployee) -> Result<usize, StoreError> {
        Err(StoreError::Connectivity("connection refused".to_string()))
    }

    fn delete(&self, _id: i64) -> Result<usize, StoreError> {
        Err(StoreError::Connectivity("connection refused".to_string()))
    }
}

#[actix_web::test]
async fn create_then_list_returns_the_new_row() {
    let store = memory_store();
    let app = actix_test::init_service(build_app(store.clone())).await;

    let req = actix_test::TestRequest::post()
        .uri("/create")
        .set_json(ana())
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: MutationResponse = actix_test::read_body_json(resp).await;
    assert_eq!(created.message, "Employee registered successfully");

    let req = actix_test::TestRequest::get().uri("/employees").to_request();
    let employees: Vec<Employee> = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        employees,
        vec![Employee {
            id: created.id,
            name: "Ana".to_string(),
            age: 30,
            country: "Chile".to_string(),
            role: "Engineer".to_string(),
            years_experience: 5,
        }]
    );
}

#[actix_web::test]
async fn ids_strictly_increase_and_list_is_newest_first() {
    let app = actix_test::init_service(build_app(memory_store())).await;

    let mut ids = Vec::new();
    for name in ["Ana", "Bruno", "Carla"] {
        let mut body = ana();
        body["name"] = json!(name);
        let req = actix_test::TestRequest::post()
            .uri("/create")
            .set_json(body)
            .to_request();
        let created: MutationResponse = actix_test::call_and_read_body_json(&app, req).await;
        ids.push(created.id);
    }
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

    let req = actix_test::TestRequest::get().uri("/employees").to_request();
    let employees: Vec<Employee> = actix_test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = employees.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Carla", "Bruno", "Ana"]);
}

#[rstest]
#[case::missing_name(json!({"age": 30, "country": "Chile", "role": "Engineer", "years": 5}))]
#[case::empty_role(json!({"name": "Ana", "age": 30, "country": "Chile", "role": "", "years": 5}))]
#[case::zero_age(json!({"name": "Ana", "age": 0, "country": "Chile", "role": "Engineer", "years": 5}))]
#[case::null_years(json!({"name": "Ana", "age": 30, "country": "Chile", "role": "Engineer", "years": null}))]
#[actix_web::test]
async fn create_with_missing_field_persists_nothing(#[case] body: Value) {
    let store = memory_store();
    let app = actix_test::init_service(build_app(store.clone())).await;

    let req = actix_test::TestRequest::post()
        .uri("/create")
        .set_json(body)
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = actix_test::read_body_json(resp).await;
    assert_eq!(error, ErrorResponse::new(ALL_FIELDS_REQUIRED));

    assert!(store.list_all().unwrap().is_empty());
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let app = actix_test::init_service(build_app(memory_store())).await;

    let req = actix_test::TestRequest::post()
        .uri("/create")
        .insert_header(ContentType::json())
        .set_payload("{\"name\": ")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = actix_test::read_body_json(resp).await;
    assert!(error.message.starts_with("Invalid request body"));
}

#[actix_web::test]
async fn update_of_unknown_id_leaves_store_unchanged() {
    let store = memory_store();
    let app = actix_test::init_service(build_app(store.clone())).await;
    let req = actix_test::TestRequest::post()
        .uri("/create")
        .set_json(ana())
        .to_request();
    let created: MutationResponse = actix_test::call_and_read_body_json(&app, req).await;
    let before = store.list_all().unwrap();

    let req = actix_test::TestRequest::put()
        .uri(&format!("/update/{}", created.id + 1))
        .set_json(json!({"name": "Zoe", "age": 50, "country": "Peru", "role": "CTO", "years": 20}))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = actix_test::read_body_json(resp).await;
    assert_eq!(error.message, EMPLOYEE_NOT_FOUND);

    assert_eq!(store.list_all().unwrap(), before);
}

#[actix_web::test]
async fn update_validates_before_touching_the_store() {
    let store = memory_store();
    let app = actix_test::init_service(build_app(store.clone())).await;
    let req = actix_test::TestRequest::post()
        .uri("/create")
        .set_json(ana())
        .to_request();
    let created: MutationResponse = actix_test::call_and_read_body_json(&app, req).await;

    let req = actix_test::TestRequest::put()
        .uri(&format!("/update/{}", created.id))
        .set_json(json!({"name": "Ana", "age": 31}))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.list_all().unwrap()[0].age, 30);
}

#[actix_web::test]
async fn delete_twice_reports_not_found() {
    let store = memory_store();
    let app = actix_test::init_service(build_app(store.clone())).await;
    let mut ids = Vec::new();
    for _ in 0..2 {
        let req = actix_test::TestRequest::post()
            .uri("/create")
            .set_json(ana())
            .to_request();
        let created: MutationResponse = actix_test::call_and_read_body_json(&app, req).await;
        ids.push(created.id);
    }

    let req = actix_test::TestRequest::delete()
        .uri(&format!("/delete/{}", ids[0]))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: MutationResponse = actix_test::read_body_json(resp).await;
    assert_eq!(deleted.id, ids[0]);

    let remaining = store.list_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, ids[1]);

    let req = actix_test::TestRequest::delete()
        .uri(&format!("/delete/{}", ids[0]))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn non_numeric_id_is_not_found() {
    let app = actix_test::init_service(build_app(memory_store())).await;

    let req = actix_test::TestRequest::delete()
        .uri("/delete/abc")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = actix_test::read_body_json(resp).await;
    assert_eq!(error.message, EMPLOYEE_NOT_FOUND);
}

#[actix_web::test]
async fn unmatched_routes_get_generic_not_found() {
    let app = actix_test::init_service(build_app(memory_store())).await;

    let req = actix_test::TestRequest::post().uri("/employees/42").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = actix_test::read_body_json(resp).await;
    assert_eq!(error, ErrorResponse::new(ROUTE_NOT_FOUND));

    let req = actix_test::TestRequest::get().uri("/create").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = actix_test::read_body_json(resp).await;
    assert_eq!(error, ErrorResponse::new(ROUTE_NOT_FOUND));

    let req = actix_test::TestRequest::get().uri("/no/such/asset.js").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn store_failures_surface_message_and_detail() {
    let app = actix_test::init_service(build_app(Arc::new(UnreachableStore))).await;

    let cases = [
        (
            actix_test::TestRequest::post().uri("/create").set_json(ana()),
            "Error registering employee",
        ),
        (
            actix_test::TestRequest::get().uri("/employees"),
            "Error fetching employees",
        ),
        (
            actix_test::TestRequest::put().uri("/update/1").set_json(ana()),
            "Error updating employee",
        ),
        (
            actix_test::TestRequest::delete().uri("/delete/1"),
            "Error deleting employee",
        ),
    ];

    for (req, message) in cases {
        let resp = actix_test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error: ErrorResponse = actix_test::read_body_json(resp).await;
        assert_eq!(error.message, message);
        assert!(error.error.unwrap().contains("connection refused"));
    }
}

#[actix_web::test]
async fn full_lifecycle_scenario() {
    let app = actix_test::init_service(build_app(memory_store())).await;

    let req = actix_test::TestRequest::post()
        .uri("/create")
        .set_json(ana())
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: MutationResponse = actix_test::read_body_json(resp).await;
    assert_eq!(created.id, 1);

    let req = actix_test::TestRequest::put()
        .uri("/update/1")
        .set_json(json!({"name": "Ana", "age": 31, "country": "Chile", "role": "Engineer", "years": 6}))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: MutationResponse = actix_test::read_body_json(resp).await;
    assert_eq!(updated.id, 1);
    assert_eq!(updated.message, "Employee updated successfully");

    let req = actix_test::TestRequest::get().uri("/employees").to_request();
    let employees: Vec<Employee> = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].age, 31);
    assert_eq!(employees[0].years_experience, 6);

    let req = actix_test::TestRequest::delete().uri("/delete/1").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = actix_test::TestRequest::get().uri("/employees").to_request();
    let employees: Vec<Employee> = actix_test::call_and_read_body_json(&app, req).await;
    assert!(employees.is_empty());
}
