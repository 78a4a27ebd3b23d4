use std::collections::HashMap;

use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::{debug, warn};

use super::store::{EmployeeStore, StoreError};
use crate::model::employee::{EmployeeFilter, EmployeeRecord};
use crate::model::error_info::ErrorInfo;
use crate::model::record_id::RecordId;

/// GET /employees[?{key}={value}]
pub async fn list_employees(
    store: web::Data<EmployeeStore>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let query = query.into_inner();
    if query.len() > 1 {
        return HttpResponse::BadRequest().json(vec![ErrorInfo::new(
            "Only one filter can be applied at a time",
            format!("received {} query parameters", query.len()),
        )]);
    }

    let filter = match query.iter().next() {
        Some((key, value)) => match key.parse::<EmployeeFilter>() {
            Ok(field) => Some((field, value.as_str())),
            Err(_) => {
                return HttpResponse::BadRequest().json(vec![ErrorInfo::new(
                    "Unknown search criterion",
                    format!("`{key}` is not one of name, surname, email, nationalIdNumber"),
                )]);
            }
        },
        None => None,
    };

    let content = store.list(filter);
    debug!(count = content.len(), ?filter, "listing employees");
    HttpResponse::Ok().json(json!({ "content": content }))
}

/// POST /employees
pub async fn create_employee(
    store: web::Data<EmployeeStore>,
    payload: web::Json<EmployeeRecord>,
) -> impl Responder {
    match store.create(payload.into_inner()) {
        Ok(created) => {
            debug!(id = %created.id, "employee created");
            HttpResponse::Created().json(created)
        }
        Err(e) => error_response(e),
    }
}

/// PUT /employees/{id}
pub async fn update_employee(
    store: web::Data<EmployeeStore>,
    path: web::Path<i64>,
    payload: web::Json<EmployeeRecord>,
) -> impl Responder {
    let id = RecordId(path.into_inner());
    match store.update(id, payload.into_inner()) {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => error_response(e),
    }
}

/// DELETE /employees/{id}
pub async fn delete_employee(
    store: web::Data<EmployeeStore>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = RecordId(path.into_inner());
    match store.delete(id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

fn error_response(error: StoreError) -> HttpResponse {
    match error {
        StoreError::Invalid(errors) => {
            warn!(count = errors.len(), "employee rejected");
            HttpResponse::BadRequest().json(errors)
        }
        StoreError::NotFound(id) => HttpResponse::NotFound().json(vec![ErrorInfo::new(
            "Employee not found",
            format!("no employee with id {id}"),
        )]),
    }
}
