use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};

use super::employee;
use crate::model::error_info::ErrorInfo;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed bodies answer with the same error list shape as validation failures.
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let body = vec![ErrorInfo::new("Invalid request body", err.to_string())];
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    });

    cfg.app_data(json_config).service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .route(web::get().to(employee::list_employees))
                    .route(web::post().to(employee::create_employee)),
            )
            // /employees/{id}
            .service(
                web::resource("/{id}")
                    .route(web::put().to(employee::update_employee))
                    .route(web::delete().to(employee::delete_employee)),
            ),
    );
}
