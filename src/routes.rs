use crate::{api::payroll, config::Config};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.service(
        web::scope(&config.api_prefix).service(
            web::scope("/payroll")
                // /payroll
                .service(
                    web::resource("")
                        .route(web::post().to(payroll::create_payroll))
                        .route(web::get().to(payroll::list_payrolls)),
                )
                // /payroll/{employee_id}
                .service(
                    web::resource("/{employee_id}").route(web::get().to(payroll::get_payroll)),
                )
                // /payroll/{employee_id}/salary
                .service(
                    web::resource("/{employee_id}/salary")
                        .route(web::put().to(payroll::update_salary)),
                ),
        ),
    );
}
