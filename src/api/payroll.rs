use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::{
    model::payroll::{NumericInput, PayrollInput, PayrollRecord},
    store::PayrollStore,
};

#[derive(Deserialize, Serialize, ToSchema)]
pub struct UpdateSalary {
    #[schema(example = "5500", value_type = Option<String>)]
    pub monthly_salary: Option<NumericInput>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct PayrollQuery {
    /// Substring of the employee ID or position
    #[schema(example = "Eng")]
    pub search: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PayrollListResponse {
    pub data: Vec<PayrollRecord>,
    #[schema(example = 1)]
    pub total: usize,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SalaryUpdateResponse {
    /// 0 when no employee has the given ID
    #[schema(example = 1)]
    pub updated: u64,
    pub data: Vec<PayrollRecord>,
}

/// Add Employee
#[utoipa::path(
    post,
    path = "/api/payroll",
    request_body = PayrollInput,
    responses(
        (status = 201, description = "Employee added", body = PayrollRecord),
        (status = 400, description = "Missing or non-numeric field", body = Object, example = json!({
            "error": "Input Error",
            "field": "monthly_salary",
            "message": "must be a numeric value"
        })),
        (status = 409, description = "Employee ID already exists", body = Object, example = json!({
            "error": "Employee ID already exists!"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payroll"
)]
pub async fn create_payroll(
    store: web::Data<PayrollStore>,
    payload: web::Json<PayrollInput>,
) -> actix_web::Result<impl Responder> {
    let record = store.insert(&payload).await?;
    Ok(HttpResponse::Created().json(record))
}

/// Show payroll, optionally filtered
#[utoipa::path(
    get,
    path = "/api/payroll",
    params(PayrollQuery),
    responses(
        (status = 200, body = PayrollListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payroll"
)]
pub async fn list_payrolls(
    store: web::Data<PayrollStore>,
    query: web::Query<PayrollQuery>,
) -> actix_web::Result<impl Responder> {
    let data = match query.search.as_deref() {
        Some(term) => store.search(term).await?,
        None => store.list_all().await?,
    };

    Ok(HttpResponse::Ok().json(PayrollListResponse {
        total: data.len(),
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/payroll/{employee_id}",
    params(
        ("employee_id", description = "Employee ID")
    ),
    responses(
        (status = 200, body = PayrollRecord),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Payroll"
)]
pub async fn get_payroll(
    store: web::Data<PayrollStore>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    match store.find(&employee_id).await? {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Ok(HttpResponse::NotFound().json(json!({
            "message": "Employee not found"
        }))),
    }
}

/// Update Salary
///
/// Responds with the refreshed payroll so the caller can redraw its table.
#[utoipa::path(
    put,
    path = "/api/payroll/{employee_id}/salary",
    request_body = UpdateSalary,
    params(
        ("employee_id", description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Salary updated", body = SalaryUpdateResponse),
        (status = 400, description = "Salary missing or not numeric"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payroll"
)]
pub async fn update_salary(
    store: web::Data<PayrollStore>,
    path: web::Path<String>,
    body: web::Json<UpdateSalary>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    let updated = store
        .update_salary(&employee_id, body.monthly_salary.as_ref())
        .await?;
    let data = store.list_all().await?;

    Ok(HttpResponse::Ok().json(SalaryUpdateResponse { updated, data }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, routes};
    use actix_web::{App, http::StatusCode, test};
    use serde_json::Value;
    use tempfile::TempDir;

    async fn temp_store() -> (TempDir, web::Data<PayrollStore>) {
        let dir = TempDir::new().unwrap();
        let store = PayrollStore::from_path(dir.path().join("payroll.db"));
        store.initialize().await.unwrap();
        (dir, web::Data::new(store))
    }

    macro_rules! payroll_app {
        ($store:expr) => {{
            let config = Config::from_lookup(|_| None).unwrap();
            test::init_service(
                App::new()
                    .app_data($store.clone())
                    .configure(|cfg| routes::configure(cfg, &config)),
            )
            .await
        }};
    }

    fn ana() -> Value {
        json!({
            "employee_id": "E1",
            "employee_name": "Ana",
            "position": "Engineer",
            "monthly_salary": "5000"
        })
    }

    #[actix_web::test]
    async fn add_then_show() {
        let (_dir, store) = temp_store().await;
        let app = payroll_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/payroll")
            .set_json(ana())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: PayrollRecord = test::read_body_json(resp).await;
        assert_eq!(created.monthly_salary, 5000.0);
        assert_eq!(created.bonus, 0.0);

        let req = test::TestRequest::get().uri("/api/payroll").to_request();
        let list: PayrollListResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list.total, 1);
        assert_eq!(list.data, vec![created]);
    }

    #[actix_web::test]
    async fn duplicate_add_is_conflict() {
        let (_dir, store) = temp_store().await;
        let app = payroll_app!(store);

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri("/api/payroll")
                .set_json(ana())
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }

        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn invalid_add_is_bad_request() {
        let (_dir, store) = temp_store().await;
        let app = payroll_app!(store);

        let mut body = ana();
        body["bonus"] = json!("a lot");
        let req = test::TestRequest::post()
            .uri("/api/payroll")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let err: Value = test::read_body_json(resp).await;
        assert_eq!(err["field"], "bonus");
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn search_filters_by_id_or_position() {
        let (_dir, store) = temp_store().await;
        let app = payroll_app!(store);

        for body in [
            ana(),
            json!({
                "employee_id": "E2",
                "employee_name": "Bo",
                "position": "Manager",
                "monthly_salary": 7000.0,
                "bonus": 100
            }),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/payroll")
                .set_json(body)
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri("/api/payroll?search=Eng")
            .to_request();
        let list: PayrollListResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list.total, 1);
        assert_eq!(list.data[0].employee_id, "E1");

        let req = test::TestRequest::get()
            .uri("/api/payroll?search=")
            .to_request();
        let list: PayrollListResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list.total, 2);
    }

    #[actix_web::test]
    async fn get_single_employee() {
        let (_dir, store) = temp_store().await;
        let app = payroll_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/payroll")
            .set_json(ana())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/api/payroll/E1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/payroll/E9").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_salary_returns_refreshed_list() {
        let (_dir, store) = temp_store().await;
        let app = payroll_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/payroll")
            .set_json(ana())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/api/payroll/E1/salary")
            .set_json(json!({ "monthly_salary": 5500.0 }))
            .to_request();
        let resp: SalaryUpdateResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.updated, 1);
        assert_eq!(resp.data[0].monthly_salary, 5500.0);

        let req = test::TestRequest::put()
            .uri("/api/payroll/E9/salary")
            .set_json(json!({ "monthly_salary": "6000" }))
            .to_request();
        let resp: SalaryUpdateResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.updated, 0);
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].monthly_salary, 5500.0);

        let req = test::TestRequest::put()
            .uri("/api/payroll/E1/salary")
            .set_json(json!({ "monthly_salary": "abc" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
