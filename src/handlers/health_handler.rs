use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = match &state.database {
        Some(db) => match db.ping().await {
            Ok(()) => "ok",
            Err(e) => {
                log::error!("Database health check failed: {}", e);
                "unavailable"
            }
        },
        None => "not_configured",
    };

    let body = serde_json::json!({
        "status": if database == "unavailable" { "degraded" } else { "ok" },
        "service": "studyforge-server",
        "database": database,
    });

    if database == "unavailable" {
        HttpResponse::ServiceUnavailable().json(body)
    } else {
        HttpResponse::Ok().json(body)
    }
}
