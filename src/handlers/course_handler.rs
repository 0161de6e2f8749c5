use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::{get_request_id, Owner},
    models::dto::{
        request::{CurriculumRequest, GenerateCourseRequestDto},
        response::ApiResponse,
    },
};

#[post("/api/courses/generate")]
async fn generate_course(
    state: web::Data<AppState>,
    req: HttpRequest,
    owner: Owner,
    body: web::Json<GenerateCourseRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = CurriculumRequest::try_from(body.into_inner())?;

    let course = state
        .curriculum_service
        .generate_course(&owner.0, request)
        .await
        .inspect_err(|e| {
            log::warn!(
                "Course generation failed [{}]: {}",
                get_request_id(&req).unwrap_or_default(),
                e
            )
        })?;

    Ok(HttpResponse::Created().json(ApiResponse::new(course, "Course generated")))
}

#[get("/api/courses/{id}")]
async fn get_course(
    state: web::Data<AppState>,
    id: web::Path<String>,
    owner: Owner,
) -> Result<HttpResponse, AppError> {
    let course = state.curriculum_service.get_course(&owner.0, &id).await?;
    Ok(HttpResponse::Ok().json(course))
}

#[get("/api/courses")]
async fn list_courses(
    state: web::Data<AppState>,
    owner: Owner,
) -> Result<HttpResponse, AppError> {
    let courses = state.curriculum_service.list_courses(&owner.0).await?;
    Ok(HttpResponse::Ok().json(courses))
}
