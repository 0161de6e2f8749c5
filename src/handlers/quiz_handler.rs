use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::Owner,
    models::dto::{
        request::SubmitQuizRequest,
        response::{ApiResponse, MessageResponse},
    },
};

#[get("/api/quizzes/document/{document_id}")]
async fn list_quizzes(
    state: web::Data<AppState>,
    document_id: web::Path<String>,
    owner: Owner,
) -> Result<HttpResponse, AppError> {
    let quizzes = state
        .quiz_service
        .list_for_document(&owner.0, &document_id)
        .await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/api/quizzes/{id}")]
async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    owner: Owner,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&owner.0, &id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/api/quizzes/{id}")]
async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    owner: Owner,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.delete_quiz(&owner.0, &id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Quiz deleted".to_string(),
    }))
}

#[post("/api/quizzes/{id}/submit")]
async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    owner: Owner,
    body: web::Json<SubmitQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let submission = state
        .quiz_submission_service
        .submit(&id, &owner.0, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(submission, "Quiz submitted")))
}

#[get("/api/quizzes/{id}/results/{submission_id}")]
async fn get_quiz_results(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    owner: Owner,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, submission_id) = path.into_inner();
    let results = state
        .quiz_submission_service
        .get_results(&owner.0, &quiz_id, &submission_id)
        .await?;
    Ok(HttpResponse::Ok().json(results))
}
