use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::Owner,
    models::dto::response::{ApiResponse, MessageResponse},
};

#[get("/api/flashcards")]
async fn list_flashcard_sets(
    state: web::Data<AppState>,
    owner: Owner,
) -> Result<HttpResponse, AppError> {
    let sets = state.flashcard_service.list_all(&owner.0).await?;
    Ok(HttpResponse::Ok().json(sets))
}

#[get("/api/flashcards/document/{document_id}")]
async fn list_flashcards(
    state: web::Data<AppState>,
    document_id: web::Path<String>,
    owner: Owner,
) -> Result<HttpResponse, AppError> {
    let sets = state
        .flashcard_service
        .list_for_document(&owner.0, &document_id)
        .await?;
    Ok(HttpResponse::Ok().json(sets))
}

#[post("/api/flashcards/cards/{card_id}/review")]
async fn review_flashcard(
    state: web::Data<AppState>,
    card_id: web::Path<String>,
    owner: Owner,
) -> Result<HttpResponse, AppError> {
    let set = state.flashcard_service.review_card(&owner.0, &card_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(set, "Flashcard reviewed")))
}

#[put("/api/flashcards/cards/{card_id}/star")]
async fn toggle_star(
    state: web::Data<AppState>,
    card_id: web::Path<String>,
    owner: Owner,
) -> Result<HttpResponse, AppError> {
    let set = state.flashcard_service.toggle_star(&owner.0, &card_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(set, "Flashcard star toggled")))
}

#[delete("/api/flashcards/{id}")]
async fn delete_flashcard_set(
    state: web::Data<AppState>,
    id: web::Path<String>,
    owner: Owner,
) -> Result<HttpResponse, AppError> {
    state.flashcard_service.delete_set(&owner.0, &id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Flashcard set deleted".to_string(),
    }))
}
