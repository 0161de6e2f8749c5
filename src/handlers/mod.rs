use actix_web::web;

pub mod course_handler;
pub mod flashcard_handler;
pub mod health_handler;
pub mod quiz_handler;

/// Registers every route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_handler::health_check)
        .service(course_handler::generate_course)
        .service(course_handler::list_courses)
        .service(course_handler::get_course)
        .service(quiz_handler::list_quizzes)
        .service(quiz_handler::get_quiz)
        .service(quiz_handler::delete_quiz)
        .service(quiz_handler::submit_quiz)
        .service(quiz_handler::get_quiz_results)
        .service(flashcard_handler::list_flashcard_sets)
        .service(flashcard_handler::list_flashcards)
        .service(flashcard_handler::review_flashcard)
        .service(flashcard_handler::toggle_star)
        .service(flashcard_handler::delete_flashcard_set);
}
