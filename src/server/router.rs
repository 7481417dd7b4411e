use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, camp, feedback, payment, registration, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    auth::issue_token,
    user::register_user,
    user::get_users,
    user::get_admin_status,
    user::update_profile,
    user::delete_user,
    camp::get_camps,
    camp::get_camp,
    camp::create_camp,
    camp::update_camp,
    camp::delete_camp,
    camp::adjust_participant_count,
    registration::join_camp,
    registration::my_registrations,
    registration::all_registrations,
    registration::confirm_registration,
    registration::cancel_registration,
    payment::create_payment_intent,
    payment::confirm_payment,
    feedback::submit_feedback,
    feedback::get_feedback,
))]
struct ApiDoc;

async fn health() -> &'static str {
    "Medical Camp Management System is running"
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/jwt", post(auth::issue_token))
        .route("/users", post(user::register_user).get(user::get_users))
        .route("/users/admin/{email}", get(user::get_admin_status))
        .route("/users/{id}", delete(user::delete_user))
        .route("/user/{id}", patch(user::update_profile))
        .route("/camps", get(camp::get_camps))
        .route("/camps/{id}", get(camp::get_camp).delete(camp::delete_camp))
        .route("/camp", post(camp::create_camp))
        .route("/camp/{id}", patch(camp::update_camp))
        .route(
            "/participant-count/{id}",
            patch(camp::adjust_participant_count),
        )
        .route(
            "/join-camps",
            post(registration::join_camp),
        )
        .route(
            "/join-camps/{id}",
            delete(registration::cancel_registration),
        )
        .route(
            "/join-camps/{id}/confirm",
            patch(registration::confirm_registration),
        )
        .route("/registeredCamps", get(registration::all_registrations))
        .route(
            "/registeredCamps/{email}",
            get(registration::my_registrations),
        )
        .route("/payments/intent", post(payment::create_payment_intent))
        .route("/payments/confirm", post(payment::confirm_payment))
        .route(
            "/feedback",
            post(feedback::submit_feedback).get(feedback::get_feedback),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
