use axum::extract::{Form, State};
use axum::response::Html;
use secrecy::SecretString;
use serde::Deserialize;
use tracing::info;

use super::views;
use super::AppState;
use crate::evaluator::evaluate_password;

#[derive(Deserialize)]
pub(crate) struct PasswordForm {
    password: String,
}

pub(crate) async fn home_handler() -> Html<String> {
    Html(views::home_page(None))
}

pub(crate) async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<PasswordForm>,
) -> Html<String> {
    let password = SecretString::new(form.password.into());
    let evaluation = evaluate_password(&password, &state.blacklist);

    info!(
        strong = evaluation.is_strong(),
        failed_sections = evaluation.reasons.len(),
        "password submission evaluated"
    );

    if evaluation.is_strong() {
        Html(views::welcome_page(&password))
    } else {
        Html(views::home_page(Some(views::ERROR_MESSAGE)))
    }
}

pub(crate) async fn healthz_handler(State(state): State<AppState>) -> &'static str {
    if state.blacklist.is_empty() {
        "degraded"
    } else {
        "ok"
    }
}
