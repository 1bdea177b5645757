//! Request-boundary validation.
//!
//! The upstream deployment performed these checks in a separate gateway tier
//! before forwarding to the server. Here they are explicit functions invoked
//! at the start of each controller handler; failures collect into
//! `AppError::Validation`, which renders as a 400 with a list of
//! `field: message` strings.

use chrono::NaiveDateTime;

use crate::{
    error::AppError,
    model::{
        comment::CommentPayload, item::ItemPayload, request::RequestPayload, user::UserPayload,
    },
};

/// True when the text is empty or whitespace only.
pub fn is_blank_str(text: &str) -> bool {
    text.trim().is_empty()
}

fn is_blank(value: &Option<String>) -> bool {
    match value {
        Some(text) => is_blank_str(text),
        None => true,
    }
}

/// Minimal syntactic email check: one `@` with non-empty local and domain
/// parts and no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

fn collect(errors: Vec<String>) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Validates a user creation payload: name and email must be non-blank and
/// the email syntactically valid.
pub fn validate_new_user(payload: &UserPayload) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if is_blank(&payload.name) {
        errors.push("name: must not be blank".to_string());
    }
    if is_blank(&payload.email) {
        errors.push("email: must not be blank".to_string());
    } else if let Some(email) = &payload.email {
        if !is_valid_email(email) {
            errors.push("email: must be a valid email address".to_string());
        }
    }

    collect(errors)
}

/// Validates a partial user update: absent fields are fine, but a supplied
/// email must still be syntactically valid.
pub fn validate_updated_user(payload: &UserPayload) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if let Some(email) = &payload.email {
        if !is_valid_email(email) {
            errors.push("email: must be a valid email address".to_string());
        }
    }

    collect(errors)
}

/// Validates an item creation payload: name and description non-blank, and
/// availability stated explicitly.
pub fn validate_new_item(payload: &ItemPayload) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if is_blank(&payload.name) {
        errors.push("name: must not be blank".to_string());
    }
    if is_blank(&payload.description) {
        errors.push("description: must not be blank".to_string());
    }
    if payload.available.is_none() {
        errors.push("available: must be provided".to_string());
    }

    collect(errors)
}

/// Validates an item request creation payload.
pub fn validate_new_request(payload: &RequestPayload) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if is_blank(&payload.description) {
        errors.push("description: must not be blank".to_string());
    }

    collect(errors)
}

/// Validates a comment payload.
pub fn validate_new_comment(payload: &CommentPayload) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if is_blank(&payload.text) {
        errors.push("text: must not be blank".to_string());
    }

    collect(errors)
}

/// Validates a booking date range: the end must be strictly after the start.
/// Equal or inverted ranges are rejected.
pub fn validate_date_range(start: NaiveDateTime, end: NaiveDateTime) -> Result<(), AppError> {
    if end <= start {
        return Err(AppError::BadRequest(
            "End date must be strictly after start date".to_string(),
        ));
    }
    Ok(())
}

/// Validates pagination parameters: `from` must be >= 0 and `size` > 0.
pub fn validate_page_params(from: i64, size: i64) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if from < 0 {
        errors.push("from: must not be negative".to_string());
    }
    if size <= 0 {
        errors.push("size: must be positive".to_string());
    }

    collect(errors)
}
