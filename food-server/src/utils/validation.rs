//! Request body validation
//!
//! [`ValidJson`] replaces `axum::Json` for create endpoints: the body is
//! decoded into the record type and then checked against its declarative
//! constraints, so handlers only ever see valid records. Every violated
//! field is reported at once: mistyped, missing and out-of-range fields
//! together.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::{Path, Segment};
use shared::{FieldError, field_errors};
use validator::Validate;

use crate::utils::AppError;

/// Validated JSON body
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(rejection_error)?;

        decode::<T>(value).map(Self)
    }
}

/// Decode `value` into `T` and validate it
///
/// A mistyped field is recorded under its path (`items[0].quantity`) and
/// dropped from the body, then decoding is retried so the remaining fields
/// are still checked. A body that is not an object at all is reported
/// under `body`.
pub fn decode<T>(mut value: Value) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let mut errors: Vec<FieldError> = Vec::new();

    let payload = loop {
        match serde_path_to_error::deserialize::<_, T>(value.clone()) {
            Ok(payload) => break payload,
            Err(err) => {
                let message = err.inner().to_string();
                if !remove_field(&mut value, err.path()) {
                    let field = match err.path().iter().next() {
                        None => "body".to_string(),
                        Some(_) => err.path().to_string(),
                    };
                    errors.push(FieldError::new(field, "type", message));
                    return Err(AppError::Validation(errors));
                }
                errors.push(FieldError::new(err.path().to_string(), "type", message));
            }
        }
    };

    if let Err(violations) = payload.validate() {
        // a dropped field also shows up as "missing"; keep the type error only
        let mistyped: Vec<String> = errors.iter().map(|e| e.field.clone()).collect();
        errors.extend(
            field_errors(&violations)
                .into_iter()
                .filter(|e| !mistyped.contains(&e.field)),
        );
    }

    if errors.is_empty() {
        Ok(payload)
    } else {
        errors.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        Err(AppError::Validation(errors))
    }
}

/// Remove the object key `path` points at; false unless the path ends in a key
fn remove_field(value: &mut Value, path: &Path) -> bool {
    let segments: Vec<&Segment> = path.iter().collect();
    let Some((Segment::Map { key }, parents)) = segments.split_last() else {
        return false;
    };

    let mut target = value;
    for segment in parents {
        target = match (segment, target) {
            (Segment::Map { key }, Value::Object(map)) => match map.get_mut(key) {
                Some(next) => next,
                None => return false,
            },
            (Segment::Seq { index }, Value::Array(items)) => match items.get_mut(*index) {
                Some(next) => next,
                None => return false,
            },
            _ => return false,
        };
    }

    match target {
        Value::Object(map) => map.remove(key).is_some(),
        _ => false,
    }
}

fn rejection_error(rejection: JsonRejection) -> AppError {
    match rejection.status() {
        StatusCode::UNSUPPORTED_MEDIA_TYPE => AppError::UnsupportedMedia(rejection.body_text()),
        _ => AppError::invalid(rejection.body_text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::models::{OrderCreate, RestaurantCreate};

    fn field_codes(err: AppError) -> Vec<(String, String)> {
        match err {
            AppError::Validation(errors) => errors.into_iter().map(|e| (e.field, e.code)).collect(),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(f, c)| (f.to_string(), c.to_string()))
            .collect()
    }

    #[test]
    fn test_every_missing_field_reported() {
        let err = decode::<RestaurantCreate>(json!({"delivery_time_mins": 30})).unwrap_err();
        assert_eq!(field_codes(err), pairs(&[("cuisine", "missing"), ("name", "missing")]));
    }

    #[test]
    fn test_missing_field_does_not_hide_range_error() {
        let err = decode::<RestaurantCreate>(json!({"name": "A", "delivery_time_mins": 500}))
            .unwrap_err();
        assert_eq!(
            field_codes(err),
            pairs(&[("cuisine", "missing"), ("delivery_time_mins", "range")])
        );
    }

    #[test]
    fn test_type_mismatch_named_and_others_still_checked() {
        let err = decode::<RestaurantCreate>(json!({
            "name": "A", "delivery_time_mins": "soon", "rating": 9.0
        }))
        .unwrap_err();
        assert_eq!(
            field_codes(err),
            pairs(&[
                ("cuisine", "missing"),
                ("delivery_time_mins", "type"),
                ("rating", "range"),
            ])
        );
    }

    #[test]
    fn test_nested_type_mismatch_carries_path() {
        let err = decode::<OrderCreate>(json!({
            "restaurant_id": "r1",
            "restaurant_name": "Pizza Place",
            "items": [
                {"menu_item_id": "m1", "name": "Pizza", "quantity": "two", "unit_price": 5.0, "line_total": -1.0}
            ],
            "subtotal": 10.0,
            "delivery_fee": 2.0,
            "total": 12.0,
            "customer_name": "Ana",
            "customer_email": "ana@example.com",
            "delivery_address": "1 Main St"
        }))
        .unwrap_err();
        assert_eq!(
            field_codes(err),
            pairs(&[("items[0].line_total", "range"), ("items[0].quantity", "type")])
        );
    }

    #[test]
    fn test_non_object_body_reported_as_body() {
        let err = decode::<RestaurantCreate>(json!("Pizza Place")).unwrap_err();
        assert_eq!(field_codes(err), pairs(&[("body", "type")]));
    }

    #[test]
    fn test_valid_body_decodes() {
        let r = decode::<RestaurantCreate>(json!({
            "name": "Pizza Place", "cuisine": "Italian", "delivery_time_mins": 30.0
        }))
        .unwrap();
        assert_eq!(r.delivery_time_mins, Some(30));
    }
}
