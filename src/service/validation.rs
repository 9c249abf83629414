//! Request body validation against per-field rules.

use crate::error::AppError;
use crate::model::{NAME_MAX_LEN, TEXT_MAX_LEN};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

#[derive(Clone, Copy, Debug)]
pub struct ValidationRule {
    pub required: bool,
    pub kind: FieldKind,
    pub max_length: Option<usize>,
    /// Text must contain a non-whitespace character.
    pub non_empty: bool,
}

impl ValidationRule {
    /// Present and a string; may be empty.
    pub const fn required_text(max_length: usize) -> Self {
        ValidationRule {
            required: true,
            kind: FieldKind::Text,
            max_length: Some(max_length),
            non_empty: false,
        }
    }

    /// Present and a string with visible content.
    pub const fn required_name(max_length: usize) -> Self {
        ValidationRule {
            non_empty: true,
            ..Self::required_text(max_length)
        }
    }

    pub const fn required_integer() -> Self {
        ValidationRule {
            required: true,
            kind: FieldKind::Integer,
            max_length: None,
            non_empty: false,
        }
    }
}

/// `POST /planet`
pub const PLANET_RULES: &[(&str, ValidationRule)] = &[
    ("name", ValidationRule::required_name(NAME_MAX_LEN)),
    ("description", ValidationRule::required_text(TEXT_MAX_LEN)),
    ("galaxy_id", ValidationRule::required_integer()),
];

/// `POST /character`
pub const CHARACTER_RULES: &[(&str, ValidationRule)] = &[
    ("name", ValidationRule::required_name(NAME_MAX_LEN)),
    ("gender", ValidationRule::required_text(TEXT_MAX_LEN)),
];

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a JSON body. Required fields must be present and non-null; fields are checked in rule order.
    pub fn validate(body: &Value, rules: &[(&str, ValidationRule)]) -> Result<(), AppError> {
        let obj = body
            .as_object()
            .ok_or_else(|| AppError::BadRequest("body must be a JSON object".into()))?;
        for (field, rule) in rules {
            validate_field(obj, field, rule)?;
        }
        Ok(())
    }
}

fn validate_field(obj: &Map<String, Value>, field: &str, rule: &ValidationRule) -> Result<(), AppError> {
    let v = match obj.get(field) {
        None | Some(Value::Null) if rule.required => {
            return Err(AppError::Validation(format!("{} is required", field)));
        }
        None | Some(Value::Null) => return Ok(()),
        Some(v) => v,
    };
    match rule.kind {
        FieldKind::Text => {
            let s = v
                .as_str()
                .ok_or_else(|| AppError::Validation(format!("{} must be a string", field)))?;
            if rule.non_empty && s.trim().is_empty() {
                return Err(AppError::Validation(format!("{} must not be empty", field)));
            }
            if let Some(max) = rule.max_length {
                if s.chars().count() > max {
                    return Err(AppError::Validation(format!(
                        "{} must be at most {} characters",
                        field, max
                    )));
                }
            }
        }
        FieldKind::Integer => {
            if v.as_i64().is_none() {
                return Err(AppError::Validation(format!("{} must be an integer", field)));
            }
        }
    }
    Ok(())
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"))
}

pub fn is_valid_email(s: &str) -> bool {
    email_regex().is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_planet_body_passes() {
        let body = json!({"name": "Dagobah", "description": "Swamp", "galaxy_id": 1});
        RequestValidator::validate(&body, PLANET_RULES).unwrap();
    }

    #[test]
    fn missing_galaxy_is_rejected() {
        let body = json!({"name": "Dagobah", "description": "Swamp"});
        let err = RequestValidator::validate(&body, PLANET_RULES).unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m == "galaxy_id is required"));
    }

    #[test]
    fn null_counts_as_missing() {
        let body = json!({"name": null, "gender": "female"});
        assert!(RequestValidator::validate(&body, CHARACTER_RULES).is_err());
    }

    #[test]
    fn wrong_types_are_rejected() {
        let body = json!({"name": "Endor", "description": "Forest moon", "galaxy_id": "one"});
        let err = RequestValidator::validate(&body, PLANET_RULES).unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m.contains("integer")));

        let body = json!({"name": 7, "gender": "droid"});
        assert!(RequestValidator::validate(&body, CHARACTER_RULES).is_err());
    }

    #[test]
    fn overlong_gender_is_rejected() {
        let body = json!({"name": "R2-D2", "gender": "x".repeat(TEXT_MAX_LEN + 1)});
        let err = RequestValidator::validate(&body, CHARACTER_RULES).unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m.contains("at most 240")));
    }

    #[test]
    fn free_text_may_be_empty_but_names_may_not() {
        let body = json!({"name": "Jakku", "description": "", "galaxy_id": 1});
        RequestValidator::validate(&body, PLANET_RULES).unwrap();

        let body = json!({"name": "  ", "gender": "female"});
        let err = RequestValidator::validate(&body, CHARACTER_RULES).unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m == "name must not be empty"));
    }

    #[test]
    fn non_object_body_is_bad_request() {
        let err = RequestValidator::validate(&json!(["Luke"]), CHARACTER_RULES).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email("obi-wan@jedi.org"));
        assert!(!is_valid_email("obi-wan"));
        assert!(!is_valid_email("obi wan@jedi.org"));
    }
}
