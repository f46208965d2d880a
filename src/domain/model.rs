//! Entity rows, create payloads, and response views.
//!
//! The camper/signup/activity graph is mutually recursive, so API responses
//! never serialize the raw rows. Each endpoint returns one of the view structs
//! below, which expand relationships exactly one hop and omit the
//! back-reference that would lead into a cycle (and all timestamps).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Camper {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Activity {
    pub id: i64,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Signup {
    pub id: i64,
    pub camper_id: Option<i64>,
    pub activity_id: Option<i64>,
    pub time: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Payload for `POST /campers`. `age` stays a raw JSON value so numeric
/// strings survive until coercion in the validation layer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCamper {
    pub name: Option<String>,
    pub age: Option<Value>,
}

/// Payload for `POST /signups`. All three fields go through integer coercion.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSignup {
    pub camper_id: Option<Value>,
    pub activity_id: Option<Value>,
    pub time: Option<Value>,
}

/// Camper without relationships, the `GET /campers` element shape.
#[derive(Debug, Clone, Serialize)]
pub struct CamperSummary {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// Activity without relationships, the `GET /activities` element shape.
#[derive(Debug, Clone, Serialize)]
pub struct ActivitySummary {
    pub id: i64,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
}

/// A signup nested inside a camper response. Carries the signup's activity
/// one level deep but no `camper` back-reference.
#[derive(Debug, Clone, Serialize)]
pub struct CamperSignupView {
    pub id: i64,
    pub camper_id: Option<i64>,
    pub activity_id: Option<i64>,
    pub time: i64,
    pub activity: Option<ActivitySummary>,
}

/// Full camper response: scalar fields, signups one hop deep, and the derived
/// activity list computed through the signups join.
#[derive(Debug, Clone, Serialize)]
pub struct CamperDetail {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub signups: Vec<CamperSignupView>,
    pub activities: Vec<ActivitySummary>,
}

/// Full signup response with both ends of the join expanded one hop. The
/// nested camper and activity carry no `signups` back-reference.
#[derive(Debug, Clone, Serialize)]
pub struct SignupDetail {
    pub id: i64,
    pub camper_id: Option<i64>,
    pub activity_id: Option<i64>,
    pub time: i64,
    pub camper: Option<CamperSummary>,
    pub activity: Option<ActivitySummary>,
}

impl From<Camper> for CamperSummary {
    fn from(c: Camper) -> Self {
        Self {
            id: c.id,
            name: c.name,
            age: c.age,
        }
    }
}

impl From<Activity> for ActivitySummary {
    fn from(a: Activity) -> Self {
        Self {
            id: a.id,
            name: a.name,
            difficulty: a.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_activity() -> ActivitySummary {
        ActivitySummary {
            id: 3,
            name: Some("Archery".to_string()),
            difficulty: Some(2),
        }
    }

    #[test]
    fn test_camper_detail_shape_has_no_back_references() {
        let detail = CamperDetail {
            id: 1,
            name: "Amy".to_string(),
            age: 12,
            signups: vec![CamperSignupView {
                id: 7,
                camper_id: Some(1),
                activity_id: Some(3),
                time: 9,
                activity: Some(sample_activity()),
            }],
            activities: vec![sample_activity()],
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["id"], json!(1));
        assert_eq!(value["signups"][0]["time"], json!(9));
        // The nested signup must not point back at its camper, and the nested
        // activity must not list campers or signups.
        assert!(value["signups"][0].get("camper").is_none());
        assert!(value["signups"][0]["activity"].get("campers").is_none());
        assert!(value["signups"][0]["activity"].get("signups").is_none());
        assert!(value["activities"][0].get("campers").is_none());
        // Timestamps never serialize.
        assert!(value.get("created_at").is_none());
        assert!(value.get("updated_at").is_none());
    }

    #[test]
    fn test_signup_detail_shape_has_no_back_references() {
        let detail = SignupDetail {
            id: 7,
            camper_id: Some(1),
            activity_id: Some(3),
            time: 9,
            camper: Some(CamperSummary {
                id: 1,
                name: "Amy".to_string(),
                age: 12,
            }),
            activity: Some(sample_activity()),
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert!(value["camper"].get("signups").is_none());
        assert!(value["activity"].get("signups").is_none());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_create_camper_accepts_numeric_string_age() {
        let payload: CreateCamper = serde_json::from_value(json!({
            "name": "Amy",
            "age": "12"
        }))
        .unwrap();
        assert_eq!(payload.name.as_deref(), Some("Amy"));
        assert_eq!(payload.age, Some(json!("12")));
    }
}
