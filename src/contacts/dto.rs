use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::contacts::repo::{Contact, ContactFields};

/// Request body for creating or fully replacing a contact.
#[derive(Debug, Deserialize)]
pub struct ContactPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Date,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<ContactPayload> for ContactFields {
    fn from(p: ContactPayload) -> Self {
        Self {
            first_name: p.first_name,
            last_name: p.last_name,
            email: p.email,
            phone: p.phone,
            birth_date: p.birth_date,
            notes: p.notes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactOut {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Date,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
}

impl From<Contact> for ContactOut {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            phone: c.phone,
            birth_date: c.birth_date,
            notes: c.notes,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search_query: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_parses_iso_birth_date() {
        let p: ContactPayload = serde_json::from_str(
            r#"{
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com",
                "phone": "+44 20 7946 0000",
                "birth_date": "1815-12-10"
            }"#,
        )
        .expect("payload parses");
        assert_eq!(p.birth_date.year(), 1815);
        assert!(p.notes.is_none());
    }

    #[test]
    fn payload_rejects_missing_required_field() {
        let res: Result<ContactPayload, _> = serde_json::from_str(
            r#"{ "first_name": "Ada", "email": "ada@example.com" }"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn contact_out_never_exposes_the_owner() {
        let out = ContactOut {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "+44".into(),
            birth_date: time::macros::date!(1815 - 12 - 10),
            notes: Some("mathematician".into()),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(&out).unwrap();
        assert!(json.get("user_id").is_none());
        assert_eq!(json["birth_date"], "1815-12-10");
    }
}
