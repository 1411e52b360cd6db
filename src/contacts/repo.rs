use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};

/// Address-book entry owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contact {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Date,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Mutable contact fields, as accepted on create and update.
#[derive(Debug, Clone)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Date,
    pub notes: Option<String>,
}

const CONTACT_COLUMNS: &str =
    "id, user_id, first_name, last_name, email, phone, birth_date, notes, created_at";

impl Contact {
    /// All contacts of one owner, optionally narrowed by a case-insensitive
    /// substring match on first name, last name or email. Always returns
    /// materialized rows.
    pub async fn list_by_owner(
        db: &PgPool,
        user_id: i64,
        search_query: Option<&str>,
    ) -> anyhow::Result<Vec<Contact>> {
        let rows = match search_query.filter(|q| !q.is_empty()) {
            Some(q) => {
                let pattern = format!("%{}%", q);
                sqlx::query_as::<_, Contact>(&format!(
                    r#"
                    SELECT {CONTACT_COLUMNS}
                    FROM contacts
                    WHERE user_id = $1
                      AND (first_name ILIKE $2 OR last_name ILIKE $2 OR email ILIKE $2)
                    ORDER BY last_name, first_name
                    "#
                ))
                .bind(user_id)
                .bind(pattern)
                .fetch_all(db)
                .await?
            }
            None => {
                sqlx::query_as::<_, Contact>(&format!(
                    r#"
                    SELECT {CONTACT_COLUMNS}
                    FROM contacts
                    WHERE user_id = $1
                    ORDER BY last_name, first_name
                    "#
                ))
                .bind(user_id)
                .fetch_all(db)
                .await?
            }
        };
        Ok(rows)
    }

    /// Lookup by primary key, scoped to the owner.
    pub async fn get(db: &PgPool, user_id: i64, id: i64) -> anyhow::Result<Option<Contact>> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            r#"
            SELECT {CONTACT_COLUMNS}
            FROM contacts
            WHERE id = $1 AND user_id = $2
            "#
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(contact)
    }

    pub async fn create(
        db: &PgPool,
        user_id: i64,
        fields: &ContactFields,
    ) -> anyhow::Result<Contact> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            r#"
            INSERT INTO contacts (user_id, first_name, last_name, email, phone, birth_date, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {CONTACT_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(fields.birth_date)
        .bind(&fields.notes)
        .fetch_one(db)
        .await?;
        Ok(contact)
    }

    /// Overwrites all mutable fields. `None` when the row does not exist for
    /// this owner, so callers can answer 404 instead of blowing up.
    pub async fn update(
        db: &PgPool,
        user_id: i64,
        id: i64,
        fields: &ContactFields,
    ) -> anyhow::Result<Option<Contact>> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            r#"
            UPDATE contacts
            SET first_name = $3, last_name = $4, email = $5,
                phone = $6, birth_date = $7, notes = $8
            WHERE id = $1 AND user_id = $2
            RETURNING {CONTACT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(fields.birth_date)
        .bind(&fields.notes)
        .fetch_optional(db)
        .await?;
        Ok(contact)
    }

    /// True when a row was removed.
    pub async fn delete(db: &PgPool, user_id: i64, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM contacts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Contacts whose next birthday occurrence falls within the next seven
    /// days. The window predicate is pure Rust (see `birthday`), so year
    /// wrap-around and Feb 29 need no SQL gymnastics.
    pub async fn upcoming_birthdays(
        db: &PgPool,
        user_id: i64,
        today: Date,
    ) -> anyhow::Result<Vec<Contact>> {
        let contacts = Self::list_by_owner(db, user_id, None).await?;
        Ok(contacts
            .into_iter()
            .filter(|c| super::birthday::in_upcoming_window(c.birth_date, today))
            .collect())
    }
}
