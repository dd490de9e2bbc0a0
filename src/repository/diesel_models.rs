//! Diesel ORM models for database tables.

use diesel::prelude::*;

use crate::schema;

/// Access log record from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::access_logs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccessLogRecord {
    pub id: i32,
    pub postal_code: String,
    pub created_at: String,
}

/// New access log row for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::access_logs)]
pub struct NewAccessLog<'a> {
    pub postal_code: &'a str,
    pub created_at: &'a str,
}
