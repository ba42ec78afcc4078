//! Modelo de papeles a retirar
//!
//! Documentación presentada en un registro que todavía hay que ir a buscar.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct PendingPickup {
    pub id: i32,
    pub client: String,
    pub plate: String,
    pub registry_location: String,
    pub submission_date: NaiveDate,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPendingPickup {
    pub client: String,
    pub plate: String,
    pub registry_location: String,
    pub submission_date: NaiveDate,
    pub comments: Option<String>,
}
