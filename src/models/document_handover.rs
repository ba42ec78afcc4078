//! Modelo de entrega de papeles

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Entrega de documentación a un cliente en una fecha dada
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct DocumentHandover {
    pub id: i32,
    pub client: String,
    pub plate: String,
    pub handover_date: NaiveDate,
    pub delivered_documents: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDocumentHandover {
    pub client: String,
    pub plate: String,
    pub handover_date: NaiveDate,
    pub delivered_documents: String,
}
