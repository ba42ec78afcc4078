//! Modelo de gestoría
//!
//! Registro de los papeles que recibe la gestoría para un vehículo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ManagementRecord {
    pub id: i32,
    pub client: String,
    pub plate: String,
    pub received_documents: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewManagementRecord {
    pub client: String,
    pub plate: String,
    pub received_documents: String,
    pub notes: Option<String>,
}
