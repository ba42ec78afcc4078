//! Piezas compartidas por los repositorios
//!
//! Construcción de listados filtrados y borrado transaccional por id.

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::utils::errors::{not_found_error, AppResult};

/// Escapar comodines de LIKE para que el filtro sea una subcadena literal
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Patrón `%valor%` para un filtro "contiene"
pub fn contains_pattern(value: &str) -> String {
    format!("%{}%", escape_like(value))
}

/// SELECT con filtros opcionales "contiene" (ILIKE) unidos con AND
pub struct ListQuery<'args> {
    builder: QueryBuilder<'args, Postgres>,
    has_conditions: bool,
}

impl<'args> ListQuery<'args> {
    pub fn select(columns: &str, table: &str) -> Self {
        Self {
            builder: QueryBuilder::new(format!("SELECT {} FROM {}", columns, table)),
            has_conditions: false,
        }
    }

    /// Añade `column ILIKE '%value%'` solo si hay valor
    pub fn contains(mut self, column: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.builder
                .push(if self.has_conditions { " AND " } else { " WHERE " })
                .push(column)
                .push(" ILIKE ")
                .push_bind(contains_pattern(value));
            self.has_conditions = true;
        }
        self
    }

    pub fn order_by(mut self, clause: &str) -> Self {
        self.builder.push(" ORDER BY ").push(clause);
        self
    }

    pub fn sql(&self) -> &str {
        self.builder.sql()
    }

    pub fn into_builder(self) -> QueryBuilder<'args, Postgres> {
        self.builder
    }
}

/// Borrar una fila por id dentro de una transacción.
///
/// Si la fila no existe devuelve `NotFound` y la transacción se descarta
/// sin cambios (rollback al hacer drop).
pub async fn delete_by_id(
    pool: &PgPool,
    table: &'static str,
    resource: &str,
    id: i32,
) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    let existing: Option<(i32,)> =
        sqlx::query_as(&format!("SELECT id FROM {} WHERE id = $1 FOR UPDATE", table))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

    if existing.is_none() {
        return Err(not_found_error(resource, id));
    }

    sqlx::query(&format!("DELETE FROM {} WHERE id = $1", table))
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}
