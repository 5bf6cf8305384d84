//! Deterministic partial-update statement builder
//!
//! Partial updates accept any subset of an entity's fields. The builder
//! collects the supplied fields in declaration order and produces a SET
//! clause with stable column order and parameter numbering, so the
//! generated SQL is reproducible for any given input.

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::error::{AppError, AppResult};

/// A value queued for binding into the update statement
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Int(i32),
    Date(NaiveDate),
}

/// Builder for `UPDATE <table> SET ... WHERE id = $n`
#[derive(Debug)]
pub struct UpdateBuilder {
    table: &'static str,
    sets: Vec<(&'static str, BindValue)>,
}

impl UpdateBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            sets: Vec::new(),
        }
    }

    /// Queue a text column when a value was supplied
    pub fn set_text(mut self, column: &'static str, value: Option<&str>) -> Self {
        if let Some(v) = value {
            self.sets.push((column, BindValue::Text(v.to_string())));
        }
        self
    }

    /// Queue an integer column when a value was supplied
    pub fn set_int(mut self, column: &'static str, value: Option<i32>) -> Self {
        if let Some(v) = value {
            self.sets.push((column, BindValue::Int(v)));
        }
        self
    }

    /// Queue a date column when a value was supplied
    pub fn set_date(mut self, column: &'static str, value: Option<NaiveDate>) -> Self {
        if let Some(v) = value {
            self.sets.push((column, BindValue::Date(v)));
        }
        self
    }

    /// True when no field has been supplied
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Render the statement. The row id binds as the last parameter.
    fn sql(&self) -> String {
        let sets: Vec<String> = self
            .sets
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{} = ${}", column, i + 1))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE id = ${}",
            self.table,
            sets.join(", "),
            self.sets.len() + 1
        )
    }

    /// Execute against the pool, returning the number of affected rows.
    /// A builder with no queued fields is a validation error, not a no-op.
    pub async fn execute(self, pool: &Pool<Postgres>, id: i32) -> AppResult<u64> {
        if self.is_empty() {
            return Err(AppError::Validation("No fields to update".to_string()));
        }
        let sql = self.sql();
        let mut query = sqlx::query(&sql);
        for (_, value) in &self.sets {
            query = match value {
                BindValue::Text(v) => query.bind(v.clone()),
                BindValue::Int(v) => query.bind(*v),
                BindValue::Date(v) => query.bind(*v),
            };
        }
        let result = query.bind(id).execute(pool).await.map_err(|e| {
            tracing::error!(table = self.table, statement = %sql, error = %e, "Database query failed");
            AppError::Database(e)
        })?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fields_in_insertion_order() {
        let builder = UpdateBuilder::new("computer")
            .set_text("label", Some("PC-01"))
            .set_int("quantity", Some(3))
            .set_text("status", Some("functional"));
        assert_eq!(
            builder.sql(),
            "UPDATE computer SET label = $1, quantity = $2, status = $3 WHERE id = $4"
        );
    }

    #[test]
    fn skips_absent_fields() {
        let builder = UpdateBuilder::new("room")
            .set_text("label", None)
            .set_text("status", Some("inactive"));
        assert_eq!(builder.sql(), "UPDATE room SET status = $1 WHERE id = $2");
    }

    #[test]
    fn same_input_same_statement() {
        let build = || {
            UpdateBuilder::new("lab_utility")
                .set_text("label", Some("Soldering iron"))
                .set_int("quantity", Some(4))
                .set_int("isassignedto", Some(2))
        };
        assert_eq!(build().sql(), build().sql());
    }

    #[test]
    fn empty_builder_is_reported() {
        let builder = UpdateBuilder::new("room");
        assert!(builder.is_empty());
    }
}
