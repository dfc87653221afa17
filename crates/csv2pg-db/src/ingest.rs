//! Plan execution: one transaction per uploaded file.

use csv2pg_core::IngestPlan;
use sqlx::postgres::PgConnection;
use sqlx::Connection;

use crate::error::{DbError, Result};

/// Execute an ingest plan on an open connection.
///
/// Issues the idempotent create statement, one bound insert per data row,
/// and a single commit after all rows. Any failure drops the transaction,
/// rolling back every row of the file.
pub async fn ingest(conn: &mut PgConnection, plan: &IngestPlan) -> Result<u64> {
    let mut tx = conn.begin().await.map_err(DbError::Begin)?;

    sqlx::query(plan.create_sql)
        .execute(&mut *tx)
        .await
        .map_err(|source| DbError::CreateTable {
            table: plan.table,
            source,
        })?;

    for (idx, row) in plan.rows.iter().enumerate() {
        let mut insert = sqlx::query(&plan.insert_sql);
        for value in row {
            insert = insert.bind(value.as_str());
        }
        insert
            .execute(&mut *tx)
            .await
            .map_err(|source| DbError::Insert {
                table: plan.table,
                row: idx + 1,
                source,
            })?;
    }

    tx.commit().await.map_err(|source| DbError::Commit {
        table: plan.table,
        rows: plan.rows.len(),
        source,
    })?;

    tracing::debug!(table = plan.table, rows = plan.rows.len(), "plan committed");
    Ok(plan.rows.len() as u64)
}
