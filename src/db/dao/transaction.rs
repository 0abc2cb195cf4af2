use sea_orm::DatabaseTransaction;

use super::error::{DaoLayerError, DaoResult};

/// Commits `txn` when `result` is `Ok`, rolls it back otherwise.
///
/// A failed rollback is logged and the original error is returned, so callers
/// always see the failure that aborted the unit of work.
pub(crate) async fn finish<T>(txn: DatabaseTransaction, result: DaoResult<T>) -> DaoResult<T> {
    match result {
        Ok(value) => {
            txn.commit().await.map_err(DaoLayerError::Db)?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!(error = %rollback_err, "transaction rollback failed");
            }
            Err(err)
        }
    }
}

/// SQL recorded by a mock connection, flattened across its transaction log.
#[cfg(test)]
pub(crate) fn executed_sql(db: sea_orm::DatabaseConnection) -> Vec<String> {
    db.into_transaction_log()
        .iter()
        .flat_map(|txn| txn.statements().iter().map(|stmt| stmt.sql.clone()))
        .collect()
}

#[cfg(test)]
pub(crate) fn assert_rolled_back(db: sea_orm::DatabaseConnection) {
    let sql = executed_sql(db);
    assert_eq!(sql.last().map(String::as_str), Some("ROLLBACK"), "log: {sql:?}");
    assert!(!sql.iter().any(|stmt| stmt == "COMMIT"), "log: {sql:?}");
}
