//! Transaction helper: one `with_txn` call is one atomically-visible
//! unit of work. An append plus its retroactive fixups touch up to three
//! rows, and a partial write would corrupt the running-total chain, so
//! everything commits together or not at all.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::txn_policy;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// Execute a closure within a database transaction.
///
/// Begins a transaction, runs the closure, then applies the process
/// transaction policy on Ok (commit, or rollback under the test-only
/// policy). On Err the transaction is rolled back and the original error
/// preserved.
pub async fn with_txn<R, F>(db: &DatabaseConnection, f: F) -> Result<R, DomainError>
where
    F: for<'c> FnOnce(
        &'c DatabaseTransaction,
    )
        -> Pin<Box<dyn Future<Output = Result<R, DomainError>> + Send + 'c>>,
{
    let txn = db.begin().await.map_err(map_db_err)?;
    let out = f(&txn).await;

    match out {
        Ok(val) => match txn_policy::current() {
            txn_policy::TxnPolicy::CommitOnOk => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(val)
            }
            txn_policy::TxnPolicy::RollbackOnOk => {
                txn.rollback().await.map_err(map_db_err)?;
                Ok(val)
            }
        },
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
