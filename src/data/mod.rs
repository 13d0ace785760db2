//! Data access layer repositories.
//!
//! One repository per entity kind. Repositories are generic over [`sea_orm::ConnectionTrait`] so the
//! same code runs on a pooled connection or inside a transaction. Every get-or-create and
//! upsert is a single `INSERT ... ON CONFLICT` statement, so the lookup and the insert can
//! not race against another writer.

pub mod app;
pub mod app_identification;
pub mod category;
pub mod permission;
pub mod screenshot;
pub mod tag;

#[cfg(test)]
mod tests;

use sea_orm::DbErr;

/// Treats an insert skipped by `ON CONFLICT DO NOTHING` as an empty success.
pub(crate) fn ignore_conflict<T: Default>(result: Result<T, DbErr>) -> Result<T, DbErr> {
    match result {
        Err(DbErr::RecordNotInserted) => Ok(T::default()),
        other => other,
    }
}

/// Returns the single row of an upsert that always yields one row.
pub(crate) fn single_row<M>(rows: Vec<M>, table: &str) -> Result<M, DbErr> {
    rows.into_iter()
        .next()
        .ok_or_else(|| DbErr::RecordNotFound(format!("upsert into {} returned no row", table)))
}
