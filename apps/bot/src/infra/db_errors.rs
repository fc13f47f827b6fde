//! SeaORM -> DomainError translation helpers.
//!
//! Repos convert `sea_orm::DbErr` into `DomainError` here so higher layers
//! never match on database error strings themselves.

use sea_orm::DbErr;
use tracing::error;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};

/// Extract `table.column` from sqlite "UNIQUE constraint failed: table.column"
/// error messages. Composite keys report several columns; the first one is
/// enough to identify the table.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let marker = "UNIQUE constraint failed: ";
    let start = error_msg.find(marker)?;
    let rest = &error_msg[start + marker.len()..];
    rest.split_whitespace().next().map(|tc| tc.trim_end_matches(','))
}

/// Map a unique-constraint violation to the invariant it broke.
fn map_table_column_to_conflict(table_column: &str) -> (ConflictKind, &'static str) {
    if table_column.starts_with("players.") {
        (
            ConflictKind::DuplicatePlayer,
            "person already has a player in this game",
        )
    } else if table_column.starts_with("messages.") {
        (
            ConflictKind::DuplicateMessage,
            "player already has a recorded message for this turn",
        )
    } else if table_column.starts_with("persons.") {
        (
            ConflictKind::DuplicatePerson,
            "person already exists for this sender",
        )
    } else {
        (
            ConflictKind::Other(table_column.to_string()),
            "unique constraint violated",
        )
    }
}

/// Translate a SeaORM error into a `DomainError`.
///
/// Unique-constraint violations become `Conflict`s; these indicate a broken
/// programming invariant (handlers guard the user-facing paths), so they are
/// logged at error level. Everything else is an infra failure.
pub fn map_db_err(err: DbErr) -> DomainError {
    let msg = err.to_string();

    if let Some(table_column) = extract_sqlite_table_column(&msg) {
        let (kind, detail) = map_table_column_to_conflict(table_column);
        error!(error = %msg, "unique constraint violated");
        return DomainError::conflict(kind, detail);
    }

    if matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) {
        error!(error = %msg, "database unavailable");
        return DomainError::infra(InfraErrorKind::DbUnavailable, msg);
    }

    error!(error = %msg, "database error");
    DomainError::infra(InfraErrorKind::Other("DbErr".to_string()), msg)
}
