//! Database connectivity probe.
//!
//! One check runs at startup to confirm the database is reachable; the
//! same check can be invoked on demand and returns a typed result instead
//! of only logging.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::infrastructure::postgres::PostgresPool;

/// Outcome of a single connectivity check against the database.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DatabaseHealth {
    /// Round trip succeeded.
    Ok { server_time: DateTime<Utc> },
    /// The pool holds established connections but the check itself failed.
    Degraded { reason: String },
    /// No connection could be established.
    Unreachable { reason: String },
}

impl DatabaseHealth {
    pub fn status(&self) -> &'static str {
        match self {
            DatabaseHealth::Ok { .. } => "ok",
            DatabaseHealth::Degraded { .. } => "degraded",
            DatabaseHealth::Unreachable { .. } => "unreachable",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, DatabaseHealth::Ok { .. })
    }
}

/// Ask the server for its current time.
///
/// One row, one `timestamptz` column. No retry and no timeout beyond the
/// pool's own acquire timeout.
pub async fn check(db: &PostgresPool) -> DatabaseHealth {
    match sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
        .fetch_one(db.pool())
        .await
    {
        Ok(server_time) => DatabaseHealth::Ok { server_time },
        Err(e) => {
            let reason = e.to_string();
            if db.pool().size() > 0 {
                DatabaseHealth::Degraded { reason }
            } else {
                DatabaseHealth::Unreachable { reason }
            }
        }
    }
}

/// One-shot startup probe.
///
/// Logs the outcome and nothing else: the listener does not wait on it and
/// the process keeps running whether it succeeds or fails.
pub async fn run_startup_probe(db: PostgresPool) -> DatabaseHealth {
    let health = check(&db).await;
    match &health {
        DatabaseHealth::Ok { server_time } => {
            tracing::info!(
                server_time = %server_time.to_rfc3339(),
                url = %db.database_url_masked(),
                "Database connection established"
            );
        }
        DatabaseHealth::Degraded { reason } | DatabaseHealth::Unreachable { reason } => {
            tracing::error!(
                status = health.status(),
                error = %reason,
                url = %db.database_url_masked(),
                "Database connectivity probe failed"
            );
        }
    }
    health
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        let ok = DatabaseHealth::Ok {
            server_time: Utc::now(),
        };
        assert_eq!(ok.status(), "ok");
        assert!(ok.is_ok());

        let degraded = DatabaseHealth::Degraded {
            reason: "timed out".to_string(),
        };
        assert_eq!(degraded.status(), "degraded");
        assert!(!degraded.is_ok());

        let unreachable = DatabaseHealth::Unreachable {
            reason: "connection refused".to_string(),
        };
        assert_eq!(unreachable.status(), "unreachable");
        assert!(!unreachable.is_ok());
    }

    #[test]
    fn test_health_serialization() {
        let health = DatabaseHealth::Unreachable {
            reason: "connection refused".to_string(),
        };
        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(json["status"], "unreachable");
        assert_eq!(json["reason"], "connection refused");

        let ok = DatabaseHealth::Ok {
            server_time: Utc::now(),
        };
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["status"], "ok");
        assert!(json["server_time"].is_string());
    }
}
