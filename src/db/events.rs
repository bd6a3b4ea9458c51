use crate::types::{Result, ToolError};
use libsql::{Builder, Connection, Database};

/// Client for the tabular event store.
///
/// The `Database` handle is built once and owned for the process lifetime;
/// connections are acquired per call and dropped before the call returns,
/// on every exit path.
pub struct EventStore {
    db: Database,
}

impl EventStore {
    /// Open (or create) the local database file and make sure the
    /// `evenements` table exists.
    pub async fn open(path: &str) -> anyhow::Result<Self> {
        let db = Builder::new_local(path).build().await?;
        let store = Self { db };
        store.ensure_schema().await?;
        Ok(store)
    }

    fn connection(&self) -> Result<Connection> {
        self.db
            .connect()
            .map_err(|e| ToolError::ExecutionError(format!("failed to get connection: {}", e)))
    }

    async fn ensure_schema(&self) -> anyhow::Result<()> {
        let conn = self.connection()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS evenements (
                nomenclature TEXT,
                titre TEXT,
                description TEXT,
                date TEXT,
                horaire TEXT,
                tag TEXT,
                langue TEXT
            )",
            (),
        )
        .await
        .map_err(|e| anyhow::anyhow!("failed to create evenements table: {}", e))?;

        Ok(())
    }

    /// Execute an agent-authored SQL statement verbatim and collect up to
    /// `max_rows` rows of untyped values, in the engine's native row order.
    ///
    /// Engine errors carry the engine's own message so the caller can
    /// self-correct the query on a retry.
    pub async fn run(&self, sql: &str, max_rows: usize) -> Result<Vec<Vec<libsql::Value>>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(sql, ())
            .await
            .map_err(|e| ToolError::ExecutionError(e.to_string()))?;

        let columns = rows.column_count();
        let mut collected = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| ToolError::ExecutionError(e.to_string()))?
        {
            if collected.len() >= max_rows {
                tracing::warn!(max_rows, "query result truncated at row cap");
                break;
            }
            let mut values = Vec::with_capacity(columns as usize);
            for idx in 0..columns {
                values.push(
                    row.get_value(idx)
                        .map_err(|e| ToolError::ExecutionError(e.to_string()))?,
                );
            }
            collected.push(values);
        }

        Ok(collected)
    }

    /// Insert one event row. Used by seeding and tests; the query tool
    /// itself is read-path only.
    pub async fn insert_event(
        &self,
        nomenclature: &str,
        titre: &str,
        description: &str,
        date: &str,
        horaire: &str,
        tag: &str,
        langue: &str,
    ) -> Result<()> {
        let conn = self.connection()?;

        conn.execute(
            "INSERT INTO evenements (nomenclature, titre, description, date, horaire, tag, langue)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            (nomenclature, titre, description, date, horaire, tag, langue),
        )
        .await
        .map_err(|e| ToolError::ExecutionError(format!("failed to insert event: {}", e)))?;

        Ok(())
    }
}
