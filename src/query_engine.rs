//! CSV Query Engine
//!
//! Loads relational CSV files into an in-memory SQLite store (one table
//! per file, table name = file name without extension) and executes SQL
//! against them, returning column headers plus row tuples. The resolver
//! never calls into this module; its only contract with the resolver is
//! consuming a subsequence of the canonical column names inside the SQL
//! it is handed.

use crate::error::{LinkerError, Result};
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// The fixed relation files of the paper-database deployment.
pub const DEFAULT_TABLE_FILES: [&str; 13] = [
    "AffiliationID_Place_Affiliation.csv",
    "AuthID_AffiliationID.csv",
    "AuthID_FieldID.csv",
    "AuthID_Name.csv",
    "ConfID_FieldID.csv",
    "ConfID_PaperID.csv",
    "ConfID_Venue_Year.csv",
    "FieldID_Topic.csv",
    "KeywordID_PaperID.csv",
    "PaperID_AuthID.csv",
    "PaperID_FieldID.csv",
    "PaperID_Summary.csv",
    "PaperID_Title.csv",
];

/// Result of executing a SQL statement: headers plus row tuples.
/// Values ingested from CSV are text; SQL expressions can produce
/// numbers or NULL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutput {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

/// In-memory relational store over a set of CSV files.
pub struct QueryEngine {
    conn: Connection,
}

impl QueryEngine {
    pub fn new() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Load every file of [`DEFAULT_TABLE_FILES`] from `data_dir`.
    pub fn load_default_tables(&mut self, data_dir: &Path) -> Result<()> {
        for file in DEFAULT_TABLE_FILES {
            self.load_csv(&data_dir.join(file))?;
        }
        Ok(())
    }

    /// Load one CSV file as a table named after the file stem. The first
    /// record is the header row; columns are untyped and every value is
    /// stored as text. An existing table of the same name is replaced.
    pub fn load_csv(&mut self, path: &Path) -> Result<String> {
        let table = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                LinkerError::Ingestion(format!("no table name in path {}", path.display()))
            })?
            .to_string();

        let mut reader = csv::Reader::from_path(path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
        if headers.is_empty() {
            return Err(LinkerError::Ingestion(format!(
                "{}: no header row",
                path.display()
            )));
        }

        self.conn
            .execute(&format!("DROP TABLE IF EXISTS {}", quote_ident(&table)), [])?;
        let column_list = headers
            .iter()
            .map(|h| quote_ident(h))
            .collect::<Vec<_>>()
            .join(", ");
        self.conn.execute(
            &format!("CREATE TABLE {} ({})", quote_ident(&table), column_list),
            [],
        )?;

        let placeholders = vec!["?"; headers.len()].join(", ");
        let insert_sql = format!(
            "INSERT INTO {} VALUES ({})",
            quote_ident(&table),
            placeholders
        );
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(&insert_sql)?;
            let mut row_count = 0usize;
            for record in reader.records() {
                let record = record?;
                stmt.execute(rusqlite::params_from_iter(record.iter()))?;
                row_count += 1;
            }
            debug!(table = %table, rows = row_count, "loaded CSV table");
        }
        tx.commit()?;

        info!(table = %table, file = %path.display(), "table ready");
        Ok(table)
    }

    /// Execute a SQL statement and collect headers plus all result rows.
    pub fn execute(&self, sql: &str) -> Result<QueryOutput> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| LinkerError::Query(format!("failed to prepare {:?}: {}", sql, e)))?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let column_count = columns.len();

        let mut rows = Vec::new();
        let mut result = stmt.query([])?;
        while let Some(row) = result.next()? {
            let mut values = Vec::with_capacity(column_count);
            for idx in 0..column_count {
                values.push(value_to_json(row.get_ref(idx)?));
            }
            rows.push(values);
        }

        Ok(QueryOutput { columns, rows })
    }
}

fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

fn value_to_json(value: ValueRef<'_>) -> serde_json::Value {
    match value {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Integer(i) => serde_json::Value::Number(i.into()),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Text(t) => serde_json::Value::String(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => serde_json::Value::String(String::from_utf8_lossy(b).into_owned()),
    }
}
