use schema_linker::query_engine::{QueryEngine, DEFAULT_TABLE_FILES};
use schema_linker::resolver::ColumnResolver;
use std::io::Write;
use std::path::{Path, PathBuf};

fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

/// Minimal fixture of the paper-database relation files: headers derived
/// from the file names, a handful of rows for the tables the tests join.
fn write_default_tables(dir: &Path) {
    for file in DEFAULT_TABLE_FILES {
        let stem = file.trim_end_matches(".csv");
        let contents = match stem {
            "AuthID_Name" => "AuthID,Name\n1,Ada Lovelace\n2,Alan Turing\n".to_string(),
            "PaperID_AuthID" => "PaperID,AuthID\n10,1\n11,2\n12,1\n".to_string(),
            "PaperID_Title" => {
                "PaperID,Title\n10,Notes on the Engine\n11,Computing Machinery\n12,Diagrams\n"
                    .to_string()
            }
            _ => format!("{}\n", stem.replace('_', ",")),
        };
        write_csv(dir, file, &contents);
    }
}

#[test]
fn test_load_default_tables_and_query_one() {
    let dir = tempfile::tempdir().unwrap();
    write_default_tables(dir.path());

    let mut engine = QueryEngine::new().unwrap();
    engine.load_default_tables(dir.path()).unwrap();

    let out = engine.execute("SELECT Name FROM AuthID_Name ORDER BY AuthID").unwrap();
    assert_eq!(out.columns, vec!["Name"]);
    assert_eq!(out.rows.len(), 2);
    assert_eq!(out.rows[0][0], serde_json::json!("Ada Lovelace"));
}

#[test]
fn test_join_across_relation_files() {
    let dir = tempfile::tempdir().unwrap();
    write_default_tables(dir.path());

    let mut engine = QueryEngine::new().unwrap();
    engine.load_default_tables(dir.path()).unwrap();

    let out = engine
        .execute(
            "SELECT t.Title \
             FROM PaperID_Title t \
             JOIN PaperID_AuthID pa ON pa.PaperID = t.PaperID \
             JOIN AuthID_Name an ON an.AuthID = pa.AuthID \
             WHERE an.Name = 'Ada Lovelace' \
             ORDER BY t.PaperID",
        )
        .unwrap();
    assert_eq!(out.columns, vec!["Title"]);
    assert_eq!(
        out.rows,
        vec![
            vec![serde_json::json!("Notes on the Engine")],
            vec![serde_json::json!("Diagrams")],
        ]
    );
}

#[test]
fn test_missing_relation_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    // No files written at all.
    let mut engine = QueryEngine::new().unwrap();
    assert!(engine.load_default_tables(dir.path()).is_err());
}

#[test]
fn test_bad_sql_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "t.csv", "A\n1\n");
    let mut engine = QueryEngine::new().unwrap();
    engine.load_csv(&dir.path().join("t.csv")).unwrap();
    assert!(engine.execute("SELECT nope FROM missing").is_err());
}

/// The resolver's downstream contract: the columns it emits are usable
/// column names in SQL against the loaded relations.
#[test]
fn test_resolved_columns_are_queryable() {
    let dir = tempfile::tempdir().unwrap();
    write_default_tables(dir.path());

    let resolver = ColumnResolver::default();
    let columns = resolver.resolve("which author wrote the paper").unwrap();
    assert_eq!(columns, vec!["PaperID", "AuthID"]);

    let mut engine = QueryEngine::new().unwrap();
    engine.load_default_tables(dir.path()).unwrap();
    let sql = format!(
        "SELECT {}, {} FROM PaperID_AuthID ORDER BY PaperID",
        columns[0], columns[1]
    );
    let out = engine.execute(&sql).unwrap();
    assert_eq!(out.columns, vec!["PaperID", "AuthID"]);
    assert_eq!(out.rows.len(), 3);
}
