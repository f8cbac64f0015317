use anyhow::Result;
use clap::Parser;
use schema_linker::query_engine::QueryEngine;
use schema_linker::resolver::ColumnResolver;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "schema-linker")]
#[command(about = "Resolve a natural-language sentence to schema column names")]
struct Args {
    /// The sentence to resolve (named entities already stripped)
    sentence: String,

    /// SQL statement to run against the CSV tables after resolution
    #[arg(long)]
    sql: Option<String>,

    /// Directory holding the relation CSV files (default: ./data)
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    info!("Resolving: {}", args.sentence);

    let resolver = ColumnResolver::default();
    let columns = resolver.resolve(&args.sentence)?;
    println!("{}", serde_json::to_string(&columns)?);

    if let Some(sql) = args.sql {
        let mut engine = QueryEngine::new()?;
        engine.load_default_tables(&args.data_dir)?;
        let output = engine.execute(&sql)?;
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}
