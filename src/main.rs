use acsfetch::{
    cli::Cli,
    fetch::{self, FetchRequest, TableValues},
    labels,
    output::{build_records, write_records},
    schema,
};
use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;
use std::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cli = Cli::parse();
    info!(
        year = cli.year,
        product = %cli.product,
        tables = ?cli.tables,
        tracts = ?cli.tracts,
        "startup"
    );

    // ─── 2) resolve schemas and labels up front ──────────────────────
    // An unknown table or a missing label file aborts the run before any
    // request goes out.
    let mut plan = Vec::with_capacity(cli.tables.len());
    for table in &cli.tables {
        let table_schema = schema::lookup(table)?;
        let label_map = labels::load(&cli.labels_dir, table)?;
        info!(table = %table, labels = label_map.len(), "loaded labels");
        plan.push((table.as_str(), table_schema, label_map));
    }

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;
    let client = Client::new();

    // ─── 3) fetch, join, write one CSV per (tract, table) ────────────
    for (table, table_schema, label_map) in &plan {
        for tract in &cli.tracts {
            let req = FetchRequest {
                year: cli.year,
                product: cli.product,
                table: table.to_string(),
                tract: tract.clone(),
            };
            let payload = fetch::fetch_table(&client, &req, cli.api_key.as_deref()).await?;
            let values = TableValues::from_payload(table, tract, payload)?;
            let records = build_records(table, table_schema, &values, label_map);

            let out_path = cli.out_dir.join(format!("{}_{}.csv", tract, table));
            write_records(&out_path, table_schema, &records)?;
            info!(
                table = %table,
                tract = %tract,
                rows = records.len(),
                path = %out_path.display(),
                "wrote table"
            );
        }
    }

    info!("all done");
    Ok(())
}
