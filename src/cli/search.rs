use tabled::Table;

use crate::{
    cli::auth::{connect, spinner},
    management::CatalogCache,
    types::{SearchEntry, SearchKind, SearchTableRow},
    warning,
};

pub async fn search(kind: SearchKind, query: String, limit: u32, json: bool) {
    let (client, _bridge) = connect().await;
    let mut cache = CatalogCache::new();

    let pb = spinner(&format!("Searching {}s...", kind.field()));
    let results = cache.search_generic(&client, kind, &query, limit).await;
    pb.finish_and_clear();

    if let Some(e) = cache.last_error() {
        warning!("{}", e);
    }

    let records = results.bucket(kind);
    if json {
        println!(
            "{}",
            CatalogCache::compile_search_results(records, kind.element())
        );
        return;
    }

    if records.is_empty() {
        warning!("Nothing found for '{}'", query);
        return;
    }

    let rows: Vec<SearchTableRow> = records
        .iter()
        .map(|record| SearchEntry::from_record(record, kind.element()))
        .map(|entry| SearchTableRow {
            id: entry.id.to_string(),
            name: entry.name,
        })
        .collect();

    println!("{}", Table::new(rows));
}
