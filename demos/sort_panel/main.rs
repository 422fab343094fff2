//! Walk through the sort panel: add criteria, toggle, drag, search
//!
//! Criteria are kept in `./.sort-panel` and restored on the next run.
//! Set `RUST_LOG=sortable_table=debug` to see each edit logged.

use anyhow::Result;
use sortable_table::prelude::*;
use tracing_subscriber::EnvFilter;

fn format_row(cells: [&str; 5]) -> String {
    let [name, email, created, updated, status] = cells;
    format!("  {name:<15} {email:<27} {created:<11} {updated:<11} {status}")
}

fn print_table(title: &str, rows: &[ClientRecord]) {
    println!("\n{}", title);
    println!(
        "{}",
        format_row(["Name", "Email", "Created At", "Updated At", "Status"])
    );
    for row in rows {
        let created = row.created_at.to_string();
        let updated = row.updated_at.to_string();
        println!(
            "{}",
            format_row([
                &row.name,
                &row.email,
                &created,
                &updated,
                row.status.as_str(),
            ])
        );
    }
    if rows.is_empty() {
        println!("  No clients found. Adjust your search criteria.");
    }
}

fn print_criteria(engine: &SortEngine<FileCriteriaStore>) {
    let summary: Vec<String> = engine
        .current_criteria()
        .iter()
        .map(|c| format!("{} {}", c.field, c.direction))
        .collect();
    println!("Sort panel: [{}]", summary.join(", "));
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::var("SORT_PANEL_CONFIG") {
        Ok(path) => EngineConfig::from_yaml_file(&path)?,
        Err(_) => EngineConfig::default(),
    };

    let store = FileCriteriaStore::new(".sort-panel");
    let mut engine = SortEngine::with_config(sample_clients(), store, config);
    let mut notices = engine.subscribe();

    println!("Sortable Table");
    println!("==============");
    print_criteria(&engine);

    if engine.current_criteria().is_empty() {
        engine.add_criterion(SortField::Status)?;
        let created = engine.add_criterion(SortField::CreatedAt)?;
        engine.try_toggle_direction(&created)?;
    } else {
        // Drag the last criterion to the top
        let last = engine.current_criteria().len() - 1;
        engine.drag_start(last);
        engine.drag_enter(0);
        engine.drag_end()?;
    }

    while let Ok(envelope) = notices.try_recv() {
        println!(
            "  * {}: {}",
            envelope.event.title(),
            envelope.event.description()
        );
    }

    print_criteria(&engine);
    print_table("All clients", engine.sorted_view());

    engine.set_search_term("an");
    print_table("Search \"an\"", &engine.visible());

    Ok(())
}
