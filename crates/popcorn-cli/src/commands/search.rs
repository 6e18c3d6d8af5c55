use crate::commands::AppContext;
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use popcorn_core::{SearchStatus, MIN_QUERY_LEN};
use serde_json::json;

pub async fn run_search(query: &str, output: &Output) -> Result<()> {
    tracing::debug!("Search command started");

    let mut ctx = AppContext::load()?;

    let Some(request) = ctx.app.set_query(query) else {
        output.error(format!(
            "Query must be at least {MIN_QUERY_LEN} characters"
        ));
        return Ok(());
    };

    let outcome = ctx
        .client
        .search_by_title(&request.query, &request.cancel)
        .await;
    ctx.app.apply_search(request.generation, outcome);

    let session = ctx.app.session();
    match session.status() {
        SearchStatus::Success => {
            if output.format() == OutputFormat::Human {
                output.info(format!("Found {} results", session.results().len()));
                let mut table = Table::new();
                table.load_preset(UTF8_FULL);
                table.set_header(vec!["IMDb ID", "Title", "Year"]);
                for item in session.results() {
                    table.add_row(vec![&item.imdb_id, &item.title, &item.year]);
                }
                println!("{table}");
            } else {
                output.print_json(&json!({
                    "type": "search_results",
                    "query": session.query(),
                    "results": session.results(),
                }));
            }
        }
        SearchStatus::Error => {
            output.error(session.error().unwrap_or("search failed"));
        }
        // A one-shot CLI search always settles; these are unreachable here.
        SearchStatus::Idle | SearchStatus::Loading => {}
    }

    Ok(())
}
