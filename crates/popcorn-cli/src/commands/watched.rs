use crate::commands::AppContext;
use crate::output::{Output, OutputFormat};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use serde_json::json;

pub async fn run_list(output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let entries = ctx.app.watchlist().entries();

    if output.format() == OutputFormat::Human {
        if entries.is_empty() {
            output.info("No watched movies yet");
            return Ok(());
        }
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["IMDb ID", "Title", "Year", "IMDb", "Yours", "Runtime"]);
        for entry in entries {
            table.add_row(vec![
                entry.imdb_id.clone(),
                entry.title.clone(),
                entry.year.clone(),
                format!("{:.1}", entry.rating_external),
                format!("{}", entry.rating_user),
                format!("{} min", entry.runtime_minutes),
            ]);
        }
        println!("{table}");
    } else {
        output.print_json(&json!({
            "type": "watched_list",
            "entries": entries,
        }));
    }

    Ok(())
}

pub async fn run_add(imdb_id: &str, rating: u8, output: &Output) -> Result<()> {
    let mut ctx = AppContext::load()?;

    if ctx.app.watchlist().contains(imdb_id) {
        output.info(format!("{imdb_id} is already on your watched list"));
        return Ok(());
    }

    // Same flow as the UI: open the detail, then promote it with the rating.
    let Some(fetch_id) = ctx.app.select(imdb_id) else {
        return Ok(());
    };
    let result = ctx.client.fetch_by_id(&fetch_id).await;
    ctx.app.apply_detail(&fetch_id, result);

    if let Some(message) = ctx.app.detail_error() {
        output.error(message);
        return Ok(());
    }

    let added = ctx.app.rate_and_add(rating).map_err(|e| eyre!("{}", e))?;
    if added {
        output.success(format!("Added {imdb_id} with rating {rating}/10"));
    }

    Ok(())
}

pub async fn run_remove(imdb_id: &str, output: &Output) -> Result<()> {
    let mut ctx = AppContext::load()?;
    let removed = ctx
        .app
        .remove_watched(imdb_id)
        .map_err(|e| eyre!("{}", e))?;
    if removed {
        output.success(format!("Removed {imdb_id} from your watched list"));
    } else {
        output.info(format!("{imdb_id} is not on your watched list"));
    }
    Ok(())
}

pub async fn run_summary(output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let summary = ctx.app.watchlist().summary();

    if output.format() == OutputFormat::Human {
        output.info(format!("{} movies watched", summary.count));
        output.info(format!("Average IMDb rating: {:.2}", summary.avg_rating_external));
        output.info(format!("Average your rating: {:.2}", summary.avg_rating_user));
        output.info(format!("Average runtime: {:.0} min", summary.avg_runtime_minutes));
    } else {
        output.print_json(&json!({
            "type": "watched_summary",
            "count": summary.count,
            "avg_rating_external": summary.avg_rating_external,
            "avg_rating_user": summary.avg_rating_user,
            "avg_runtime_minutes": summary.avg_runtime_minutes,
        }));
    }

    Ok(())
}
