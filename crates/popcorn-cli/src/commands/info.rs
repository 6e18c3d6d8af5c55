use crate::commands::AppContext;
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use popcorn_models::MovieDetail;
use serde_json::json;

pub async fn run_info(imdb_id: &str, output: &Output) -> Result<()> {
    let mut ctx = AppContext::load()?;

    // Selection starts empty, so this toggle always opens.
    let Some(fetch_id) = ctx.app.select(imdb_id) else {
        return Ok(());
    };
    let result = ctx.client.fetch_by_id(&fetch_id).await;
    ctx.app.apply_detail(&fetch_id, result);

    if let Some(message) = ctx.app.detail_error() {
        output.error(message);
        return Ok(());
    }
    let Some(detail) = ctx.app.detail() else {
        return Ok(());
    };

    if output.format() == OutputFormat::Human {
        print_detail(detail);
        if let Some(rating) = ctx.app.watchlist().rating_for(imdb_id) {
            output.info(format!("You rated this movie {rating}/10"));
        }
    } else {
        output.print_json(&json!({
            "type": "movie_detail",
            "detail": detail,
            "rating_user": ctx.app.watchlist().rating_for(imdb_id),
        }));
    }

    Ok(())
}

fn print_detail(detail: &MovieDetail) {
    println!("{} ({})", detail.title, detail.year);
    match detail.runtime_minutes {
        Some(minutes) => println!("{} • {} min", detail.released, minutes),
        None => println!("{}", detail.released),
    }
    println!("{}", detail.genre);
    if let Some(rating) = detail.rating_external {
        println!("{rating} IMDb rating");
    }
    println!();
    println!("{}", detail.plot);
    println!("Starring {}", detail.actors);
    println!("Directed by {}", detail.director);
}
