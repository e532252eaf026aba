use anyhow::Context;
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use drama_rec_api::{models::DramaResponse, models::RecommendQuery, services, Catalog};

/// Recommend a single drama from the catalog
#[derive(Parser, Debug)]
#[command(name = "recommend")]
struct Args {
    /// Catalog CSV path
    #[arg(long, default_value = "kdrama_list.csv")]
    catalog: String,
    #[arg(long)]
    genre: Option<String>,
    /// Only return a drama from this year
    #[arg(long)]
    year: Option<i32>,
    #[arg(long)]
    actor: Option<String>,
    #[arg(long)]
    platform: Option<String>,
    #[arg(long)]
    content_rating: Option<String>,
}

impl From<Args> for RecommendQuery {
    fn from(args: Args) -> Self {
        RecommendQuery {
            genre: args.genre,
            year: args.year,
            actor: args.actor,
            platform: args.platform,
            content_rating: args.content_rating,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let catalog = Catalog::from_path(&args.catalog)
        .with_context(|| format!("failed to load catalog from {}", args.catalog))?;

    let query = RecommendQuery::from(args);
    let payload = match services::recommend(&catalog, &query) {
        Ok(scored) => serde_json::to_value(DramaResponse::from(scored.drama))?,
        Err(e) if e.is_user_facing() => json!({ "error": e.to_string() }),
        Err(e) => return Err(e.into()),
    };

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
