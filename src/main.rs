use std::path::PathBuf;

use clap::Parser;
use trivia::{db::Db, models::Catalog, names, router, services::TriviaService, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database URL.
    #[arg(long, env, default_value = names::DEFAULT_DATABASE_URL)]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = names::DEFAULT_ADDRESS)]
    address: String,

    /// JSON catalog to seed an empty database with, instead of the bundled sample.
    #[arg(long, env)]
    seed_file: Option<PathBuf>,

    /// Leave an empty database empty.
    #[arg(long, env)]
    no_seed: bool,

    /// Fixed seed for quiz question selection.
    #[arg(long, env)]
    quiz_seed: Option<u64>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| names::DEFAULT_LOG_FILTER.to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(&args.database_url).await?;

    if !args.no_seed {
        let catalog = match &args.seed_file {
            Some(path) => Catalog::from_json(&tokio::fs::read_to_string(path).await?)?,
            None => Catalog::sample()?,
        };
        db.seed(&catalog).await?;
    }

    let trivia = match args.quiz_seed {
        Some(seed) => TriviaService::seeded(db, seed),
        None => TriviaService::new(db),
    };
    let app = router(AppState { trivia });

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!("listening on {}", args.address);
    axum::serve(listener, app).await?;

    Ok(())
}
