use clap::{Args, Parser, Subcommand};

use bizdir_core::{map_category, MinRating, SearchCriteria, SortKey};
use bizdir_search::{decode_query, encode_query, SearchSession, ViewState};

#[derive(Debug, Parser)]
#[command(name = "bizdir-cli")]
#[command(about = "Directory search command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one catalog search and print the projected results.
    Search(SearchArgs),
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Free-text search term.
    #[arg(long)]
    term: Option<String>,

    /// City or area filter.
    #[arg(long)]
    location: Option<String>,

    /// Category label or canonical code; "all" clears the constraint.
    #[arg(long)]
    category: Option<String>,

    /// Sort order: rating, name, newest, or oldest.
    #[arg(long)]
    sort: Option<String>,

    /// Minimum rating filter: all, 2, 3, or 4.
    #[arg(long)]
    rating: Option<String>,

    /// Shareable query string to start from (e.g. "service=plumber&sort=name");
    /// explicit flags override its fields.
    #[arg(long)]
    from_url: Option<String>,
}

/// Decodes `--from-url` and layers the explicit flags on top. Category
/// labels go through the canonical mapper; an unmapped label means no
/// constraint, same as the catalog would treat it.
fn merged_criteria(args: &SearchArgs) -> SearchCriteria {
    let mut criteria = decode_query(args.from_url.as_deref().unwrap_or(""));
    if let Some(term) = &args.term {
        criteria.term = term.clone();
    }
    if let Some(location) = &args.location {
        criteria.location = location.clone();
    }
    if let Some(category) = &args.category {
        criteria.category = map_category(category).to_owned();
    }
    if let Some(sort) = &args.sort {
        criteria.sort = SortKey::parse_or_default(sort);
    }
    if let Some(rating) = &args.rating {
        criteria.min_rating = MinRating::parse_or_default(rating);
    }
    criteria
}

async fn run_search(args: &SearchArgs) -> anyhow::Result<()> {
    let config = bizdir_core::load_app_config_from_env()?;
    let query = encode_query(&merged_criteria(args));

    let mut session = SearchSession::new(&config, &query)?;
    session.start().await;
    session.settle().await;

    let (state, records) = session.view().await;
    match state {
        ViewState::Error(message) => anyhow::bail!(message),
        ViewState::Empty => println!("No businesses matched your search."),
        ViewState::Populated => {
            for record in &records {
                let city = if record.city.is_empty() {
                    "-"
                } else {
                    record.city.as_str()
                };
                println!(
                    "{}  [{}]  {:.1}★ ({} reviews)  {}",
                    record.name, city, record.rating, record.total_reviews, record.category
                );
            }
            println!("\n{} result(s)", records.len());
        }
        // settle() waits out the request and its minimum-loading window.
        ViewState::Initializing | ViewState::Loading => {}
    }

    let share = session.share_query();
    if !share.is_empty() {
        println!("shareable: ?{share}");
    }

    session.teardown();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => run_search(&args).await,
    }
}
