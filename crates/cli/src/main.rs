use anyhow::{Context, Result, anyhow};
use catalog::{BudgetRange, Catalog, PackageId, UserPreferences};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;
use encoder::RuleBasedEmbedder;
use engine::{DEFAULT_LIMIT, Recommendation, RecommendationEngine};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// ticket-recs - Ticket package recommendation engine
#[derive(Parser)]
#[command(name = "ticket-recs")]
#[command(about = "Semantic matching and ranking for ticket packages", long_about = None)]
struct Cli {
    /// Path to the catalog JSON file
    #[arg(short, long, default_value = "data/catalog.json")]
    catalog: PathBuf,

    /// Reference date for event-date features (defaults to today)
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the catalog against a free-text query
    Recommend {
        /// The query, e.g. "VIP basketball in New York for 4 people"
        #[arg(long)]
        query: String,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Show the reasons behind each recommendation
        #[arg(long)]
        explain: bool,
    },

    /// Rank the catalog against structured preferences
    Match {
        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        sport: Option<String>,

        #[arg(long)]
        hospitality: Option<String>,

        /// Target event date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        party_size: Option<u32>,

        #[arg(long)]
        budget_min: Option<f32>,

        #[arg(long)]
        budget_max: Option<f32>,

        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Show one package in full
    Show {
        #[arg(long)]
        id: PackageId,
    },

    /// Report engine status (backend readiness, catalog size, last path)
    Status,

    /// Measure ranking latency over repeated requests
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the catalog (once, at startup)
    println!("Loading catalog from {}...", cli.catalog.display());
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_json(&cli.catalog).context("Failed to load catalog")?,
    );
    println!(
        "{} Loaded {} packages in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    let reference_date = cli
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let embedder = Arc::new(RuleBasedEmbedder::new(reference_date));

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Recommend {
            query,
            limit,
            explain,
        } => handle_recommend(catalog, embedder, query, limit, explain).await?,
        Commands::Match {
            location,
            sport,
            hospitality,
            date,
            party_size,
            budget_min,
            budget_max,
            limit,
        } => {
            let preferences = build_preferences(
                location,
                sport,
                hospitality,
                date,
                party_size,
                budget_min,
                budget_max,
            )?;
            handle_match(catalog, embedder, preferences, limit).await?
        }
        Commands::Show { id } => handle_show(catalog, id)?,
        Commands::Status => handle_status(catalog, embedder).await?,
        Commands::Benchmark { requests } => handle_benchmark(catalog, embedder, requests).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<Catalog>,
    embedder: Arc<RuleBasedEmbedder>,
    query: String,
    limit: usize,
    explain: bool,
) -> Result<()> {
    let engine = RecommendationEngine::new(catalog, embedder).await;

    let start = Instant::now();
    let recommendations = engine.rank_query(&query, limit).await;
    let elapsed = start.elapsed();

    println!(
        "{}",
        format!("Recommendations for \"{}\":", query).bold().blue()
    );
    print_recommendations(&recommendations, explain);
    println!(
        "({} results in {:?}, path: {})",
        recommendations.len(),
        elapsed,
        engine.status().last_path
    );
    Ok(())
}

/// Handle the 'match' command
async fn handle_match(
    catalog: Arc<Catalog>,
    embedder: Arc<RuleBasedEmbedder>,
    preferences: UserPreferences,
    limit: usize,
) -> Result<()> {
    if preferences.is_empty() {
        return Err(anyhow!(
            "At least one preference flag is required (see --help)"
        ));
    }

    let engine = RecommendationEngine::new(catalog, embedder).await;
    let recommendations = engine.rank_preferences(&preferences, limit);

    println!("{}", "Preference matches:".bold().blue());
    if recommendations.is_empty() {
        println!("No packages match those preferences.");
    } else {
        print_recommendations(&recommendations, true);
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(catalog: Arc<Catalog>, id: PackageId) -> Result<()> {
    let package = catalog
        .get(id)
        .ok_or_else(|| anyhow!("Package {} not found", id))?;

    println!("{}", format!("Package {}", package.id).bold().blue());
    println!("{}Venue: {}", "• ".green(), package.venue);
    println!("{}Location: {}", "• ".green(), package.location);
    println!("{}Sport: {}", "• ".green(), package.sport);
    println!("{}Date: {}", "• ".green(), package.event_date);
    println!("{}Price: ${:.2}", "• ".cyan(), package.price);
    println!("{}Seating: {}", "• ".cyan(), package.seating_category);
    println!(
        "{}Hospitality: {} at {} ({})",
        "• ".cyan(),
        package.hospitality_type,
        package.hospitality_venue,
        package
            .hospitality_level
            .map(|l| format!("{:?}", l))
            .unwrap_or_else(|| "untiered".to_string())
    );
    println!(
        "{}Available tickets: {}",
        "• ".cyan(),
        package.available_tickets
    );
    println!("{}", package.description);
    Ok(())
}

/// Handle the 'status' command
async fn handle_status(catalog: Arc<Catalog>, embedder: Arc<RuleBasedEmbedder>) -> Result<()> {
    let engine = RecommendationEngine::new(catalog, embedder).await;

    // Give the background build a moment so the report reflects steady
    // state rather than the startup window.
    let became_ready = engine.wait_for_index(Duration::from_secs(5)).await;
    let status = engine.status();

    println!("{}", "Engine status:".bold().blue());
    println!(
        "{}Accelerated index: {}",
        "• ".green(),
        if status.ann_active {
            "active".green()
        } else {
            "inactive (linear fallback)".yellow()
        }
    );
    println!("{}Catalog size: {}", "• ".green(), status.catalog_size);
    println!(
        "{}Vector dimension: {}",
        "• ".green(),
        status.vector_dimension
    );
    println!("{}Last scoring path: {}", "• ".green(), status.last_path);
    if !became_ready {
        println!("(index did not become ready within 5s)");
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    catalog: Arc<Catalog>,
    embedder: Arc<RuleBasedEmbedder>,
    requests: usize,
) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("--requests must be at least 1"));
    }

    let engine = Arc::new(RecommendationEngine::new(catalog, embedder).await);
    engine.wait_for_index(Duration::from_secs(10)).await;

    let queries = [
        "VIP basketball in New York for 4 people",
        "cheap family hockey night this weekend",
        "luxury football suite under $800",
        "baseball tickets in boston around $100",
    ];

    let mut timings = Vec::with_capacity(requests);
    for i in 0..requests {
        let query = queries[i % queries.len()];
        let start = Instant::now();
        let results = engine.rank_query(query, DEFAULT_LIMIT).await;
        timings.push(start.elapsed());
        std::hint::black_box(results);
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn build_preferences(
    location: Option<String>,
    sport: Option<String>,
    hospitality: Option<String>,
    date: Option<NaiveDate>,
    party_size: Option<u32>,
    budget_min: Option<f32>,
    budget_max: Option<f32>,
) -> Result<UserPreferences> {
    let budget = match (budget_min, budget_max) {
        (Some(min), Some(max)) if min <= max => Some(BudgetRange::new(min, max)),
        (Some(min), Some(max)) => {
            return Err(anyhow!("--budget-min {} exceeds --budget-max {}", min, max));
        }
        (Some(min), None) => Some(BudgetRange::new(min, f32::MAX)),
        (None, Some(max)) => Some(BudgetRange::new(0.0, max)),
        (None, None) => None,
    };

    Ok(UserPreferences {
        location,
        sport,
        hospitality,
        target_date: date,
        party_size,
        budget,
    })
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[Recommendation], explain: bool) {
    for (rank, rec) in recommendations.iter().enumerate() {
        let p = &rec.package;
        println!(
            "{}. {} - {} at {} on {} - ${:.0} - {}",
            (rank + 1).to_string().green(),
            format!("{}%", rec.score).bold(),
            p.sport,
            p.venue,
            p.event_date,
            p.price,
            p.location
        );
        if explain {
            for reason in &rec.reasons {
                println!("   - {}", reason);
            }
        }
    }
}
