use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;
use tracing::info;

use catalog::{CATEGORIES, CITIES, Restaurant};
use orchestrator::{NO_RESULTS_MESSAGE, RecommendationOrchestrator, ResultState, ResultView};
use rec_client::{DEFAULT_BASE_URL, ServiceConfig};
use request::{DEFAULT_RESULT_COUNT, InputState, Mode, UserFeatureProfile};

/// RestoRecs - Restaurant Recommendation Client
#[derive(Parser)]
#[command(name = "resto-recs")]
#[command(about = "Ask the restaurant recommender for places by tags or by user", long_about = None)]
struct Cli {
    /// Base URL of the recommendation service
    #[arg(long, env = "RESTO_RECS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds (waits indefinitely when unset)
    #[arg(long, env = "RESTO_RECS_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend restaurants matching a list of tags
    Tags {
        /// Comma separated tags, e.g. "indian, mexican"
        #[arg(long)]
        tags: String,

        /// Only recommend restaurants in this city
        #[arg(long, value_parser = PossibleValuesParser::new(CITIES.iter().copied()))]
        city: Option<String>,

        /// Number of recommendations to return
        #[arg(short, long, default_value_t = DEFAULT_RESULT_COUNT, value_parser = clap::value_parser!(i64).range(1..))]
        n: i64,
    },

    /// Recommend restaurants for a known user and show their features
    User {
        /// User ID to get recommendations for
        #[arg(long)]
        user_id: String,

        /// Number of recommendations to return
        #[arg(short, long, default_value_t = DEFAULT_RESULT_COUNT, value_parser = clap::value_parser!(i64).range(1..))]
        n: i64,
    },

    /// List the cities the service knows about
    Cities,

    /// List the category tags the service knows about
    Categories,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut input = InputState::new();
    match cli.command {
        Commands::Cities => {
            print_reference("Cities", CITIES);
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Categories => {
            print_reference("Categories", CATEGORIES);
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Tags { tags, city, n } => {
            input.select_mode(Mode::TagBased);
            input.set_tags_text(tags);
            input.set_city_name(city.unwrap_or_default());
            input.set_result_count(n);
        }
        Commands::User { user_id, n } => {
            input.select_mode(Mode::UserBased);
            input.set_user_id(user_id);
            input.set_result_count(n);
        }
    }

    let config = ServiceConfig::new(&cli.base_url)
        .context("Invalid --base-url")?
        .with_timeout_secs(cli.timeout_secs);
    let orchestrator = RecommendationOrchestrator::from_config(config)
        .context("Failed to build recommendation client")?;

    handle_submit(&orchestrator, &input).await
}

/// Handle the 'tags' and 'user' commands
async fn handle_submit(
    orchestrator: &RecommendationOrchestrator,
    input: &InputState,
) -> Result<ExitCode> {
    let mut rx = orchestrator.subscribe();

    // Render the loading indicator as soon as the store reports it
    let loading_indicator = async {
        while rx.changed().await.is_ok() {
            let loading = rx.borrow_and_update().loading;
            if loading {
                println!("{}", "Fetching recommendations...".dimmed());
            } else {
                break;
            }
        }
    };

    let (delivery, _) = tokio::join!(orchestrator.submit(input), loading_indicator);
    info!("Submission finished: {:?}", delivery);

    let state = orchestrator.snapshot();
    Ok(render(&state))
}

/// Render a settled state and pick the exit code
fn render(state: &ResultState) -> ExitCode {
    if let Some(profile) = &state.user_profile {
        print_profile(profile);
    }

    match state.view() {
        ResultView::Results(restaurants) => {
            print_restaurants(restaurants);
            ExitCode::SUCCESS
        }
        ResultView::Empty => ExitCode::SUCCESS,
        ResultView::Failed => {
            println!("{}", NO_RESULTS_MESSAGE.yellow());
            ExitCode::FAILURE
        }
        ResultView::Loading => ExitCode::FAILURE,
    }
}

/// Helper function to print the user feature summary
fn print_profile(profile: &UserFeatureProfile) {
    println!("{}", "User Features".bold().blue());
    println!("{}Name: {}", "• ".green(), profile.user_name);
    if !profile.features.is_empty() {
        let chips = profile
            .features
            .iter()
            .map(|f| format!("[{}]", f))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}{}", "• ".green(), chips.cyan());
    }
    println!();
}

/// Helper function to format and print restaurant cards
fn print_restaurants(restaurants: &[Restaurant]) {
    println!("{}", "Restaurant Recommendations:".bold().blue());
    for (i, restaurant) in restaurants.iter().enumerate() {
        println!(
            "{}. {}",
            (i + 1).to_string().green(),
            restaurant.name.bold()
        );
        println!("   {}", restaurant.full_address);
        println!("   Categories: {}", restaurant.categories);
        println!(
            "   {} {} ({} reviews)",
            "★".yellow(),
            restaurant.display_rating(),
            restaurant.review_count
        );
    }
}

fn print_reference(title: &str, items: &[&str]) {
    println!("{}", format!("{} ({}):", title, items.len()).bold().blue());
    for item in items {
        println!("  - {}", item);
    }
}
