//! Demo runner: exercises every orchestration pattern against the lore API.
//!
//! Configuration comes from the environment at process start:
//! `ARDA_API_TOKEN` (required) and `ARDA_BASE_URL` (optional, defaults to the
//! public endpoint). A failing pattern prints its error and the runner moves
//! on to the next one; nothing is retried.

mod dashboard;

use anyhow::{Context, Result};
use arda_client::{ApiToken, ClientConfig, LoreClient, Query};
use arda_patterns::bounded::{FlightGauge, quotes_bounded};
use arda_patterns::cancel::run_cancellation_demo;
use arda_patterns::context::quotes_then_crunch;
use arda_patterns::deferred::deferred_random_quote;
use arda_patterns::fanout::quotes_per_movie;
use arda_patterns::insights::movie_insights;
use arda_patterns::isolation::movies_and_characters_isolated;
use arda_patterns::parallel::movies_and_characters;
use arda_patterns::sequential::first_book_chapters;
use dashboard::Dashboard;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use url::Url;

const TOKEN_VAR: &str = "ARDA_API_TOKEN";
const BASE_URL_VAR: &str = "ARDA_BASE_URL";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    // Diagnostics go to stderr; stdout is reserved for the dashboard.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn load_config() -> Result<ClientConfig> {
    let token = env::var(TOKEN_VAR).with_context(|| format!("{TOKEN_VAR} must be set"))?;
    let mut config = ClientConfig::new(ApiToken::new(token));
    if let Ok(raw) = env::var(BASE_URL_VAR) {
        let base_url =
            Url::parse(&raw).with_context(|| format!("{BASE_URL_VAR} is not a valid URL"))?;
        config = config.with_base_url(base_url);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    let api = LoreClient::new(config)?;

    show_sequential(&api).await;
    show_parallel(&api).await;
    show_context_switching(&api).await;
    show_isolation(&api).await;
    show_cancellation().await;
    show_bounded(&api).await;
    show_fanout(&api).await;
    show_deferred(&api).await;
    show_insights(&api).await;

    Ok(())
}

async fn show_sequential(api: &LoreClient) {
    println!("\n--- Pattern 1: Sequential ---");
    match first_book_chapters(api).await {
        Ok((book, chapters)) => {
            println!("Fetched {} chapters of \"{}\".", chapters.len(), book.name);
        }
        Err(err) => eprintln!("sequential pattern failed: {err}"),
    }
}

async fn show_parallel(api: &LoreClient) {
    println!("\n--- Pattern 2: Parallel ---");
    match movies_and_characters(api).await {
        Ok((movies, characters)) => println!(
            "Fetched {} movies and {} characters concurrently.",
            movies.total.unwrap_or(movies.len() as u64),
            characters.total.unwrap_or(characters.len() as u64),
        ),
        Err(err) => eprintln!("parallel pattern failed: {err}"),
    }
}

async fn show_context_switching(api: &LoreClient) {
    println!("\n--- Pattern 3: Context switching ---");
    match quotes_then_crunch(api, 30).await {
        Ok((quotes, crunched)) => println!(
            "Fetched {} quotes on the I/O pool, crunched fib(30) = {crunched} on the blocking pool.",
            quotes.len()
        ),
        Err(err) => eprintln!("context-switching pattern failed: {err}"),
    }
}

async fn show_isolation(api: &LoreClient) {
    println!("\n--- Pattern 4: Partial-failure isolation ---");
    let (movies, characters) = movies_and_characters_isolated(api).await;
    match movies {
        Ok(page) => println!("Movie branch delivered {} docs.", page.len()),
        Err(err) => println!("Movie branch failed locally: {err}"),
    }
    match characters {
        Ok(page) => println!("Character branch delivered {} docs.", page.len()),
        Err(err) => println!("Character branch failed locally: {err}"),
    }
}

async fn show_cancellation() {
    println!("\n--- Pattern 5: Cooperative cancellation ---");
    match run_cancellation_demo(Duration::from_millis(10)).await {
        Ok(completed) => println!("Worker stopped cooperatively after {completed} iterations."),
        Err(err) => eprintln!("cancellation pattern failed: {err}"),
    }
}

async fn show_bounded(api: &LoreClient) {
    println!("\n--- Pattern 6: Bounded concurrency ---");
    let gauge = Arc::new(FlightGauge::new());
    match quotes_bounded(api, 10, 3, Arc::clone(&gauge)).await {
        Ok(results) => println!(
            "Collected {} responses; peak in-flight was {} (permit count 3).",
            results.len(),
            gauge.peak()
        ),
        Err(err) => eprintln!("bounded-concurrency pattern failed: {err}"),
    }
}

async fn show_fanout(api: &LoreClient) {
    println!("\n--- Pattern 7: Fan-out / fan-in ---");
    match quotes_per_movie(api, 2, 5).await {
        Ok(harvest) => {
            let names: Vec<&str> = harvest.movies.iter().map(|m| m.name.as_str()).collect();
            println!(
                "Flattened {} quotes from {} movies ({}).",
                harvest.quotes.len(),
                harvest.movies.len(),
                names.join(", ")
            );
            for quote in &harvest.quotes {
                println!(" > {}", quote.dialog);
            }
        }
        Err(err) => eprintln!("fan-out pattern failed: {err}"),
    }
}

async fn show_deferred(api: &LoreClient) {
    println!("\n--- Pattern 8: Deferred start ---");
    match deferred_random_quote(api).await {
        Ok(quote) => println!("Deferred request finally ran: \"{}\"", quote.dialog),
        Err(err) => eprintln!("deferred pattern failed: {err}"),
    }
}

async fn show_insights(api: &LoreClient) {
    println!("\n--- Pattern 9: Movie insights ---");
    let first_movie = match api.movies(&Query::new().limit(1)).await {
        Ok(page) => page.docs.into_iter().next(),
        Err(err) => {
            eprintln!("insights pattern failed: {err}");
            return;
        }
    };
    let Some(movie) = first_movie else {
        eprintln!("insights pattern failed: no movies returned");
        return;
    };

    match movie_insights(api, &movie.id).await {
        Ok(insights) => {
            let mut dashboard = Dashboard::new("MIDDLE-EARTH MOVIE INSIGHTS");
            let mut movie_lines = vec![insights.movie.name.clone()];
            if let Some(runtime) = insights.movie.runtime_in_minutes {
                movie_lines.push(format!("Runtime: {runtime} min"));
            }
            if let Some(score) = insights.movie.rotten_tomatoes_score {
                movie_lines.push(format!("Rotten Tomatoes: {score}"));
            }
            dashboard.add_card("Movie", &movie_lines);

            let quote_lines: Vec<String> =
                insights.quotes.iter().map(|q| q.dialog.clone()).collect();
            dashboard.add_card("Quotes", &quote_lines);

            println!("{}", dashboard.render());
        }
        Err(err) => eprintln!("insights pattern failed: {err}"),
    }
}
