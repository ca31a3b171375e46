use dinerec_core::{validate_user_input, AppConfig, RecommendedRestaurant};
use dinerec_dataset::{load_table, price_stats, unique_cities, unique_cuisines};
use dinerec_engine::RecommendationEngine;
use dinerec_groq::{GroqClient, GroqConfig};

/// Validate the request, run the engine, and print the results.
///
/// Validation failures are reported as plain messages (with "did you
/// mean" suggestions) rather than stack traces; an unavailable ranker is
/// invisible except for the fallback reason text.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or the Groq client
/// cannot be constructed.
pub(crate) async fn run_recommend(
    config: &AppConfig,
    city: &str,
    cuisine: &str,
    price: &str,
    top: Option<usize>,
) -> anyhow::Result<()> {
    let table = load_table(&config.dataset_path)?;
    let cities = unique_cities(&table);
    let cuisines = unique_cuisines(&table);

    let input = match validate_user_input(city, cuisine, price, &cities, &cuisines) {
        Ok(input) => input,
        Err(e) => {
            println!("invalid input: {e}");
            return Ok(());
        }
    };

    let ranker = match &config.groq_api_key {
        Some(key) => {
            let mut groq = GroqConfig::new(key.clone());
            groq.model = config.groq_model.clone();
            groq.base_url = config.groq_base_url.clone();
            groq.timeout_secs = config.groq_timeout_secs;
            Some(GroqClient::new(groq)?)
        }
        None => {
            tracing::warn!("GROQ_API_KEY not set; using deterministic ranking only");
            None
        }
    };

    let engine = RecommendationEngine::new(table, ranker, config.tiers)
        .with_limits(config.candidate_limit, config.top_n);
    let recommendations = engine.get_recommendations(&input, top, None).await;

    if recommendations.is_empty() {
        println!(
            "no restaurants found for {} / {} at that price",
            input.city, input.cuisine
        );
        return Ok(());
    }

    print_recommendations(&recommendations);
    Ok(())
}

fn print_recommendations(recommendations: &[RecommendedRestaurant]) {
    let header = format!("{:<4}{:<32}{:<8}{:<10}CUISINES", "#", "NAME", "RATING", "COST");
    println!("{header}");
    for (index, rec) in recommendations.iter().enumerate() {
        let rating = rec
            .rating
            .map_or_else(|| "\u{2014}".to_string(), |r| format!("{r:.1}"));
        let cost = rec
            .cost_for_two
            .map_or_else(|| "\u{2014}".to_string(), |c| format!("{c:.0}"));
        println!(
            "{:<4}{:<32}{:<8}{:<10}{}",
            index + 1,
            truncate(&rec.name, 30),
            rating,
            cost,
            rec.cuisines.join(", ")
        );
        if !rec.reason.is_empty() {
            println!("    {}", rec.reason);
        }
    }
}

/// Truncate a display string to `max` characters, appending an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

pub(crate) fn run_cities(config: &AppConfig) -> anyhow::Result<()> {
    let table = load_table(&config.dataset_path)?;
    for city in unique_cities(&table) {
        println!("{city}");
    }
    Ok(())
}

pub(crate) fn run_cuisines(config: &AppConfig) -> anyhow::Result<()> {
    let table = load_table(&config.dataset_path)?;
    for cuisine in unique_cuisines(&table) {
        println!("{cuisine}");
    }
    Ok(())
}

pub(crate) fn run_stats(config: &AppConfig) -> anyhow::Result<()> {
    let table = load_table(&config.dataset_path)?;
    match price_stats(&table) {
        Some(stats) => {
            println!("restaurants with cost data: {}", stats.count);
            println!("min cost for two:    {:.0}", stats.min);
            println!("max cost for two:    {:.0}", stats.max);
            println!("mean cost for two:   {:.0}", stats.mean);
            println!("median cost for two: {:.0}", stats.median);
        }
        None => println!("no cost data in the dataset"),
    }
    Ok(())
}
