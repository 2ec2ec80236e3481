use clap::{Parser, Subcommand};
use std::sync::Arc;

use gamefinder_engine::{
    Currency, DeepSeekClient, GameFinder, PriceReconciler, SteamStoreClient,
};

#[derive(Parser)]
#[command(name = "gamefinder-cli")]
#[command(about = "GameFinder CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for game recommendations by mood
    Search {
        /// Free-text mood/preference query
        query: String,
    },

    /// Show estimated prices for a game across all stores
    Prices {
        /// Game title
        game: String,

        /// Display currency (USD, EUR, UAH, RUB)
        #[arg(short, long, default_value = "USD")]
        currency: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query } => {
            let api_key = std::env::var("DEEPSEEK_API_KEY")
                .map_err(|_| anyhow::anyhow!("DEEPSEEK_API_KEY must be set"))?;

            let llm = Arc::new(DeepSeekClient::new(api_key));
            let steam = Arc::new(SteamStoreClient::new());
            let finder = GameFinder::new(llm, steam);

            println!("🔍 Searching for: {}", query);

            let result = finder.search(&query).await;

            println!("\n🧠 Mood: {}", result.analysis.understood_mood);
            println!("   Style: {}", result.analysis.recommended_style);
            println!("   Factors: {}", result.analysis.key_factors.join(", "));
            println!("   Reasoning: {}", result.analysis.reasoning);

            for (i, game) in result.games.iter().enumerate() {
                println!("\n{}. {} — {}%", i + 1, game.name, game.match_percent());
                println!("   Genre: {}", game.genre);
                println!("   Platforms: {}", game.platforms.join(", "));
                println!("   Playtime: {}", game.playtime);
                println!("   Vibe: {}", game.vibe);
                println!("   {}", game.description);
                println!("   🎯 {}", game.why_perfect);
            }
        }

        Commands::Prices { game, currency } => {
            let currency: Currency = currency.parse().map_err(anyhow::Error::msg)?;

            let steam = SteamStoreClient::new();
            let reconciler = PriceReconciler::new();

            println!("💸 Prices for: {} ({})", game, currency);

            let quotes = reconciler.quote_all(&game, currency, &steam).await;

            for quote in &quotes {
                let marker = if quote.is_real_price { " " } else { "~" };
                let discount = if quote.discount_percent > 0 {
                    format!(
                        " (-{}%, was {}{:.2})",
                        quote.discount_percent,
                        quote.currency.symbol(),
                        quote.original_price.unwrap_or(quote.price)
                    )
                } else {
                    String::new()
                };
                println!(
                    "   {:<8} {}{}{}",
                    quote.store.as_str(),
                    marker,
                    quote.display_price(),
                    discount
                );
            }

            println!("\n   ~ marks calculated estimates");
        }
    }

    Ok(())
}
