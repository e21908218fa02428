use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use landing_content::catalog::StaticTables;
use landing_content::config::Config;
use landing_content::db::{init_pool, PgContentSource};
use landing_content::{ContentSource, InMemoryContentSource, Locale, ServiceContent, TierResolver};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "landing-content")]
#[command(about = "Resolve bilingual service × city landing-page content")]
struct Args {
    /// Skip the database even if DATABASE_URL is set (static catalogue only)
    #[arg(long)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a (service, city) pair
    Resolve {
        service: String,
        city: String,
        /// Print a single-locale view (es or en) instead of the full record
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Resolve a legacy composite slug, e.g. abogados-herencias-lorca
    Slug {
        slug: String,
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Resolve every advertised route and report the ones that yield nothing
    Audit,
    /// List every advertised route with its Spanish slug
    Paths,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let statics = StaticTables::builtin().with_slug_prefix(config.slug_prefix.clone());

    let source: Arc<dyn ContentSource> = if args.offline || config.is_offline() {
        warn!("No database configured - resolving from the static catalogue only");
        Arc::new(InMemoryContentSource::new())
    } else {
        let pool = init_pool(&config).await?;
        Arc::new(PgContentSource::new(pool))
    };

    let routes = statics.catalog.route_pairs(&statics.lookup);
    let resolver = TierResolver::new(source, statics);

    match args.command {
        Command::Resolve { service, city, locale } => {
            let content = resolver.resolve(&service, &city).await;
            print_content(content, locale.as_deref(), &format!("{}/{}", service, city))?;
        }
        Command::Slug { slug, locale } => {
            let content = resolver.resolve_by_slug(&slug).await;
            print_content(content, locale.as_deref(), &slug)?;
        }
        Command::Audit => {
            info!("Auditing {} advertised routes...", routes.len());
            let missing = resolver.unresolved(&routes).await;
            if !missing.is_empty() {
                for (service, city) in &missing {
                    eprintln!("❌ {}/{} does not resolve", service, city);
                }
                bail!("{} of {} routes do not resolve", missing.len(), routes.len());
            }
            println!("✅ All {} routes resolve", routes.len());
        }
        Command::Paths => {
            for (service, city) in &routes {
                println!("{}\t{}\t{}", service, city, resolver.codec().compose(service, city));
            }
        }
    }

    Ok(())
}

fn print_content(content: Option<ServiceContent>, locale: Option<&str>, what: &str) -> Result<()> {
    let Some(content) = content else {
        bail!("Not found: {}", what);
    };

    let json = match locale {
        Some(code) => {
            let Some(locale) = Locale::from_code(code) else {
                bail!("Unsupported locale '{}'", code);
            };
            serde_json::to_string_pretty(&content.localized(locale))?
        }
        None => serde_json::to_string_pretty(&content)?,
    };

    println!("{}", json);
    Ok(())
}
