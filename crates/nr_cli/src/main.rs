use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use nr_core::{Article, ArticleFetcher, Notice, Publisher};
use nr_digest::{build_assembler, PipelineConfig, Roundup};
use nr_publish::{HashnodeConfig, HashnodePublisher, PollinationsImages};
use nr_scrapers::{DuckDuckGoNews, HtmlArticleFetcher, SearchSettings};
use std::sync::Arc;
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "huggingface",
        help = "Summarization model. Available models: huggingface (default), chat, dummy"
    )]
    model: String,
    /// Endpoint override for the summarization model.
    #[arg(long, global = true)]
    model_url: Option<String>,
    /// Model identifier on the remote backend.
    #[arg(long, global = true)]
    model_id: Option<String>,
    #[arg(long, global = true, env = "HF_API_TOKEN", hide_env_values = true)]
    hf_token: Option<String>,
    #[arg(long, global = true, env = "CHAT_API_KEY", hide_env_values = true)]
    chat_api_key: Option<String>,
    #[arg(
        long,
        global = true,
        default_value = "google",
        help = "Translation backend. Available translators: google (default), passthrough"
    )]
    translator: String,
    /// Skip AI illustrations.
    #[arg(long, global = true)]
    no_images: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct TopicArgs {
    topic: String,
    #[arg(long)]
    location: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct DigestArgs {
    #[command(flatten)]
    topic: TopicArgs,
    /// Target language of the digest.
    #[arg(long, default_value = nr_core::SOURCE_LANGUAGE)]
    language: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search recent news for a topic.
    Search(TopicArgs),
    /// Search and summarize each article.
    Summarize(TopicArgs),
    /// Print the markdown digest for a topic.
    Digest(DigestArgs),
    /// Build the digest and publish it to Hashnode.
    Publish(DigestArgs),
    /// Download a single article page.
    Fetch {
        url: String,
        /// Summarize the downloaded text.
        #[arg(long)]
        summarize: bool,
    },
    /// Run the HTTP API.
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
}

impl Cli {
    fn inference_config(&self) -> nr_inference::Config {
        let api_key = match self.model.to_lowercase().as_str() {
            "chat" | "openai" | "ollama" => self.chat_api_key.clone(),
            _ => self.hf_token.clone(),
        };
        nr_inference::Config {
            api_key,
            model_name: Some(self.model.clone()),
            model_id: self.model_id.clone(),
            model_url: self.model_url.clone(),
        }
    }
}

fn hashnode_publisher() -> anyhow::Result<HashnodePublisher> {
    let token = std::env::var("HASHNODE_TOKEN").context("HASHNODE_TOKEN is not set")?;
    let publication_id =
        std::env::var("HASHNODE_PUBLICATION_ID").context("HASHNODE_PUBLICATION_ID is not set")?;
    Ok(HashnodePublisher::new(HashnodeConfig::new(token, publication_id))?)
}

async fn create_roundup(cli: &Cli) -> anyhow::Result<Roundup> {
    let summarization = nr_inference::create_model(Some(cli.inference_config())).await?;
    let translation = nr_inference::create_translator(Some(nr_inference::Config::with_model(&cli.translator)))?;
    let (summarizer, assembler) = build_assembler(summarization, translation, PipelineConfig::default());

    let search = DuckDuckGoNews::new(SearchSettings::default())?;
    info!("🦆 News search ready (region {})", search.settings().region);

    let roundup = Roundup::new(Arc::new(search), summarizer, assembler);
    if cli.no_images {
        return Ok(roundup);
    }
    Ok(roundup.with_images(Arc::new(PollinationsImages::new()?)))
}

fn report(notices: &[Notice]) {
    for notice in notices {
        warn!("⚠️ {}", notice);
    }
}

fn print_articles(articles: &[Article]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(articles)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    nr_core::logging::init_logging(Level::INFO);
    let cli = Cli::parse();

    match &cli.command {
        Commands::Search(args) => {
            let roundup = create_roundup(&cli).await?;
            info!("🔎 Searching news about {}", args.topic);
            let articles = roundup.find(&args.topic, args.location.as_deref()).await?;
            print_articles(&articles)?;
        }
        Commands::Summarize(args) => {
            let roundup = create_roundup(&cli).await?;
            let mut articles = roundup.find(&args.topic, args.location.as_deref()).await?;
            info!("📝 Summarizing {} articles", articles.len());
            let notices = roundup.summarize_articles(&mut articles).await;
            report(&notices);
            print_articles(&articles)?;
        }
        Commands::Digest(args) => {
            let roundup = create_roundup(&cli).await?;
            let outcome = roundup
                .run(&args.topic.topic, args.topic.location.as_deref(), &args.language)
                .await?;
            report(&outcome.notices);
            info!("📰 {} ({})", outcome.value.title, outcome.value.slug);
            println!("{}", outcome.value.markdown_body);
        }
        Commands::Publish(args) => {
            let publisher = hashnode_publisher()?;
            let roundup = create_roundup(&cli).await?;
            let outcome = roundup
                .run(&args.topic.topic, args.topic.location.as_deref(), &args.language)
                .await?;
            report(&outcome.notices);
            let post = roundup.publish(&publisher, &outcome.value).await?;
            info!("🚀 Published {}", post.title);
            println!("{}", post.url);
        }
        Commands::Fetch { url, summarize } => {
            let fetcher = HtmlArticleFetcher::new()?;
            let mut article = fetcher.fetch(url).await;
            if nr_scrapers::is_sentinel(&article) {
                warn!("⚠️ Could not retrieve {}", url);
            } else if *summarize {
                let roundup = create_roundup(&cli).await?;
                let notices = roundup.summarize_articles(std::slice::from_mut(&mut article)).await;
                report(&notices);
            }
            print_articles(std::slice::from_ref(&article))?;
        }
        Commands::Serve { addr } => {
            let roundup = create_roundup(&cli).await?;
            let publisher = match hashnode_publisher() {
                Ok(publisher) => Some(Arc::new(publisher) as Arc<dyn Publisher>),
                Err(e) => {
                    warn!("⚠️ Publishing disabled: {}", e);
                    None
                }
            };
            nr_web::serve(nr_web::AppState { roundup, publisher }, addr).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digest_command() {
        let cli = Cli::try_parse_from(["nr", "digest", "climate", "--location", "kenya", "--language", "fr"]).unwrap();
        match cli.command {
            Commands::Digest(args) => {
                assert_eq!(args.topic.topic, "climate");
                assert_eq!(args.topic.location.as_deref(), Some("kenya"));
                assert_eq!(args.language, "fr");
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.model, "huggingface");
        assert_eq!(cli.translator, "google");
    }

    #[test]
    fn test_api_key_follows_model() {
        let cli = Cli::try_parse_from([
            "nr", "--model", "chat", "--chat-api-key", "sk-1", "--hf-token", "hf-1", "search", "ai",
        ])
        .unwrap();
        let config = cli.inference_config();
        assert_eq!(config.api_key.as_deref(), Some("sk-1"));
        assert_eq!(config.model_name.as_deref(), Some("chat"));

        let cli = Cli::try_parse_from(["nr", "--hf-token", "hf-1", "search", "ai"]).unwrap();
        assert_eq!(cli.inference_config().api_key.as_deref(), Some("hf-1"));
    }
}
