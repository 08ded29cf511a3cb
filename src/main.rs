//! # seo-audit CLI
//!
//! Command-line entry point with two subcommands:
//!
//! - `serve`: run the HTTP endpoint for browser clients
//! - `audit`: audit one URL and print the result
//!
//! Both share the fetch settings (user agent, timeout, auxiliary-failure
//! policy), which can also come from `SEO_AUDIT_*` environment variables.

mod telemetry;

use clap::{Args, Parser, Subcommand};
use seo_audit::audit::{
    AuditConfig, AuditOutcome, Auditor, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use seo_audit::server::{self, DEFAULT_BIND_ADDR, ServerConfig};
use tracing::{info, instrument};

#[derive(Parser)]
#[command(author, version, about = "Fetch a page and report its on-page SEO signals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the audit API over HTTP
    Serve(ServeArgs),

    /// Audit a single URL and print the result
    Audit(AuditArgs),
}

#[derive(Args, Debug)]
struct FetchArgs {
    /// User-Agent header sent with every request
    #[arg(long, env = "SEO_AUDIT_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "SEO_AUDIT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Fail the audit when robots.txt or sitemap.xml cannot be fetched
    #[arg(long, env = "SEO_AUDIT_STRICT_AUXILIARY")]
    strict_auxiliary: bool,
}

impl FetchArgs {
    fn auditor(&self) -> seo_audit::prelude::Result<Auditor> {
        let config = AuditConfig::builder()
            .user_agent(self.user_agent.clone())
            .timeout_secs(self.timeout)
            .strict_auxiliary(self.strict_auxiliary)
            .build();
        Ok(Auditor::new(config)?)
    }
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to listen on
    #[arg(short, long, env = "SEO_AUDIT_BIND", default_value = DEFAULT_BIND_ADDR)]
    bind: String,

    /// Origin allowed to call the API (repeatable; default allows any origin)
    #[arg(long = "allow-origin", env = "SEO_AUDIT_ALLOWED_ORIGINS", value_delimiter = ',')]
    allow_origins: Vec<String>,

    #[command(flatten)]
    fetch: FetchArgs,
}

#[derive(Args, Debug)]
struct AuditArgs {
    /// URL to audit
    #[arg(required = true)]
    url: String,

    /// Output format (text|json)
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    #[command(flatten)]
    fetch: FetchArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing_subscriber();

    match cli.command {
        Some(Commands::Serve(args)) => serve_command(args).await?,
        Some(Commands::Audit(args)) => audit_command(args).await?,
        None => {
            let _ = Cli::parse_from(["seo-audit", "--help"]);
        }
    }

    Ok(())
}

#[instrument]
async fn serve_command(args: ServeArgs) -> anyhow::Result<()> {
    let auditor = args.fetch.auditor()?;
    let config = ServerConfig {
        bind_addr: args.bind,
        allowed_origins: args.allow_origins,
    };

    server::serve(auditor, config, shutdown_signal()).await?;
    Ok(())
}

#[instrument]
async fn audit_command(args: AuditArgs) -> anyhow::Result<()> {
    let auditor = args.fetch.auditor()?;
    let outcome = auditor.run(&args.url).await;

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        _ => match outcome {
            AuditOutcome::Report(report) => {
                let signals = &report.signals;
                println!("URL:               {}", args.url);
                println!("Title:             {}", signals.title);
                println!("Meta description:  {}", signals.meta_description);
                println!("H1:                {}", signals.h1);
                println!(
                    "Images:            {} ({} missing alt)",
                    signals.total_images, signals.image_alt_missing
                );
                println!("Word count:        {}", signals.word_count);
                println!("Canonical tag:     {}", yes_no(signals.has_canonical));
                println!("robots.txt:        {}", yes_no(report.has_robots_txt));
                println!("sitemap.xml:       {}", yes_no(report.has_sitemap_xml));
            }
            AuditOutcome::Failed { error } => {
                println!("Audit of {} failed: {}", args.url, error);
            }
        },
    }

    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
