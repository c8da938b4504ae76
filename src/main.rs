use anyhow::Result;
use clap::Parser;

use kubepage_fetcher::{LogFetcher, Query};
use kubepage_k8s::{DEFAULT_CONTAINER_NAME, KubeClient};

/// Kubepage - paginated, time-ordered log retrieval across a deployment's pods
#[derive(Parser, Debug)]
#[command(name = "kubepage")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Kubernetes namespace
    #[arg(long)]
    namespace: String,

    /// Application identifier label
    #[arg(long, default_value = "")]
    application_id: String,

    /// Scope identifier label
    #[arg(long, default_value = "")]
    scope_id: String,

    /// Deployment identifier label
    #[arg(long, default_value = "")]
    deployment_id: String,

    /// Maximum number of log entries per page
    #[arg(long, default_value_t = 100)]
    limit: usize,

    /// Continuation token from a previous page
    #[arg(long, default_value = "")]
    next_page_token: String,

    /// Substring filter applied to raw log lines
    #[arg(long, default_value = "")]
    filter: String,

    /// Start time for the first page (RFC 3339)
    #[arg(long, default_value = "")]
    start_time: String,

    /// Container to read logs from
    #[arg(long, default_value = DEFAULT_CONTAINER_NAME)]
    container: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr so stdout stays a clean JSON document.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = KubeClient::new(&args.container).await?;
    let fetcher = LogFetcher::new(client);

    let query = Query {
        namespace: args.namespace,
        application_id: args.application_id,
        scope_id: args.scope_id,
        deployment_id: args.deployment_id,
        limit: args.limit,
        next_page_token: args.next_page_token,
        filter: args.filter,
        start_time: args.start_time,
    };

    let result = fetcher.fetch_logs(&query).await?;
    println!("{}", serde_json::to_string(&result)?);

    Ok(())
}
