use std::time::Duration;

use clap::{Parser, Subcommand};
use solidpod::{PodClient, PodOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "solidpod - LDP container client for Solid pods")]
struct Args {
    /// Pod base URL (e.g., http://localhost:3000/alice/)
    #[arg(long)]
    pod: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Fail with an error report instead of only logging failures
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a basic container under the pod root
    CreateContainer {
        /// Container name, sent as the slug
        name: String,
    },
    /// Replace a resource with the given records
    Publish {
        container: String,
        file: String,
        records: Vec<String>,
    },
    /// Print the records of a resource, one per line
    Read { container: String, file: String },
    /// Append records to a resource
    Update {
        container: String,
        file: String,
        records: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let opts = PodOptions::new()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build();
    let pod = PodClient::with_options(args.pod, opts)?;

    match args.command {
        Command::CreateContainer { name } if args.strict => {
            let created = pod.try_create_container(&name).await?;
            println!("{}", created.url);
        }
        Command::CreateContainer { name } => pod.create_container(&name).await,
        Command::Publish {
            container,
            file,
            records,
        } if args.strict => {
            let url = pod.try_publish_data(&container, &file, &records).await?;
            println!("{url}");
        }
        Command::Publish {
            container,
            file,
            records,
        } => pod.publish_data(&container, &file, &records).await,
        Command::Read { container, file } => {
            let records = if args.strict {
                pod.try_read_data(&container, &file).await?
            } else {
                pod.read_data(&container, &file).await
            };
            for record in records {
                println!("{record}");
            }
        }
        Command::Update {
            container,
            file,
            records,
        } if args.strict => {
            let url = pod.try_update_data(&container, &file, &records).await?;
            println!("{url}");
        }
        Command::Update {
            container,
            file,
            records,
        } => pod.update_data(&container, &file, &records).await,
    }

    Ok(())
}
