use clap::Parser;
use todo_actor::app::TodoSystem;
use todo_actor::cli::{self, Cli};
use todo_actor::trace::{setup_tracing, TraceId};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    setup_tracing();

    let args = Cli::parse();
    // Resolve the command first: a malformed --edit exits before any state
    // is loaded.
    let command = args.command();
    let trace = TraceId::for_process();

    let system = TodoSystem::start(&trace, &args.file).await;

    match command {
        Some(cmd) => {
            if let Err(err) = cli::run(cmd, &trace, &system.client, system.store.as_ref()).await {
                error!(trace_id = %trace, error = %err, "Command failed");
            }
        }
        None => {
            info!("App is running, Ctrl+C to stop");
            if let Err(err) = system.serve(args.port).await {
                error!(error = %err, "HTTP server failed");
            }
        }
    }

    system.shutdown(&trace).await;
}
