use tracing::error;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    if let Err(err) = statviz::interfaces::cli::run().await {
        error!(error = %err, "exiting with failure");
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
