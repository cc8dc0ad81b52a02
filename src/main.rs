use hello_api::configuration::get_configuration;
use hello_api::startup::Application;
use hello_api::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up the tracing subscriber first - everything after this gets logged
    // as bunyan-formatted json on stdout
    let subscriber = get_subscriber("hello_api".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    // bail out if we cannot read the configuration
    let configuration = get_configuration()?;

    // bind the port and build the server, then run it until it is stopped
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Listening");
    application.run_until_stopped().await?;

    Ok(())
}
