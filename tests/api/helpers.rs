use hello_api::configuration;
use hello_api::startup;
use hello_api::telemetry;
use std::sync::LazyLock;

// Ensure that the `tracing` stack is only initialised once using `LazyLock`
static TRACING: LazyLock<()> = LazyLock::new(|| {
    // if an env variable, TEST_LOG, is set - print log messages to std:io:stdout, otherwise bin messgaes
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::init_subscriber(subscriber);
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::init_subscriber(subscriber);
    };
});

// a struct to hold the data relating to the app generation
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client, // the http request client
}

impl TestApp {
    // GET/POST/PUT on /hello + whatever follows it (a path name, a query...)
    pub async fn hello(&self, method: reqwest::Method, suffix: &str) -> reqwest::Response {
        self.api_client
            .request(method, format!("{}/hello{}", &self.address, suffix))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    // the body is form encoded by reqwest - it sets the form content type for us
    pub async fn hello_with_form<Body>(
        &self,
        method: reqwest::Method,
        suffix: &str,
        form: &Body,
    ) -> reqwest::Response
    where
        Body: serde::Serialize + ?Sized,
    {
        self.api_client
            .request(method, format!("{}/hello{}", &self.address, suffix))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

// don't propogate errors here - as only for testing - crash the program
pub async fn spawn_app() -> TestApp {
    // The first time `force` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    LazyLock::force(&TRACING);

    // Randomise configuration to ensure test isolation
    let configuration = {
        let mut c = configuration::get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c
    };

    // Launch the application as a background task
    let application = startup::Application::build(configuration)
        .await
        .expect("Failed to build application.");

    let application_port = application.port();

    // spawn will drop the server when the tokio runtime of the test ends
    let _ = tokio::spawn(application.run_until_stopped());

    let client = reqwest::Client::builder()
        // store and propogate cookies - ie send the session cookie back
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        api_client: client,
    }
}
