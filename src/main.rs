use tracing::{error, info, span, Level};

mod adapters;
mod fetch;
mod model;
mod util;

const DEFAULT_BUCKET: &str = "text-content";
const DEFAULT_KEY: &str = "text-object.txt";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().json().init();

    let span = span!(Level::INFO, "main", context = "main");
    let _e = span.enter();
    info!("called");

    let matches = clap::Command::new("objectget")
        .arg(clap::Arg::new("OBJECT_URI").required(false).index(1))
        .get_matches();

    let locator = match matches.get_one::<String>("OBJECT_URI") {
        Some(uri) => match model::object::ObjectLocator::parse_uri(uri) {
            Err(err) => {
                error!(error_message=%err, error_group="parse_uri");
                eprintln!("{}", err);
                std::process::exit(2);
            }
            Ok(locator) => locator,
        },
        None => model::object::ObjectLocator::new(DEFAULT_BUCKET, DEFAULT_KEY),
    };
    info!(bucket=%locator.bucket, key=%locator.key, "args");

    let config = util::poll::poll_until_ready(aws_config::load_from_env());
    let client = aws_sdk_s3::Client::new(&config);

    let fetcher = fetch::ObjectFetcher::new(Box::new(client), locator);

    match fetcher.fetch_and_display(&mut std::io::stdout()) {
        Err(err) => {
            error!(error_message=%err, error_group="fetch_object");
            eprintln!("{}", err);
            std::process::exit(1);
        }
        Ok(()) => {}
    }
}
