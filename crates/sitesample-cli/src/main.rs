use std::fs::File;
use std::process;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use sitesample::pipeline;
use sitesample::scraper::WebScraper;
use sitesample::store::MongoStore;

#[derive(Parser)]
#[command(name = "sitesample")]
#[command(about = "Scrapes the scrapethissite.com sandbox pages into MongoDB", long_about = None)]
struct Cli {
    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "debug",
        help = "Set the logging level"
    )]
    log_level: LogLevel,

    #[arg(
        long = "log-file",
        default_value = "scraper.log",
        help = "Write logs to this file; pass '-' to log to stderr instead"
    )]
    log_file: String,

    #[arg(
        long = "store-uri",
        default_value = "mongodb://localhost:27017",
        help = "MongoDB connection string"
    )]
    store_uri: String,

    #[arg(
        long = "database",
        default_value = "scraped_data",
        help = "Database receiving the scraped collections"
    )]
    database: String,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(cli.log_level.clone().into());

    if cli.log_file != "-" {
        let file = File::create(&cli.log_file).unwrap_or_else(|e| {
            eprintln!("Error opening log file {}: {}", cli.log_file, e);
            process::exit(1);
        });
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let scraper = WebScraper::new().unwrap_or_else(|e| {
        log::error!("Error creating scraper: {}", e);
        process::exit(1);
    });

    let store = MongoStore::connect(&cli.store_uri, &cli.database)
        .await
        .unwrap_or_else(|e| {
            log::error!("Error connecting to MongoDB: {}", e);
            process::exit(1);
        });

    pipeline::run(&scraper, &store).await;
}
