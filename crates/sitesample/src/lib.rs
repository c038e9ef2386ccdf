mod parser;
pub mod pipeline;
pub mod scraper;
pub mod store;
pub mod types;

pub use crate::scraper::WebScraper;
pub use crate::store::MongoStore;

pub(crate) const BASE_URL: &str = "https://www.scrapethissite.com";
