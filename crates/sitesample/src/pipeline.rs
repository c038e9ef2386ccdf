use crate::scraper::WebScraper;
use crate::store::{self, DocumentSink};

pub const AJAX_COLLECTION: &str = "ajax_data";
pub const FORMS_COLLECTION: &str = "forms_data";
pub const ADVANCED_COLLECTION: &str = "advanced_data";

// The AJAX endpoint is queried for this one fixed year.
const FILM_DATA_YEAR: u16 = 2015;

/// Runs the three scrape stages in order, persisting whatever each stage
/// produced. A failed stage is logged and never prevents the next one from
/// running; there is no rollback across stages.
pub async fn run(scraper: &WebScraper, sink: &dyn DocumentSink) {
    match scraper.fetch_film_data(FILM_DATA_YEAR).await {
        Ok(data) => {
            log::debug!("AJAX data: {}", data);
            store::persist_value(sink, AJAX_COLLECTION, &data).await;
        }
        Err(e) => log::error!("Failed to fetch AJAX data: {}", e),
    }

    match scraper.fetch_hockey_teams().await {
        Ok(teams) => {
            log::debug!("Extracted {} team record(s)", teams.len());
            store::persist_records(sink, FORMS_COLLECTION, &teams).await;
        }
        Err(e) => log::error!("Failed to fetch forms data: {}", e),
    }

    match scraper.fetch_countries().await {
        Ok(countries) => {
            log::debug!("Extracted {} country record(s)", countries.len());
            store::persist_records(sink, ADVANCED_COLLECTION, &countries).await;
        }
        Err(e) => log::error!("Failed to fetch advanced data: {}", e),
    }

    log::debug!("Done");
}
