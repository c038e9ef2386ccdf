use crate::types::{CountryRecord, TeamRecord};

use scraper::{ElementRef, Html, Selector};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Missing required field: {0}")]
    MissingField(String),
}

fn elem_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

fn field_text(
    container: ElementRef,
    selector: &Selector,
    field: &str,
) -> Result<String, ParseError> {
    container
        .select(selector)
        .next()
        .map(|e| elem_text(e).trim().to_string())
        .ok_or_else(|| ParseError::MissingField(field.to_string()))
}

/// Extracts hockey team entries from the forms page.
///
/// A container missing any of its four sub-fields is logged and skipped;
/// the remaining containers are still extracted. An HTML document with no
/// team containers at all yields an empty vec, which is not an error.
pub fn parse_teams(html: &str) -> Vec<TeamRecord> {
    let document = Html::parse_document(html);
    let team_selector = Selector::parse("div.team").unwrap();

    let mut teams = Vec::new();
    for container in document.select(&team_selector) {
        match extract_team(container) {
            Ok(team) => teams.push(team),
            Err(e) => {
                log::warn!("Skipping team entry: {}", e);
                log::debug!("Problematic HTML section: {}", container.html());
            }
        }
    }
    teams
}

fn extract_team(container: ElementRef) -> Result<TeamRecord, ParseError> {
    let name_selector = Selector::parse("h3").unwrap();
    let year_selector = Selector::parse("span.year").unwrap();
    let wins_selector = Selector::parse("span.wins").unwrap();
    let losses_selector = Selector::parse("span.losses").unwrap();

    Ok(TeamRecord {
        team_name: field_text(container, &name_selector, "team name")?,
        year: field_text(container, &year_selector, "year")?,
        wins: field_text(container, &wins_selector, "wins")?,
        losses: field_text(container, &losses_selector, "losses")?,
    })
}

/// Extracts country entries from the advanced page, with the same
/// skip-and-continue policy as [`parse_teams`].
pub fn parse_countries(html: &str) -> Vec<CountryRecord> {
    let document = Html::parse_document(html);
    let country_selector = Selector::parse("div.country").unwrap();
    let name_selector = Selector::parse("h3").unwrap();

    let mut countries = Vec::new();
    for container in document.select(&country_selector) {
        match field_text(container, &name_selector, "country name") {
            Ok(country_name) => countries.push(CountryRecord { country_name }),
            Err(e) => {
                log::warn!("Skipping country entry: {}", e);
                log::debug!("Problematic HTML section: {}", container.html());
            }
        }
    }
    countries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_div(name: &str, year: &str, wins: &str, losses: &str) -> String {
        format!(
            r#"<div class="team">
                <h3 class="name">{name}</h3>
                <span class="year">{year}</span>
                <span class="wins">{wins}</span>
                <span class="losses">{losses}</span>
            </div>"#
        )
    }

    #[test]
    fn test_parse_teams_single_entry() {
        let html = team_div("Boston Bruins", "1990", "44", "24");

        let teams = parse_teams(&html);

        assert_eq!(teams.len(), 1);
        assert_eq!(
            teams[0],
            TeamRecord {
                team_name: "Boston Bruins".to_string(),
                year: "1990".to_string(),
                wins: "44".to_string(),
                losses: "24".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_teams_trims_whitespace() {
        let html = team_div("\n   Calgary Flames \t", " 1991 ", " 31", "37 ");

        let teams = parse_teams(&html);

        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].team_name, "Calgary Flames");
        assert_eq!(teams[0].year, "1991");
        assert_eq!(teams[0].wins, "31");
        assert_eq!(teams[0].losses, "37");
    }

    #[test]
    fn test_parse_teams_skips_container_missing_wins() {
        let broken = r#"<div class="team">
            <h3 class="name">Hartford Whalers</h3>
            <span class="year">1990</span>
            <span class="losses">38</span>
        </div>"#;
        let html = format!(
            "{}{}{}{}",
            team_div("Boston Bruins", "1990", "44", "24"),
            team_div("Buffalo Sabres", "1990", "31", "30"),
            broken,
            team_div("Calgary Flames", "1990", "46", "26"),
        );

        let teams = parse_teams(&html);

        assert_eq!(teams.len(), 3);
        assert_eq!(teams[0].team_name, "Boston Bruins");
        assert_eq!(teams[1].team_name, "Buffalo Sabres");
        assert_eq!(teams[2].team_name, "Calgary Flames");
    }

    #[test]
    fn test_parse_teams_no_containers() {
        let html = "<html><body><p>No teams here</p></body></html>";

        assert!(parse_teams(html).is_empty());
    }

    #[test]
    fn test_parse_teams_all_containers_malformed() {
        let html = r#"
            <div class="team"><h3>Lonely Name</h3></div>
            <div class="team"><span class="year">1990</span></div>
        "#;

        assert!(parse_teams(html).is_empty());
    }

    #[test]
    fn test_parse_countries() {
        let html = r#"
            <div class="country"><h3 class="country-name">Andorra</h3></div>
            <div class="country"><h3 class="country-name">
                United Arab Emirates
            </h3></div>
        "#;

        let countries = parse_countries(html);

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].country_name, "Andorra");
        assert_eq!(countries[1].country_name, "United Arab Emirates");
    }

    #[test]
    fn test_parse_countries_skips_container_missing_name() {
        let html = r#"
            <div class="country"><h3>Afghanistan</h3></div>
            <div class="country"><span class="capital">No heading</span></div>
            <div class="country"><h3>Albania</h3></div>
        "#;

        let countries = parse_countries(html);

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].country_name, "Afghanistan");
        assert_eq!(countries[1].country_name, "Albania");
    }
}
