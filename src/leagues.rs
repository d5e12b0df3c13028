//! League catalogue.
//!
//! Every league the system knows about, with its roster and the live
//! feed / market hooks it supports.

use crate::rosters::{boxing, chess, f1, soccer, tennis, us};
use crate::types::{League, Sport, SportsError};

pub static LEAGUES: &[League] = &[
    League {
        id: "epl",
        name: "Premier League",
        sport: Sport::Soccer,
        espn_path: Some("soccer/eng.1"),
        polymarket_tag: Some("epl"),
        roster: soccer::PREMIER_LEAGUE,
        venues: &[],
    },
    League {
        id: "laliga",
        name: "La Liga",
        sport: Sport::Soccer,
        espn_path: Some("soccer/esp.1"),
        polymarket_tag: Some("la-liga"),
        roster: soccer::LA_LIGA,
        venues: &[],
    },
    League {
        id: "bundesliga",
        name: "Bundesliga",
        sport: Sport::Soccer,
        espn_path: Some("soccer/ger.1"),
        polymarket_tag: Some("bundesliga"),
        roster: soccer::BUNDESLIGA,
        venues: &[],
    },
    League {
        id: "seriea",
        name: "Serie A",
        sport: Sport::Soccer,
        espn_path: Some("soccer/ita.1"),
        polymarket_tag: Some("serie-a"),
        roster: soccer::SERIE_A,
        venues: &[],
    },
    League {
        id: "ligue1",
        name: "Ligue 1",
        sport: Sport::Soccer,
        espn_path: Some("soccer/fra.1"),
        polymarket_tag: Some("ligue-1"),
        roster: soccer::LIGUE_1,
        venues: &[],
    },
    League {
        id: "mls",
        name: "Major League Soccer",
        sport: Sport::Soccer,
        espn_path: Some("soccer/usa.1"),
        polymarket_tag: Some("mls"),
        roster: soccer::MLS,
        venues: &[],
    },
    League {
        id: "nba",
        name: "NBA",
        sport: Sport::Basketball,
        espn_path: Some("basketball/nba"),
        polymarket_tag: Some("nba"),
        roster: us::NBA,
        venues: &[],
    },
    League {
        id: "nfl",
        name: "NFL",
        sport: Sport::AmericanFootball,
        espn_path: Some("football/nfl"),
        polymarket_tag: Some("nfl"),
        roster: us::NFL,
        venues: &[],
    },
    League {
        id: "atp",
        name: "ATP Tour",
        sport: Sport::Tennis,
        espn_path: None,
        polymarket_tag: Some("tennis"),
        roster: tennis::ATP,
        venues: tennis::TOURNAMENTS,
    },
    League {
        id: "wta",
        name: "WTA Tour",
        sport: Sport::Tennis,
        espn_path: None,
        polymarket_tag: Some("tennis"),
        roster: tennis::WTA,
        venues: tennis::TOURNAMENTS,
    },
    League {
        id: "f1",
        name: "Formula 1",
        sport: Sport::Formula1,
        espn_path: None,
        polymarket_tag: Some("f1"),
        roster: f1::DRIVERS,
        venues: f1::CIRCUITS,
    },
    League {
        id: "boxing",
        name: "Boxing",
        sport: Sport::Boxing,
        espn_path: None,
        polymarket_tag: Some("boxing"),
        roster: boxing::BOXERS,
        venues: boxing::ARENAS,
    },
    League {
        id: "chess",
        name: "Elite Chess",
        sport: Sport::Chess,
        espn_path: None,
        polymarket_tag: Some("chess"),
        roster: chess::PLAYERS,
        venues: chess::EVENTS,
    },
];

/// Look up a league by id (case-insensitive).
pub fn league(id: &str) -> Result<&'static League, SportsError> {
    LEAGUES
        .iter()
        .find(|l| l.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| SportsError::UnknownLeague(id.to_string()))
}

/// All league ids, in catalogue order.
pub fn league_ids() -> Vec<&'static str> {
    LEAGUES.iter().map(|l| l.id).collect()
}
