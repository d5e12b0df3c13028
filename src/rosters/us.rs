//! NBA and NFL rosters.

use crate::types::Competitor;

pub const NBA: &[Competitor] = &[
    Competitor::team("Boston Celtics", "USA", 91.0, "TD Garden"),
    Competitor::team("Oklahoma City Thunder", "USA", 93.0, "Paycom Center"),
    Competitor::team("Denver Nuggets", "USA", 88.0, "Ball Arena"),
    Competitor::team("Cleveland Cavaliers", "USA", 89.0, "Rocket Arena"),
    Competitor::team("New York Knicks", "USA", 87.0, "Madison Square Garden"),
    Competitor::team("Minnesota Timberwolves", "USA", 86.0, "Target Center"),
    Competitor::team("Los Angeles Lakers", "USA", 85.0, "Crypto.com Arena"),
    Competitor::team("Golden State Warriors", "USA", 84.0, "Chase Center"),
    Competitor::team("Houston Rockets", "USA", 85.0, "Toyota Center"),
    Competitor::team("Milwaukee Bucks", "USA", 83.0, "Fiserv Forum"),
    Competitor::team("Dallas Mavericks", "USA", 82.0, "American Airlines Center"),
    Competitor::team("Miami Heat", "USA", 79.0, "Kaseya Center"),
];

pub const NFL: &[Competitor] = &[
    Competitor::team("Kansas City Chiefs", "USA", 91.0, "Arrowhead Stadium"),
    Competitor::team("Philadelphia Eagles", "USA", 92.0, "Lincoln Financial Field"),
    Competitor::team("Buffalo Bills", "USA", 89.0, "Highmark Stadium"),
    Competitor::team("Baltimore Ravens", "USA", 89.0, "M&T Bank Stadium"),
    Competitor::team("Detroit Lions", "USA", 88.0, "Ford Field"),
    Competitor::team("San Francisco 49ers", "USA", 85.0, "Levi's Stadium"),
    Competitor::team("Green Bay Packers", "USA", 85.0, "Lambeau Field"),
    Competitor::team("Los Angeles Rams", "USA", 84.0, "SoFi Stadium"),
    Competitor::team("Dallas Cowboys", "USA", 80.0, "AT&T Stadium"),
    Competitor::team("Cincinnati Bengals", "USA", 82.0, "Paycor Stadium"),
    Competitor::team("Minnesota Vikings", "USA", 84.0, "U.S. Bank Stadium"),
    Competitor::team("Pittsburgh Steelers", "USA", 80.0, "Acrisure Stadium"),
];
