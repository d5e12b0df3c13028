//! Soccer league rosters with home stadiums.

use crate::types::Competitor;

pub const PREMIER_LEAGUE: &[Competitor] = &[
    Competitor::team("Liverpool", "England", 92.0, "Anfield"),
    Competitor::team("Arsenal", "England", 91.0, "Emirates Stadium"),
    Competitor::team("Manchester City", "England", 90.0, "Etihad Stadium"),
    Competitor::team("Chelsea", "England", 86.0, "Stamford Bridge"),
    Competitor::team("Newcastle United", "England", 84.0, "St James' Park"),
    Competitor::team("Aston Villa", "England", 83.0, "Villa Park"),
    Competitor::team("Tottenham Hotspur", "England", 81.0, "Tottenham Hotspur Stadium"),
    Competitor::team("Manchester United", "England", 80.0, "Old Trafford"),
    Competitor::team("Brighton & Hove Albion", "England", 80.0, "Amex Stadium"),
    Competitor::team("Nottingham Forest", "England", 79.0, "City Ground"),
    Competitor::team("Crystal Palace", "England", 78.0, "Selhurst Park"),
    Competitor::team("Brentford", "England", 77.0, "Gtech Community Stadium"),
    Competitor::team("Fulham", "England", 76.0, "Craven Cottage"),
    Competitor::team("Bournemouth", "England", 77.0, "Vitality Stadium"),
    Competitor::team("Everton", "England", 74.0, "Hill Dickinson Stadium"),
    Competitor::team("West Ham", "England", 74.0, "London Stadium"),
];

pub const LA_LIGA: &[Competitor] = &[
    Competitor::team("Real Madrid", "Spain", 93.0, "Santiago Bernabeu"),
    Competitor::team("Barcelona", "Spain", 92.0, "Camp Nou"),
    Competitor::team("Atletico Madrid", "Spain", 87.0, "Metropolitano"),
    Competitor::team("Athletic Club", "Spain", 82.0, "San Mames"),
    Competitor::team("Villarreal", "Spain", 81.0, "Estadio de la Ceramica"),
    Competitor::team("Real Betis", "Spain", 80.0, "Benito Villamarin"),
    Competitor::team("Real Sociedad", "Spain", 79.0, "Anoeta"),
    Competitor::team("Sevilla", "Spain", 76.0, "Ramon Sanchez-Pizjuan"),
    Competitor::team("Valencia", "Spain", 75.0, "Mestalla"),
    Competitor::team("Girona", "Spain", 76.0, "Montilivi"),
];

pub const BUNDESLIGA: &[Competitor] = &[
    Competitor::team("Bayern Munich", "Germany", 93.0, "Allianz Arena"),
    Competitor::team("Bayer Leverkusen", "Germany", 88.0, "BayArena"),
    Competitor::team("Borussia Dortmund", "Germany", 86.0, "Signal Iduna Park"),
    Competitor::team("RB Leipzig", "Germany", 84.0, "Red Bull Arena"),
    Competitor::team("Eintracht Frankfurt", "Germany", 82.0, "Deutsche Bank Park"),
    Competitor::team("VfB Stuttgart", "Germany", 81.0, "MHPArena"),
    Competitor::team("SC Freiburg", "Germany", 78.0, "Europa-Park Stadion"),
    Competitor::team("Borussia Monchengladbach", "Germany", 76.0, "Borussia-Park"),
    Competitor::team("VfL Wolfsburg", "Germany", 76.0, "Volkswagen Arena"),
    Competitor::team("Werder Bremen", "Germany", 75.0, "Weserstadion"),
];

pub const SERIE_A: &[Competitor] = &[
    Competitor::team("Inter Milan", "Italy", 90.0, "San Siro"),
    Competitor::team("Napoli", "Italy", 88.0, "Stadio Diego Armando Maradona"),
    Competitor::team("Juventus", "Italy", 86.0, "Allianz Stadium"),
    Competitor::team("AC Milan", "Italy", 85.0, "Giuseppe Meazza"),
    Competitor::team("Atalanta", "Italy", 86.0, "Gewiss Stadium"),
    Competitor::team("AS Roma", "Italy", 83.0, "Stadio Olimpico"),
    Competitor::team("Lazio", "Italy", 81.0, "Olimpico di Roma"),
    Competitor::team("Fiorentina", "Italy", 80.0, "Artemio Franchi"),
    Competitor::team("Bologna", "Italy", 80.0, "Renato Dall'Ara"),
    Competitor::team("Torino", "Italy", 75.0, "Stadio Olimpico Grande Torino"),
];

pub const LIGUE_1: &[Competitor] = &[
    Competitor::team("Paris Saint-Germain", "France", 93.0, "Parc des Princes"),
    Competitor::team("Marseille", "France", 84.0, "Orange Velodrome"),
    Competitor::team("Monaco", "France", 83.0, "Stade Louis II"),
    Competitor::team("Lille", "France", 82.0, "Stade Pierre-Mauroy"),
    Competitor::team("Lyon", "France", 81.0, "Groupama Stadium"),
    Competitor::team("Nice", "France", 80.0, "Allianz Riviera"),
    Competitor::team("Lens", "France", 79.0, "Stade Bollaert-Delelis"),
    Competitor::team("Rennes", "France", 77.0, "Roazhon Park"),
];

pub const MLS: &[Competitor] = &[
    Competitor::team("Inter Miami", "USA", 82.0, "Chase Stadium"),
    Competitor::team("LA Galaxy", "USA", 79.0, "Dignity Health Sports Park"),
    Competitor::team("Los Angeles FC", "USA", 80.0, "BMO Stadium"),
    Competitor::team("Columbus Crew", "USA", 79.0, "Lower.com Field"),
    Competitor::team("FC Cincinnati", "USA", 78.0, "TQL Stadium"),
    Competitor::team("Seattle Sounders", "USA", 77.0, "Lumen Field"),
    Competitor::team("Philadelphia Union", "USA", 77.0, "Subaru Park"),
    Competitor::team("New York Red Bulls", "USA", 75.0, "Red Bull Arena"),
];
