//! Formula 1 driver roster. Fixtures are head-to-head race finishes.

use crate::types::Competitor;

pub const DRIVERS: &[Competitor] = &[
    Competitor::athlete("Max Verstappen", "Netherlands", 95.0),
    Competitor::athlete("Lando Norris", "United Kingdom", 92.0),
    Competitor::athlete("Oscar Piastri", "Australia", 91.0),
    Competitor::athlete("Charles Leclerc", "Monaco", 90.0),
    Competitor::athlete("Lewis Hamilton", "United Kingdom", 88.0),
    Competitor::athlete("George Russell", "United Kingdom", 88.0),
    Competitor::athlete("Carlos Sainz", "Spain", 85.0),
    Competitor::athlete("Fernando Alonso", "Spain", 84.0),
    Competitor::athlete("Kimi Antonelli", "Italy", 80.0),
    Competitor::athlete("Pierre Gasly", "France", 78.0),
    Competitor::athlete("Alexander Albon", "Thailand", 79.0),
    Competitor::athlete("Yuki Tsunoda", "Japan", 76.0),
    Competitor::athlete("Nico Hulkenberg", "Germany", 75.0),
    Competitor::athlete("Esteban Ocon", "France", 75.0),
];

pub const CIRCUITS: &[&str] = &[
    "Silverstone Circuit",
    "Circuit de Monaco",
    "Autodromo Nazionale Monza",
    "Circuit de Spa-Francorchamps",
    "Suzuka International Racing Course",
    "Circuit of the Americas",
    "Yas Marina Circuit",
    "Interlagos",
];
