//! ATP and WTA rosters.

use crate::types::Competitor;

pub const ATP: &[Competitor] = &[
    Competitor::athlete("Jannik Sinner", "Italy", 96.0),
    Competitor::athlete("Carlos Alcaraz", "Spain", 95.0),
    Competitor::athlete("Alexander Zverev", "Germany", 89.0),
    Competitor::athlete("Novak Djokovic", "Serbia", 91.0),
    Competitor::athlete("Taylor Fritz", "USA", 86.0),
    Competitor::athlete("Jack Draper", "United Kingdom", 84.0),
    Competitor::athlete("Daniil Medvedev", "Russia", 85.0),
    Competitor::athlete("Casper Ruud", "Norway", 82.0),
    Competitor::athlete("Alex de Minaur", "Australia", 83.0),
    Competitor::athlete("Holger Rune", "Denmark", 80.0),
    Competitor::athlete("Ben Shelton", "USA", 82.0),
    Competitor::athlete("Stefanos Tsitsipas", "Greece", 79.0),
];

pub const WTA: &[Competitor] = &[
    Competitor::athlete("Aryna Sabalenka", "Belarus", 95.0),
    Competitor::athlete("Iga Swiatek", "Poland", 93.0),
    Competitor::athlete("Coco Gauff", "USA", 91.0),
    Competitor::athlete("Jessica Pegula", "USA", 86.0),
    Competitor::athlete("Elena Rybakina", "Kazakhstan", 88.0),
    Competitor::athlete("Jasmine Paolini", "Italy", 84.0),
    Competitor::athlete("Madison Keys", "USA", 85.0),
    Competitor::athlete("Mirra Andreeva", "Russia", 87.0),
    Competitor::athlete("Qinwen Zheng", "China", 84.0),
    Competitor::athlete("Emma Navarro", "USA", 81.0),
];

pub const TOURNAMENTS: &[&str] = &[
    "Australian Open, Melbourne",
    "Roland Garros, Paris",
    "Wimbledon, London",
    "US Open, New York",
    "Indian Wells Masters",
    "Madrid Open",
    "Italian Open, Rome",
];
