//! Chess roster with classical Elo ratings.

use crate::types::Competitor;

pub const PLAYERS: &[Competitor] = &[
    Competitor::athlete("Magnus Carlsen", "Norway", 2833.0),
    Competitor::athlete("Hikaru Nakamura", "USA", 2802.0),
    Competitor::athlete("Fabiano Caruana", "USA", 2795.0),
    Competitor::athlete("Arjun Erigaisi", "India", 2782.0),
    Competitor::athlete("Gukesh Dommaraju", "India", 2777.0),
    Competitor::athlete("Ian Nepomniachtchi", "Russia", 2757.0),
    Competitor::athlete("Alireza Firouzja", "France", 2760.0),
    Competitor::athlete("Nodirbek Abdusattorov", "Uzbekistan", 2766.0),
    Competitor::athlete("Praggnanandhaa Rameshbabu", "India", 2758.0),
    Competitor::athlete("Wesley So", "USA", 2744.0),
    Competitor::athlete("Ding Liren", "China", 2728.0),
    Competitor::athlete("Anish Giri", "Netherlands", 2745.0),
];

pub const EVENTS: &[&str] = &[
    "Norway Chess, Stavanger",
    "Tata Steel Chess, Wijk aan Zee",
    "Sinquefield Cup, Saint Louis",
    "Grand Chess Tour, Zagreb",
    "FIDE Candidates, Toronto",
];
