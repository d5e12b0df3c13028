//! Boxing roster, grouped by weight division.

use crate::types::Competitor;

pub const BOXERS: &[Competitor] = &[
    Competitor::boxer("Oleksandr Usyk", "Ukraine", 95.0, "heavyweight"),
    Competitor::boxer("Tyson Fury", "United Kingdom", 90.0, "heavyweight"),
    Competitor::boxer("Anthony Joshua", "United Kingdom", 85.0, "heavyweight"),
    Competitor::boxer("Daniel Dubois", "United Kingdom", 84.0, "heavyweight"),
    Competitor::boxer("Zhilei Zhang", "China", 80.0, "heavyweight"),
    Competitor::boxer("Joseph Parker", "New Zealand", 82.0, "heavyweight"),
    Competitor::boxer("Artur Beterbiev", "Canada", 93.0, "light heavyweight"),
    Competitor::boxer("Dmitry Bivol", "Russia", 94.0, "light heavyweight"),
    Competitor::boxer("Canelo Alvarez", "Mexico", 91.0, "super middleweight"),
    Competitor::boxer("David Benavidez", "USA", 89.0, "super middleweight"),
    Competitor::boxer("Terence Crawford", "USA", 96.0, "super middleweight"),
    Competitor::boxer("Jaron Ennis", "USA", 88.0, "welterweight"),
    Competitor::boxer("Shakur Stevenson", "USA", 90.0, "lightweight"),
    Competitor::boxer("Gervonta Davis", "USA", 92.0, "lightweight"),
    Competitor::boxer("Vasiliy Lomachenko", "Ukraine", 87.0, "lightweight"),
    Competitor::boxer("Devin Haney", "USA", 85.0, "super lightweight"),
    Competitor::boxer("Ryan Garcia", "USA", 83.0, "super lightweight"),
    Competitor::boxer("Teofimo Lopez", "USA", 86.0, "super lightweight"),
    Competitor::boxer("Naoya Inoue", "Japan", 97.0, "super bantamweight"),
    Competitor::boxer("Junto Nakatani", "Japan", 90.0, "bantamweight"),
];

pub const ARENAS: &[&str] = &[
    "T-Mobile Arena, Las Vegas",
    "Wembley Stadium, London",
    "Kingdom Arena, Riyadh",
    "Madison Square Garden, New York",
    "Tokyo Dome, Tokyo",
];
