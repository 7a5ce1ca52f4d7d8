use super::error::ContentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Clubs,
    Diamonds,
    Hearts,
}

impl Suit {
    pub fn glyph(self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Spades => "♠",
            Suit::Clubs => "♣",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Suit::Hearts => "#DC2626",   // red
            Suit::Diamonds => "#FBBC04", // gold
            Suit::Spades => "#4285F4",   // blue
            Suit::Clubs => "#34A853",    // green
        }
    }

    /// Hearts and diamonds get the red header bar in the detail modal.
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// One game of the ABYSS event. Authored here, never changed at runtime.
#[derive(Debug, PartialEq)]
pub struct EventRecord {
    pub id: u32,
    pub title: &'static str,
    pub suit: Suit,
    pub rank: &'static str,
    pub difficulty: &'static str,
    pub description: &'static str,
    pub gameplay: Option<&'static str>,
    pub twist: &'static str,
    pub rules: &'static [&'static str],
    pub game_over: &'static str,
    pub image: &'static str,
}

pub static GAMES: &[EventRecord] = &[
    EventRecord {
        id: 1,
        title: "The Oxygen Run",
        suit: Suit::Spades,
        rank: "3",
        difficulty: "Physical",
        description: "Sprint 5km through a tunnel filling with gas.",
        gameplay: Some("Runners carry a single canister each. Sharing air at a checkpoint is allowed, but both players then lose the breath-hold bonus."),
        twist: "Checkpoints require a 30s breath-hold. Breathing triggers a lockdown.",
        rules: &[
            "Players start at the tunnel entrance.",
            "Gas release begins at T-minus 0.",
            "You must reach the exit within 20 minutes.",
            "Checkpoints are located every 500m.",
        ],
        game_over: "Asphyxiation",
        image: "https://images.unsplash.com/photo-1518893063132-36e46dbe2428?w=400&h=400&fit=crop",
    },
    EventRecord {
        id: 2,
        title: "Silent Orchestra",
        suit: Suit::Clubs,
        rank: "5",
        difficulty: "Teamwork",
        description: "Guide a robotic arm to defuse a bomb.",
        gameplay: None,
        twist: "Speaking triggers the detonator. You can only tap rhythms.",
        rules: &[
            "Team of 4 players required.",
            "Decibel sensors are active.",
            "Communication is limited to tapping surfaces.",
            "One mistake speeds up the timer.",
        ],
        game_over: "Detonation",
        image: "https://images.unsplash.com/photo-1511193311914-0346f16efe90?w=400&h=400&fit=crop",
    },
    EventRecord {
        id: 3,
        title: "Fibonacci Lock",
        suit: Suit::Diamonds,
        rank: "6",
        difficulty: "Intellect",
        description: "Solve the sequence to open the hatch before water rises.",
        gameplay: Some("The keypad shows the last three accepted numbers. Every wrong entry shuffles the starting pair, so the team has to re-derive the sequence from scratch."),
        twist: "Numbers are hidden in UV. Flashlight battery lasts 3 mins.",
        rules: &[
            "Room fills with water at 1m/minute.",
            "Keypad locks for 30s after a wrong entry.",
            "The sequence changes every attempted entry.",
        ],
        game_over: "Drowning",
        image: "https://images.unsplash.com/photo-1606167668584-78701c57f13d?w=400&h=400&fit=crop",
    },
    EventRecord {
        id: 4,
        title: "Mirror of Truth",
        suit: Suit::Hearts,
        rank: "7",
        difficulty: "Psychological",
        description: "Two players. One exit. One bullet each.",
        gameplay: None,
        twist: "Speakers whisper personalized secrets to induce paranoia.",
        rules: &[
            "Only one player may leave the room alive.",
            "If neither shoots after 20 mins, the exit opens for both.",
            "Weapons are provided on the center table.",
        ],
        game_over: "Betrayal",
        image: "https://images.unsplash.com/photo-1541961017774-22349e4a1262?w=400&h=400&fit=crop",
    },
    EventRecord {
        id: 5,
        title: "Vertical Limit",
        suit: Suit::Spades,
        rank: "J",
        difficulty: "Physical (Hard)",
        description: "Climb falling scaffolding while being chased by a Tagger.",
        gameplay: None,
        twist: "Scaffolding collapses section by section every 120s.",
        rules: &[
            "Reach the roof to clear the game.",
            "The Tagger carries a firearm.",
            "Safety harnesses are not provided.",
        ],
        game_over: "Falling",
        image: "https://images.unsplash.com/photo-1594652634010-275456c808d0?w=400&h=400&fit=crop",
    },
    EventRecord {
        id: 6,
        title: "The Market",
        suit: Suit::Diamonds,
        rank: "10",
        difficulty: "Intellect (Hard)",
        description: "Trade credits for Life Vests. Panic raises prices.",
        gameplay: None,
        twist: "Only 4 vests available. Shouting raises inflation.",
        rules: &[
            "10 Players start with 100 Credits.",
            "Vest price fluctuates based on room noise levels.",
            "Trading ends when all vests are sold.",
        ],
        game_over: "Bankruptcy",
        image: "https://images.unsplash.com/photo-1493711662062-fa541f7f3d24?w=400&h=400&fit=crop",
    },
    EventRecord {
        id: 7,
        title: "Linked Fates",
        suit: Suit::Clubs,
        rank: "K",
        difficulty: "Teamwork (Hard)",
        description: "Two teams chained together over a void. Capture the flag.",
        gameplay: None,
        twist: "If one falls, they drag the team down unless pulled up instantly.",
        rules: &[
            "Teams are connected by a 5m steel chain.",
            "Capture the flag on the opposing platform.",
            "Cutting the chain results in immediate elimination.",
        ],
        game_over: "The Void",
        image: "https://images.unsplash.com/photo-1518893063132-36e46dbe2428?w=400&h=400&fit=crop",
    },
    EventRecord {
        id: 8,
        title: "Witch's Banquet",
        suit: Suit::Hearts,
        rank: "Q",
        difficulty: "Treachery",
        description: "Identify the 'Queen' at the dinner table.",
        gameplay: None,
        twist: "The innocent win if the Queen eats the poisoned dish.",
        rules: &[
            "6 Courses will be served.",
            "Identify the Witch (Mole) among the players.",
            "You must vote on who eats the final dish.",
        ],
        game_over: "Poison",
        image: "https://images.unsplash.com/photo-1511193311914-0346f16efe90?w=400&h=400&fit=crop",
    },
];

pub fn find_game(id: u32) -> Result<&'static EventRecord, ContentError> {
    GAMES
        .iter()
        .find(|game| game.id == id)
        .ok_or(ContentError::GameNotFound { id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn game_ids_are_unique() {
        let ids: HashSet<u32> = GAMES.iter().map(|g| g.id).collect();
        assert_eq!(ids.len(), GAMES.len());
    }

    #[test]
    fn every_game_has_rules_and_an_image() {
        for game in GAMES {
            assert!(!game.rules.is_empty(), "{} has no rules", game.title);
            assert!(game.image.starts_with("https://"), "{} image", game.title);
        }
    }

    #[test]
    fn find_game_returns_the_record_or_not_found() {
        assert_eq!(find_game(3).map(|g| g.title), Ok("Fibonacci Lock"));
        assert_eq!(find_game(42), Err(ContentError::GameNotFound { id: 42 }));
    }

    #[test]
    fn red_suits_drive_the_modal_header() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Spades.is_red());
        assert!(!Suit::Clubs.is_red());
    }
}
