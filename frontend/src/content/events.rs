use super::error::ContentError;

const DEFAULT_PHOTOS: &[&str] = &[
    "https://images.unsplash.com/photo-1535295972055-1c762f4483e5?q=80&w=1000",
    "https://images.unsplash.com/photo-1511512578047-dfb367046420?q=80&w=1000",
    "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=1000",
    "https://images.unsplash.com/photo-1550745165-9bc0b252726f?q=80&w=1000",
    "https://images.unsplash.com/photo-1614728263952-84ea256f9679?q=80&w=1000",
];

const DEFAULT_HIGHLIGHTS: &[&str] = &[
    "Expert Speakers",
    "Hands-on Workshops",
    "Networking",
    "Certifications",
];

#[derive(Debug, PartialEq)]
pub struct ChapterEvent {
    pub id: &'static str,
    pub title: &'static str,
    pub year: u16,
    pub date: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub image: &'static str,
    pub highlights: &'static [&'static str],
    pub photos: &'static [&'static str],
}

pub static EVENTS: &[ChapterEvent] = &[
    ChapterEvent {
        id: "abyss",
        title: "ABYSS",
        year: 2026,
        date: "February 6, 2026",
        description: "Eight games. One night. The death stares back.",
        details: "ABYSS is our escape-room style night of puzzles, teamwork challenges and mind games. Pick a card, read the rules and survive until dawn.",
        image: "/abyss.png",
        highlights: &["Eight Themed Games", "Team Challenges", "Prizes", "Night Event"],
        photos: DEFAULT_PHOTOS,
    },
    ChapterEvent {
        id: "devfest",
        title: "DevFest NITH",
        year: 2025,
        date: "November 22, 2025 · 10:00 AM",
        description: "A full day of talks and codelabs on Android, Web, Cloud and AI.",
        details: "DevFest is the chapter's flagship developer conference. Speakers from the community and industry share what they build with Google technologies, followed by hands-on codelabs and a community mixer.",
        image: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?q=80&w=1200",
        highlights: DEFAULT_HIGHLIGHTS,
        photos: DEFAULT_PHOTOS,
    },
    ChapterEvent {
        id: "cloud-study-jam",
        title: "Cloud Study Jam",
        year: 2025,
        date: "September 13, 2025 · 5:00 PM",
        description: "Earn skill badges on Google Cloud with guided lab sessions.",
        details: "Over three weeks, study jam facilitators walk participants through Google Cloud labs, from compute basics to deploying containers. Finishers receive skill badges and swag.",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?q=80&w=1200",
        highlights: &["Guided Labs", "Skill Badges", "Mentor Office Hours", "Swag"],
        photos: DEFAULT_PHOTOS,
    },
    ChapterEvent {
        id: "hack-the-hills",
        title: "Hack The Hills",
        year: 2025,
        date: "March 28, 2025 · 36 hours",
        description: "A 36-hour hackathon building for the communities of the Himalayas.",
        details: "Teams of up to four build prototypes around sustainability, tourism and accessibility in hill regions. Mentors rotate through the night and the best projects are incubated by the chapter.",
        image: "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?q=80&w=1200",
        highlights: DEFAULT_HIGHLIGHTS,
        photos: DEFAULT_PHOTOS,
    },
];

pub fn find_event(id: &str) -> Result<&'static ChapterEvent, ContentError> {
    EVENTS
        .iter()
        .find(|event| event.id == id)
        .ok_or_else(|| ContentError::EventNotFound { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_ids_are_unique_slugs() {
        for (i, event) in EVENTS.iter().enumerate() {
            assert!(
                event.id.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                "{} is not a slug",
                event.id
            );
            assert!(EVENTS[i + 1..].iter().all(|other| other.id != event.id));
        }
    }

    #[test]
    fn unknown_event_is_not_found() {
        let err = find_event("nope").unwrap_err();
        assert_eq!(err, ContentError::EventNotFound { id: "nope".into() });
        assert_eq!(err.to_string(), "no chapter event with id `nope`");
    }

    #[test]
    fn known_event_resolves() {
        let event = find_event("devfest").unwrap();
        assert_eq!(event.title, "DevFest NITH");
        assert!(!event.photos.is_empty());
    }
}
