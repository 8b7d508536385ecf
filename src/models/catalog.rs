/// Titles known to the recommendation service, used for local suggestions
const BUILTIN_TITLES: &[&str] = &[
    "Crash Landing on You",
    "What's Wrong with Secretary Kim",
    "Business Proposal",
    "Strong Woman Do Bong Soon",
    "It's Okay to Not Be Okay",
    "Goblin",
    "Descendants of the Sun",
    "Weightlifting Fairy Kim Bok-Joo",
    "True Beauty",
    "Hometown Cha-Cha-Cha",
    "My Mister",
    "The Glory",
    "My Liberation Notes",
    "Our Blues",
    "Misaeng: Incomplete Life",
    "Twenty-Five Twenty-One",
    "Sky Castle",
    "Itaewon Class",
    "The Red Sleeve",
    "Vincenzo",
    "Welcome to Waikiki",
    "Mr. Queen",
    "The Sound of Your Heart",
    "Chief Kim",
    "Gaus Electronics",
    "Prison Playbook",
    "Signal",
    "Flower of Evil",
    "Beyond Evil",
    "My Name",
    "Kingdom",
    "Mouse",
    "The K2",
    "All of Us Are Dead",
    "Healer",
    "Vagabond",
    "D.P.",
    "The Uncanny Counter",
    "Lawless Lawyer",
    "Stranger",
    "W",
    "Suspicious Partner",
    "The Guest",
    "Memorist",
    "Tell Me What You Saw",
    "Tunnel",
    "Hotel Del Luna",
    "A Korean Odyssey",
    "Legend of the Blue Sea",
    "Doom at Your Service",
    "The King: Eternal Monarch",
    "I'm Not a Robot",
    "My Love from the Star",
    "Sisyphus: The Myth",
    "Memories of the Alhambra",
    "Circle",
    "Duel",
    "My Holo Love",
    "Alice",
    "Are You Human Too?",
    "L.U.C.A.: The Beginning",
    "Moon Lovers: Scarlet Heart Ryeo",
    "Hwarang",
    "The King's Affection",
    "100 Days My Prince",
    "Jang Ok-jung, Living by Love",
    "Rookie Historian Goo Hae-ryung",
    "Sungkyunkwan Scandal",
    "Voice",
    "The Fiery Priest",
    "Extraordinary Attorney Woo",
    "Hyena",
    "I Can Hear Your Voice",
    "Defendant",
    "Good Partner",
    "Divorce Attorney Shin",
    "Hospital Playlist",
    "Dr. Romantic",
    "It's Okay, That's Love",
    "Doctor Stranger",
    "Doctors",
    "Good Doctor",
    "Yong-pal",
    "Ghost Doctor",
    "D-Day",
    "Who Are You: School 2015",
    "Reply 1988",
    "My ID is Gangnam Beauty",
    "Love Alarm",
    "Sassy Go Go",
    "Our Beloved Summer",
    "Age of Youth",
    "Navillera",
    "Dream High",
    "You're Beautiful",
    "Reply 1997",
    "Do Do Sol Sol La La Sol",
    "The Liar and His Lover",
    "Heartstrings",
    "Persevere, Goo Hae Ra",
    "The Producers",
    "The Best Hit",
    "Hit the Top",
    "Racket Boys",
    "Fight For My Way",
    "Hot Stove League",
    "The Fabulous",
    "Reply 1994",
    "Run On",
    "Love All Play",
];

/// Ordered, read-only list of show titles, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCatalog {
    titles: Vec<String>,
}

impl TitleCatalog {
    pub fn new(titles: Vec<String>) -> Self {
        Self { titles }
    }

    /// The catalog shipped with the client, mirroring the service's dataset
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TITLES.iter().map(|t| t.to_string()).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl Default for TitleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<S: Into<String>> FromIterator<S> for TitleCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
