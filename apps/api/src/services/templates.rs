//! Static expansion data: stop words, theme triggers and synonyms.
//!
//! Triggers are matched as substrings of the lower-cased description, so a
//! multi-word trigger such as "ship sinks" only fires on that exact phrase.
//! Entries may be added freely; lookup order is table order.

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Words that never become keyword queries on their own.
    pub static ref STOP_WORDS: HashSet<&'static str> = [
        // Articles, conjunctions & prepositions
        "the", "a", "an", "and", "or", "but", "if", "as", "in", "into", "on", "at", "to",
        "for", "of", "with", "by", "from", "up", "out", "down", "off", "over", "under",
        "through", "like", "while", "about", "again", "further", "then", "once",
        // Auxiliaries & modals
        "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "could", "should", "may", "might", "must", "can",
        // Question words
        "where", "when", "who", "whom", "whose", "what", "which", "why", "how", "here",
        "there",
        // Pronouns
        "he", "she", "it", "his", "her", "him", "they", "them", "their", "this", "that",
        "these", "those",
        // Quantifiers & fillers
        "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
        "nor", "not", "only", "own", "same", "so", "than", "too", "very", "just", "now",
        "s", "t", "don",
        // Words every description carries
        "movie", "film", "scene", "plot", "character", "description", "story",
    ]
    .into_iter()
    .collect();
}

/// Descriptive phrases mapped to the titles and franchise terms they usually mean.
pub static THEME_TABLE: &[(&str, &[&str])] = &[
    // Disaster & survival
    ("ship", &["titanic", "boat", "ocean", "sea"]),
    ("iceberg", &["titanic"]),
    ("sinking", &["titanic"]),
    ("survival", &["cast away", "the revenant", "gravity"]),
    // Fantasy & magic
    ("wizard", &["harry potter", "magic", "hogwarts", "fantasy"]),
    ("magic", &["harry potter", "lord of the rings", "doctor strange"]),
    ("wand", &["harry potter"]),
    ("ring", &["lord of the rings"]),
    ("dragon", &["how to train your dragon", "game of thrones"]),
    // Science fiction
    ("space", &["star wars", "star trek", "interstellar", "gravity", "alien", "apollo 13"]),
    ("alien", &["alien", "et", "independence day", "men in black", "arrival"]),
    ("robot", &["wall-e", "terminator", "transformers", "i robot", "ex machina"]),
    ("future", &["back to the future", "blade runner", "minority report"]),
    ("time travel", &["back to the future", "looper", "about time", "interstellar"]),
    ("dystopian", &["blade runner", "matrix", "hunger games"]),
    // Animation & family
    ("toys", &["toy story", "animated", "pixar"]),
    ("animals", &["lion king", "finding nemo", "zootopia", "kung fu panda"]),
    ("princess", &["frozen", "beauty and the beast", "cinderella", "moana"]),
    ("disney", &["frozen", "lion king", "moana"]),
    // Action & adventure
    ("superhero", &["batman", "superman", "spider-man", "avengers", "marvel", "dc"]),
    ("spy", &["james bond", "mission impossible", "bourne identity"]),
    ("heist", &["oceans eleven", "inception", "heat"]),
    ("car", &["fast and furious", "mad max", "baby driver"]),
    // Crime & thriller
    ("mafia", &["godfather", "goodfellas", "scarface", "irishman"]),
    ("gangster", &["godfather", "pulp fiction", "casino"]),
    ("detective", &["sherlock holmes", "zodiac", "seven"]),
    ("prison", &["shawshank redemption", "green mile", "escape from alcatraz"]),
    // Drama & romance
    ("love", &["titanic", "notebook", "la la land", "casablanca"]),
    ("romance", &["notebook", "pride and prejudice", "when harry met sally"]),
    ("historical", &["gladiator", "braveheart", "schindler's list"]),
    // Horror
    ("scary", &["exorcist", "halloween", "it", "conjuring", "hereditary"]),
    ("ghost", &["ghostbusters", "sixth sense", "conjuring"]),
    ("zombie", &["dawn of the dead", "zombieland", "world war z"]),
    // Comedy
    ("funny", &["dumb and dumber", "anchorman", "hangover", "step brothers"]),
    ("comedy", &["anchorman", "superbad", "bridesmaids"]),
    // Specific plot points
    ("dreams within dreams", &["inception"]),
    ("clown fish lost", &["finding nemo"]),
    ("robot cleans earth", &["wall-e"]),
    ("dinosaurs theme park", &["jurassic park"]),
    ("time travel car", &["back to the future"]),
    ("mafia family new york", &["the godfather"]),
    ("boy wizard", &["harry potter"]),
    ("ship sinks", &["titanic"]),
    ("toys alive", &["toy story"]),
    ("blue aliens", &["avatar"]),
    ("prison escape", &["shawshank redemption"]),
];

/// Plain lexical synonyms, one level less ambitious than themes.
pub static SYNONYM_TABLE: &[(&str, &[&str])] = &[
    ("ship", &["vessel", "boat", "cruise"]),
    ("scary", &["horror", "frightening", "terrifying"]),
    ("funny", &["comedy", "hilarious", "amusing"]),
    ("love", &["romance", "romantic", "relationship"]),
    ("fight", &["battle", "combat", "war"]),
    ("car", &["automobile", "vehicle", "auto"]),
    ("house", &["home", "mansion", "building"]),
    ("school", &["university", "college", "academy"]),
    ("child", &["kid", "boy", "girl", "youngster"]),
    ("man", &["guy", "male", "gentleman"]),
    ("woman", &["lady", "female", "girl"]),
    ("old", &["elderly", "aged", "ancient"]),
    ("young", &["youth", "teenage", "juvenile"]),
    ("big", &["large", "huge", "giant", "massive"]),
    ("small", &["little", "tiny", "mini", "petite"]),
    ("lost", &["missing", "misplaced"]),
    ("journey", &["adventure", "quest", "expedition"]),
    ("planet", &["world", "orb"]),
    ("alien", &["extraterrestrial", "et"]),
    ("robot", &["android", "cyborg"]),
    ("magic", &["sorcery", "enchantment"]),
    ("wizard", &["sorcerer", "magician"]),
    ("king", &["monarch", "ruler"]),
    ("queen", &["monarch", "ruler"]),
    ("prince", &["royal"]),
    ("princess", &["royal"]),
    ("detective", &["investigator", "sleuth"]),
    ("crime", &["felony", "offense"]),
    ("war", &["conflict", "battle"]),
    ("hero", &["protagonist", "champion"]),
    ("villain", &["antagonist", "evil"]),
];

/// Collect the expansions of every trigger found in `text`, first occurrence wins.
pub fn lookup(table: &[(&str, &[&str])], text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    let mut seen = HashSet::new();
    let mut expansions = Vec::new();

    for (trigger, terms) in table {
        if !text.contains(trigger) {
            continue;
        }
        for term in terms.iter() {
            if seen.insert(*term) {
                expansions.push(term.to_string());
            }
        }
    }

    expansions
}
