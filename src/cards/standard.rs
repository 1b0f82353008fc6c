//! The standard 78-card catalog.
//!
//! The 22 major arcana carry individually written meaning text. The 56
//! minors are composed from rank and suit theme tables, the same way the
//! upstream card data pairs a rank phrase with a suit domain. Ids are
//! stable: majors 0-21 in trump order, minors 22-77 grouped by suit.

use super::card::{Arcana, Card, CardId, Suit};
use super::catalog::CardCatalog;

/// Name, upright meaning, reversed meaning, upright keywords, reversed
/// keywords for each major arcana card, in trump order.
const MAJOR_ARCANA: [(&str, &str, &str, &[&str], &[&str]); 22] = [
    (
        "The Fool",
        "A leap into the unknown. Trust the journey that is just beginning.",
        "Recklessness or hesitation at the threshold. Look before you leap.",
        &["beginnings", "spontaneity", "trust"],
        &["recklessness", "naivety"],
    ),
    (
        "The Magician",
        "Every tool you need is already on the table. Will it into being.",
        "Talent scattered or bent toward manipulation. Refocus your intent.",
        &["manifestation", "willpower", "skill"],
        &["manipulation", "untapped talent"],
    ),
    (
        "The High Priestess",
        "The answer is not out loud. Listen to the quiet knowledge within.",
        "Your inner voice is muffled by noise. Withdraw and listen again.",
        &["intuition", "mystery", "inner voice"],
        &["secrets", "disconnection"],
    ),
    (
        "The Empress",
        "Abundance, nurture, and growth. Tend what you want to flourish.",
        "Creative block or smothering care. Loosen your grip on the garden.",
        &["abundance", "nurture", "fertility"],
        &["dependence", "creative block"],
    ),
    (
        "The Emperor",
        "Structure holds the realm together. Lead with steady authority.",
        "Rigidity hardens into tyranny. Rule yourself before ruling others.",
        &["authority", "structure", "stability"],
        &["rigidity", "domination"],
    ),
    (
        "The Hierophant",
        "Tradition carries hard-won wisdom. Learn the forms before breaking them.",
        "Convention has become a cage. Question the doctrine you inherited.",
        &["tradition", "guidance", "belief"],
        &["rebellion", "dogma"],
    ),
    (
        "The Lovers",
        "A union of hearts and a choice of values. Choose what you truly love.",
        "Disharmony or a choice avoided. Realign what you do with what you value.",
        &["love", "harmony", "choice"],
        &["imbalance", "avoidance"],
    ),
    (
        "The Chariot",
        "Opposing forces yoked to one purpose. Drive forward with discipline.",
        "The reins have slipped. Recover direction before applying speed.",
        &["determination", "victory", "control"],
        &["aimlessness", "aggression"],
    ),
    (
        "Strength",
        "Gentle courage outlasts brute force. Meet the lion with patience.",
        "Self-doubt gnaws at resolve. Your strength is not gone, only quiet.",
        &["courage", "patience", "compassion"],
        &["self-doubt", "weakness"],
    ),
    (
        "The Hermit",
        "Step back from the crowd. The lantern lights one step at a time.",
        "Solitude has curdled into isolation. Let someone see your light.",
        &["introspection", "solitude", "guidance"],
        &["isolation", "withdrawal"],
    ),
    (
        "Wheel of Fortune",
        "The wheel turns and fortunes shift. Ride the cycle rather than fight it.",
        "Clinging to a spoke as the wheel moves. Release what is already turning.",
        &["change", "cycles", "destiny"],
        &["resistance", "setback"],
    ),
    (
        "Justice",
        "Truth weighs every act. What is fair will be made plain.",
        "The scales are tipped by bias or denial. Account for your part honestly.",
        &["fairness", "truth", "accountability"],
        &["unfairness", "dishonesty"],
    ),
    (
        "The Hanged Man",
        "Suspension brings a new vantage. Surrender the schedule and see anew.",
        "Stalling disguised as patience. The pause has served; move.",
        &["surrender", "perspective", "pause"],
        &["stalling", "indecision"],
    ),
    (
        "Death",
        "An ending clears the ground. Transformation begins with release.",
        "Refusing the ending prolongs the pain. Let the old form go.",
        &["endings", "transformation", "transition"],
        &["stagnation", "resistance"],
    ),
    (
        "Temperance",
        "Blend the opposites patiently. The middle path is alive, not bland.",
        "Excess in one vessel drains the other. Restore the measure.",
        &["balance", "moderation", "patience"],
        &["excess", "imbalance"],
    ),
    (
        "The Devil",
        "Chains worn long enough feel like clothing. Name what binds you.",
        "The shackles are looser than they look. Release is within reach.",
        &["bondage", "materialism", "temptation"],
        &["release", "breaking free"],
    ),
    (
        "The Tower",
        "What was built on a false floor falls fast. Let the lightning clear it.",
        "Disaster averted or postponed. Rebuild on rock this time.",
        &["upheaval", "revelation", "sudden change"],
        &["averted ruin", "fear of change"],
    ),
    (
        "The Star",
        "After the storm, clear water and open sky. Hope is a discipline.",
        "Faith runs low and the well seems dry. The star has not moved.",
        &["hope", "renewal", "inspiration"],
        &["despair", "lost faith"],
    ),
    (
        "The Moon",
        "The path is lit by reflection, not source. Walk carefully among illusions.",
        "The fog begins to lift. Fears shrink in the returning light.",
        &["illusion", "intuition", "uncertainty"],
        &["clarity", "released fear"],
    ),
    (
        "The Sun",
        "Warmth, success, and plain sight. What thrives here thrives openly.",
        "The light is dimmed, not gone. Small joys rekindle the larger one.",
        &["joy", "success", "vitality"],
        &["dimmed optimism", "delay"],
    ),
    (
        "Judgement",
        "A reckoning and a rising. Answer the call to become what you are.",
        "Harsh self-judgement drowns the call. Forgive, then answer.",
        &["rebirth", "reckoning", "awakening"],
        &["self-doubt", "harsh judgement"],
    ),
    (
        "The World",
        "The circle closes in fullness. Completion earned, wholeness felt.",
        "The last step remains untaken. Close the loop you opened.",
        &["completion", "fulfillment", "wholeness"],
        &["loose ends", "incompletion"],
    ),
];

/// Rank name, upright phrase, reversed phrase, upright keyword, reversed
/// keyword for the minor arcana, ace to king.
const MINOR_RANKS: [(&str, &str, &str, &str, &str); 14] = [
    ("Ace", "a fresh beginning", "a false start", "beginnings", "hesitation"),
    ("Two", "a balance to strike", "a choice avoided", "balance", "stalemate"),
    ("Three", "growth through shared effort", "friction among allies", "collaboration", "discord"),
    ("Four", "a foundation to rest on", "restlessness despite stability", "stability", "stagnation"),
    ("Five", "a conflict to weather", "a loss beginning to heal", "conflict", "recovery"),
    ("Six", "harmony returning", "nostalgia that holds you back", "harmony", "clinging"),
    ("Seven", "a hard assessment", "doubt eroding patience", "perseverance", "doubt"),
    ("Eight", "swift movement and mastery", "effort scattered thin", "momentum", "dissipation"),
    ("Nine", "fruition near at hand", "strain before the finish", "resilience", "fatigue"),
    ("Ten", "a cycle completed", "a burden carried too far", "completion", "overload"),
    ("Page", "curious news arriving", "a message missed or immature", "curiosity", "immaturity"),
    ("Knight", "bold pursuit", "a charge without a plan", "action", "haste"),
    ("Queen", "mature, steady care", "care turned inward or sour", "nurture", "insecurity"),
    ("King", "seasoned command", "command turned controlling", "mastery", "control"),
];

/// Suit paired with the domain phrase its cards speak to.
const SUIT_DOMAINS: [(Suit, &str); 4] = [
    (Suit::Cups, "emotion and relationship"),
    (Suit::Wands, "energy, work, and ambition"),
    (Suit::Swords, "thought and conflict"),
    (Suit::Pentacles, "material life and the body"),
];

/// Build the full 78-card standard catalog.
///
/// ```
/// use tarot_engine::cards::standard_catalog;
///
/// let catalog = standard_catalog();
/// assert_eq!(catalog.len(), 78);
/// ```
#[must_use]
pub fn standard_catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    let mut next_id = 0u32;

    for (name, upright, reversed, up_kw, rev_kw) in MAJOR_ARCANA {
        catalog.register(
            Card::new(CardId::new(next_id), name, Arcana::Major)
                .with_meanings(upright, reversed)
                .with_keywords(up_kw, rev_kw),
        );
        next_id += 1;
    }

    for (suit, domain) in SUIT_DOMAINS {
        for (rank, upright, reversed, up_kw, rev_kw) in MINOR_RANKS {
            let name = format!("{} of {}", rank, suit);
            let upright_meaning =
                format!("The {} signals {} in matters of {}.", name, upright, domain);
            let reversed_meaning =
                format!("Reversed, the {} warns of {} in matters of {}.", name, reversed, domain);
            catalog.register(
                Card::new(CardId::new(next_id), name, Arcana::Minor(suit))
                    .with_meanings(upright_meaning, reversed_meaning)
                    .with_keywords(&[up_kw], &[rev_kw]),
            );
            next_id += 1;
        }
    }

    catalog
}
