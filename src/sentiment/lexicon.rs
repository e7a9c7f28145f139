use std::{collections::HashMap, sync::LazyLock};

pub static LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::builtin);

pub struct Lexicon {
    polarities: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

const POLARITIES: &[(&str, f64)] = &[
    // general
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("bad", -0.7),
    ("best", 1.0),
    ("better", 0.5),
    ("big", 0.0),
    ("brilliant", 0.9),
    ("cheap", 0.4),
    ("confident", 0.5),
    ("dangerous", -0.6),
    ("difficult", -0.5),
    ("disappointing", -0.6),
    ("disaster", -0.9),
    ("dismal", -0.6),
    ("easy", 0.43),
    ("encouraging", 0.5),
    ("excellent", 1.0),
    ("excited", 0.38),
    ("exciting", 0.3),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.32),
    ("fantastic", 0.4),
    ("fine", 0.42),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("hard", -0.29),
    ("healthy", 0.5),
    ("high", 0.16),
    ("horrible", -1.0),
    ("important", 0.4),
    ("impressive", 1.0),
    ("incredible", 0.9),
    ("lost", 0.0),
    ("low", 0.0),
    ("mixed", 0.0),
    ("negative", -0.3),
    ("new", 0.14),
    ("nice", 0.6),
    ("optimistic", 0.5),
    ("pessimistic", -0.5),
    ("poor", -0.4),
    ("positive", 0.23),
    ("remarkable", 0.75),
    ("right", 0.29),
    ("robust", 0.5),
    ("sad", -0.5),
    ("safe", 0.5),
    ("serious", -0.33),
    ("solid", 0.4),
    ("strong", 0.43),
    ("stunning", 0.5),
    ("successful", 0.75),
    ("superb", 1.0),
    ("terrible", -1.0),
    ("tough", -0.39),
    ("troubled", -0.5),
    ("unexpected", 0.1),
    ("weak", -0.38),
    ("wonderful", 1.0),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
    // markets
    ("beat", 0.4),
    ("beats", 0.4),
    ("bearish", -0.6),
    ("bullish", 0.6),
    ("collapse", -0.7),
    ("crash", -0.8),
    ("crashes", -0.8),
    ("crisis", -0.7),
    ("decline", -0.4),
    ("declines", -0.4),
    ("default", -0.6),
    ("downgrade", -0.5),
    ("downgraded", -0.5),
    ("drop", -0.3),
    ("drops", -0.3),
    ("fraud", -0.9),
    ("gain", 0.4),
    ("gains", 0.4),
    ("growth", 0.4),
    ("jump", 0.4),
    ("jumps", 0.4),
    ("lawsuit", -0.5),
    ("loss", -0.5),
    ("losses", -0.5),
    ("miss", -0.4),
    ("misses", -0.4),
    ("outperform", 0.6),
    ("plunge", -0.7),
    ("plunges", -0.7),
    ("profit", 0.4),
    ("profitable", 0.6),
    ("rally", 0.5),
    ("rallies", 0.5),
    ("rebound", 0.4),
    ("recession", -0.6),
    ("record", 0.3),
    ("recovery", 0.4),
    ("risk", -0.2),
    ("risky", -0.4),
    ("slump", -0.6),
    ("soar", 0.7),
    ("soars", 0.7),
    ("surge", 0.6),
    ("surges", 0.6),
    ("tumble", -0.6),
    ("tumbles", -0.6),
    ("underperform", -0.6),
    ("upgrade", 0.5),
    ("upgraded", 0.5),
    ("volatile", -0.3),
    ("warning", -0.4),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.4),
    ("most", 1.3),
    ("quite", 1.1),
    ("really", 1.2),
    ("sharply", 1.4),
    ("slightly", 0.5),
    ("so", 1.3),
    ("somewhat", 0.7),
    ("too", 1.3),
    ("very", 1.3),
];

const NEGATIONS: &[&str] = &["never", "no", "nor", "not", "without"];

/// Factor applied to a polarity preceded by a negation.
pub const NEGATION_FACTOR: f64 = -0.5;

impl Lexicon {
    fn builtin() -> Self {
        Self {
            polarities: POLARITIES.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    pub fn intensity(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        NEGATIONS.contains(&word) || word.ends_with("n't")
    }

    pub fn polarity(&self, word: &str) -> Option<f64> {
        self.polarities.get(word).copied()
    }
}
