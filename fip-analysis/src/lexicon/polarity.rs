//! Word polarity lexicon, intensifiers and negations
//!
//! Values are in [-1, 1] on the same scale as the pattern/TextBlob English
//! adjective lexicon.

pub const POLARITY: &[(&str, f64)] = &[
    // positive
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("brilliant", 0.9),
    ("clean", 0.367),
    ("clear", 0.1),
    ("comfortable", 0.4),
    ("convenient", 0.4),
    ("cool", 0.35),
    ("delighted", 0.7),
    ("easy", 0.433),
    ("easier", 0.4),
    ("effective", 0.6),
    ("efficient", 0.5),
    ("elegant", 0.5),
    ("enjoy", 0.4),
    ("enjoyable", 0.5),
    ("excellent", 1.0),
    ("excited", 0.375),
    ("exciting", 0.3),
    ("fabulous", 0.4),
    ("fantastic", 0.4),
    ("fast", 0.2),
    ("favorite", 0.5),
    ("fine", 0.417),
    ("flawless", 0.8),
    ("friendly", 0.375),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.5),
    ("impressive", 1.0),
    ("improved", 0.3),
    ("incredible", 0.9),
    ("interesting", 0.5),
    ("intuitive", 0.3),
    ("like", 0.1),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("neat", 0.4),
    ("new", 0.136),
    ("nice", 0.6),
    ("okay", 0.5),
    ("ok", 0.5),
    ("outstanding", 0.5),
    ("perfect", 1.0),
    ("pleasant", 0.733),
    ("pleased", 0.5),
    ("polished", 0.4),
    ("powerful", 0.3),
    ("quick", 0.333),
    ("reliable", 0.5),
    ("responsive", 0.4),
    ("satisfied", 0.5),
    ("simple", 0.2),
    ("smooth", 0.4),
    ("solid", 0.3),
    ("stable", 0.3),
    ("superb", 1.0),
    ("thanks", 0.2),
    ("thank", 0.2),
    ("useful", 0.3),
    ("valuable", 0.4),
    ("well", 0.2),
    ("wonderful", 1.0),
    ("worth", 0.3),
    ("normal", 0.15),
    // negative
    ("angry", -0.5),
    ("annoyed", -0.4),
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("boring", -1.0),
    ("broken", -0.4),
    ("buggy", -0.5),
    ("clunky", -0.4),
    ("complicated", -0.5),
    ("confused", -0.4),
    ("confusing", -0.3),
    ("crashes", -0.3),
    ("crash", -0.3),
    ("difficult", -0.5),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("dislike", -0.5),
    ("dreadful", -1.0),
    ("expensive", -0.5),
    ("fail", -0.5),
    ("failed", -0.5),
    ("frustrated", -0.7),
    ("frustrating", -0.4),
    ("hard", -0.292),
    ("hate", -0.8),
    ("hated", -0.9),
    ("horrible", -1.0),
    ("inconsistent", -0.3),
    ("laggy", -0.4),
    ("mediocre", -0.4),
    ("messy", -0.4),
    ("painful", -0.7),
    ("pathetic", -1.0),
    ("poor", -0.4),
    ("problematic", -0.5),
    ("ridiculous", -0.333),
    ("sad", -0.5),
    ("slow", -0.3),
    ("sluggish", -0.4),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("ugly", -0.7),
    ("unhappy", -0.6),
    ("unreliable", -0.5),
    ("unstable", -0.4),
    ("unusable", -0.8),
    ("upset", -0.5),
    ("useless", -0.5),
    ("wasted", -0.2),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// Multipliers applied to the next polarity word
pub const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("completely", 1.3),
    ("especially", 1.2),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.4),
    ("most", 1.2),
    ("particularly", 1.2),
    ("pretty", 1.1),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.3),
    ("too", 1.2),
    ("totally", 1.3),
    ("truly", 1.3),
    ("very", 1.3),
];

/// Words that flip the next polarity word
pub const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "cannot",
    "without", "hardly", "barely", "dont", "doesnt", "didnt", "isnt", "wasnt", "arent",
    "werent", "cant", "couldnt", "wont", "wouldnt", "shouldnt", "aint",
];
