//! Word lists for the part-of-speech tagger
//!
//! Closed-class words plus the open-class vocabulary that shows up in product
//! feedback. Anything else is tagged by suffix rules.

pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either",
    "neither", "some", "any", "all", "both", "another", "no",
];

pub const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them",
    "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves",
];

pub const POSSESSIVES: &[&str] = &["my", "your", "his", "its", "our", "their"];

pub const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at",
    "before", "behind", "below", "beside", "between", "by", "during", "for", "from",
    "in", "inside", "into", "near", "of", "off", "on", "onto", "out", "over", "since",
    "through", "throughout", "toward", "towards", "under", "until", "upon", "with",
    "within", "without", "because", "while", "although", "though", "unless", "whether",
    "if",
];

pub const CONJUNCTIONS: &[&str] = &["and", "but", "or", "nor", "yet", "plus"];

pub const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would",
];

pub const WH_WORDS: &[&str] = &["what", "which", "who", "whom", "whose", "when", "where", "why", "how"];

pub const BE_HAVE_DO: &[(&str, &str)] = &[
    ("be", "VB"),
    ("am", "VBP"),
    ("are", "VBP"),
    ("is", "VBZ"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("having", "VBG"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    ("doing", "VBG"),
];

pub const ADVERBS: &[&str] = &[
    "very", "really", "quite", "too", "so", "always", "never", "often", "sometimes",
    "usually", "also", "still", "even", "just", "almost", "already", "again", "ever",
    "here", "there", "now", "then", "soon", "today", "yesterday", "tomorrow", "much",
    "well", "not", "only", "rather", "maybe", "perhaps", "anyway", "else", "instead",
    "once", "twice", "together", "pretty", "super",
];

pub const ADJECTIVES: &[&str] = &[
    "amazing", "annoying", "awesome", "awful", "bad", "best", "better", "big", "boring",
    "broken", "buggy", "clean", "clear", "clunky", "complex", "confusing", "cool",
    "current", "difficult", "disappointing", "easy", "excellent", "exciting", "expensive",
    "fantastic", "fast", "favorite", "fine", "free", "frustrating", "full", "fun", "good",
    "great", "happy", "hard", "high", "horrible", "huge", "important", "interesting",
    "laggy", "large", "last", "late", "little", "long", "low", "main", "messy", "modern",
    "new", "nice", "old", "okay", "overall", "perfect", "poor", "pretty", "quick",
    "ready", "real", "recent", "sad", "simple", "slow", "small", "smooth", "solid",
    "stable", "terrible", "tiny", "ugly", "unusable", "upset", "whole", "wonderful",
    "worse", "worst", "wrong", "entire", "easier", "faster", "slower",
];

pub const NOUNS: &[&str] = &[
    "account", "app", "application", "bug", "button", "capability", "cart", "checkout",
    "client", "company", "crash", "customer", "dashboard", "data", "design", "error",
    "experience", "feature", "feedback", "functionality", "help", "interface", "issue",
    "layout", "load", "login", "menu", "mode", "option", "page", "password", "payment",
    "performance", "phone", "price", "problem", "process", "product", "quality",
    "release", "screen", "search", "service", "setting", "settings", "signup", "site",
    "software", "speed", "staff", "support", "system", "team", "thing", "time", "tool",
    "tutorial", "update", "user", "version", "website", "week", "work", "workflow",
    "people", "day", "way", "lot", "bit", "documentation", "notification", "theme",
    "dark", "light", "integration", "onboarding", "pricing", "plan", "subscription",
];

pub const VERBS: &[&str] = &[
    "add", "allow", "appreciate", "ask", "become", "break", "bring", "buy", "change",
    "come", "crashes", "expect", "feel", "find", "fix", "get", "give", "go", "hate",
    "help", "improve", "keep", "know", "let", "like", "look", "love", "make", "need",
    "open", "recommend", "run", "say", "see", "seem", "show", "start", "stop", "take",
    "tell", "think", "try", "use", "want", "wish", "enjoy", "freeze", "freezes",
    "lose", "loses", "wait", "takes", "makes", "works", "fails", "loads", "seems",
    "sync", "install", "navigate", "understand", "hope",
];
