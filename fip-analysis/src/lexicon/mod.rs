//! Embedded English word lists

pub mod polarity;
pub mod stopwords;
pub mod tags;

pub use stopwords::StopwordSet;
