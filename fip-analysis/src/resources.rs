//! NLP resources shared by pipeline instances
//!
//! Built once at process start and handed to [`FeedbackPipeline::new`](crate::FeedbackPipeline::new).
//! The models are immutable, so one set can back any number of concurrent
//! pipelines.

use std::sync::Arc;
use tracing::info;

use crate::lexicon::StopwordSet;
use crate::sentiment::{LexiconPolarityModel, PolarityModel};
use crate::tagger::{LexiconTagger, PosTagger};

#[derive(Clone)]
pub struct NlpResources {
    pub polarity_model: Arc<dyn PolarityModel>,
    pub tagger: Arc<dyn PosTagger>,
    pub stopwords: StopwordSet,
}

impl NlpResources {
    pub fn new(
        polarity_model: Arc<dyn PolarityModel>,
        tagger: Arc<dyn PosTagger>,
        stopwords: StopwordSet,
    ) -> Self {
        Self {
            polarity_model,
            tagger,
            stopwords,
        }
    }

    /// Embedded English lexicons
    pub fn english() -> Self {
        let polarity = LexiconPolarityModel::english();
        let stopwords = StopwordSet::english();
        info!(
            polarity_words = polarity.vocabulary_size(),
            stopwords = stopwords.len(),
            "Loaded English NLP resources"
        );

        Self::new(Arc::new(polarity), Arc::new(LexiconTagger::english()), stopwords)
    }

    pub fn with_polarity_model(mut self, model: Arc<dyn PolarityModel>) -> Self {
        self.polarity_model = model;
        self
    }

    pub fn with_tagger(mut self, tagger: Arc<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = stopwords;
        self
    }
}

impl std::fmt::Debug for NlpResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NlpResources")
            .field("polarity_model", &self.polarity_model.name())
            .field("tagger", &self.tagger.name())
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}
