//! YIVO orthography engine
//!
//! Bundles the loanword lexicon with the four YIVO-side operations:
//! romanization, reverse romanization, loanword respelling and the
//! alignment romanizer. The engine is immutable and cheap to clone, so one
//! instance can serve any number of threads.

use std::sync::Arc;

use tracing::debug;
use yiddish_core::{ResourceLoader, Resources};

use crate::alignment::romanize_for_alignment;
use crate::config::YivoConfig;
use crate::detransliterate::detransliterate;
use crate::respell::Respeller;
use crate::transliterate::transliterate;

/// Public engine for libyivo.
///
/// Built from loaded [`Resources`] only, so no operation can run before the
/// lexicon has been acquired.
#[derive(Clone)]
pub struct Engine {
    resources: Arc<Resources>,
    respeller: Arc<Respeller>,
}

impl Engine {
    /// Construct an engine with the default respeller lists.
    pub fn new(resources: Arc<Resources>) -> Self {
        Self::with_config(resources, &YivoConfig::default())
    }

    /// Construct an engine using the respeller lists from `config`.
    pub fn with_config(resources: Arc<Resources>, config: &YivoConfig) -> Self {
        let respeller = Respeller::with_options(
            &resources.loanwords,
            &config.homographs,
            &config.prefer_second_variant,
        );
        debug!(keys = respeller.len(), "respeller ready");
        Self {
            resources,
            respeller: Arc::new(respeller),
        }
    }

    /// Acquire resources as configured and build the engine.
    ///
    /// Only the loanword list is needed. With a snapshot path it is taken
    /// from the snapshot when present there, and added to it otherwise.
    pub fn from_config(config: &YivoConfig) -> yiddish_core::Result<Self> {
        let loader = ResourceLoader::from_config(config.base())?.without_hasidic();
        let resources = match &config.base().snapshot {
            Some(path) => loader.load_or_snapshot(path)?,
            None => loader.load()?,
        };
        Ok(Self::with_config(resources, config))
    }

    pub fn resources(&self) -> &Arc<Resources> {
        &self.resources
    }

    /// Romanize; with `use_loanword_dictionary`, loanwords are romanized by pronunciation.
    pub fn transliterate(&self, text: &str, use_loanword_dictionary: bool) -> String {
        transliterate(text, use_loanword_dictionary.then_some(&self.resources.loanwords))
    }

    /// Reverse romanization; with `use_loanword_dictionary`, loanwords get their etymological spelling.
    pub fn detransliterate(&self, text: &str, use_loanword_dictionary: bool) -> String {
        detransliterate(text, use_loanword_dictionary.then_some(&self.resources.loanwords))
    }

    /// Respell loshn-koydesh words phonetically.
    pub fn respell_loanwords(&self, text: &str) -> String {
        self.respeller.respell(text)
    }

    /// German-flavoured romanization for forced alignment.
    pub fn romanize_for_alignment(&self, text: &str) -> String {
        romanize_for_alignment(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_engine() {
        let engine = Engine::new(Arc::new(Resources::load_demo()));
        assert_eq!(engine.transliterate("שבת", false), "shbs");
        assert_eq!(engine.transliterate("שבת", true), "shabes");
        assert_eq!(engine.detransliterate("shabes", true), "שבת");
        assert_eq!(engine.respell_loanwords("שבת"), "שאַבעס");
        assert_eq!(engine.romanize_for_alignment("פֿון"), "fun");
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn config_lists_reach_the_respeller() {
        let resources = Arc::new(Resources::load_demo());
        let config = YivoConfig {
            homographs: vec!["שבת".to_string()],
            ..YivoConfig::default()
        };
        let engine = Engine::with_config(resources, &config);
        assert_eq!(engine.respell_loanwords("שבת"), "שבת");
    }
}
