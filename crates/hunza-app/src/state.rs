use hunza_config::Config;
use hunza_dictionary::MemoryLexicon;
use hunza_lang_burushaski::LexiconLoader;

/// Read-only state shared by every request
pub struct AppState {
    pub config: Config,
    pub lexicon: MemoryLexicon,
}

impl AppState {
    pub fn load(config: Config) -> Self {
        let lexicon = LexiconLoader::load_with_additional(
            config.dictionary.use_embedded,
            &config.dictionary.additional_paths,
        );
        Self::with_lexicon(config, lexicon)
    }

    pub fn with_lexicon(config: Config, lexicon: MemoryLexicon) -> Self {
        Self { config, lexicon }
    }
}
