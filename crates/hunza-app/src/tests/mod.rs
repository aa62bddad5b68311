mod command_tests;
mod config_tests;
mod request_tests;

use std::sync::Arc;

use hunza_config::Config;
use hunza_lang_burushaski::LexiconLoader;

use crate::state::AppState;

/// App state over the embedded seed lexicon with default config
pub(crate) fn seed_state() -> Arc<AppState> {
    let lexicon = LexiconLoader::load_embedded().expect("embedded lexicon");
    Arc::new(AppState::with_lexicon(Config::default(), lexicon))
}
