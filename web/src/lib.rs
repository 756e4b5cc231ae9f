use clap::Parser;
use wasm_bindgen::prelude::*;

mod api;
mod game;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Arguments come from the location hash, e.g. `#--seed=7&-vv`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();

    let (args, hash_error) = match Args::from_location_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([""]), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = hash_error {
        log::warn!("ignoring location hash {:?}: {}", location_hash, err);
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}
