use cybercafe_store::config::StoreConfig;
use log::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = StoreConfig::load().and_then(|config| cybercafe_store::run(&config));
    if let Err(e) = result {
        error!("Failed to open store: {e}");
        std::process::exit(1);
    }
}
