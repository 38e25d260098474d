// log backend: browser console under wasm, tracing-subscriber's fmt layer on stderr elsewhere
use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};

    pub struct ConsoleLogger;

    pub static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let msg = wasm_bindgen::JsValue::from_str(&format!("[portfolio-cli] {}", record.args()));
            match record.level() {
                Level::Error => web_sys::console::error_1(&msg),
                Level::Warn => web_sys::console::warn_1(&msg),
                Level::Info => web_sys::console::log_1(&msg),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
            }
        }

        fn flush(&self) {}
    }
}

/// Installs the backend. Safe to call more than once; only the level
/// changes on later calls.
pub fn init(level: LevelFilter) {
    #[cfg(target_arch = "wasm32")]
    {
        // a logger may already be set (second Terminal) - that's fine
        let _ = log::set_logger(&console::LOGGER);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;

        // RUST_LOG narrows further; `log` records reach the subscriber through tracing-log
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        if installed.is_err() {
            log::debug!("log backend already installed, only adjusting level");
        }
    }

    log::set_max_level(level);
}
