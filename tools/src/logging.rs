//! Log output for the command-line tool.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "yidtool=info,yiddish_core=info";
const VERBOSE_FILTER: &str = "yidtool=debug,yiddish_core=debug,libyivo=debug,libhasidic=debug";

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
pub fn init(verbose: u8) {
    let default = if verbose > 0 { VERBOSE_FILTER } else { DEFAULT_FILTER };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}
