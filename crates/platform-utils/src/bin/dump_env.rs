//! Prints the sorted property/environment dump to stdout.
//!
//! Usage: `cargo run --bin dump-env`

use platform_utils::inspect::{dump_env_debug, dump_env_to_stdout};
use platform_utils::HostEnv;

fn main() {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let host = HostEnv::capture();
    let logged = dump_env_debug(&host);
    tracing::debug!("logged {logged} environment lines");

    if let Err(error) = dump_env_to_stdout(&host) {
        eprintln!("failed to dump environment: {error}");
        std::process::exit(1);
    }
}
