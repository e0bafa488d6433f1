//! Bug Swat leaderboard server entry point
//!
//! Native builds serve the ranking API. Web builds enter through the
//! library's wasm bindings instead.

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match bug_swat::server::ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Bad configuration: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = bug_swat::server::run(config).await {
        log::error!("Server error: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
