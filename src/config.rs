use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    /// Startup fails when this is missing or blank.
    #[clap(env = "GOOGLE_MAPS_API_KEY", long, hide_env_values = true)]
    pub google_maps_api_key: String,

    #[clap(env, long, default_value = crate::repositories::maps_api::DEFAULT_BASE_URL)]
    pub maps_base_url: String,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Comma separated list of allowed CORS origins
    #[clap(env, long, default_value = "http://localhost:3000")]
    pub origin_urls: String,

    #[clap(env, long, default_value_t = 64)]
    pub max_concurrent_requests: usize,

    /// Size of the pool running blocking provider calls
    #[clap(env, long)]
    pub blocking_threads: Option<usize>,
}

impl Config {
    pub fn blocking_threads(&self) -> usize {
        self.blocking_threads
            .filter(|threads| *threads > 0)
            .unwrap_or_else(|| num_cpus::get() * 4)
    }
}
