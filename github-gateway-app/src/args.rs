use clap::Parser;
use github_gateway_lib::DEFAULT_API_URL;
use std::ffi::OsString;
use std::net::IpAddr;
use std::num::NonZeroUsize;
use std::path::Path;

#[derive(Debug, Parser)]
#[clap(about = "GraphQL gateway over the GitHub API")]
pub struct Args {
    #[clap(
        short = 't',
        long = "token",
        help = "GitHub API token with repository and webhook read access",
        env = "GITHUB_TOKEN",
        hide_env_values = true
    )]
    pub github_token: String,

    #[clap(
        long = "api-url",
        help = "GitHub API root",
        env = "GITHUB_GATEWAY_API_URL",
        default_value = DEFAULT_API_URL
    )]
    pub api_url: String,

    #[clap(
        short = 'b',
        long = "bind",
        help = "Address to listen on",
        env = "GITHUB_GATEWAY_BIND",
        default_value = "127.0.0.1"
    )]
    pub bind: IpAddr,

    #[clap(
        short = 'p',
        long = "port",
        help = "Port to listen on",
        env = "GITHUB_GATEWAY_PORT",
        default_value = "4000"
    )]
    pub port: u16,

    #[clap(
        short = 'c',
        long = "concurrency",
        help = "Maximum number of repository detail lookups running at once",
        env = "GITHUB_GATEWAY_CONCURRENCY",
        default_value = "2"
    )]
    pub concurrency: NonZeroUsize,
}

impl Args {
    /// Loads `env_file` (or `.env` from the working directory and its
    /// parents when `None`) into the process environment, then parses `argv`.
    /// Variables already set in the environment win over the file.
    pub fn parse_with_env_file<I, T>(
        env_file: Option<&Path>,
        argv: I,
    ) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match env_file {
            Some(path) => {
                dotenvy::from_path(path).ok();
            }
            None => {
                dotenvy::dotenv().ok();
            }
        }
        Self::try_parse_from(argv)
    }
}
