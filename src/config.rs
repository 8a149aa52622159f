use once_cell::sync::Lazy;
use std::{env, path::PathBuf};

const OWNER: &str = "openframebox";

const REPOSITORIES: &[&str] = &[
    "gomigration",
    "goevent",
    "goqueue",
    "gomail",
    "gostorage",
    "goauth",
    "govalidator",
    "goinit",
];

const GITHUB_API_BASE_URL: &str = "https://api.github.com";

const TOKEN_ENV_VAR: &str = "TOKEN";

const OUTPUT_DIR_NAME: &str = "data";
const OUTPUT_FILE_NAME: &str = "repositories.json";

static OUTPUT_PATH: Lazy<PathBuf> = Lazy::new(|| {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(OUTPUT_DIR_NAME)
        .join(OUTPUT_FILE_NAME)
});

#[derive(Debug, Clone)]
pub struct Config {
    pub owner: String,
    pub repositories: Vec<String>,
    pub output_path: PathBuf,
    pub api_base_url: String,
    pub token: Option<String>,
}

impl Config {
    pub fn new(token: Option<String>) -> Self {
        Config {
            owner: OWNER.to_owned(),
            repositories: REPOSITORIES.iter().map(|repo| repo.to_string()).collect(),
            output_path: OUTPUT_PATH.as_path().to_path_buf(),
            api_base_url: GITHUB_API_BASE_URL.to_owned(),
            token: token.filter(|token| !token.is_empty()),
        }
    }

    /// Compiled-in settings plus the optional token from `TOKEN`.
    pub fn from_env() -> Self {
        Config::new(env::var(TOKEN_ENV_VAR).ok())
    }
}
