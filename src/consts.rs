pub const BACKEND_URL_ENV: &str = "DEPLOIFAI_BACKEND_URL";
pub const CLI_ENVIRONMENT_ENV: &str = "DEPLOIFAI_CLI_ENVIRONMENT";

pub const DEFAULT_BACKEND_URL: &str = "https://api.deploif.ai";
