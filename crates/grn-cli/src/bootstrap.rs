use anyhow::Context;

use grn_config::GreenroomConfig;

/// Load the layered configuration, including `.env` support.
pub fn load_config() -> anyhow::Result<GreenroomConfig> {
    GreenroomConfig::load_with_dotenv().context("failed to load greenroom configuration")
}
