use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "oa-zendesk-sync")]
#[command(about = "Force-sync one Open Access enquiry into ZenDesk")]
pub struct CliConfig {
    #[arg(short = 'e', long, help = "The ZenDesk account email")]
    pub email: String,

    #[arg(short = 't', long, help = "The ZenDesk API token")]
    pub token: String,

    #[arg(short = 'u', long, help = "The ZenDesk base URI")]
    pub uri: String,

    #[arg(short = 'i', long, help = "The OA ticket id to sync")]
    pub ticket: String,

    #[arg(long, default_value = "records.json", help = "Path to the OA record export")]
    pub records: String,

    #[arg(long, default_value = "1", help = "ZenDesk group the ticket is filed under")]
    pub group_id: u64,

    #[arg(long, default_value = "https://www.openaccess.cam.ac.uk")]
    pub download_base_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn group_id(&self) -> u64 {
        self.group_id
    }

    fn download_base_url(&self) -> &str {
        &self.download_base_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("email", &self.email)?;
        validation::validate_non_empty_string("token", &self.token)?;
        validation::validate_url("uri", &self.uri)?;
        validation::validate_non_empty_string("ticket", &self.ticket)?;
        validation::validate_path("records", &self.records)?;
        validation::validate_positive_number("group_id", self.group_id, 1)?;
        validation::validate_url("download_base_url", &self.download_base_url)?;
        Ok(())
    }
}
