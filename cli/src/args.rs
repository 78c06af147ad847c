use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use foodharmony_core::domain::{
    common::{AnalysisServiceConfig, DEFAULT_FUNCTION_NAME, FoodHarmonyConfig},
    meal_analysis::entities::{MealImage, MealInput, UserProfile},
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "foodharmony",
    version,
    about = "Check a meal against your medical, religious and workplace profile"
)]
pub struct Args {
    #[command(flatten)]
    pub service: ServiceArgs,

    #[command(flatten)]
    pub meal: MealArgs,

    #[command(flatten)]
    pub profile: ProfileArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServiceArgs {
    /// Base URL of the functions host
    #[arg(long = "functions-url", env = "ANALYSIS_FUNCTIONS_URL")]
    pub functions_url: String,

    #[arg(long = "api-key", env = "ANALYSIS_API_KEY", default_value = "")]
    pub api_key: String,

    #[arg(
        long = "function-name",
        env = "ANALYSIS_FUNCTION_NAME",
        default_value = DEFAULT_FUNCTION_NAME
    )]
    pub function_name: String,

    #[arg(long = "timeout-secs", env = "ANALYSIS_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    /// Largest image, in MiB, that will be sent for analysis
    #[arg(long = "max-image-mb", env = "ANALYSIS_MAX_IMAGE_MB", default_value_t = 20)]
    pub max_image_mb: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct MealArgs {
    /// Photo of the meal (PNG, JPG or WEBP)
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Ingredients separated by commas or new lines
    #[arg(long)]
    pub ingredients: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ProfileArgs {
    #[arg(long = "user-name", env = "FOODHARMONY_USER_NAME", default_value = "there")]
    pub user_name: String,

    #[arg(long = "medical-conditions", env = "FOODHARMONY_MEDICAL_CONDITIONS", default_value = "")]
    pub medical_conditions: String,

    #[arg(long, env = "FOODHARMONY_RELIGION", default_value = "")]
    pub religion: String,

    #[arg(long = "work-environment", env = "FOODHARMONY_WORK_ENVIRONMENT", default_value = "")]
    pub work_environment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for FoodHarmonyConfig {
    fn from(args: Args) -> Self {
        let service = args.service;

        FoodHarmonyConfig {
            analysis: AnalysisServiceConfig {
                base_url: service.functions_url,
                api_key: service.api_key,
                function_name: service.function_name,
                timeout: Duration::from_secs(service.timeout_secs),
                max_image_size: service.max_image_mb.saturating_mul(1024 * 1024),
            },
        }
    }
}

impl From<&ProfileArgs> for UserProfile {
    fn from(profile: &ProfileArgs) -> Self {
        UserProfile::new(
            profile.medical_conditions.clone(),
            profile.religion.clone(),
            profile.work_environment.clone(),
        )
    }
}

impl From<&MealArgs> for MealInput {
    fn from(meal: &MealArgs) -> Self {
        let mut input = MealInput::new();
        if let Some(path) = &meal.image {
            input.set_image(MealImage::from_path(path));
        }
        if let Some(text) = &meal.ingredients {
            input.set_ingredients_text(text.clone());
        }
        input
    }
}
