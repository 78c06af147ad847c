use std::process::ExitCode;
use std::sync::Arc;

use foodharmony_core::{
    application::create_service,
    domain::{
        common::FoodHarmonyConfig,
        meal_analysis::{
            entities::{MealInput, UserProfile},
            render::AnalysisView,
        },
    },
};
use tracing::{debug, info};

use crate::{
    application::{notifier::TerminalNotifier, render::render_text},
    args::{Args, OutputFormat},
};

pub mod notifier;
pub mod render;

/// Runs a single meal analysis and prints the outcome.
pub async fn run(args: Arc<Args>) -> Result<ExitCode, anyhow::Error> {
    let config = FoodHarmonyConfig::from(args.as_ref().clone());
    let service = create_service(config, TerminalNotifier::stderr())?;

    let input = MealInput::from(&args.meal);
    let profile = UserProfile::from(&args.profile);

    eprintln!("Welcome, {}!", args.profile.user_name);

    match input.preview().await {
        Ok(Some(preview)) => debug!(
            mime_type = preview_mime_type(preview).unwrap_or("unknown"),
            encoded_len = preview.len(),
            "Image preview ready"
        ),
        Ok(None) => {}
        Err(e) => debug!("Image preview unavailable: {}", e),
    }

    let control = service.submit_control(&input);
    if !control.enabled {
        eprintln!("Provide --image or --ingredients to analyze a meal.");
        return Ok(ExitCode::from(2));
    }

    info!(
        has_image = input.image().is_some(),
        has_ingredients = input.ingredients().is_some(),
        "{}",
        control.label
    );

    let result = match service.submit(&input, &profile).await {
        Ok(result) => result,
        Err(e) => {
            debug!("Analysis attempt ended with {:?}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    match args.output.format {
        OutputFormat::Text => print!("{}", render_text(&AnalysisView::from(&result))),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(ExitCode::SUCCESS)
}

fn preview_mime_type(data_uri: &str) -> Option<&str> {
    data_uri
        .strip_prefix("data:")?
        .split_once(';')
        .map(|(mime_type, _)| mime_type)
}
