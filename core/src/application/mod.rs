use crate::{
    domain::{
        common::{FoodHarmonyConfig, entities::app_errors::CoreError},
        meal_analysis::{ports::Notifier, services::AnalysisOrchestrator},
    },
    infrastructure::analysis::FunctionsAnalysisClient,
};

pub type FoodHarmonyService<N> = AnalysisOrchestrator<FunctionsAnalysisClient, N>;

/// Wires the orchestrator to the hosted analysis function.
pub fn create_service<N>(
    config: FoodHarmonyConfig,
    notifier: N,
) -> Result<FoodHarmonyService<N>, CoreError>
where
    N: Notifier,
{
    let max_image_size = config.analysis.max_image_size;
    let client = FunctionsAnalysisClient::new(config.analysis)?;
    Ok(AnalysisOrchestrator::new(client, notifier).with_max_image_size(max_image_size))
}
