use tokio::sync::watch;
use tracing::instrument;

use crate::domain::{
    common::{DEFAULT_MAX_IMAGE_SIZE, entities::app_errors::CoreError, generate_uuid_v7},
    meal_analysis::{
        entities::{AnalysisResult, AttemptState, MealInput, UserProfile},
        ports::{AnalysisClient, Notifier},
        schema::decode_analysis_response,
        value_objects::{SUCCESS_MESSAGE, SubmitControl},
    },
};

/// Owns the lifecycle of the current meal analysis attempt.
///
/// `submit` is the only way the state changes. At most one attempt is in
/// flight; a new attempt wipes the previous result or error before the
/// remote call is made.
pub struct AnalysisOrchestrator<A, N>
where
    A: AnalysisClient,
    N: Notifier,
{
    client: A,
    notifier: N,
    state: watch::Sender<AttemptState>,
    max_image_size: usize,
}

impl<A, N> AnalysisOrchestrator<A, N>
where
    A: AnalysisClient,
    N: Notifier,
{
    pub fn new(client: A, notifier: N) -> Self {
        let (state, _) = watch::channel(AttemptState::Idle);

        Self {
            client,
            notifier,
            state,
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
        }
    }

    pub fn with_max_image_size(mut self, max_image_size: usize) -> Self {
        self.max_image_size = max_image_size;
        self
    }

    pub fn state(&self) -> AttemptState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<AttemptState> {
        self.state.subscribe()
    }

    pub fn submit_control(&self, input: &MealInput) -> SubmitControl {
        SubmitControl::for_input(input, &self.state.borrow())
    }

    /// Runs one analysis attempt.
    ///
    /// Returns `AlreadySubmitting` without touching the state when another
    /// attempt is still in flight. Every other failure ends in `Failed` and
    /// raises exactly one error notification.
    #[instrument(skip_all, fields(attempt_id = %generate_uuid_v7()))]
    pub async fn submit(
        &self,
        input: &MealInput,
        profile: &UserProfile,
    ) -> Result<AnalysisResult, CoreError> {
        let started = self.state.send_if_modified(|state| {
            if state.is_submitting() {
                return false;
            }
            *state = AttemptState::Submitting;
            true
        });

        if !started {
            tracing::warn!(
                state = self.state.borrow().as_str(),
                "Ignoring meal analysis submission while another is in flight"
            );
            return Err(CoreError::AlreadySubmitting);
        }

        tracing::info!("Meal analysis submitted");

        match self.run_attempt(input, profile).await {
            Ok(result) => {
                self.finish(AttemptState::Succeeded(result.clone()));
                tracing::info!(
                    detected_foods = result.detected_foods.len(),
                    dangerous_combinations = result.dangerous_combinations.len(),
                    "Meal analysis succeeded"
                );
                self.notifier.notify_success(SUCCESS_MESSAGE);
                Ok(result)
            }
            Err(e) => {
                let message = e.user_message();
                tracing::error!("Meal analysis failed: {}", message);
                self.finish(AttemptState::Failed(message.clone()));
                self.notifier.notify_error(&message);
                Err(e)
            }
        }
    }

    fn finish(&self, outcome: AttemptState) {
        tracing::debug!(state = outcome.as_str(), "Meal analysis attempt finished");
        self.state.send_replace(outcome);
    }

    async fn run_attempt(
        &self,
        input: &MealInput,
        profile: &UserProfile,
    ) -> Result<AnalysisResult, CoreError> {
        let request = input.build_request(profile, self.max_image_size).await?;
        let body = self.client.analyze_meal(request).await?;
        decode_analysis_response(&body)
    }
}
