//! Render controller
//!
//! Owns the results `ViewState` and the view sink. A cycle starts with
//! `begin` (clear, show loading) and ends with `complete` (hide loading, then
//! cards, empty notice or error). `submit` runs both halves around one
//! provider call.
//!
//! Overlapping cycles are not guarded: whichever completion is applied last
//! decides what the view shows.

use std::sync::Arc;

use tracing::Instrument;

use crate::{
    error::AppResult,
    models::{DisplayCard, RecommendationQuery, ViewState},
    services::{RecommendationOutcome, RecommendationProvider},
    view::ResultsView,
};

pub mod submission;

pub use submission::{Submission, SubmissionId};

pub struct RenderController<V: ResultsView> {
    provider: Arc<dyn RecommendationProvider>,
    view: V,
    state: ViewState,
}

impl<V: ResultsView> RenderController<V> {
    pub fn new(provider: Arc<dyn RecommendationProvider>, view: V) -> Self {
        Self {
            provider,
            view,
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Runs one full request cycle for `query_text`
    pub async fn submit(&mut self, query_text: &str) -> &ViewState {
        let submission = self.begin(query_text);

        let outcome = self
            .provider
            .fetch_recommendations(&submission.query)
            .instrument(submission.span())
            .await;

        self.complete(&submission, outcome)
    }

    /// Enters `Loading`: clears prior results and shows the loading indicator
    pub fn begin(&mut self, query_text: &str) -> Submission {
        let submission = Submission::new(RecommendationQuery::new(query_text));

        self.view.clear();
        self.view.show_loading();
        self.view.commit();
        self.state = ViewState::Loading;

        tracing::info!(
            submission_id = %submission.id,
            query = %submission.query,
            provider = self.provider.name(),
            "Recommendation request started"
        );

        submission
    }

    /// Leaves `Loading` with the outcome of `submission`
    pub fn complete(
        &mut self,
        submission: &Submission,
        outcome: AppResult<RecommendationOutcome>,
    ) -> &ViewState {
        let _span = submission.span().entered();

        if !self.state.is_loading() {
            tracing::debug!(
                state = self.state.name(),
                "Late completion overwrites a settled view"
            );
        }

        self.view.hide_loading();
        self.view.clear();

        self.state = match outcome {
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(error = %message, "Recommendation request failed");
                self.view.show_error(&message);
                ViewState::Failed(message)
            }
            Ok(RecommendationOutcome::Empty(response)) => {
                tracing::info!(input = %response.input, "No recommendations returned");
                self.view.show_empty();
                ViewState::Empty
            }
            Ok(RecommendationOutcome::Found(response)) => {
                let cards: Vec<DisplayCard> = response
                    .recommendations
                    .iter()
                    .map(DisplayCard::from)
                    .collect();

                for card in &cards {
                    self.view.append_card(card);
                }
                self.view.scroll_to_results();

                tracing::info!(
                    input = %response.input,
                    cards = cards.len(),
                    "Recommendations rendered"
                );
                ViewState::Populated(cards)
            }
        };

        self.view.commit();
        &self.state
    }
}
