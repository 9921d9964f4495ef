//! Resolution session: a small state machine driven by user input.
//!
//! ```text
//! Idle --start(non-empty)--> AwaitingValue(food, queue)
//! AwaitingValue --submit(valid), queue non-empty--> AwaitingValue(next, ...)
//! AwaitingValue --submit(valid), queue empty--> Resolved --> Idle
//! AwaitingValue --cancel--> Cancelled --> Idle
//! ```
//!
//! Every accepted value is learned immediately. Cancelling never rolls back
//! foods already learned in the same session.

use std::collections::VecDeque;

use tracing::{info, warn};

use crate::types::{Cancelled, ResolutionState, SubmitOutcome};
use platelog_core::{Error, Result};
use platelog_estimate::dictionary::is_valid_calories;
use platelog_estimate::MealEstimator;
use platelog_store::MealTexts;

/// Drives the unknown-food prompts for one estimation run.
pub struct ResolutionSession {
    estimator: MealEstimator,
    state: ResolutionState,
    /// Meal texts to re-estimate once every food is resolved.
    context: Option<MealTexts>,
}

impl ResolutionSession {
    pub fn new(estimator: MealEstimator) -> Self {
        Self {
            estimator,
            state: ResolutionState::Idle,
            context: None,
        }
    }

    pub fn state(&self) -> &ResolutionState {
        &self.state
    }

    pub fn estimator(&self) -> &MealEstimator {
        &self.estimator
    }

    /// Food currently waiting for a value.
    pub fn current_food(&self) -> Option<&str> {
        match &self.state {
            ResolutionState::AwaitingValue { current, .. } => Some(current),
            ResolutionState::Idle => None,
        }
    }

    /// Foods still waiting, including the current one.
    pub fn pending(&self) -> usize {
        match &self.state {
            ResolutionState::AwaitingValue { queue, .. } => queue.len() + 1,
            ResolutionState::Idle => 0,
        }
    }

    /// Question to show for the current food.
    pub fn prompt(&self) -> Option<String> {
        self.current_food().map(|food| {
            format!(
                "Je ne connais pas encore « {} ». Combien de calories pour 1 portion ?",
                food
            )
        })
    }

    /// Begin resolving `unknown_foods` for `meals`.
    ///
    /// An empty list leaves the session untouched. Starting over an active
    /// session replaces it; values already learned stay learned.
    pub fn start(&mut self, meals: MealTexts, unknown_foods: Vec<String>) -> Option<&str> {
        let mut queue: VecDeque<String> = VecDeque::with_capacity(unknown_foods.len());
        for food in unknown_foods {
            if !queue.contains(&food) {
                queue.push_back(food);
            }
        }
        let current = queue.pop_front()?;

        if let ResolutionState::AwaitingValue { current: old, .. } = &self.state {
            warn!("Replacing resolution session still waiting on {:?}", old);
        }
        info!("Resolving {} unknown foods", queue.len() + 1);

        self.context = Some(meals);
        self.state = ResolutionState::AwaitingValue { current, queue };
        self.current_food()
    }

    /// Give the calories per portion for the current food.
    ///
    /// A non-positive or non-finite value is rejected with
    /// [`Error::InvalidCalories`] and nothing changes, so the caller can ask
    /// again. When the last food is learned the stored meals are estimated
    /// again without collecting unknowns and the session goes back to idle.
    pub fn submit(&mut self, calories_per_portion: f64) -> Result<SubmitOutcome> {
        let current = match &self.state {
            ResolutionState::AwaitingValue { current, .. } => current.clone(),
            ResolutionState::Idle => {
                return Err(Error::InvalidState("no food is awaiting a value".into()))
            }
        };
        if !is_valid_calories(calories_per_portion) {
            return Err(Error::InvalidCalories(calories_per_portion));
        }

        self.estimator.dictionary().learn(&current, calories_per_portion)?;

        let next = match &mut self.state {
            ResolutionState::AwaitingValue { current, queue } => queue.pop_front().map(|next| {
                *current = next.clone();
                next
            }),
            ResolutionState::Idle => None,
        };
        if let Some(next) = next {
            return Ok(SubmitOutcome::Next(next));
        }

        self.state = ResolutionState::Idle;
        let meals = self.context.take().unwrap_or_default();
        let result = self.estimator.estimate(&meals, false)?;
        info!("All foods resolved, total {} kcal", result.rounded_total());
        Ok(SubmitOutcome::Resolved(result))
    }

    /// Drop the remaining foods and the estimation context.
    pub fn cancel(&mut self) -> Result<Cancelled> {
        match std::mem::replace(&mut self.state, ResolutionState::Idle) {
            ResolutionState::AwaitingValue { current, queue } => {
                self.context = None;
                let mut discarded = vec![current];
                discarded.extend(queue);
                info!("Resolution cancelled, {} foods left unresolved", discarded.len());
                Ok(Cancelled { discarded })
            }
            ResolutionState::Idle => Err(Error::InvalidState("nothing to cancel".into())),
        }
    }
}
