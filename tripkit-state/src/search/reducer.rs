//! Search reducer - query/result lifecycle, draft machine, filters
//!
//! Per-search lifecycle: idle -> loading -> (results | error), re-enterable.
//! `Submit` bumps the request generation; a result action whose generation
//! is older than the current one answers a superseded search and is
//! discarded. `DidError` keeps the previous results so the last good list
//! stays visible under the error banner.

use tripkit_core::DispatchResult;

use super::action::SearchAction;
use super::effect::SearchEffect;
use super::state::{DraftStatus, SearchState};

pub fn search_reducer(state: &mut SearchState, action: SearchAction) -> DispatchResult<SearchEffect> {
    match action {
        SearchAction::Submit(query) => {
            state.generation += 1;
            state.query = Some(query.clone());
            state.loading = true;
            state.error = None;
            DispatchResult::changed_with(SearchEffect::Fetch {
                generation: state.generation,
                query,
            })
        }

        SearchAction::SetQuery(query) => {
            state.query = Some(query);
            state.loading = false;
            state.error = None;
            DispatchResult::changed()
        }

        SearchAction::Clear => {
            state.query = None;
            state.offers = None;
            state.loading = false;
            state.error = None;
            DispatchResult::changed()
        }

        SearchAction::SetLoading(loading) => {
            if state.loading == loading {
                return DispatchResult::unchanged();
            }
            state.loading = loading;
            DispatchResult::changed()
        }

        SearchAction::DidLoad { generation, offers } => {
            if generation != state.generation {
                tracing::debug!(
                    stale = generation,
                    current = state.generation,
                    "Discarding results of a superseded search"
                );
                return DispatchResult::unchanged();
            }
            state.offers = Some(offers);
            state.loading = false;
            state.error = None;
            DispatchResult::changed()
        }

        SearchAction::DidError {
            generation,
            message,
        } => {
            if generation != state.generation {
                tracing::debug!(
                    stale = generation,
                    current = state.generation,
                    "Discarding error of a superseded search"
                );
                return DispatchResult::unchanged();
            }
            // Results are kept on purpose: last good list under the banner
            state.error = Some(message);
            state.loading = false;
            DispatchResult::changed()
        }

        SearchAction::DraftHydrateStart => {
            state.draft_status = DraftStatus::Loading;
            DispatchResult::changed()
        }

        SearchAction::DraftHydrateFinish => {
            if state.draft_status != DraftStatus::Loading {
                return DispatchResult::unchanged();
            }
            state.draft_status = DraftStatus::Idle;
            DispatchResult::changed()
        }

        SearchAction::DraftChange(draft) => {
            if state.draft_status == DraftStatus::Loading {
                // Echo of the hydration itself, not user input
                tracing::debug!("Dropping draft change observed during hydration");
                return DispatchResult::unchanged();
            }
            state.draft = Some(draft);
            state.draft_status = DraftStatus::Dirty;
            DispatchResult::changed()
        }

        SearchAction::DraftClear => {
            if state.draft.is_none() && state.draft_status == DraftStatus::Idle {
                return DispatchResult::unchanged();
            }
            state.draft = None;
            state.draft_status = DraftStatus::Idle;
            DispatchResult::changed()
        }

        SearchAction::SetFilters(filters) => {
            state.filters = Some(filters);
            DispatchResult::changed()
        }

        SearchAction::ClearFilters => {
            if state.filters.is_none() {
                return DispatchResult::unchanged();
            }
            state.filters = None;
            DispatchResult::changed()
        }
    }
}
