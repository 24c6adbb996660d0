use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::ListScreenState;
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListScreenState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::ToggleShowAll => ListScreenState {
                showing_all: !state.showing_all,
                ..state
            },
            ListIntent::SelectCategory(selected_category) => ListScreenState {
                selected_category,
                ..state
            },
            ListIntent::EditDraft(draft) => ListScreenState { draft, ..state },
            ListIntent::ItemAdded => ListScreenState {
                draft: String::new(),
                ..state
            },
            // Draft is kept so the user can retry after removing items
            ListIntent::CapacityReached => ListScreenState {
                limit_notice: true,
                ..state
            },
            ListIntent::DismissNotice => ListScreenState {
                limit_notice: false,
                ..state
            },
        }
    }
}
