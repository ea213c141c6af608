use dioxus::prelude::*;

/// What a view failed to do, as shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Load,
    Save,
    Search,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Load => "Couldn't load citation formats.",
            ViewError::Save => "Save failed",
            ViewError::Search => "Style search is unavailable.",
        }
    }
}

/// Render-time snapshot of an async resource.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Loading,
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

/// Background persistence status of the formats list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Saving,
    Saved,
    Error(ViewError),
}

impl SaveState {
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            SaveState::Idle => None,
            SaveState::Saving => Some("Saving..."),
            SaveState::Saved => Some("Saved"),
            SaveState::Error(err) => Some(err.message()),
        }
    }
}
