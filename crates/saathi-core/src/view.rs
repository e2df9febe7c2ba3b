//! Page view state.
//!
//! The landing page is rendered on the server, so the little bits of UI
//! state (which feature tab is active, which FAQ is open, what the waitlist
//! form shows) live in these plain types and travel in query parameters or
//! form posts. None of it is persisted.

use crate::content::{FAQS, SCREENSHOTS, Screenshot};
use crate::error::WaitlistError;

/// Selected tab in the feature showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureTabs {
    active_index: usize,
}

impl FeatureTabs {
    /// Tabs with the first screenshot selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select tab `index`. Out-of-range indices leave the selection as is.
    pub fn select(&mut self, index: usize) {
        if index < SCREENSHOTS.len() {
            self.active_index = index;
        }
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The screenshot for the active tab.
    #[must_use]
    pub fn active(&self) -> &'static Screenshot {
        &SCREENSHOTS[self.active_index]
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active_index == index
    }
}

/// FAQ accordion: at most one answer is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaqAccordion {
    open_index: Option<usize>,
}

impl FaqAccordion {
    /// All questions collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `index`, or close it if it is already open. Out-of-range indices
    /// are ignored.
    pub fn toggle(&mut self, index: usize) {
        *self = self.toggled(index);
    }

    /// The state a click on `index` would produce.
    #[must_use]
    pub fn toggled(&self, index: usize) -> Self {
        if index >= FAQS.len() {
            return *self;
        }
        let open_index = if self.open_index == Some(index) {
            None
        } else {
            Some(index)
        };
        Self { open_index }
    }

    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open_index == Some(index)
    }
}

/// What the waitlist form is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// The last submission was saved.
    Joined,
    /// The last submission was not an email address.
    Invalid,
    /// The last submission could not be saved.
    Failed,
}

impl FormStatus {
    /// Message shown under the form, if any.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Joined => {
                Some("Thank you for joining! We'll notify you when SugarSaathi launches.")
            }
            Self::Invalid => Some("Please enter a valid email address."),
            Self::Failed => Some("Error saving email. Please try again."),
        }
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Invalid | Self::Failed)
    }
}

/// The waitlist form: the input value and the status line below it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WaitlistForm {
    pub email: String,
    pub status: FormStatus,
}

impl WaitlistForm {
    /// Empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form state after submitting `raw`.
    ///
    /// A successful submission clears the input. A failed one keeps exactly
    /// what the user typed so they can fix it or try again.
    #[must_use]
    pub fn after_submit<T>(raw: &str, outcome: &Result<T, WaitlistError>) -> Self {
        match outcome {
            Ok(_) => Self {
                email: String::new(),
                status: FormStatus::Joined,
            },
            Err(WaitlistError::InvalidEmail) => Self {
                email: raw.to_owned(),
                status: FormStatus::Invalid,
            },
            Err(WaitlistError::StoreWrite(_)) => Self {
                email: raw.to_owned(),
                status: FormStatus::Failed,
            },
        }
    }
}

/// Everything the landing page needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LandingView {
    pub tabs: FeatureTabs,
    pub faq: FaqAccordion,
    pub form: WaitlistForm,
}

impl LandingView {
    /// View with the given tab and FAQ selections applied.
    #[must_use]
    pub fn with_selection(feature: Option<usize>, faq: Option<usize>) -> Self {
        let mut view = Self::default();
        if let Some(i) = feature {
            view.tabs.select(i);
        }
        if let Some(i) = faq {
            view.faq.toggle(i);
        }
        view
    }
}
