//! This crate contains the shared UI for the workspace: the session store and
//! the widgets every resource view composes.

mod auth;
pub use auth::{
    refresh_user, sign_in, sign_out, sign_up, use_auth, AuthProvider, AuthState, GuardDecision,
};

mod widgets;
pub use widgets::{EmptyState, ErrorBanner, LoadingCards, ModalOverlay, Pagination};
