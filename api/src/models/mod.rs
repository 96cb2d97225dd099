//! # Typed wire models
//!
//! Every entity and request body that crosses the REST boundary, one module
//! per resource. The backend owns all invariants; these structs only pin down
//! the shapes the views render. Fields the backend may omit are `Option` or
//! `#[serde(default)]` so a sparse record (for example a member-list entry)
//! still decodes.
//!
//! | Module | Types |
//! |--------|-------|
//! | [`user`] | `User`, auth/profile request bodies |
//! | [`community`] | `Community`, `CommunityPage`, `MemberList`, `NewCommunity` |
//! | [`project`] | `Project`, `ProjectPage`, `NewProject` |
//! | [`event`] | `Event`, `EventAvailability`, `EventPage`, `AttendeeList`, `NewEvent` |
//! | [`tutorial`] | `Tutorial`, `TutorialPage`, `CategoryList`, `NewTutorial` |
//! | [`post`] | `Post`, `Comment`, their pages and request bodies |
//! | [`message`] | `Message`, `Conversation`, `NewMessage`, unread count |
//! | [`wire`] | the `string_list` codec for JSON-string-encoded array fields |

pub mod community;
pub mod event;
pub mod message;
pub mod post;
pub mod project;
pub mod tutorial;
pub mod user;
pub mod wire;

pub use community::{Community, CommunityPage, MemberList, NewCommunity};
pub use event::{AttendeeList, Event, EventAvailability, EventPage, NewEvent};
pub use message::{Conversation, ConversationList, Message, MessagePage, NewMessage, UnreadCount};
pub use post::{Comment, CommentList, NewComment, NewPost, Post, PostPage};
pub use project::{NewProject, Project, ProjectPage};
pub use tutorial::{CategoryList, NewTutorial, Tutorial, TutorialPage};
pub use user::{
    AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest, User,
};

/// Single-page default for list envelopes that omit `pages` (the per-user
/// membership lists are unpaginated).
pub(crate) fn default_pages() -> u32 {
    1
}
