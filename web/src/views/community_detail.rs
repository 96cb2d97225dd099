//! Community detail: header with join/leave, member roster, and the post feed
//! with likes and comments.

use api::{Comment, Community, NewComment, NewPost, Post, User};
use dioxus::prelude::*;
use ui::{use_auth, EmptyState, ErrorBanner, Pagination};

use super::{format_date, format_datetime};
use crate::guards::{PageSpinner, RequireAuth};
use crate::Route;

#[component]
pub fn CommunityDetail(id: u64) -> Element {
    rsx! {
        RequireAuth {
            CommunityDetailPage { id }
        }
    }
}

#[component]
fn CommunityDetailPage(id: u64) -> Element {
    let auth = use_auth();
    let mut community = use_signal(|| Option::<Community>::None);
    let mut members = use_signal(Vec::<User>::new);
    let mut not_found = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);
    // Bumped after join/leave so the loader refetches both pieces.
    let mut reload = use_signal(|| 0u32);

    let _loader = use_resource(move || async move {
        reload();
        error.set(None);
        match api::communities::get(id).await {
            Ok(found) => {
                community.set(Some(found));
                not_found.set(false);
            }
            Err(err) if err.is_not_found() => {
                not_found.set(true);
                return;
            }
            Err(err) => {
                tracing::error!("failed to load community {id}: {err}");
                error.set(Some(err.to_string()));
                return;
            }
        }
        match api::communities::members(id).await {
            Ok(roster) => members.set(roster.members),
            Err(err) => tracing::warn!("failed to load members for community {id}: {err}"),
        }
    });

    let user_id = auth().user_id();
    let is_member = members().iter().any(|member| Some(member.id) == user_id);

    let mut toggle_membership = move |joining: bool| {
        spawn(async move {
            busy.set(true);
            error.set(None);
            let result = if joining {
                api::communities::join(id).await
            } else {
                api::communities::leave(id).await
            };
            match result {
                Ok(()) => reload += 1,
                Err(err) => {
                    tracing::error!("membership change failed: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            busy.set(false);
        });
    };

    if not_found() {
        return rsx! {
            div {
                class: "page",
                EmptyState {
                    title: "Community not found",
                    hint: "It may have been deleted",
                }
                Link { to: Route::Communities {}, class: "button secondary", "Back to communities" }
            }
        };
    }

    let Some(community) = community() else {
        return rsx! {
            PageSpinner {}
        };
    };
    let description = community
        .description
        .clone()
        .unwrap_or_else(|| "No description yet".to_string());

    rsx! {
        div {
            class: "page detail-page",
            div {
                class: "detail-header",
                div {
                    h1 { "{community.name}" }
                    if let Some(category) = community.category.as_ref() {
                        span { class: "badge", "{category}" }
                    }
                    p { class: "card-description", "{description}" }
                    div {
                        class: "card-meta",
                        span { "{community.members_count} members" }
                        span { "Created {format_date(community.created_at)}" }
                    }
                }
                if is_member {
                    button {
                        class: "secondary",
                        disabled: busy(),
                        onclick: move |_| toggle_membership(false),
                        "Leave"
                    }
                } else {
                    button {
                        class: "primary",
                        disabled: busy(),
                        onclick: move |_| toggle_membership(true),
                        "Join"
                    }
                }
            }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            div {
                class: "detail-columns",
                div {
                    class: "detail-main",
                    PostFeed { community_id: id, can_post: is_member }
                }
                aside {
                    class: "detail-side",
                    h2 { "Members" }
                    if members().is_empty() {
                        p { class: "muted", "No members yet" }
                    } else {
                        ul {
                            class: "member-list",
                            for member in members() {
                                li { key: "{member.id}", "{member.display_name()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PostFeed(community_id: u64, can_post: bool) -> Element {
    let mut posts = use_signal(Vec::<Post>::new);
    let mut pages = use_signal(|| 1u32);
    let mut page = use_signal(|| 1u32);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut draft = use_signal(String::new);
    let mut posting = use_signal(|| false);
    let mut reload = use_signal(|| 0u32);

    let _loader = use_resource(move || async move {
        reload();
        loading.set(true);
        match api::posts::list(community_id, page()).await {
            Ok(feed) => {
                posts.set(feed.posts);
                pages.set(feed.pages);
                error.set(None);
            }
            Err(err) => {
                tracing::error!("failed to load posts: {err}");
                error.set(Some(err.to_string()));
            }
        }
        loading.set(false);
    });

    let handle_post = move |_| {
        let content = draft().trim().to_string();
        if content.is_empty() {
            return;
        }
        spawn(async move {
            posting.set(true);
            let request = NewPost {
                community_id,
                content,
                image_url: None,
            };
            match api::posts::create(&request).await {
                Ok(_) => {
                    draft.set(String::new());
                    page.set(1);
                    reload += 1;
                }
                Err(err) => {
                    tracing::error!("failed to create post: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            posting.set(false);
        });
    };

    rsx! {
        div {
            class: "post-feed",
            h2 { "Posts" }

            if can_post {
                div {
                    class: "post-composer",
                    textarea {
                        rows: 3,
                        placeholder: "Share something with the community...",
                        value: draft(),
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    button {
                        class: "primary",
                        disabled: draft().trim().is_empty() || posting(),
                        onclick: handle_post,
                        if posting() { "Posting..." } else { "Post" }
                    }
                }
            } else {
                p { class: "muted", "Join the community to post" }
            }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            if loading() {
                PageSpinner {}
            } else if posts().is_empty() {
                EmptyState {
                    title: "No posts yet",
                    hint: "Start the conversation",
                }
            } else {
                for post in posts() {
                    PostCard {
                        key: "{post.id}",
                        post,
                        on_changed: move |_| reload += 1,
                    }
                }
            }

            Pagination {
                page: page(),
                pages: pages(),
                on_change: move |next| page.set(next),
            }
        }
    }
}

#[component]
fn PostCard(post: Post, on_changed: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut show_comments = use_signal(|| false);
    let mut comments = use_signal(Vec::<Comment>::new);
    let mut comment_draft = use_signal(String::new);
    let mut comment_reload = use_signal(|| 0u32);

    let post_id = post.id;
    let is_author = auth().user_id() == Some(post.author.id);

    // Comments load lazily, only once the thread is opened.
    let _comments_loader = use_resource(move || async move {
        comment_reload();
        if !show_comments() {
            return;
        }
        match api::posts::comments(post_id).await {
            Ok(list) => comments.set(list.comments),
            Err(err) => tracing::warn!("failed to load comments for post {post_id}: {err}"),
        }
    });

    let handle_like = move |_| {
        spawn(async move {
            match api::posts::like(post_id).await {
                Ok(()) => on_changed.call(()),
                Err(err) => tracing::error!("failed to toggle like: {err}"),
            }
        });
    };

    let handle_delete = move |_| {
        spawn(async move {
            match api::posts::delete(post_id).await {
                Ok(()) => on_changed.call(()),
                Err(err) => tracing::error!("failed to delete post: {err}"),
            }
        });
    };

    let handle_comment = move |_| {
        let content = comment_draft().trim().to_string();
        if content.is_empty() {
            return;
        }
        spawn(async move {
            let request = NewComment { content };
            match api::posts::create_comment(post_id, &request).await {
                Ok(_) => {
                    comment_draft.set(String::new());
                    comment_reload += 1;
                    on_changed.call(());
                }
                Err(err) => tracing::error!("failed to comment: {err}"),
            }
        });
    };

    rsx! {
        article {
            class: "post-card",
            header {
                class: "post-header",
                strong { "{post.author.display_name()}" }
                span { class: "muted", "{format_datetime(post.created_at)}" }
            }
            p { class: "post-content", "{post.content}" }
            footer {
                class: "post-actions",
                button {
                    class: "link-button",
                    onclick: handle_like,
                    "♥ {post.likes_count}"
                }
                button {
                    class: "link-button",
                    onclick: move |_| show_comments.toggle(),
                    "💬 {post.comments_count}"
                }
                if is_author {
                    button {
                        class: "link-button danger",
                        onclick: handle_delete,
                        "Delete"
                    }
                }
            }

            if show_comments() {
                div {
                    class: "comment-thread",
                    for comment in comments() {
                        CommentRow {
                            key: "{comment.id}",
                            comment,
                            on_deleted: move |_| {
                                comment_reload += 1;
                                on_changed.call(());
                            },
                        }
                    }
                    div {
                        class: "comment-composer",
                        input {
                            r#type: "text",
                            placeholder: "Write a comment...",
                            value: comment_draft(),
                            oninput: move |evt| comment_draft.set(evt.value()),
                            onkeypress: move |evt| {
                                if evt.key() == Key::Enter {
                                    handle_comment(());
                                }
                            },
                        }
                        button {
                            class: "secondary",
                            disabled: comment_draft().trim().is_empty(),
                            onclick: move |_| handle_comment(()),
                            "Reply"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CommentRow(comment: Comment, on_deleted: EventHandler<()>) -> Element {
    let auth = use_auth();
    let comment_id = comment.id;
    let is_author = auth().user_id() == Some(comment.author.id);

    let handle_delete = move |_| {
        spawn(async move {
            match api::posts::delete_comment(comment_id).await {
                Ok(()) => on_deleted.call(()),
                Err(err) => tracing::error!("failed to delete comment: {err}"),
            }
        });
    };

    rsx! {
        div {
            class: "comment-row",
            strong { "{comment.author.display_name()}" }
            span { "{comment.content}" }
            if is_author {
                button {
                    class: "link-button danger",
                    onclick: handle_delete,
                    "Delete"
                }
            }
        }
    }
}
