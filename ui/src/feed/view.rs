//! The live feed: one card holding every rendered toot.

use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use crate::core::format;

use super::{
    AttachmentKind, FeedClient, FeedEvent, FeedState, FeedSynchronizer, MediaAttachment, Post,
};

/// Fixed id of the feed container, part of the page's DOM contract.
pub const FEED_CONTAINER_ID: &str = "liveToots";

/// Profile links resolve through the home instance.
const HOME_INSTANCE: &str = "https://mastodon.social/";

/// Owns the feed state and the polling schedule. Mounting starts the first
/// fetch pass immediately; unmounting stops the schedule.
#[component]
pub fn LiveFeed() -> Element {
    let mut feed = use_signal(FeedState::default);

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<FeedEvent>| async move {
        while let Some(event) = rx.next().await {
            match event {
                FeedEvent::Loaded(posts) => {
                    feed.with_mut(|state| state.absorb(posts));
                }
                FeedEvent::Failed(reason) => {
                    // Diagnostic channel only: the feed keeps whatever it
                    // already shows and the next tick proceeds as scheduled.
                    tracing::error!("feed pass failed: {reason}");
                    feed.with_mut(FeedState::note_failure);
                }
            }
        }
    });

    let synchronizer = use_hook(|| {
        let synchronizer = Rc::new(FeedSynchronizer::new(FeedClient::default()));
        synchronizer.start(coroutine.tx());
        synchronizer
    });
    use_drop(move || synchronizer.stop());

    let state = feed();

    rsx! {
        section { class: "feed-card",
            div { class: "feed-card__header",
                h2 { "Live toots" }
                if !state.posts.is_empty() {
                    span { class: "feed-card__meta", "{state.posts.len()} shown" }
                }
            }

            if state.posts.is_empty() {
                p { class: "feed-card__placeholder",
                    "Toots will appear here as soon as the first fetch lands."
                }
            }

            div { id: FEED_CONTAINER_ID, class: "feed-card__items",
                for (index, post) in state.posts.iter().enumerate() {
                    Toot { key: "{index}", post: post.clone() }
                }
            }
        }
    }
}

/// One rendered toot: author links, fixed-format timestamp, body text,
/// attachments and the source link. Body and author fields are inserted as
/// text after markup stripping; nothing from the server reaches the DOM as
/// raw HTML.
#[component]
pub fn Toot(post: Post) -> Element {
    let handle = post.handle();
    let profile_url = format!("{HOME_INSTANCE}@{handle}");
    let display_name = if post.account.display_name.is_empty() {
        post.account.username.clone()
    } else {
        post.account.display_name.clone()
    };
    let timestamp = format::format_timestamp(&post.created_at);
    let content = format::strip_markup(&post.content);

    rsx! {
        article { class: "toot",
            div { class: "toot__avatar",
                a {
                    href: "{profile_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    img { src: "{post.account.avatar}", alt: "{display_name}" }
                }
            }
            div { class: "toot__name",
                a {
                    href: "{profile_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{display_name}"
                }
            }
            div { class: "toot__date", "{timestamp}" }
            div { class: "toot__content",
                p { "{content}" }
                div { class: "toot__media",
                    for (index, media) in post.visible_attachments().iter().enumerate() {
                        {render_attachment(media, index)}
                    }
                }
                div { class: "toot__source",
                    a {
                        href: "{post.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "View on Mastodon",
                        "View on Mastodon"
                    }
                }
            }
        }
    }
}

fn render_attachment(media: &MediaAttachment, index: usize) -> Element {
    match media.kind {
        AttachmentKind::Image => rsx! {
            img { key: "{index}", class: "toot__media-item", src: "{media.preview_url}" }
        },
        AttachmentKind::Video => rsx! {
            video {
                key: "{index}",
                class: "toot__media-item",
                controls: true,
                src: "{media.preview_url}",
            }
        },
        AttachmentKind::Other => rsx! {
            a {
                key: "{index}",
                class: "toot__media-item",
                href: "{media.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "Attachment"
            }
        },
    }
}
