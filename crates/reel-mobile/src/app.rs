//! Application shell for the mobile app.
//!
//! One `AppShell` component owns every signal; the per-screen markup lives
//! in `views/` fragments pulled in with `include!` so they share this scope.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::label::Label;
use dioxus_primitives::scroll_area::{ScrollArea, ScrollDirection, ScrollType};
use dioxus_primitives::separator::Separator;
use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};
use reel_core::store::{BookmarkStore, Collection};
use reel_core::{ListId, NewVideo, Platform, SelectionSet, Video, VideoId, VideoList};

use crate::auth::{AuthErrorKind, AuthSession, SignUpOutcome, SupabaseAuthService};
use crate::data::open_default_store;
use crate::ui::{ButtonVariant, UiButton, UiInput, UiTextarea, MOBILE_UI_STYLES};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Login,
    Videos,
    Lists,
    ListDetail,
    Account,
    Player,
}

const SUBSCRIPTION_RETRY_MILLIS: u64 = 500;
const TOAST_STYLES: &str = r#"
.toast-container {
    position: fixed;
    inset: auto 12px 12px 12px;
    z-index: 9999;
    pointer-events: none;
}
.toast-list {
    margin: 0;
    padding: 0;
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 8px;
}
.toast {
    pointer-events: auto;
    border-radius: 10px;
    border: 1px solid #d1d5db;
    background: #ffffff;
    box-shadow: 0 10px 30px rgba(17, 24, 39, 0.12);
    padding: 10px 12px;
    color: #111827;
    display: flex;
    gap: 10px;
    align-items: flex-start;
}
.toast[data-type='success'] { border-color: #16a34a; }
.toast[data-type='error'] { border-color: #ef4444; }
.toast[data-type='warning'] { border-color: #f59e0b; }
.toast[data-type='info'] { border-color: #3b82f6; }
.toast-content { flex: 1; }
.toast-title { font-size: 13px; font-weight: 700; }
.toast-description { font-size: 12px; color: #4b5563; margin-top: 2px; }
.toast-close {
    border: 0;
    background: transparent;
    color: #6b7280;
    font-size: 16px;
    line-height: 1;
    padding: 0;
}
"#;

#[component]
pub fn App() -> Element {
    rsx! {
        ToastProvider {
            AppShell {}
        }
    }
}

#[component]
fn AppShell() -> Element {
    let mut store = use_signal(|| None::<BookmarkStore>);
    let mut auth_service = use_signal(|| None::<Arc<SupabaseAuthService>>);
    let mut session = use_signal(|| None::<AuthSession>);
    let mut screen = use_signal(|| Screen::Login);
    let mut videos = use_signal(Vec::<Video>::new);
    let mut lists = use_signal(Vec::<VideoList>::new);
    let mut detail_list = use_signal(|| None::<VideoList>);
    let mut detail_videos = use_signal(Vec::<Video>::new);
    let mut playing_video = use_signal(|| None::<Video>);
    let mut player_return = use_signal(|| Screen::Videos);
    let mut selection = use_signal(SelectionSet::new);
    let mut list_title_input = use_signal(String::new);
    let mut title_input = use_signal(String::new);
    let mut description_input = use_signal(String::new);
    let mut url_input = use_signal(String::new);
    let mut platform_input = use_signal(|| Platform::YouTube);
    let mut auth_email_input = use_signal(String::new);
    let mut auth_password_input = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);
    let mut status_message = use_signal(|| None::<String>);
    let mut confirm_delete_list = use_signal(|| None::<ListId>);
    let mut confirm_delete_video = use_signal(|| None::<VideoId>);
    let toasts = use_toast();

    // Startup: open the store, restore any persisted session, load data.
    use_future(move || async move {
        match SupabaseAuthService::new_from_env() {
            Ok(Some(service)) => {
                let service = Arc::new(service);
                match service.restore_session().await {
                    Ok(Some(restored)) => {
                        session.set(Some(restored));
                        screen.set(Screen::Videos);
                    }
                    Ok(None) => {}
                    Err(error) => {
                        tracing::warn!("Failed to restore auth session: {}", error);
                        status_message.set(Some(format!("Session restore failed: {error}")));
                    }
                }
                auth_service.set(Some(service));
            }
            Ok(None) => {
                status_message.set(Some(
                    "Auth is not configured (set SUPABASE_URL and SUPABASE_ANON_KEY)".to_string(),
                ));
            }
            Err(error) => {
                status_message.set(Some(format!("Auth is misconfigured: {error}")));
            }
        }

        match open_default_store().await {
            Ok(bookmark_store) => {
                if bookmark_store.is_sync_enabled().await {
                    if let Err(error) = bookmark_store.sync().await {
                        tracing::error!("Initial mobile sync failed: {}", error);
                        toasts.error(
                            "Initial sync failed".to_string(),
                            ToastOptions::new()
                                .description("Changes will keep retrying in the background"),
                        );
                    }
                }

                if let Some(user_id) = session().map(|active| active.user.id) {
                    refresh_videos(&bookmark_store, &user_id, &mut videos, &mut status_message)
                        .await;
                    refresh_lists(&bookmark_store, &user_id, &mut lists, &mut status_message).await;
                }
                store.set(Some(bookmark_store));
            }
            Err(error) => {
                status_message.set(Some(format!("Failed to open database: {error}")));
            }
        }

        loading.set(false);
    });

    // Live feed: refetch videos whenever this user's videos collection
    // changes. The subscription only wakes for the user it was opened for,
    // so the wait is bounded and the session re-checked on every lap; when
    // someone else signs in, the stale subscription is dropped and a fresh
    // one opened under the new user id.
    use_future(move || async move {
        loop {
            let Some(bookmark_store) = store() else {
                tokio::time::sleep(Duration::from_millis(SUBSCRIPTION_RETRY_MILLIS)).await;
                continue;
            };
            let Some(user_id) = session().map(|active| active.user.id) else {
                tokio::time::sleep(Duration::from_millis(SUBSCRIPTION_RETRY_MILLIS)).await;
                continue;
            };

            let mut subscription = bookmark_store.subscribe(&user_id, Collection::Videos);
            refresh_videos(&bookmark_store, &user_id, &mut videos, &mut status_message).await;

            loop {
                let woke = tokio::time::timeout(
                    Duration::from_millis(SUBSCRIPTION_RETRY_MILLIS),
                    subscription.changed(),
                )
                .await;

                if session().map(|active| active.user.id) != Some(user_id.clone()) {
                    break;
                }

                match woke {
                    Ok(false) => return,
                    Err(_) => continue,
                    Ok(true) => {}
                }

                refresh_videos(&bookmark_store, &user_id, &mut videos, &mut status_message).await;
                if let Some(open_list) = detail_list() {
                    refresh_detail(
                        &bookmark_store,
                        &user_id,
                        &open_list.id,
                        &mut detail_videos,
                        &mut status_message,
                    )
                    .await;
                }
            }
        }
    });

    // Live feed for the lists collection, same session-aware shape.
    use_future(move || async move {
        loop {
            let Some(bookmark_store) = store() else {
                tokio::time::sleep(Duration::from_millis(SUBSCRIPTION_RETRY_MILLIS)).await;
                continue;
            };
            let Some(user_id) = session().map(|active| active.user.id) else {
                tokio::time::sleep(Duration::from_millis(SUBSCRIPTION_RETRY_MILLIS)).await;
                continue;
            };

            let mut subscription = bookmark_store.subscribe(&user_id, Collection::Lists);
            refresh_lists(&bookmark_store, &user_id, &mut lists, &mut status_message).await;

            loop {
                let woke = tokio::time::timeout(
                    Duration::from_millis(SUBSCRIPTION_RETRY_MILLIS),
                    subscription.changed(),
                )
                .await;

                if session().map(|active| active.user.id) != Some(user_id.clone()) {
                    break;
                }

                match woke {
                    Ok(true) => {
                        refresh_lists(&bookmark_store, &user_id, &mut lists, &mut status_message)
                            .await;
                    }
                    Ok(false) => return,
                    Err(_) => {}
                }
            }
        }
    });

    let on_sign_in = move |_| {
        let service = auth_service();
        spawn(async move {
            let Some(service) = service else {
                toasts.error(
                    "Authentication Failed".to_string(),
                    ToastOptions::new().description("Auth is not configured for this build"),
                );
                return;
            };

            let email = auth_email_input();
            let password = auth_password_input();
            match service.sign_in(email.trim(), &password).await {
                Ok(new_session) => {
                    auth_password_input.set(String::new());
                    session.set(Some(new_session));
                    screen.set(Screen::Videos);
                }
                Err(error) => {
                    let kind = AuthErrorKind::classify(&error);
                    toasts.error(
                        kind.headline().to_string(),
                        ToastOptions::new().description(kind.body(&error)),
                    );
                }
            }
        });
    };

    let on_sign_up = move |_| {
        let service = auth_service();
        spawn(async move {
            let Some(service) = service else {
                toasts.error(
                    "Authentication Failed".to_string(),
                    ToastOptions::new().description("Auth is not configured for this build"),
                );
                return;
            };

            let email = auth_email_input();
            let password = auth_password_input();
            match service.sign_up(email.trim(), &password).await {
                Ok(SignUpOutcome::SignedIn(new_session)) => {
                    auth_password_input.set(String::new());
                    session.set(Some(new_session));
                    screen.set(Screen::Videos);
                }
                Ok(SignUpOutcome::ConfirmationRequired) => {
                    toasts.info(
                        "Check your inbox".to_string(),
                        ToastOptions::new()
                            .description("Confirm your email address, then log in"),
                    );
                }
                Err(error) => {
                    let kind = AuthErrorKind::classify(&error);
                    toasts.error(
                        kind.headline().to_string(),
                        ToastOptions::new().description(kind.body(&error)),
                    );
                }
            }
        });
    };

    let on_sign_out = move |_| {
        let service = auth_service();
        let active = session();
        spawn(async move {
            if let (Some(service), Some(active)) = (service, active) {
                if let Err(error) = service.sign_out(&active.access_token).await {
                    tracing::warn!("Sign out request failed: {}", error);
                }
            }

            session.set(None);
            videos.set(Vec::new());
            lists.set(Vec::new());
            detail_list.set(None);
            detail_videos.set(Vec::new());
            playing_video.set(None);
            selection.set(SelectionSet::new());
            screen.set(Screen::Login);
        });
    };

    let on_save_video = move |_| {
        let bookmark_store = store();
        let active = session();
        spawn(async move {
            let (Some(bookmark_store), Some(active)) = (bookmark_store, active) else {
                return;
            };

            saving.set(true);
            let fields = NewVideo {
                title: title_input().trim().to_string(),
                description: description_input().trim().to_string(),
                url: url_input().trim().to_string(),
                platform: platform_input(),
            };

            match bookmark_store.add_video(&active.user.id, fields).await {
                Ok(saved) => {
                    title_input.set(String::new());
                    description_input.set(String::new());
                    url_input.set(String::new());
                    toasts.success(
                        "Video saved".to_string(),
                        ToastOptions::new().description(saved.title),
                    );
                }
                Err(error) => {
                    toasts.error(
                        "Could not save video".to_string(),
                        ToastOptions::new().description(error.to_string()),
                    );
                }
            }
            saving.set(false);
        });
    };

    let on_create_list = move |_| {
        let bookmark_store = store();
        let active = session();
        spawn(async move {
            let (Some(bookmark_store), Some(active)) = (bookmark_store, active) else {
                return;
            };

            saving.set(true);
            let title = list_title_input();
            let selected = selection().into_videos();
            match bookmark_store
                .create_list(&active.user.id, &title, selected)
                .await
            {
                Ok(created) => {
                    list_title_input.set(String::new());
                    selection.set(SelectionSet::new());
                    toasts.success(
                        "List created".to_string(),
                        ToastOptions::new().description(created.title),
                    );
                }
                Err(error) => {
                    toasts.error(
                        "Could not create list".to_string(),
                        ToastOptions::new().description(error.to_string()),
                    );
                }
            }
            saving.set(false);
        });
    };

    let current_session = session();
    let signed_in = current_session.is_some();
    let account_email = current_session
        .as_ref()
        .and_then(|active| active.user.email.clone())
        .unwrap_or_else(|| "Not available".to_string());
    let heading = match screen() {
        Screen::Login => "Reel",
        Screen::Videos => "Video Store",
        Screen::Lists => "My Lists",
        Screen::ListDetail => "List",
        Screen::Account => "Account",
        Screen::Player => "Now Playing",
    };

    rsx! {
        style {
            "{TOAST_STYLES}{MOBILE_UI_STYLES}"
        }

        div {
            style: "
                height: 100vh;
                display: flex;
                flex-direction: column;
                background: #f0fdf4;
                color: #111827;
                font-family: system-ui, sans-serif;
            ",

            div {
                style: "
                    padding: 14px 16px;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: #ffffff;
                ",
                h1 {
                    style: "margin: 0; font-size: 22px;",
                    "{heading}"
                }
            }

            Separator {
                decorative: true,
                style: "height: 1px; background: #e5e7eb;",
            }

            if let Some(message) = status_message() {
                p {
                    style: "margin: 0; padding: 10px 16px; font-size: 13px; color: #374151;",
                    "{message}"
                }
                Separator {
                    decorative: true,
                    style: "height: 1px; background: #e5e7eb;",
                }
            }

            if loading() {
                div {
                    style: "
                        flex: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #6b7280;
                    ",
                    "Loading..."
                }
            } else if !signed_in || screen() == Screen::Login {
                {include!("views/login.rs")}
            } else if screen() == Screen::Videos {
                {include!("views/videos.rs")}
            } else if screen() == Screen::Lists {
                {include!("views/lists.rs")}
            } else if screen() == Screen::ListDetail {
                {include!("views/list_detail.rs")}
            } else if screen() == Screen::Player {
                {include!("views/player.rs")}
            } else {
                {include!("views/account.rs")}
            }

            if signed_in && screen() != Screen::Player {
                Separator {
                    decorative: true,
                    style: "height: 1px; background: #e5e7eb;",
                }
                div {
                    style: "display: flex; background: #ffffff; padding: 8px 12px; gap: 8px;",
                    UiButton {
                        r#type: "button",
                        block: true,
                        variant: if screen() == Screen::Videos { ButtonVariant::Primary } else { ButtonVariant::Outline },
                        onclick: move |_| {
                            screen.set(Screen::Videos);
                            // Refetch on entry: rows pulled in by replica
                            // sync never hit the change feed
                            let bookmark_store = store();
                            let active = session();
                            spawn(async move {
                                if let (Some(bookmark_store), Some(active)) = (bookmark_store, active) {
                                    refresh_videos(
                                        &bookmark_store,
                                        &active.user.id,
                                        &mut videos,
                                        &mut status_message,
                                    )
                                    .await;
                                }
                            });
                        },
                        "Videos"
                    }
                    UiButton {
                        r#type: "button",
                        block: true,
                        variant: if screen() == Screen::Lists || screen() == Screen::ListDetail { ButtonVariant::Primary } else { ButtonVariant::Outline },
                        onclick: move |_| {
                            detail_list.set(None);
                            screen.set(Screen::Lists);
                            let bookmark_store = store();
                            let active = session();
                            spawn(async move {
                                if let (Some(bookmark_store), Some(active)) = (bookmark_store, active) {
                                    refresh_lists(
                                        &bookmark_store,
                                        &active.user.id,
                                        &mut lists,
                                        &mut status_message,
                                    )
                                    .await;
                                }
                            });
                        },
                        "Lists"
                    }
                    UiButton {
                        r#type: "button",
                        block: true,
                        variant: if screen() == Screen::Account { ButtonVariant::Primary } else { ButtonVariant::Outline },
                        onclick: move |_| screen.set(Screen::Account),
                        "Account"
                    }
                }
            }
        }
    }
}

async fn refresh_videos(
    store: &BookmarkStore,
    user_id: &str,
    videos: &mut Signal<Vec<Video>>,
    status_message: &mut Signal<Option<String>>,
) {
    match store.list_videos(user_id).await {
        Ok(loaded) => videos.set(loaded),
        Err(error) => status_message.set(Some(format!("Failed to load videos: {error}"))),
    }
}

async fn refresh_lists(
    store: &BookmarkStore,
    user_id: &str,
    lists: &mut Signal<Vec<VideoList>>,
    status_message: &mut Signal<Option<String>>,
) {
    match store.list_lists(user_id).await {
        Ok(loaded) => lists.set(loaded),
        Err(error) => status_message.set(Some(format!("Failed to load lists: {error}"))),
    }
}

async fn refresh_detail(
    store: &BookmarkStore,
    user_id: &str,
    list_id: &ListId,
    detail_videos: &mut Signal<Vec<Video>>,
    status_message: &mut Signal<Option<String>>,
) {
    match store.list_detail_videos(user_id, list_id).await {
        Ok(loaded) => detail_videos.set(loaded),
        Err(error) => status_message.set(Some(format!("Failed to load list videos: {error}"))),
    }
}

fn relative_time(created_at: &str) -> String {
    let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(created_at) else {
        return created_at.to_string();
    };

    let elapsed = chrono::Utc::now().signed_duration_since(parsed);
    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_hours() < 1 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        parsed.format("%Y-%m-%d").to_string()
    }
}
