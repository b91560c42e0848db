ScrollArea {
    direction: ScrollDirection::Vertical,
    scroll_type: ScrollType::Auto,
    tabindex: "0",
    style: "flex: 1; padding: 12px 16px;",

    div {
        style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 12px;",
        h2 {
            style: "margin: 0; font-size: 16px; color: #14532d;",
            {detail_list().map(|open| open.title).unwrap_or_default()}
        }
        UiButton {
            r#type: "button",
            variant: ButtonVariant::Outline,
            style: "padding: 6px 10px; font-size: 12px;",
            onclick: move |_| {
                detail_list.set(None);
                screen.set(Screen::Lists);
            },
            "Back"
        }
    }

    if detail_videos().is_empty() {
        div {
            style: "
                padding: 20px;
                background: #ffffff;
                border: 1px solid #e5e7eb;
                border-radius: 12px;
                text-align: center;
                color: #6b7280;
            ",
            "None of this list's videos are still in your store."
        }
    } else {
        for video in detail_videos() {
            {
                let video_id = video.id;
                let video_for_player = video.clone();
                let title = video.title.clone();
                let thumbnail = video.thumbnail.clone();
                let platform_label = video.platform.as_str();

                rsx! {
                    div {
                        key: "{video_id}",
                        style: "
                            margin-bottom: 10px;
                            background: #ffffff;
                            border: 1px solid #e5e7eb;
                            border-radius: 12px;
                            overflow: hidden;
                        ",
                        UiButton {
                            r#type: "button",
                            variant: ButtonVariant::Ghost,
                            style: "width: 100%; padding: 0; text-align: left; border-radius: 0;",
                            onclick: move |_| {
                                playing_video.set(Some(video_for_player.clone()));
                                player_return.set(Screen::ListDetail);
                                screen.set(Screen::Player);
                            },
                            img {
                                src: "{thumbnail}",
                                style: "width: 100%; height: 160px; object-fit: cover; display: block;",
                            }
                            div {
                                style: "padding: 12px;",
                                p {
                                    style: "margin: 0 0 4px 0; font-size: 15px; font-weight: 600; color: #111827;",
                                    "{title}"
                                }
                                p {
                                    style: "margin: 0; font-size: 12px; color: #9ca3af;",
                                    "{platform_label}"
                                }
                            }
                        }
                        div {
                            style: "padding: 0 12px 12px 12px;",
                            UiButton {
                                r#type: "button",
                                variant: ButtonVariant::Danger,
                                style: "padding: 6px 10px; font-size: 12px;",
                                onclick: move |_| confirm_delete_video.set(Some(video_id)),
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }

    if let Some(pending_video_id) = confirm_delete_video() {
        div {
            style: "
                position: fixed;
                inset: 0;
                background: rgba(17, 24, 39, 0.5);
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 20px;
            ",
            div {
                style: "
                    width: 100%;
                    max-width: 320px;
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 16px;
                    display: flex;
                    flex-direction: column;
                    gap: 10px;
                ",
                p {
                    style: "margin: 0; font-size: 15px; font-weight: 600; color: #111827;",
                    "Delete this video?"
                }
                p {
                    style: "margin: 0; font-size: 13px; color: #6b7280;",
                    "It will be removed from your video store."
                }
                div {
                    style: "display: flex; gap: 8px;",
                    UiButton {
                        r#type: "button",
                        block: true,
                        variant: ButtonVariant::Outline,
                        onclick: move |_| confirm_delete_video.set(None),
                        "Cancel"
                    }
                    UiButton {
                        r#type: "button",
                        block: true,
                        variant: ButtonVariant::Danger,
                        onclick: move |_| {
                            let bookmark_store = store();
                            let active = session();
                            confirm_delete_video.set(None);
                            spawn(async move {
                                let (Some(bookmark_store), Some(active)) = (bookmark_store, active) else {
                                    return;
                                };
                                if let Err(error) = bookmark_store.delete_video(&active.user.id, &pending_video_id).await {
                                    toasts.error(
                                        "Could not delete video".to_string(),
                                        ToastOptions::new().description(error.to_string()),
                                    );
                                }
                            });
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}
