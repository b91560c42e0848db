ScrollArea {
    direction: ScrollDirection::Vertical,
    scroll_type: ScrollType::Auto,
    tabindex: "0",
    style: "flex: 1; padding: 12px 16px;",

    div {
        style: "
            background: #ffffff;
            border: 1px solid #e5e7eb;
            border-radius: 12px;
            padding: 16px;
            display: flex;
            flex-direction: column;
            gap: 10px;
            margin-bottom: 16px;
        ",
        h2 {
            style: "margin: 0; font-size: 16px; color: #14532d;",
            "Save a video"
        }

        div {
            style: "display: flex; gap: 8px;",
            UiButton {
                r#type: "button",
                block: true,
                variant: if platform_input() == Platform::YouTube { ButtonVariant::Primary } else { ButtonVariant::Outline },
                onclick: move |_| platform_input.set(Platform::YouTube),
                "YouTube"
            }
            UiButton {
                r#type: "button",
                block: true,
                variant: if platform_input() == Platform::Instagram { ButtonVariant::Primary } else { ButtonVariant::Outline },
                onclick: move |_| platform_input.set(Platform::Instagram),
                "Instagram"
            }
        }

        UiInput {
            id: "video-title",
            placeholder: "Title",
            value: "{title_input}",
            oninput: move |event: Event<FormData>| {
                title_input.set(event.value());
            },
        }
        UiTextarea {
            id: "video-description",
            rows: "3",
            placeholder: "Description",
            value: "{description_input}",
            oninput: move |event: Event<FormData>| {
                description_input.set(event.value());
            },
        }
        UiInput {
            id: "video-url",
            r#type: "url",
            placeholder: "Video URL",
            value: "{url_input}",
            oninput: move |event: Event<FormData>| {
                url_input.set(event.value());
            },
        }
        UiButton {
            r#type: "button",
            block: true,
            variant: ButtonVariant::Primary,
            disabled: saving(),
            onclick: on_save_video,
            if saving() { "Saving..." } else { "Save Video" }
        }
    }

    if videos().is_empty() {
        div {
            style: "
                padding: 20px;
                background: #ffffff;
                border: 1px solid #e5e7eb;
                border-radius: 12px;
                text-align: center;
                color: #6b7280;
            ",
            "No videos saved yet. Save your first video above."
        }
    } else {
        for video in videos() {
            {
                let video_id = video.id;
                let video_for_player = video.clone();
                let title = video.title.clone();
                let platform_label = video.platform.as_str();
                let thumbnail = video.thumbnail.clone();
                let saved = relative_time(&video.created_at);

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
                                player_return.set(Screen::Videos);
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
                                    "{platform_label} · saved {saved}"
                                }
                            }
                        }
                        div {
                            style: "padding: 0 12px 12px 12px;",
                            UiButton {
                                r#type: "button",
                                variant: ButtonVariant::Danger,
                                style: "padding: 6px 10px; font-size: 12px;",
                                onclick: move |_| {
                                    let bookmark_store = store();
                                    let active = session();
                                    spawn(async move {
                                        let (Some(bookmark_store), Some(active)) = (bookmark_store, active) else {
                                            return;
                                        };
                                        if let Err(error) = bookmark_store.delete_video(&active.user.id, &video_id).await {
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
    }
}
