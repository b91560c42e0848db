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
            "Create a list"
        }
        UiInput {
            id: "list-title",
            placeholder: "List title",
            value: "{list_title_input}",
            oninput: move |event: Event<FormData>| {
                list_title_input.set(event.value());
            },
        }
        p {
            style: "margin: 0; font-size: 12px; color: #6b7280;",
            "Tap videos to select them ({selection().len()} selected)"
        }

        if videos().is_empty() {
            p {
                style: "margin: 0; font-size: 13px; color: #6b7280;",
                "Save some videos first, then come back to group them."
            }
        } else {
            for video in videos() {
                {
                    let video_id = video.id;
                    let title = video.title.clone();
                    let platform_label = video.platform.as_str();
                    let selected = selection().contains(&video_id);
                    let toggled = video.clone();
                    let row_style = format!(
                        "width: 100%;\
                         text-align: left;\
                         border: 1px solid {};\
                         border-radius: 10px;\
                         padding: 10px 12px;\
                         margin-bottom: 6px;",
                        if selected { "#16a34a" } else { "#e5e7eb" }
                    );

                    rsx! {
                        UiButton {
                            key: "{video_id}",
                            r#type: "button",
                            variant: ButtonVariant::Ghost,
                            style: "{row_style}",
                            onclick: move |_| {
                                let mut current = selection();
                                current.toggle(&toggled);
                                selection.set(current);
                            },
                            p {
                                style: "margin: 0; font-size: 14px; font-weight: 600; color: #111827;",
                                "{title}"
                            }
                            p {
                                style: "margin: 0; font-size: 12px; color: #9ca3af;",
                                "{platform_label}"
                            }
                        }
                    }
                }
            }
        }

        UiButton {
            r#type: "button",
            block: true,
            variant: ButtonVariant::Primary,
            disabled: saving(),
            onclick: on_create_list,
            if saving() { "Creating..." } else { "Create list" }
        }
    }

    if lists().is_empty() {
        div {
            style: "
                padding: 20px;
                background: #ffffff;
                border: 1px solid #e5e7eb;
                border-radius: 12px;
                text-align: center;
                color: #6b7280;
            ",
            "No lists yet."
        }
    } else {
        for list in lists() {
            {
                let list_id = list.id;
                let list_for_detail = list.clone();
                let title = list.title.clone();
                let count = list.videos.len();

                rsx! {
                    div {
                        key: "{list_id}",
                        style: "
                            margin-bottom: 10px;
                            background: #ffffff;
                            border: 1px solid #e5e7eb;
                            border-radius: 12px;
                            padding: 12px;
                            display: flex;
                            align-items: center;
                            justify-content: space-between;
                            gap: 8px;
                        ",
                        div {
                            p {
                                style: "margin: 0 0 4px 0; font-size: 15px; font-weight: 600; color: #111827;",
                                "{title}"
                            }
                            p {
                                style: "margin: 0; font-size: 12px; color: #9ca3af;",
                                "{count} videos"
                            }
                        }
                        div {
                            style: "display: flex; gap: 6px;",
                            UiButton {
                                r#type: "button",
                                variant: ButtonVariant::Outline,
                                style: "padding: 6px 10px; font-size: 12px;",
                                onclick: move |_| {
                                    let opened = list_for_detail.clone();
                                    let bookmark_store = store();
                                    let active = session();
                                    detail_list.set(Some(opened.clone()));
                                    detail_videos.set(Vec::new());
                                    screen.set(Screen::ListDetail);
                                    spawn(async move {
                                        let (Some(bookmark_store), Some(active)) = (bookmark_store, active) else {
                                            return;
                                        };
                                        refresh_detail(
                                            &bookmark_store,
                                            &active.user.id,
                                            &opened.id,
                                            &mut detail_videos,
                                            &mut status_message,
                                        )
                                        .await;
                                    });
                                },
                                "Open"
                            }
                            UiButton {
                                r#type: "button",
                                variant: ButtonVariant::Danger,
                                style: "padding: 6px 10px; font-size: 12px;",
                                onclick: move |_| confirm_delete_list.set(Some(list_id)),
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }

    if let Some(pending_list_id) = confirm_delete_list() {
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
                    "Delete this list?"
                }
                p {
                    style: "margin: 0; font-size: 13px; color: #6b7280;",
                    "The videos in it stay saved in your store."
                }
                div {
                    style: "display: flex; gap: 8px;",
                    UiButton {
                        r#type: "button",
                        block: true,
                        variant: ButtonVariant::Outline,
                        onclick: move |_| confirm_delete_list.set(None),
                        "Cancel"
                    }
                    UiButton {
                        r#type: "button",
                        block: true,
                        variant: ButtonVariant::Danger,
                        onclick: move |_| {
                            let bookmark_store = store();
                            let active = session();
                            confirm_delete_list.set(None);
                            spawn(async move {
                                let (Some(bookmark_store), Some(active)) = (bookmark_store, active) else {
                                    return;
                                };
                                if let Err(error) = bookmark_store.delete_list(&active.user.id, &pending_list_id).await {
                                    toasts.error(
                                        "Could not delete list".to_string(),
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
