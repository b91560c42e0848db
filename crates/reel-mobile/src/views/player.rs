div {
    style: "flex: 1; display: flex; flex-direction: column; background: #000000;",

    div {
        style: "padding: 10px 12px; display: flex; align-items: center; justify-content: space-between; background: #111827;",
        p {
            style: "margin: 0; font-size: 14px; font-weight: 600; color: #f9fafb;",
            {playing_video().map(|playing| playing.title).unwrap_or_default()}
        }
        UiButton {
            r#type: "button",
            variant: ButtonVariant::Outline,
            style: "padding: 6px 10px; font-size: 12px;",
            onclick: move |_| {
                playing_video.set(None);
                screen.set(player_return());
            },
            "Close"
        }
    }

    if let Some(playing) = playing_video() {
        iframe {
            src: "{playing.url}",
            style: "flex: 1; width: 100%; border: 0;",
            allow: "autoplay; encrypted-media; picture-in-picture",
            allowfullscreen: true,
        }
    }
}
