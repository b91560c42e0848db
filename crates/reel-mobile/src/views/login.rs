div {
    style: "
        flex: 1;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 20px;
    ",
    div {
        style: "
            width: 100%;
            max-width: 360px;
            background: #ffffff;
            border: 1px solid #e5e7eb;
            border-radius: 12px;
            padding: 20px;
            display: flex;
            flex-direction: column;
            gap: 12px;
        ",
        h2 {
            style: "margin: 0; font-size: 18px; color: #14532d;",
            "Welcome to Reel"
        }
        p {
            style: "margin: 0; font-size: 13px; color: #6b7280;",
            "Log in or create an account to start saving videos."
        }

        Label {
            html_for: "auth-email",
            style: "margin: 0; font-size: 12px; color: #6b7280;",
            "Email"
        }
        UiInput {
            id: "auth-email",
            r#type: "email",
            placeholder: "you@example.com",
            value: "{auth_email_input}",
            oninput: move |event: Event<FormData>| {
                auth_email_input.set(event.value());
            },
        }

        Label {
            html_for: "auth-password",
            style: "margin: 0; font-size: 12px; color: #6b7280;",
            "Password"
        }
        UiInput {
            id: "auth-password",
            r#type: "password",
            placeholder: "Password",
            value: "{auth_password_input}",
            oninput: move |event: Event<FormData>| {
                auth_password_input.set(event.value());
            },
        }

        UiButton {
            r#type: "button",
            block: true,
            variant: ButtonVariant::Primary,
            onclick: on_sign_in,
            "Log in"
        }
        UiButton {
            r#type: "button",
            block: true,
            variant: ButtonVariant::Outline,
            onclick: on_sign_up,
            "Sign up"
        }
    }
}
