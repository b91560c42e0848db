div {
    style: "flex: 1; padding: 16px;",
    div {
        style: "
            background: #ffffff;
            border: 1px solid #e5e7eb;
            border-radius: 12px;
            padding: 16px;
            display: flex;
            flex-direction: column;
            gap: 12px;
        ",
        h2 {
            style: "margin: 0; font-size: 16px; color: #14532d;",
            "Your account"
        }

        div {
            style: "display: flex; justify-content: space-between; gap: 8px;",
            p {
                style: "margin: 0; font-size: 13px; color: #6b7280;",
                "Email"
            }
            p {
                style: "margin: 0; font-size: 13px; color: #111827;",
                "{account_email}"
            }
        }
        div {
            style: "display: flex; justify-content: space-between; gap: 8px;",
            p {
                style: "margin: 0; font-size: 13px; color: #6b7280;",
                "Password"
            }
            p {
                style: "margin: 0; font-size: 13px; color: #111827; letter-spacing: 2px;",
                "******"
            }
        }

        Separator {
            decorative: true,
            style: "height: 1px; background: #e5e7eb;",
        }

        UiButton {
            r#type: "button",
            block: true,
            variant: ButtonVariant::Danger,
            onclick: on_sign_out,
            "Sign out"
        }
    }
}
