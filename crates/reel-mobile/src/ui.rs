//! Small UI primitives shared by every screen.
//!
//! Thin wrappers over plain elements so the views can stay declarative;
//! anything stateful (toasts, scroll areas) comes from dioxus-primitives.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use dioxus::prelude::*;

/// Stylesheet for the button and field wrappers below.
pub const MOBILE_UI_STYLES: &str = r"
.btn {
    border: 1px solid transparent;
    border-radius: 10px;
    padding: 10px 12px;
    font-size: 13px;
    font-weight: 600;
    transition: background-color 120ms ease, color 120ms ease, border-color 120ms ease;
}
.btn:disabled { opacity: 0.55; }
.btn-block { width: 100%; }
.btn-primary {
    background: #16a34a;
    border-color: #16a34a;
    color: #ffffff;
}
.btn-outline {
    background: #ffffff;
    border-color: #bbf7d0;
    color: #166534;
}
.btn-ghost {
    background: transparent;
    color: #374151;
}
.btn-danger {
    background: #dc2626;
    border-color: #dc2626;
    color: #ffffff;
}
.field {
    width: 100%;
    border: 1px solid #d1d5db;
    border-radius: 10px;
    padding: 10px 12px;
    font-size: 13px;
    background: #ffffff;
    color: #111827;
}
textarea.field { resize: none; }
";

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn btn-outline",
            Self::Ghost => "btn btn-ghost",
            Self::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn UiButton(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] block: bool,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class_name = if block {
        format!("{} btn-block", variant.class())
    } else {
        variant.class().to_string()
    };

    rsx! {
        button {
            class: "{class_name}",
            disabled,
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn UiInput(
    oninput: Option<EventHandler<FormEvent>>,
    onchange: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        input {
            class: "field",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            onchange: move |event| _ = onchange.map(|handler| handler(event)),
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn UiTextarea(
    oninput: Option<EventHandler<FormEvent>>,
    onchange: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        textarea {
            class: "field",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            onchange: move |event| _ = onchange.map(|handler| handler(event)),
            ..attributes,
            {children}
        }
    }
}
