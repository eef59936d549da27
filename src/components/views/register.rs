use dioxus::prelude::*;

use crate::api::register;
use crate::components::AppView;

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-lg border border-zinc-700 bg-zinc-900 text-white focus:outline-none focus:border-emerald-500/50";

#[component]
pub fn Register() -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let navigator = use_navigator();

    let on_submit = move |_| {
        if submitting() {
            return;
        }
        let user = username.peek().trim().to_string();
        let pass = password.peek().clone();
        if user.is_empty() || pass.is_empty() {
            error.set(Some("Enter a username and password.".to_string()));
            return;
        }

        submitting.set(true);
        error.set(None);
        spawn(async move {
            match register(&user, &pass).await {
                Ok(true) => {
                    navigator.push(AppView::Login {});
                }
                Ok(false) => error.set(Some("That username is taken.".to_string())),
                Err(err) => error.set(Some(format!("Registration failed: {err}"))),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "max-w-sm mx-auto mt-16 bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-6 space-y-5",
            h1 { class: "text-xl font-semibold text-white", "Create an account" }

            div {
                label { class: "block text-sm font-medium text-zinc-400 mb-2", "Username" }
                input {
                    r#type: "text",
                    value: username(),
                    autocomplete: "username",
                    class: INPUT_CLASS,
                    oninput: move |evt| username.set(evt.value()),
                }
            }

            div {
                label { class: "block text-sm font-medium text-zinc-400 mb-2", "Password" }
                input {
                    r#type: "password",
                    value: password(),
                    autocomplete: "new-password",
                    class: INPUT_CLASS,
                    oninput: move |evt| password.set(evt.value()),
                }
            }

            {error().map(|message| rsx! {
                p { class: "text-sm text-red-400", "{message}" }
            })}

            button {
                class: "w-full px-4 py-2 rounded-lg bg-emerald-500/20 text-emerald-400 font-medium hover:bg-emerald-500/30 transition-colors disabled:opacity-50",
                disabled: submitting(),
                onclick: on_submit,
                if submitting() { "Creating account…" } else { "Register" }
            }

            p { class: "text-sm text-zinc-400",
                "Already registered? "
                Link {
                    to: AppView::Login {},
                    class: "text-emerald-400 hover:underline",
                    "Log in"
                }
            }
        }
    }
}
