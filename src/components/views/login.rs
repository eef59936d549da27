use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api::{get_current_user, login};
use crate::components::{AppView, SessionSignal};

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-lg border border-zinc-700 bg-zinc-900 text-white focus:outline-none focus:border-emerald-500/50";

#[component]
pub fn Login() -> Element {
    let mut session = use_context::<SessionSignal>().0;
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
            match login(&user, &pass).await {
                Ok(true) => {
                    match get_current_user().await {
                        Ok(current) => session.set(current),
                        Err(err) => tracing::warn!("failed to refresh session: {err}"),
                    }
                    navigator.push(AppView::Home {});
                }
                Ok(false) => error.set(Some("Invalid username or password.".to_string())),
                Err(err) => error.set(Some(format!("Login failed: {err}"))),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "max-w-sm mx-auto mt-16 bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-6 space-y-5",
            h1 { class: "text-xl font-semibold text-white", "Log in" }

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
                    autocomplete: "current-password",
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
                if submitting() { "Logging in…" } else { "Log in" }
            }

            p { class: "text-sm text-zinc-400",
                "No account? "
                Link {
                    to: AppView::Register {},
                    class: "text-emerald-400 hover:underline",
                    "Register"
                }
            }
        }
    }
}
