//! Defines the routable application views.

use dioxus::prelude::*;

use crate::components::views::{ClipDetail, Home, Login, Register, UserClips};
use crate::components::AppShell;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum AppView {
    #[layout(AppShell)]
    #[route("/")]
    Home {},
    #[route("/clips/:id")]
    ClipDetail { id: String },
    #[route("/users/:id")]
    UserClips { id: String },
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}
