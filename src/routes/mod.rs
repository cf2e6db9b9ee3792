use dioxus::prelude::*;

pub mod home;
pub mod profile;

use home::Home;
use profile::Profile;

use crate::components::icons::{HomeIcon, MoonIcon, SunIcon, UserIcon};
use crate::components::WalletButton;
use crate::stores::theme_store;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/profile")]
        Profile {},
}

#[component]
fn Layout() -> Element {
    let dark = theme_store::is_dark_mode();

    rsx! {
        div {
            class: "min-h-screen bg-background text-foreground transition-colors",

            header {
                class: "sticky top-0 z-40 border-b border-border bg-background/90 backdrop-blur",
                div {
                    class: "max-w-5xl mx-auto flex items-center justify-between gap-4 px-4 py-3",

                    Link {
                        to: Route::Home {},
                        class: "flex items-center gap-2 hover:opacity-80 transition",
                        div {
                            class: "w-10 h-10 bg-blue-500 rounded-full flex items-center justify-center text-white font-bold text-xl",
                            "G"
                        }
                        span {
                            class: "text-xl font-bold hidden sm:inline",
                            "GamersDAO"
                        }
                    }

                    nav {
                        class: "flex items-center gap-1",
                        NavLink {
                            to: Route::Home {},
                            icon: rsx! { HomeIcon { class: "w-5 h-5" } },
                            label: "Home"
                        }
                        NavLink {
                            to: Route::Profile {},
                            icon: rsx! { UserIcon { class: "w-5 h-5" } },
                            label: "Profile"
                        }
                    }

                    div {
                        class: "flex items-center gap-2",
                        button {
                            class: "p-2 rounded-full hover:bg-accent transition",
                            aria_label: "Toggle theme",
                            onclick: move |_| theme_store::toggle_theme(),
                            if dark {
                                SunIcon { class: "w-5 h-5" }
                            } else {
                                MoonIcon { class: "w-5 h-5" }
                            }
                        }
                        WalletButton {}
                    }
                }
            }

            main {
                class: "max-w-5xl mx-auto",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavLink(to: Route, icon: Element, label: &'static str) -> Element {
    let current_route = use_route::<Route>();
    let font_class = if current_route == to { "font-bold" } else { "" };

    rsx! {
        Link {
            to: to,
            class: "flex items-center gap-2 px-3 py-2 rounded-full hover:bg-accent transition {font_class}",
            {icon}
            span {
                class: "hidden sm:inline",
                "{label}"
            }
        }
    }
}
