use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::{EMAIL, GITHUB_URL, LINKEDIN_URL, NAV_ITEMS};

#[component]
pub fn Header() -> impl IntoView {
    let (nav_open, set_nav_open) = signal(false);
    let pathname = use_location().pathname;

    view! {
        <header class="fixed top-0 w-full z-50 border-b border-zinc-800 bg-background/80 backdrop-blur-md">
            <div class="container mx-auto px-6 h-16 flex items-center justify-between">
                <a
                    href="/"
                    class="text-xl font-display font-bold tracking-tighter hover:text-zinc-300 transition-colors"
                >
                    "IBRAHIM"
                    <span class="text-zinc-500">".DEV"</span>
                </a>

                // Desktop nav: active link is an exact path match, no prefix logic
                <nav class="hidden md:flex items-center gap-8">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let path = item.path;
                            view! {
                                <a
                                    href=path
                                    class=move || {
                                        if pathname.get() == path {
                                            "text-sm font-medium transition-colors text-white"
                                        } else {
                                            "text-sm font-medium transition-colors text-zinc-400 hover:text-white"
                                        }
                                    }
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                // Mobile menu trigger
                <div class="md:hidden">
                    <button
                        class="p-2 text-zinc-400 hover:text-white transition-colors"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| set_nav_open.update(|open| *open = !*open)
                    >
                        <i class=move || {
                            if nav_open.get() { "icon-x text-2xl" } else { "icon-menu text-2xl" }
                        } />
                    </button>
                </div>
            </div>

            {move || {
                if nav_open.get() {
                    Some(
                        view! {
                            <div class="md:hidden">
                                <div
                                    class="fixed inset-0 z-40 bg-black/60"
                                    on:click=move |_| set_nav_open.set(false)
                                />
                                <div class="fixed top-0 right-0 z-50 h-full w-72 border-l border-zinc-800 bg-zinc-950 p-8 space-y-8">
                                    <div class="flex justify-between items-center">
                                        <span class="text-xl font-display font-bold">"Menu"</span>
                                        <button
                                            class="text-zinc-400 hover:text-white transition-colors"
                                            aria-label="Close menu"
                                            on:click=move |_| set_nav_open.set(false)
                                        >
                                            <i class="icon-x text-2xl" />
                                        </button>
                                    </div>
                                    <nav class="flex flex-col gap-6">
                                        {NAV_ITEMS
                                            .iter()
                                            .map(|item| {
                                                let path = item.path;
                                                view! {
                                                    <a
                                                        href=path
                                                        class=move || {
                                                            if pathname.get() == path {
                                                                "text-2xl font-display font-medium transition-colors text-white"
                                                            } else {
                                                                "text-2xl font-display font-medium transition-colors text-zinc-500 hover:text-white"
                                                            }
                                                        }
                                                        on:click=move |_| set_nav_open.set(false)
                                                    >
                                                        {item.label}
                                                    </a>
                                                }
                                            })
                                            .collect_view()}
                                    </nav>
                                </div>
                            </div>
                        },
                    )
                } else {
                    None
                }
            }}
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-zinc-900 bg-zinc-950 py-12">
            <div class="container mx-auto px-6 flex flex-col md:flex-row justify-between items-center gap-6">
                <div class="text-zinc-500 text-sm font-mono">
                    {format!("© {} Ibrahim Qayyum. Built with Rust & Leptos.", env!("BUILD_YEAR"))}
                </div>
                <div class="flex items-center gap-6">
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-zinc-500 hover:text-white transition-colors"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain text-xl" />
                    </a>
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-zinc-500 hover:text-white transition-colors"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain text-xl" />
                    </a>
                    <a
                        href=format!("mailto:{EMAIL}")
                        class="text-zinc-500 hover:text-white transition-colors"
                        aria-label="Email"
                    >
                        <i class="icon-mail text-xl" />
                    </a>
                </div>
            </div>
        </footer>
    }
}
