mod about;
mod architecture;
mod contact;
mod home;
mod layout;
mod projects;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use architecture::ArchitecturePage;
use contact::ContactPage;
use home::HomePage;
use layout::{Footer, Header};
use projects::ProjectsPage;
use toast::{provide_toasts, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // Single toast slot shared by every page; the Contact form writes to it.
    let toast = provide_toasts();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Ibrahim Qayyum - {title}") />

        <Router>
            <div class="min-h-screen bg-background text-foreground flex flex-col">
                <Header />
                <main class="flex-1 pt-16 relative">
                    <Routes fallback=NotFound>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/projects") view=ProjectsPage />
                        <Route path=path!("/architecture") view=ArchitecturePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
        <Toaster toast />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="min-h-[60vh] flex flex-col items-center justify-center gap-4 py-20">
            <h1 class="text-4xl font-display font-bold">"404"</h1>
            <p class="text-zinc-400">"This page does not exist."</p>
            <a
                href="/"
                class="text-sm text-zinc-300 underline underline-offset-4 hover:text-white transition-colors"
            >
                "Back to home"
            </a>
        </div>
    }
}
