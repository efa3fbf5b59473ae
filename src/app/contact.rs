use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::toast::Toasts;
use crate::content::{CONTACT_SUBJECTS, EMAIL, GITHUB_URL, LINKEDIN_URL};

const SIMULATED_SEND_MS: f64 = 1500.0;

#[component]
pub fn ContactPage() -> impl IntoView {
    let (is_submitting, set_is_submitting) = signal(false);
    let toasts = expect_context::<Toasts>();

    // Simulated send: no request leaves the page. Exactly one timer fires
    // per submission, then the confirmation toast shows once.
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            set_is_submitting.set(false);
            toasts.show(
                "Message Sent",
                "Thanks for reaching out! I'll get back to you soon.",
            );
        },
        SIMULATED_SEND_MS,
    );

    view! {
        <Title text="Contact" />
        <div class="min-h-screen py-20">
            <div class="container mx-auto px-6">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16">
                    <div>
                        <h1 class="text-4xl md:text-5xl font-display font-bold mb-6 section-content">
                            "Let's Build Something Scalable"
                        </h1>
                        <p class="text-zinc-400 text-lg mb-12 max-w-md section-content">
                            "I'm currently open to contract work and full-time opportunities. If you have a technical challenge that needs a senior engineer's touch, let's talk."
                        </p>

                        <div class="space-y-8">
                            <ContactLink
                                href=format!("mailto:{EMAIL}")
                                icon="icon-mail"
                                label=EMAIL
                                sub="Best way to reach me"
                            />
                            <ContactLink
                                href=LINKEDIN_URL.to_string()
                                icon="devicon-linkedin-plain"
                                label="LinkedIn Profile"
                                sub="Connect professionally"
                            />
                            <ContactLink
                                href=GITHUB_URL.to_string()
                                icon="devicon-github-plain"
                                label="GitHub Profile"
                                sub="View my code"
                            />
                        </div>
                    </div>

                    <div>
                        <div class="p-8 rounded-xl bg-zinc-900/30 border border-zinc-800">
                            <h2 class="text-2xl font-display font-bold mb-6">"Send a Message"</h2>
                            <form
                                class="space-y-6"
                                on:submit=move |ev| {
                                    ev.prevent_default();
                                    if is_submitting.get_untracked() {
                                        return;
                                    }
                                    set_is_submitting.set(true);
                                    start(());
                                }
                            >
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                    <div class="space-y-2">
                                        <label class="text-sm font-medium text-zinc-400">
                                            "Name"
                                        </label>
                                        <input
                                            placeholder="John Doe"
                                            class="flex h-10 w-full rounded-md border border-zinc-800 bg-zinc-950 px-3 py-2 text-sm focus:border-blue-500 focus:outline-none"
                                            required
                                        />
                                    </div>
                                    <div class="space-y-2">
                                        <label class="text-sm font-medium text-zinc-400">
                                            "Email"
                                        </label>
                                        <input
                                            type="email"
                                            placeholder="john@company.com"
                                            class="flex h-10 w-full rounded-md border border-zinc-800 bg-zinc-950 px-3 py-2 text-sm focus:border-blue-500 focus:outline-none"
                                            required
                                        />
                                    </div>
                                </div>

                                <div class="space-y-2">
                                    <label class="text-sm font-medium text-zinc-400">
                                        "Subject"
                                    </label>
                                    <select class="w-full h-10 rounded-md border border-zinc-800 bg-zinc-950 px-3 py-2 text-sm text-zinc-100 focus:outline-none focus:ring-2 focus:ring-blue-500">
                                        {CONTACT_SUBJECTS
                                            .iter()
                                            .map(|subject| view! { <option>{*subject}</option> })
                                            .collect_view()}
                                    </select>
                                </div>

                                <div class="space-y-2">
                                    <label class="text-sm font-medium text-zinc-400">
                                        "Message"
                                    </label>
                                    <textarea
                                        placeholder="Tell me about your project and technical requirements..."
                                        class="min-h-[150px] w-full rounded-md border border-zinc-800 bg-zinc-950 px-3 py-2 text-sm focus:border-blue-500 focus:outline-none"
                                        required
                                    ></textarea>
                                </div>

                                <button
                                    type="submit"
                                    class="w-full h-12 text-base inline-flex items-center justify-center rounded-md font-medium bg-white text-black hover:bg-zinc-200 transition-colors disabled:opacity-70"
                                    prop:disabled=move || is_submitting.get()
                                >
                                    {move || {
                                        if is_submitting.get() {
                                            Either::Left(
                                                view! {
                                                    <span class="animate-pulse">"Sending..."</span>
                                                },
                                            )
                                        } else {
                                            Either::Right(
                                                view! {
                                                    "Send Message"
                                                    <i class="icon-arrow-right ml-2" />
                                                },
                                            )
                                        }
                                    }}
                                </button>
                            </form>
                        </div>

                        <div class="mt-8 flex gap-6 text-sm text-zinc-500">
                            <div class="flex items-center gap-2">
                                <i class="icon-check-circle text-emerald-500" />
                                <span>"Response in 24h"</span>
                            </div>
                            <div class="flex items-center gap-2">
                                <i class="icon-check-circle text-emerald-500" />
                                <span>"NDA Friendly"</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactLink(
    href: String,
    icon: &'static str,
    label: &'static str,
    sub: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center gap-4 p-4 rounded-lg hover:bg-zinc-900/50 transition-colors group"
        >
            <div class="p-3 bg-zinc-900 rounded-full text-zinc-400 group-hover:text-white group-hover:bg-blue-600 transition-all">
                <i class=format!("{icon} text-xl")></i>
            </div>
            <div>
                <div class="text-zinc-200 font-medium group-hover:text-white">{label}</div>
                <div class="text-zinc-500 text-sm">{sub}</div>
            </div>
        </a>
    }
}
