use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::HERO_TECH;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="relative overflow-hidden">
            // Hero
            <section class="relative min-h-[90vh] flex items-center pt-20">
                <div class="absolute inset-0 z-0">
                    <div class="absolute inset-0 hero-grid opacity-30" />
                    <div class="absolute inset-0 bg-gradient-to-b from-background/80 via-background/95 to-background" />
                </div>

                <div class="container mx-auto px-6 relative z-10">
                    <div class="max-w-4xl mx-auto text-center">
                        <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-zinc-900/50 border border-zinc-800 text-zinc-400 text-xs font-mono uppercase tracking-wider mb-8 section-content">
                            <span class="w-2 h-2 rounded-full bg-emerald-500 animate-pulse" />
                            "Available for Contract Work"
                        </div>

                        <h1 class="text-5xl md:text-7xl font-display font-bold leading-tight mb-6 bg-clip-text text-transparent bg-gradient-to-b from-white to-zinc-500 section-content">
                            "I build scalable backend systems that power real businesses."
                        </h1>

                        <p class="text-lg md:text-xl text-zinc-400 mb-10 max-w-2xl mx-auto leading-relaxed section-content">
                            "Backend-Focused Full-Stack Engineer specializing in APIs, distributed systems, caching strategies, and transaction-safe platforms."
                        </p>

                        <div class="flex flex-wrap justify-center gap-4 mb-16 section-content">
                            <a
                                href="/projects"
                                class="h-12 px-8 inline-flex items-center justify-center rounded-md text-base font-medium bg-white text-black hover:bg-zinc-200 transition-colors"
                            >
                                "View Projects"
                            </a>
                            <a
                                href="/architecture"
                                class="h-12 px-8 inline-flex items-center justify-center rounded-md text-base font-medium border border-zinc-700 hover:bg-zinc-900 hover:text-white transition-colors"
                            >
                                "View Architecture"
                            </a>
                        </div>

                        <div class="flex flex-wrap justify-center gap-8 text-zinc-500 section-content">
                            {HERO_TECH
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="font-mono text-sm uppercase tracking-wider hover:text-zinc-300 transition-colors cursor-default">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </section>

            // Core competencies
            <section class="py-24 border-t border-zinc-900 bg-zinc-950/50">
                <div class="container mx-auto px-6">
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        <FeatureCard
                            icon="icon-server text-3xl text-blue-500"
                            title="Distributed Systems"
                            description="Designing resilient microservices and event-driven architectures that scale horizontally."
                        />
                        <FeatureCard
                            icon="icon-database text-3xl text-emerald-500"
                            title="Data Integrity"
                            description="Complex schema design, ACID compliance, and efficient caching strategies using Redis."
                        />
                        <FeatureCard
                            icon="icon-shield-check text-3xl text-purple-500"
                            title="Security First"
                            description="Implementing robust authentication, rate limiting, and secure API gateways from day one."
                        />
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="p-8 rounded-xl border border-zinc-900 bg-zinc-900/20 hover:border-zinc-800 hover:bg-zinc-900/40 transition-all duration-300 group">
            <div class="mb-6 p-3 bg-zinc-950 w-fit rounded-lg border border-zinc-800 group-hover:border-zinc-700 transition-colors">
                <i class=icon></i>
            </div>
            <h3 class="text-xl font-display font-semibold mb-3 text-zinc-100">{title}</h3>
            <p class="text-zinc-400 leading-relaxed">{description}</p>
        </div>
    }
}
