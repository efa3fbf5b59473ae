use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{
    featured_project, grid_projects, shows_featured, Category, CategoryFilter, ProjectEntry,
};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (active, set_active) = signal(CategoryFilter::default());

    view! {
        <Title text="Projects" />
        <div class="min-h-screen py-20">
            <div class="container mx-auto px-6">
                <div class="mb-12">
                    <h1 class="text-4xl md:text-5xl font-display font-bold mb-4">
                        "Selected Projects"
                    </h1>
                    <p class="text-zinc-400 max-w-2xl">
                        "A collection of systems, architectures, and interfaces I've built. Ranging from high-scale backend services to polished user interfaces."
                    </p>
                </div>

                // Category tabs: a closed button set, so no invalid selection exists
                <div class="flex flex-wrap gap-2 mb-12 border-b border-zinc-800 pb-4">
                    {CategoryFilter::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == tab {
                                            "px-4 py-2 text-sm font-medium rounded-full transition-all bg-white text-black"
                                        } else {
                                            "px-4 py-2 text-sm font-medium rounded-full transition-all text-zinc-400 hover:text-white hover:bg-zinc-900"
                                        }
                                    }
                                    on:click=move |_| set_active.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                {move || {
                    if shows_featured(active.get()) {
                        Some(view! { <FeaturedProject /> })
                    } else {
                        None
                    }
                }}

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        grid_projects(active.get())
                            .into_iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn FeaturedProject() -> impl IntoView {
    let project = featured_project();

    view! {
        <div class="mb-20 section-content">
            <div class="border border-zinc-800 rounded-2xl bg-zinc-900/30 overflow-hidden relative group">
                <div class="pointer-events-none absolute inset-0 bg-gradient-to-r from-blue-500/5 to-purple-500/5 opacity-0 group-hover:opacity-100 transition-opacity duration-500" />

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-0">
                    <div class="p-8 md:p-12 flex flex-col justify-center">
                        <div class="flex items-center gap-2 mb-4 text-blue-400 font-mono text-xs uppercase tracking-wider">
                            <span class="px-2.5 py-0.5 rounded-full border border-blue-500/30 text-blue-400 font-semibold">
                                "Flagship Product"
                            </span>
                            <span>"Production System"</span>
                        </div>

                        <h2 class="text-3xl md:text-4xl font-display font-bold mb-4">
                            {project.title}
                        </h2>
                        <p class="text-zinc-400 mb-6 leading-relaxed">
                            "A comprehensive event ticketing platform built to handle high-concurrency demands. Unlike simple CRUD apps, Univibe handles complex state management for seat reservations, payments, and real-time scanning."
                        </p>

                        <div class="space-y-3 mb-8">
                            {project
                                .features
                                .iter()
                                .map(|feature| {
                                    view! {
                                        <div class="flex items-start gap-3 text-sm text-zinc-300">
                                            <i class="icon-shield text-emerald-500 shrink-0" />
                                            {*feature}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex flex-wrap gap-2 mb-8">
                            {project
                                .tech
                                .iter()
                                .map(|t| {
                                    view! {
                                        <span class="px-2 py-1 bg-zinc-950 border border-zinc-800 rounded text-xs text-zinc-400 font-mono">
                                            {*t}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex gap-4">
                            {project
                                .links
                                .demo
                                .map(|demo| {
                                    view! {
                                        <a
                                            href=demo
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="h-10 px-4 inline-flex items-center justify-center rounded-md text-sm font-medium bg-white text-black hover:bg-zinc-200 transition-colors"
                                        >
                                            "View Live Demo"
                                            <i class="icon-external-link ml-2" />
                                        </a>
                                    }
                                })}
                            <a
                                href="/architecture"
                                class="h-10 px-4 inline-flex items-center justify-center rounded-md text-sm font-medium border border-zinc-700 hover:bg-zinc-800 transition-colors"
                            >
                                "System Architecture"
                                <i class="icon-layers ml-2" />
                            </a>
                        </div>
                    </div>

                    <div class="bg-zinc-950 border-l border-zinc-800 min-h-[400px] flex items-center justify-center relative p-8">
                        <div class="relative w-full max-w-md aspect-video border border-zinc-800 bg-zinc-900/50 rounded-lg flex items-center justify-center">
                            <span class="text-zinc-600 font-mono text-sm">
                                "Product UI / Dashboard Preview"
                            </span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectEntry) -> impl IntoView {
    let is_architecture = project.category == Category::Architecture;
    let category_icon = if is_architecture {
        "icon-server text-xl"
    } else {
        "icon-layout text-xl"
    };

    view! {
        <div class="h-full flex flex-col p-6 rounded-xl bg-zinc-900/20 border border-zinc-800 hover:border-zinc-700 transition-colors group section-content">
            <div class="flex justify-between items-start mb-2">
                <div class="p-2 bg-zinc-950 rounded border border-zinc-800 text-zinc-400 group-hover:text-white transition-colors">
                    <i class=category_icon></i>
                </div>
                <div class="flex gap-2">
                    {project
                        .links
                        .github
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    class="text-zinc-500 hover:text-white transition-colors"
                                    aria-label="Source on GitHub"
                                >
                                    <i class="devicon-github-plain text-xl" />
                                </a>
                            }
                        })}
                    {project
                        .links
                        .demo
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    class="text-zinc-500 hover:text-white transition-colors"
                                    aria-label="Live demo"
                                >
                                    <i class="icon-external-link text-xl" />
                                </a>
                            }
                        })}
                </div>
            </div>

            <h3 class="text-xl font-display font-semibold">{project.title}</h3>
            <div class="text-xs font-mono uppercase tracking-wider text-blue-400 mb-4">
                {project.kind}
            </div>

            <p class="text-zinc-400 text-sm mb-6 leading-relaxed">{project.description}</p>
            {project
                .details
                .map(|details| {
                    view! { <p class="text-zinc-500 text-sm mb-6 leading-relaxed">{details}</p> }
                })}

            // Architecture cards get a small input/process/output strip
            {is_architecture
                .then(|| {
                    view! {
                        <div class="mb-6 p-4 bg-zinc-950 rounded border border-zinc-800/50 flex flex-col gap-2">
                            <div class="flex justify-between text-[10px] font-mono text-zinc-500 uppercase">
                                <span>"Input"</span>
                                <span>"Process"</span>
                                <span>"Output"</span>
                            </div>
                            <div class="h-1 w-full bg-zinc-900 rounded-full overflow-hidden">
                                <div class="h-full w-2/3 bg-zinc-700" />
                            </div>
                        </div>
                    }
                })}

            <div class="flex flex-wrap gap-2 mt-auto">
                {project
                    .tech
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="px-2 py-0.5 rounded bg-zinc-800/50 text-zinc-400 text-[10px] font-mono">
                                {*t}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
