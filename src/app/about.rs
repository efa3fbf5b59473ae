use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{ExperienceEntry, SkillGroup, EXPERIENCE, SKILL_GROUPS};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <div class="min-h-screen py-20">
            <div class="container mx-auto px-6">
                <div class="grid grid-cols-1 lg:grid-cols-12 gap-12">
                    <div class="lg:col-span-8">
                        <h1 class="text-4xl md:text-6xl font-display font-bold mb-8 section-content">
                            "More than just code." <br />
                            <span class="text-zinc-500">"I build reliable systems."</span>
                        </h1>

                        <div class="space-y-4 text-lg text-zinc-400 leading-relaxed mb-16 section-content">
                            <p>
                                "I am a Backend-Focused Full-Stack Engineer with over 6 years of experience building production-grade software. My career hasn't been about just closing tickets; it's been about owning systems end-to-end."
                            </p>
                            <p>
                                "I specialize in the \"hard parts\" of web development: database schema design, handling race conditions, managing distributed state, and ensuring that APIs don't just work on my machine, but scale in production."
                            </p>
                            <p>
                                "While my core strength lies in Node.js and backend architecture, I treat the frontend with the same level of rigor. I believe a Full-Stack engineer should be able to center a div as confidently as they optimize a database query."
                            </p>
                        </div>

                        <h2 class="text-2xl font-display font-bold mb-8 flex items-center gap-3">
                            <i class="icon-briefcase text-2xl text-blue-500" />
                            "Experience"
                        </h2>

                        <div class="space-y-12 border-l border-zinc-800 ml-3 pl-8 relative">
                            {EXPERIENCE
                                .iter()
                                .map(|entry| view! { <ExperienceItem entry=*entry /> })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="lg:col-span-4 space-y-12">
                        {SKILL_GROUPS
                            .iter()
                            .map(|group| view! { <SkillSection group=*group /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ExperienceItem(entry: ExperienceEntry) -> impl IntoView {
    view! {
        <div class="relative">
            <span class="absolute -left-[39px] top-1 h-5 w-5 rounded-full border-4 border-zinc-950 bg-zinc-700" />
            <h3 class="text-xl font-bold text-zinc-100">{entry.role}</h3>
            <div class="flex justify-between items-center mb-2">
                <span class="text-blue-400 font-medium">{entry.company}</span>
                <span class="text-sm font-mono text-zinc-500">{entry.period}</span>
            </div>
            <p class="text-zinc-400 leading-relaxed text-sm">{entry.description}</p>
        </div>
    }
}

#[component]
fn SkillSection(group: SkillGroup) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-lg font-display font-bold mb-4 border-b border-zinc-800 pb-2">
                {group.title}
            </h3>
            <div class="flex flex-wrap gap-2">
                {group
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <span class="px-3 py-1.5 bg-zinc-900 text-zinc-400 text-sm border border-zinc-800 rounded hover:border-zinc-600 transition-colors cursor-default">
                                {*skill}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
