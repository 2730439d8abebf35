use crate::components::{Card, CheckItem, Container, SectionTitle};
use crate::content::{IMPROVEMENTS, PROBLEMS};
use leptos::*;

#[component]
pub fn ProblemSection() -> impl IntoView {
    view! {
        <section id="probleem" class="py-14 sm:py-18">
            <Container>
                <SectionTitle kicker="PROBLEEMI TÄPSUSTAMINE" title="Tuttav olukord?">
                    "Probleem ei ole see, et juhtumeid juhtub."
                    <br/>
                    "Probleem on see, kui puudub selge ja kaitsev protsess."
                </SectionTitle>

                <div class="mt-8 grid gap-4 md:grid-cols-2">
                    <Card class="p-6">
                        <div class="text-sm font-semibold text-slate-900">"Mis läheb valesti (päriselus)"</div>
                        <ul class="mt-4 space-y-3">
                            {PROBLEMS
                                .iter()
                                .map(|p| view! {
                                    <li class="flex gap-3 text-sm text-slate-700">
                                        <span class="mt-1 inline-flex h-5 w-5 items-center justify-center rounded-full bg-slate-900/5 text-slate-900 ring-1 ring-slate-900/10">
                                            "•"
                                        </span>
                                        <span>{*p}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </Card>

                    <Card class="p-6">
                        <div class="text-sm font-semibold text-slate-900">"Mida EelPohak parandab"</div>
                        <ul class="mt-4 space-y-3 text-sm">
                            {IMPROVEMENTS.iter().map(|i| view! { <CheckItem>{*i}</CheckItem> }).collect_view()}
                        </ul>

                        <div class="mt-6 rounded-2xl border border-slate-200 bg-white p-4">
                            <div class="text-xs font-semibold text-slate-700">"Mõtteviis"</div>
                            <div class="mt-2 text-sm text-slate-700">
                                "Fookus on lahendusel ja õppimisel, mitte süüdlase otsimisel."
                            </div>
                        </div>
                    </Card>
                </div>
            </Container>
        </section>
    }
}
