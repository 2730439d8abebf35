use crate::components::{Badge, Card, Container, SectionTitle};
use crate::content::{Step, STEPS};
use leptos::*;

#[component]
fn StepCard(step: &'static Step) -> impl IntoView {
    view! {
        <Card class="p-6">
            <div class="flex flex-col gap-4 sm:flex-row sm:items-start sm:justify-between">
                <div class="flex items-start gap-4">
                    <div class="flex h-10 w-10 shrink-0 items-center justify-center rounded-2xl bg-slate-900 text-white font-semibold">
                        {step.number}
                    </div>
                    <div>
                        <div class="text-base font-semibold text-slate-900">{step.title}</div>
                        <ul class="mt-3 space-y-2 text-sm text-slate-700">
                            {step
                                .points
                                .iter()
                                .map(|p| view! {
                                    <li class="flex gap-3">
                                        <span class="mt-1 inline-flex h-5 w-5 items-center justify-center rounded-full bg-blue-50 text-blue-700 ring-1 ring-blue-100">
                                            "→"
                                        </span>
                                        <span>{*p}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                        <div class="mt-4 rounded-xl bg-slate-50 px-4 py-3 text-sm text-slate-700">
                            <span class="font-semibold">"Tulemus:"</span> " " {step.outcome()}
                        </div>
                    </div>
                </div>

                <div class="sm:pt-1">
                    <Badge>"Selge vastutus"</Badge>
                </div>
            </div>
        </Card>
    }
}

#[component]
pub fn HowItWorksSection() -> impl IntoView {
    view! {
        <section id="kuidas" class="py-14 sm:py-18">
            <Container>
                <SectionTitle
                    kicker="KUIDAS SEE PÄRISELT KLIINIKUS VÄLJA NÄEB"
                    title="Lihtne protsess, mis töötab ka kiirel tööpäeval"
                >
                    "Üks selge töövoog: raporteerimine → analüüs → riskihindamine → tegevusplaan → tagasiside."
                </SectionTitle>

                <div class="mt-10 grid gap-4">
                    {STEPS.iter().map(|step| view! { <StepCard step=step/> }).collect_view()}
                </div>

                <div class="mt-8 rounded-2xl border border-slate-200 bg-white p-6 shadow-soft">
                    <div class="text-sm font-semibold text-slate-900">"Kokkuvõte juhile"</div>
                    <div class="mt-2 text-sm leading-6 text-slate-700">
                        "Sina ei pea “Exceli maagiat” tegema ega kõike ise läbi töötama \u{2014} süsteem aitab prioriseerida "
                        "ning analüüs ja tegevusplaanid saavad olla delegeeritud."
                    </div>
                </div>
            </Container>
        </section>
    }
}
