use crate::components::{Card, Container, SectionTitle};
use crate::content::{OUTCOMES, WHY_CHOOSE};
use leptos::*;

#[component]
pub fn WhySection() -> impl IntoView {
    view! {
        <section id="miks" class="py-14 sm:py-18">
            <Container>
                <SectionTitle kicker="MIKS VALITAKSE EELPOHAK" title="Praktiline, kliinikupõhine lähenemine"/>

                <div class="mt-8 grid gap-4 md:grid-cols-3">
                    {WHY_CHOOSE
                        .iter()
                        .map(|w| view! {
                            <Card class="p-6">
                                <div class="flex items-start gap-3">
                                    <span class="mt-1 inline-flex h-6 w-6 items-center justify-center rounded-xl bg-slate-900 text-white">
                                        "✓"
                                    </span>
                                    <div class="text-sm font-semibold text-slate-900">{*w}</div>
                                </div>
                            </Card>
                        })
                        .collect_view()}
                </div>

                <div class="mt-10 grid gap-4 lg:grid-cols-12">
                    <Card class="p-6 lg:col-span-7">
                        <div class="text-sm font-semibold text-slate-900">"Sotsiaalne tõestus (algfaas)"</div>
                        <div class="mt-4 rounded-2xl border border-slate-200 bg-slate-50 p-5">
                            <div class="text-sm text-slate-800">
                                "“Lõpuks on tunne, et kui midagi juhtub, on meil kontroll.”"
                            </div>
                            <div class="mt-2 text-xs font-medium text-slate-500">"\u{2014} kliiniku juht"</div>
                        </div>
                        <div class="mt-4 text-xs text-slate-500">
                            "Lisame siia rohkem tagasisidet pilootkliinikutelt, kui esimesed kasutuselevõtud on tehtud."
                        </div>
                    </Card>

                    <Card class="p-6 lg:col-span-5">
                        <div class="text-sm font-semibold text-slate-900">"Mida juht saab lõpuks"</div>
                        <div class="mt-2 text-sm leading-6 text-slate-600">
                            "Vähem manuaalset tööd, parem kontroll protsessi üle, selge prioriteet, läbipaistvus ja tõendatav ajalugu."
                        </div>

                        <div class="mt-5 grid gap-3">
                            {OUTCOMES
                                .iter()
                                .map(|o| view! {
                                    <div class="rounded-2xl border border-slate-200 bg-white p-4">
                                        <div class="text-xs font-semibold text-slate-700">{o.title}</div>
                                        <div class="mt-1 text-sm text-slate-700">{o.desc}</div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </Card>
                </div>
            </Container>
        </section>
    }
}
