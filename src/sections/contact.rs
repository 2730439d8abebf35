use crate::components::{Card, CheckItem, Container, LeadFormPanel, SectionTitle};
use crate::content::AFTER_SUBMIT;
use leptos::*;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="kontakt" class="py-14 sm:py-18">
            <Container>
                <div class="grid gap-8 lg:grid-cols-12 lg:items-start">
                    <div class="lg:col-span-5">
                        <SectionTitle
                            kicker="👉 Jäta oma kliiniku info"
                            title="Hindame, kas ja kuidas EelPohak teile sobib"
                        >
                            "Ei ole müügikohustus · Vastame personaalselt"
                        </SectionTitle>

                        <div class="mt-6 rounded-2xl border border-slate-200 bg-white p-6 shadow-soft">
                            <div class="text-sm font-semibold text-slate-900">"Mida sa saad pärast saatmist"</div>
                            <ul class="mt-4 space-y-3 text-sm">
                                {AFTER_SUBMIT.iter().map(|a| view! { <CheckItem>{*a}</CheckItem> }).collect_view()}
                            </ul>
                        </div>
                    </div>

                    <div class="lg:col-span-7">
                        <Card class="p-6">
                            <LeadFormPanel/>
                        </Card>
                    </div>
                </div>
            </Container>
        </section>
    }
}
