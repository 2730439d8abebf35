use crate::components::{Card, Container, SectionTitle};
use crate::content::OBJECTIONS;
use leptos::*;

#[component]
pub fn BureaucracySection() -> impl IntoView {
    view! {
        <section id="burokraatia" class="py-14 sm:py-18">
            <Container>
                <SectionTitle
                    kicker="KAS SEE LISAB BÜROKRAATIAT?"
                    title="Ei. Vastupidi – see võtab seda vähemaks."
                >
                    "EelPohak ei loo uut bürokraatiat. See eemaldab käsitsi tehtud kaose."
                </SectionTitle>

                <div class="mt-8 grid gap-4 md:grid-cols-2">
                    {OBJECTIONS
                        .iter()
                        .map(|o| view! {
                            <Card class="p-6">
                                <div class="text-sm font-semibold text-slate-900">{o.question}</div>
                                <div class="mt-2 text-sm leading-6 text-slate-600">"→ " {o.answer}</div>
                            </Card>
                        })
                        .collect_view()}
                </div>
            </Container>
        </section>
    }
}
