use crate::components::{Card, Container, SectionTitle};
use crate::content::STAFF_REASONS;
use leptos::*;

#[component]
pub fn StaffSection() -> impl IntoView {
    view! {
        <section id="personal" class="py-14 sm:py-18">
            <Container>
                <SectionTitle kicker="MIKS PERSONAL SEDA KASUTAB" title="Sest see ei tee tööd raskemaks">
                    "Personal kasutab EelPohaki, sest see toetab tööd – mitte ei lisa survet."
                </SectionTitle>

                <div class="mt-8 grid gap-4 md:grid-cols-2">
                    {STAFF_REASONS
                        .iter()
                        .map(|r| view! {
                            <Card class="p-6">
                                <div class="text-base font-semibold text-slate-900">{r.title}</div>
                                <div class="mt-2 text-sm leading-6 text-slate-600">{r.desc}</div>
                            </Card>
                        })
                        .collect_view()}
                </div>
            </Container>
        </section>
    }
}
