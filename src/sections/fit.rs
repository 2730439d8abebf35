use crate::components::{Card, CheckItem, Container, CrossItem, SectionTitle};
use crate::content::{DOES_NOT_FIT_WHEN, FITS_WHEN};
use leptos::*;

#[component]
pub fn FitSection() -> impl IntoView {
    view! {
        <section id="sobivus" class="py-14 sm:py-18">
            <Container>
                <SectionTitle kicker="KELLELE SEE SOBIB" title="Kas see on teie kliinikule?"/>

                <div class="mt-8 grid gap-4 md:grid-cols-2">
                    <Card class="p-6">
                        <div class="text-base font-semibold text-slate-900">"Sobib, kui:"</div>
                        <ul class="mt-4 space-y-3 text-sm">
                            {FITS_WHEN.iter().map(|f| view! { <CheckItem>{*f}</CheckItem> }).collect_view()}
                        </ul>
                    </Card>

                    <Card class="p-6">
                        <div class="text-base font-semibold text-slate-900">"Ei sobi, kui:"</div>
                        <ul class="mt-4 space-y-3 text-sm">
                            {DOES_NOT_FIT_WHEN.iter().map(|f| view! { <CrossItem>{*f}</CrossItem> }).collect_view()}
                        </ul>
                    </Card>
                </div>
            </Container>
        </section>
    }
}
