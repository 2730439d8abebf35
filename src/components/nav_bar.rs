use crate::components::{AnchorLink, ButtonLink, ButtonVariant, Container};
use crate::content::{BRAND, BRAND_TAGLINE, NAV_LINKS};
use leptos::*;

/// Sticky top bar with brand mark, section links and the call to action.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <div class="sticky top-0 z-40 border-b border-slate-200/70 bg-white/70 backdrop-blur">
            <Container class="flex h-16 items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="flex h-9 w-9 items-center justify-center rounded-xl bg-slate-900 text-white font-bold">
                        "EP"
                    </div>
                    <div class="leading-tight">
                        <div class="text-sm font-semibold">{BRAND}</div>
                        <div class="text-xs text-slate-500">{BRAND_TAGLINE}</div>
                    </div>
                </div>

                <nav class="hidden items-center gap-6 md:flex">
                    {NAV_LINKS
                        .iter()
                        .map(|l| view! { <AnchorLink href=l.href>{l.label}</AnchorLink> })
                        .collect_view()}
                </nav>

                <div class="flex items-center gap-2">
                    <ButtonLink href="#kontakt" class="hidden sm:inline-flex">
                        "👉 Jäta kliiniku info"
                    </ButtonLink>
                    <ButtonLink href="#kontakt" variant=ButtonVariant::Secondary class="sm:hidden">
                        "CTA"
                    </ButtonLink>
                </div>
            </Container>
        </div>
    }
}
