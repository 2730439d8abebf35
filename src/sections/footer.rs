use crate::browser::current_year;
use crate::components::{AnchorLink, Container};
use crate::content::{BRAND, FOOTER_LINKS};
use leptos::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-200/70 bg-white">
            <Container class="py-10">
                <div class="flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between">
                    <div class="text-sm text-slate-600">
                        <span class="font-semibold text-slate-900">{BRAND}</span>
                        " \u{2014} ühtne ohutusjuhtumite käsitlus esmatasandi kliinikutele."
                    </div>
                    <div class="flex flex-wrap items-center gap-4">
                        {FOOTER_LINKS
                            .iter()
                            .map(|l| view! { <AnchorLink href=l.href>{l.label}</AnchorLink> })
                            .collect_view()}
                    </div>
                </div>
                <div class="mt-4 text-xs text-slate-500">
                    {format!("© {} {}. Kõik õigused kaitstud.", current_year(), BRAND)}
                </div>
            </Container>
        </footer>
    }
}
