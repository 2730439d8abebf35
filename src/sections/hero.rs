use crate::components::{Badge, ButtonLink, Card, Container, Divider, Stat};
use crate::content::{HERO_BULLETS, HERO_STATS};
use leptos::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative overflow-hidden">
            <div class="pointer-events-none absolute inset-0">
                <div class="absolute -top-24 left-1/2 h-72 w-72 -translate-x-1/2 rounded-full bg-blue-500/10 blur-3xl"></div>
                <div class="absolute -bottom-24 right-8 h-72 w-72 rounded-full bg-emerald-500/10 blur-3xl"></div>
            </div>

            <Container class="relative py-14 sm:py-20">
                <div class="grid items-start gap-10 lg:grid-cols-12">
                    <div class="lg:col-span-7">
                        <Badge>"Above the fold"</Badge>
                        <h1 class="mt-4 text-3xl font-semibold tracking-tight text-slate-900 sm:text-5xl">
                            "Ära lase juhtumitel hajuda."
                        </h1>
                        <p class="mt-5 text-base leading-7 text-slate-600 sm:text-lg">
                            <span class="font-medium text-slate-900">
                                "EelPohak viib kliiniku ohutusjuhtumite käsitluse killustatusest selge ja toimiva protsessini."
                            </span>
                            <br/>
                            "Kõik juhtumid, järeltegevused ja vastutus ühes kohas – loodud esmatasandi kliinikutele."
                        </p>

                        <div class="mt-8 grid gap-4 sm:grid-cols-3">
                            {HERO_BULLETS
                                .iter()
                                .map(|b| view! {
                                    <Card class="p-5">
                                        <div class="text-sm font-semibold text-slate-900">{b.title}</div>
                                        <div class="mt-2 text-sm leading-6 text-slate-600">{b.desc}</div>
                                    </Card>
                                })
                                .collect_view()}
                        </div>

                        <div class="mt-8 flex flex-col gap-3 sm:flex-row sm:items-center">
                            <ButtonLink href="#kontakt" class="px-5 py-3">"👉 Jäta oma kliiniku info"</ButtonLink>
                            <div class="text-sm text-slate-600">
                                "Et saaksime hinnata, kas ja kuidas EelPohak teile sobib"
                                <div class="text-xs text-slate-500">"Ei ole müügikohustus · Vastame personaalselt"</div>
                            </div>
                        </div>
                    </div>

                    <div class="lg:col-span-5">
                        <Card class="p-6">
                            <div class="flex items-center justify-between gap-4">
                                <div>
                                    <div class="text-sm font-semibold">"Kiire ülevaade juhile"</div>
                                    <div class="mt-1 text-sm text-slate-600">
                                        "Üks koht, kus näed seisu, vastutajaid ja prioriteete."
                                    </div>
                                </div>
                                <Badge>"Protsess + nähtavus"</Badge>
                            </div>

                            <div class="mt-5 grid gap-3 sm:grid-cols-2">
                                {HERO_STATS
                                    .iter()
                                    .map(|s| view! { <Stat label=s.label value=s.value/> })
                                    .collect_view()}
                            </div>

                            <Divider/>

                            <div class="mt-5 rounded-2xl border border-slate-200 bg-slate-50 p-4">
                                <div class="text-xs font-semibold text-slate-700">"Ankurlause"</div>
                                <div class="mt-2 text-sm leading-6 text-slate-700">
                                    "EelPohak toetab õppimist ja kvaliteedi parandamist kliinikus \u{2014} enne, kui tekib vajadus riiklikuks raporteerimiseks."
                                </div>
                            </div>
                        </Card>
                    </div>
                </div>
            </Container>
        </section>
    }
}
