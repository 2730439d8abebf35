use crate::browser::{alert, capture_context, log_warning};
use crate::components::fields::{CheckboxGroup, SelectField, TextAreaField, TextField};
use crate::components::primitives::{ButtonLink, ButtonVariant};
use crate::lead::{
    ClinicSize, ContactRole, FetchSink, HardCase, LeadForm, LeadSink, SUBMIT_FAILED_MESSAGE,
};
use leptos::*;

/// Lead-capture form and its confirmation view.
#[component]
pub fn LeadFormPanel() -> impl IntoView {
    let form = create_rw_signal(LeadForm::default());

    let can_submit = create_memo(move |_| form.with(LeadForm::can_submit));
    let sending = create_memo(move |_| form.with(|f| f.sending));
    let submitted = create_memo(move |_| form.with(|f| f.submitted));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let ctx = capture_context();
        let Some(payload) = form.try_update(|f| f.begin_submission(&ctx)).flatten() else {
            return;
        };

        spawn_local(async move {
            let outcome = FetchSink::default().deliver(&payload).await;
            if let Err(e) = &outcome {
                log_warning(&format!("EelPohak: lead submission failed: {}", e));
            }
            form.update(|f| f.finish_submission(&outcome));
            if outcome.is_err() {
                alert(SUBMIT_FAILED_MESSAGE);
            }
        });
    };

    let edit_view = move || {
        view! {
            <form class="grid gap-5" on:submit=on_submit>
                <div class="grid gap-4 sm:grid-cols-2">
                    <TextField
                        name="clinicName"
                        label="1. Kliiniku nimi"
                        required=true
                        placeholder="Nt. Tervisekeskus OÜ"
                        value=Signal::derive(move || form.with(|f| f.clinic_name.clone()))
                        on_input=move |v: String| form.update(|f| f.clinic_name = v)
                    />
                    <TextField
                        name="contactPerson"
                        label="2. Kontaktisik"
                        required=true
                        placeholder="Ees- ja perekonnanimi"
                        value=Signal::derive(move || form.with(|f| f.contact_person.clone()))
                        on_input=move |v: String| form.update(|f| f.contact_person = v)
                    />
                </div>

                <div class="grid gap-4 sm:grid-cols-2">
                    <SelectField
                        name="role"
                        label="3. Kontaktisiku roll"
                        required=true
                        options=ContactRole::ALL.iter().map(|r| r.label()).collect()
                        value=Signal::derive(move || form.with(|f| f.role.map(ContactRole::label)))
                        on_change=move |v: String| form.update(|f| f.role = ContactRole::from_label(&v))
                    />
                    <TextField
                        name="email"
                        label="4. E-post"
                        required=true
                        input_type="email"
                        placeholder="nimi@kliinik.ee"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=move |v: String| form.update(|f| f.email = v)
                    />
                </div>

                <SelectField
                    name="clinicSize"
                    label="5. Kliiniku suurus"
                    required=true
                    options=ClinicSize::ALL.iter().map(|s| s.label()).collect()
                    value=Signal::derive(move || form.with(|f| f.clinic_size.map(ClinicSize::label)))
                    on_change=move |v: String| form.update(|f| f.clinic_size = ClinicSize::from_label(&v))
                />

                <CheckboxGroup
                    label="6. Millised ohutusjuhtumid on teie jaoks täna kõige keerulisemad?"
                    options=HardCase::ALL.iter().map(|c| c.label()).collect()
                    is_checked=move |label: &'static str| {
                        HardCase::from_label(label)
                            .map(|c| form.with(|f| f.is_selected(c)))
                            .unwrap_or(false)
                    }
                    on_toggle=move |label: &'static str| {
                        if let Some(case) = HardCase::from_label(label) {
                            form.update(|f| f.toggle_hard_case(case));
                        }
                    }
                />

                <TextAreaField
                    name="biggestWorry"
                    label="7. Mis on teie suurim mure ohutusjuhtumite käsitlemisel täna?"
                    placeholder="Valikuline – 1–2 lauset aitab meil paremini vastata."
                    value=Signal::derive(move || form.with(|f| f.biggest_worry.clone()))
                    on_input=move |v: String| form.update(|f| f.biggest_worry = v)
                />

                <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
                    <div class="text-xs text-slate-500">
                        "Saadame vastuse personaalselt. Andmeid kasutame vaid kontaktiks ja sobivuse hindamiseks."
                    </div>
                    <button
                        type="submit"
                        class=move || {
                            let dim = if can_submit.get() && !sending.get() { "" } else { "opacity-60" };
                            ButtonVariant::Primary.with(&format!("px-5 py-3 {}", dim))
                        }
                        disabled=move || !can_submit.get() || sending.get()
                    >
                        "👉 Saada kliiniku info"
                    </button>
                </div>

                <Show when=move || !can_submit.get()>
                    <div class="text-xs text-amber-700">
                        "Palun täida kohustuslikud väljad (kliiniku nimi, kontaktisik, roll, e-post, kliiniku suurus)."
                    </div>
                </Show>
            </form>
        }
    };

    view! {
        <Show when=move || submitted.get() fallback=edit_view>
            <Confirmation form=form/>
        </Show>
    }
}

#[component]
fn Confirmation(form: RwSignal<LeadForm>) -> impl IntoView {
    let summary = form.with_untracked(LeadForm::confirmation);

    view! {
        <div class="space-y-4">
            <div class="inline-flex items-center gap-2 rounded-2xl border border-emerald-200 bg-emerald-50 px-4 py-3 text-emerald-800">
                <span class="font-semibold">"Aitäh!"</span>
                <span class="text-sm">"Sinu kliiniku info on salvestatud (demo)."</span>
            </div>

            <div class="text-sm text-slate-700">
                "Järgmine samm: võtame ühendust ja täpsustame vajadusel 2–3 detaili, et anda konkreetne soovitus."
            </div>

            <div class="rounded-2xl border border-slate-200 bg-white p-5">
                <div class="text-xs font-semibold text-slate-700">"Saadetud kokkuvõte (demo)"</div>
                <div class="mt-2 text-sm text-slate-700">
                    <div><span class="font-semibold">"Kliinik:"</span> " " {summary.clinic}</div>
                    <div><span class="font-semibold">"Kontakt:"</span> " " {summary.contact}</div>
                    <div><span class="font-semibold">"E-post:"</span> " " {summary.email}</div>
                    <div><span class="font-semibold">"Suurus:"</span> " " {summary.size}</div>
                    <div class="mt-2">
                        <span class="font-semibold">"Keerulised juhtumid:"</span> " " {summary.hard_cases}
                    </div>
                    <div class="mt-2">
                        <span class="font-semibold">"Suurim mure:"</span> " " {summary.biggest_worry}
                    </div>
                </div>
            </div>

            <div class="flex gap-2">
                <button
                    type="button"
                    class=ButtonVariant::Secondary.with("")
                    on:click=move |_| form.update(LeadForm::reset)
                >
                    "Täida uuesti"
                </button>
                <ButtonLink href="#kuidas">"Vaata protsessi uuesti"</ButtonLink>
            </div>
        </div>
    }
}
