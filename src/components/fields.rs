use leptos::*;

const CONTROL_CLASS: &str = "mt-2 w-full rounded-xl border border-slate-200 bg-white px-3 py-2.5 text-sm text-slate-900 outline-none transition focus:border-blue-400 focus:ring-4 focus:ring-blue-500/10";

#[component]
fn FieldLabel(label: &'static str, required: bool) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between">
            <span class="text-sm font-medium text-slate-800">{label}</span>
            {required.then(|| view! {
                <span class="text-xs font-medium text-slate-500">"Kohustuslik"</span>
            })}
        </div>
    }
}

#[component]
pub fn TextField(
    name: &'static str,
    label: &'static str,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="block">
            <FieldLabel label=label required=required/>
            <input
                name=name
                type=input_type
                required=required
                placeholder=placeholder
                class=CONTROL_CLASS
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </label>
    }
}

/// Single choice from a fixed list, with a disabled "Vali…" placeholder
/// that stays selected until the visitor picks something.
#[component]
pub fn SelectField(
    name: &'static str,
    label: &'static str,
    options: Vec<&'static str>,
    value: Signal<Option<&'static str>>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="block">
            <FieldLabel label=label required=required/>
            <select
                name=name
                required=required
                class=CONTROL_CLASS
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                <option value="" disabled=true selected=move || value.get().is_none()>
                    "Vali…"
                </option>
                {options
                    .into_iter()
                    .map(|opt| view! {
                        <option value=opt selected=move || value.get() == Some(opt)>
                            {opt}
                        </option>
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn TextAreaField(
    name: &'static str,
    label: &'static str,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="block">
            <FieldLabel label=label required=required/>
            <textarea
                name=name
                required=required
                placeholder=placeholder
                rows="4"
                class=format!("{} resize-y", CONTROL_CLASS)
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Multi-select checklist. `is_checked` reports the current state of an
/// option, `on_toggle` flips it.
#[component]
pub fn CheckboxGroup(
    label: &'static str,
    options: Vec<&'static str>,
    #[prop(into)] is_checked: Callback<&'static str, bool>,
    #[prop(into)] on_toggle: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <fieldset class="block">
            <legend class="text-sm font-medium text-slate-800">{label}</legend>
            <div class="mt-3 grid gap-2 sm:grid-cols-2">
                {options
                    .into_iter()
                    .map(|opt| view! {
                        <label class="flex cursor-pointer items-start gap-3 rounded-xl border border-slate-200 bg-white px-3 py-2.5 text-sm text-slate-800 hover:bg-slate-50">
                            <input
                                type="checkbox"
                                class="mt-0.5 h-4 w-4 rounded border-slate-300 text-blue-600 focus:ring-blue-500"
                                prop:checked=move || is_checked.call(opt)
                                on:change=move |_| on_toggle.call(opt)
                            />
                            <span>{opt}</span>
                        </label>
                    })
                    .collect_view()}
            </div>
        </fieldset>
    }
}
