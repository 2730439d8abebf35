use leptos::*;

fn join_classes(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

#[component]
pub fn Container(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=join_classes("mx-auto w-full max-w-6xl px-4 sm:px-6 lg:px-8", &class)>
            {children()}
        </div>
    }
}

#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="inline-flex items-center rounded-full border border-slate-200 bg-white/70 px-3 py-1 text-xs font-medium text-slate-700 backdrop-blur">
            {children()}
        </span>
    }
}

/// Section heading: optional kicker badge, title, optional description.
///
/// The description is passed as children so it may contain line breaks.
#[component]
pub fn SectionTitle(
    title: &'static str,
    #[prop(optional)] kicker: Option<&'static str>,
    #[prop(optional)] centered: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let wrapper = if centered { "max-w-2xl mx-auto text-center" } else { "max-w-2xl" };
    let kicker_row = if centered { "flex justify-center" } else { "" };

    view! {
        <div class=wrapper>
            {kicker.map(|k| view! { <div class=kicker_row><Badge>{k}</Badge></div> })}
            <h2 class="mt-4 text-2xl font-semibold tracking-tight text-slate-900 sm:text-3xl">{title}</h2>
            {children.map(|desc| view! { <p class="mt-3 text-base leading-7 text-slate-600">{desc()}</p> })}
        </div>
    }
}

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=join_classes("rounded-2xl border border-slate-200 bg-white shadow-soft", &class)>
            {children()}
        </div>
    }
}

#[component]
pub fn Divider() -> impl IntoView {
    view! { <div class="h-px w-full bg-slate-200/70"></div> }
}

#[component]
pub fn AnchorLink(href: &'static str, children: Children) -> impl IntoView {
    view! {
        <a href=href class="text-sm font-medium text-slate-700 hover:text-slate-900 transition-colors">
            {children()}
        </a>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Accent,
}

pub const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-xl px-4 py-2.5 text-sm font-semibold transition-all focus:outline-none focus:ring-2 focus:ring-blue-500/40 focus:ring-offset-2";

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-slate-900 text-white hover:bg-slate-800",
            ButtonVariant::Secondary => "bg-white text-slate-900 border border-slate-200 hover:bg-slate-50",
            ButtonVariant::Accent => "bg-blue-600 text-white hover:bg-blue-500",
        }
    }

    /// Full class list for a button of this variant plus any extra classes.
    pub fn with(self, extra: &str) -> String {
        join_classes(&format!("{} {}", BUTTON_BASE, self.classes()), extra)
    }
}

/// In-page link styled as a button.
#[component]
pub fn ButtonLink(
    href: &'static str,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=variant.with(&class)>{children()}</a>
    }
}

#[component]
pub fn Stat(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-slate-200 bg-white/70 p-4 backdrop-blur">
            <div class="text-xs font-medium text-slate-600">{label}</div>
            <div class="mt-1 text-lg font-semibold text-slate-900">{value}</div>
        </div>
    }
}

#[component]
pub fn CheckItem(children: Children) -> impl IntoView {
    view! {
        <li class="flex gap-3">
            <span class="mt-1 inline-flex h-5 w-5 items-center justify-center rounded-full bg-emerald-50 text-emerald-700 ring-1 ring-emerald-100">
                "✓"
            </span>
            <span class="text-slate-700">{children()}</span>
        </li>
    }
}

#[component]
pub fn CrossItem(children: Children) -> impl IntoView {
    view! {
        <li class="flex gap-3">
            <span class="mt-1 inline-flex h-5 w-5 items-center justify-center rounded-full bg-rose-50 text-rose-700 ring-1 ring-rose-100">
                "✕"
            </span>
            <span class="text-slate-700">{children()}</span>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_classes() {
        assert_eq!(join_classes("a b", ""), "a b");
        assert_eq!(join_classes("a", "p-6"), "a p-6");
    }

    #[test]
    fn test_button_variant_classes() {
        let primary = ButtonVariant::Primary.with("px-5 py-3");
        assert!(primary.starts_with(BUTTON_BASE));
        assert!(primary.contains("bg-slate-900"));
        assert!(primary.ends_with("px-5 py-3"));
        assert!(ButtonVariant::Secondary.with("").contains("border-slate-200"));
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
