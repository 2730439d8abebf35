use crate::components::NavBar;
use crate::sections::{
    BureaucracySection, ContactSection, FitSection, HeroSection, HowItWorksSection,
    ProblemSection, SiteFooter, StaffSection, WhySection,
};
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-b from-slate-50 via-white to-slate-50 text-slate-900">
            <NavBar/>
            <HeroSection/>
            <ProblemSection/>
            <HowItWorksSection/>
            <StaffSection/>
            <BureaucracySection/>
            <FitSection/>
            <WhySection/>
            <ContactSection/>
            <SiteFooter/>
        </div>
    }
}
