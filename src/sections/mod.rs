mod bureaucracy;
mod contact;
mod fit;
mod footer;
mod hero;
mod how_it_works;
mod problem;
mod staff;
mod why;

pub use bureaucracy::BureaucracySection;
pub use contact::ContactSection;
pub use fit::FitSection;
pub use footer::SiteFooter;
pub use hero::HeroSection;
pub use how_it_works::HowItWorksSection;
pub use problem::ProblemSection;
pub use staff::StaffSection;
pub use why::WhySection;
