use crate::components::{Footer, NavVariant, Navbar, WhatsAppButton};
use crate::sections::{
    ContactSection, FeaturesSection, HeroSection, HowItWorksSection, PricingSection, TrustedBy,
};
use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="page page-home">
            <Navbar variant={NavVariant::Landing} />
            <main id="main">
                <HeroSection />
                <TrustedBy />
                <FeaturesSection />
                <HowItWorksSection />
                <PricingSection />
                <ContactSection />
            </main>
            <Footer />
            <WhatsAppButton />
        </div>
    }
}
