// templates/pages/info.rs
//
// Static content: about, how it works, terms, privacy.

use crate::api::models::AuthUser;
use crate::domain::market::{CONTACT_EMAIL, MARKETS};
use crate::templates::layouts::site_layout;
use maud::{html, Markup};

const VALUES: &[(&str, &str)] = &[
    ("Trust & Transparency", "Verified properties, clear pricing, and honest communication. No surprises, no hidden fees."),
    ("People First", "Whether you're a tenant or owner, your needs come first. We listen, understand, and deliver."),
    ("Care for Properties", "We treat every property like our own. Regular inspections, proper maintenance, genuine care."),
    ("Local Expertise", "Deep roots in Andhra Pradesh. We know these cities, neighborhoods, and what works here."),
];

const DIFFERENCES: &[(&str, &str)] = &[
    ("Full-Service Management", "We're not just a listing platform. We manage properties end-to-end."),
    ("Intermediary Model", "No direct owner-tenant contact. We handle all communication professionally."),
    ("Verified Properties Only", "Every listing is physically verified. No fake photos or misleading info."),
    ("Transparent Pricing", "8% commission for owners. No brokerage for tenants. Simple."),
];

const TENANT_STEPS: &[(&str, &str)] = &[
    ("Find Your Home", "Browse verified rental properties across Nellore, Guntur, Vijayawada, and Tirupati. Filter by location, budget, and BHK to find exactly what you need."),
    ("Schedule a Visit", "Found something you like? Request a visit and our team will coordinate a convenient time. No direct landlord calls - we handle all communication."),
    ("Apply & Get Approved", "Submit your application with basic KYC documents. We verify everything and present your profile to the owner."),
    ("Move In", "Once approved, sign the lease (we coordinate everything), pay your deposits, and move into your new home."),
];

const FAQS: &[(&str, &str)] = &[
    ("How long does the rental process take?", "Once you apply, the typical approval process takes 2-3 business days. You can move in as soon as the lease is signed and deposits are paid."),
    ("What documents do I need?", "Basic KYC documents including ID proof (Aadhaar), address proof, and income proof (salary slips or bank statements)."),
    ("Is there a brokerage fee?", "No brokerage for tenants. We charge property owners, not you. What you see is what you pay - just rent and security deposit."),
    ("How is the security deposit handled?", "Security deposits are held by PropThinks (not the owner) and returned after the move-out inspection, subject to deductions for damages."),
    ("Can I talk to the owner directly?", "PropThinks acts as the intermediary for all communication. This protects both parties and ensures professional handling of any issues."),
    ("What if something breaks in the house?", "Report it through our app or call us. We coordinate all maintenance and repairs."),
];

fn cards(items: &[(&str, &str)]) -> Markup {
    html! {
        div class="feature-grid" {
            @for (title, body) in items {
                div class="feature" { h3 { (title) } p class="muted" { (body) } }
            }
        }
    }
}

pub fn about_page(user: Option<&AuthUser>) -> Markup {
    site_layout(
        "About PropThinks",
        user,
        html! {
            section class="hero" {
                div class="container" {
                    h1 { "Simple & Stress-Free" }
                    p class="lead" { "PropThinks is a property management company serving Andhra Pradesh. We make renting simple for tenants and owners." }
                }
            }
            section class="section" {
                div class="container" { h2 { "What We Stand For" } (cards(VALUES)) }
            }
            section class="section section-alt" {
                div class="container" { h2 { "How We're Different" } (cards(DIFFERENCES)) }
            }
            section class="section" {
                div class="container" {
                    h2 { "Cities We Serve" }
                    div class="chips" {
                        @for market in MARKETS {
                            a class="chip" href={ "/" (market.slug) } { (market.name) }
                        }
                    }
                    p { a class="btn btn-primary" href="/contact" { "Get in touch" } }
                }
            }
        },
    )
}

pub fn how_it_works_page(user: Option<&AuthUser>) -> Markup {
    site_layout(
        "How It Works",
        user,
        html! {
            section class="hero" {
                div class="container" {
                    h1 { "How It Works" }
                    p class="lead" { "From finding the perfect property to moving in, we handle everything." }
                }
            }
            section class="section" {
                div class="container" {
                    ol class="steps steps-wide" {
                        @for (i, (title, body)) in TENANT_STEPS.iter().enumerate() {
                            li class="step" {
                                span class="step-num" { (i + 1) }
                                h3 { (title) }
                                p class="muted" { (body) }
                            }
                        }
                    }
                }
            }
            section class="section section-alt" {
                div class="container narrow" {
                    h2 { "Frequently Asked Questions" }
                    p class="muted" { "Got questions? We've got answers." }
                    @for (question, answer) in FAQS {
                        details class="faq" {
                            summary { (question) }
                            p { (answer) }
                        }
                    }
                }
            }
        },
    )
}

fn legal(user: Option<&AuthUser>, title: &str, body: Markup) -> Markup {
    site_layout(
        title,
        user,
        html! {
            section class="section" {
                article class="container narrow prose" {
                    h1 { (title) }
                    p class="muted" { "Last updated: January 2025" }
                    (body)
                    p { "Questions? Email " a href={ "mailto:" (CONTACT_EMAIL) } { (CONTACT_EMAIL) } "." }
                }
            }
        },
    )
}

pub fn terms_page(user: Option<&AuthUser>) -> Markup {
    legal(
        user,
        "Terms of Service",
        html! {
            h2 { "1. Acceptance of Terms" }
            p { "By using PropThinks you agree to these terms. If you do not agree, please do not use the service." }
            h2 { "2. Service Description" }
            ul {
                li { "Professional tenant screening and KYC verification" }
                li { "Rent collection and payment processing (8% commission)" }
                li { "Property maintenance coordination" }
                li { "Legal documentation and lease signing support" }
                li { "Security deposit management" }
                li { "Move-in and move-out inspections" }
            }
            h2 { "3. User Obligations" }
            ul {
                li { "Provide accurate and complete information" }
                li { "Comply with all applicable laws and regulations" }
                li { "Pay all agreed-upon fees (token, rent, security deposit, maintenance)" }
                li { "Respect property and follow lease terms" }
                li { "Communicate exclusively through PropThinks (no direct owner-tenant communication)" }
            }
            h2 { "4. Payment Terms" }
            dl {
                dt { "Token amount" } dd { "10% of monthly rent, non-refundable, deducted from first month" }
                dt { "Security Deposit" } dd { "2 months rent, held by PropThinks, returned after inspection" }
                dt { "Rent" } dd { "Due on 1st of each month, 5-day grace period, 5% late fee" }
                dt { "Commission" } dd { "8% of monthly rent for property management services" }
            }
            h2 { "5. Physical Signing Policy" }
            p { "Lease agreements are signed in person at our office or the property." }
            h2 { "6. Limitation of Liability" }
            p { "PropThinks is not liable for indirect or consequential losses arising from use of the service." }
        },
    )
}

pub fn privacy_page(user: Option<&AuthUser>) -> Markup {
    legal(
        user,
        "Privacy Policy",
        html! {
            h2 { "Information We Collect" }
            dl {
                dt { "Personal Info" } dd { "Name, email, phone number, address" }
                dt { "KYC Documents" } dd { "Identity proof (Aadhaar/PAN), address proof" }
                dt { "Financial Info" } dd { "Bank account details for rent payments" }
                dt { "Property Info" } dd { "Property details, photos, documents" }
                dt { "Usage Data" } dd { "App interaction, visit history, preferences" }
            }
            h2 { "How We Use Your Information" }
            ul {
                li { "Tenant screening and KYC verification" }
                li { "Rent collection and payment processing" }
                li { "Property maintenance coordination" }
                li { "Legal documentation (lease agreements)" }
                li { "Communication between owners, tenants, and PropThinks" }
                li { "Service improvement and analytics" }
            }
            h2 { "Data Sharing" }
            ul {
                li { "With your explicit consent" }
                li { "When required by law or legal process" }
                li { "With service providers (payment gateways, storage) under strict confidentiality" }
                li { "During property transactions (owner receives tenant KYC, tenant receives property details)" }
            }
            h2 { "Data Security" }
            p { "All data is sent over HTTPS/TLS and kept in access-controlled cloud storage." }
            h2 { "Your Rights" }
            p { "You may request access to, correction of, or deletion of your personal data at any time." }
        },
    )
}
