//! Static page copy

pub const BRAND: &str = "SB Management Group";

pub const HERO_TITLE: &str = "Unlock Exclusive Offers. No Risk. No Cost.";
pub const HERO_SUBTITLE: &str = "Partner with SB Management to access tailored solutions that \
    deliver exceptional results, completely risk-free. Discover how our streamlined approach \
    helps you get the best deals with zero cost.";
pub const HERO_CTA: &str = "Begin Consultation";

pub const HOW_IT_WORKS_INTRO: &str = "We help you take advantage of exclusive offers from top \
    platforms. No cost, no catch. Just sign up and get started.";

/// (step number, title, body)
pub const HOW_IT_WORKS: &[(&str, &str, &str)] = &[
    (
        "01",
        "Sign Up",
        "Complete our streamlined registration process in under 2 minutes. No hidden \
         obligations or complex forms, just the information we need to get you started.",
    ),
    (
        "02",
        "Get Verified",
        "Our system instantly verifies your eligibility with no waiting period. Once approved, \
         you'll have immediate access to exclusive offers tailored to your profile.",
    ),
    (
        "03",
        "Get Paid",
        "Start receiving benefits right away. Our clients typically see their first rewards \
         within 24-48 hours of approval, with no complicated redemption process.",
    ),
];

/// (quote, initials)
pub const TESTIMONIALS: &[(&str, &str)] = &[
    (
        "I signed up and got paid fast. It really helped me cover my college bills without any hassle.",
        "J.D.",
    ),
    (
        "Between classes and a part-time job, I was surprised at how easy it was to earn some extra cash with SB Management.",
        "A.M.",
    ),
    (
        "I'm busy at work, but SB Management made everything simple. I got the extra cash I needed without any fuss.",
        "R.L.",
    ),
    (
        "I wasn't sure at first, but SB Management kept it real and delivered as promised. I'm happy with the results.",
        "T.S.",
    ),
];

/// A question and its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqItem] = &[
    FaqItem {
        question: "Is this legal?",
        answer: "Yes. SB Management Group operates within all legal guidelines and compliance \
                 rules. We work with licensed and regulated platforms to provide exclusive offers \
                 to our members.",
    },
    FaqItem {
        question: "How does it work?",
        answer: "We help you maximize promotional opportunities with no risk. After you sign up, \
                 our team will verify your information and guide you through the process of \
                 accessing exclusive offers from our partner platforms.",
    },
    FaqItem {
        question: "Is there any cost to join?",
        answer: "No. There is absolutely no cost to join SB Management Group. We make our money \
                 through partnerships with platforms, not from our members.",
    },
    FaqItem {
        question: "How long does the verification process take?",
        answer: "The verification process typically takes 1-2 business days. Once verified, \
                 you'll receive instructions on how to access exclusive offers.",
    },
    FaqItem {
        question: "What information do I need to provide?",
        answer: "To get started, we need your full name, state of residence, email address, and \
                 phone number. Additional verification information may be required later in the \
                 process.",
    },
    FaqItem {
        question: "How do I get paid?",
        answer: "Payment methods vary depending on the specific offers you participate in. Our \
                 team will provide detailed instructions for each opportunity, but typically \
                 payments are made via direct deposit, PayPal, or other electronic payment methods.",
    },
    FaqItem {
        question: "Which states do you operate in?",
        answer: "SB Management Group currently operates in select states where our partner \
                 platforms are licensed. During the sign-up process, we'll confirm if your state \
                 is eligible.",
    },
    FaqItem {
        question: "What if I have more questions?",
        answer: "If you have additional questions, please visit our Contact page to get in touch \
                 with our support team. We're here to help!",
    },
];

pub const CONTACT_INTRO: &str = "We're here to help with any questions about our services. \
    Reach out, and we'll respond as soon as possible.";
pub const CONTACT_EMAIL: &str = "sbmgservice2024@gmail.com";
pub const CONTACT_PHONE: &str = "(555) 123-4567";
pub const CONTACT_SENT: &str = "Message sent! We'll get back to you shortly.";

pub const AGE_GATE_PROMPT: &str =
    "To proceed with registration, please confirm that you are 21 years of age or older.";
pub const MINOR_INTRO: &str = "We have special programs available for those under 21. Please \
    provide your contact information and we'll keep you updated. Our team will reach out to \
    contact you in the future when appropriate opportunities become available.";
pub const REGISTRATION_SENT: &str = "Your registration has been submitted successfully. Our team \
    will contact you shortly to discuss the next steps.";

pub const THANK_YOU: &str = "Your application has been received. Our team will review your \
    information and contact you shortly with next steps. To expedite the process, you can \
    schedule a consultation using our booking system.";
pub const THANK_YOU_UNDER_21: &str = "You've been added to our waiting list. We'll notify you \
    when you're eligible to join SB Management Group. In the meantime, feel free to explore \
    to learn more about what we offer.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_has_eight_items() {
        assert_eq!(FAQ.len(), 8);
        assert!(FAQ.iter().all(|i| i.question.ends_with('?')));
    }

    #[test]
    fn test_how_it_works_is_numbered() {
        let numbers: Vec<_> = HOW_IT_WORKS.iter().map(|(n, _, _)| *n).collect();
        assert_eq!(numbers, vec!["01", "02", "03"]);
    }
}
