//! Marketing copy for the landing page.
//!
//! Everything here is static. The server renders it; nothing in this crate
//! interprets it beyond indexing into the lists.

/// Product name.
pub const PRODUCT_NAME: &str = "SugarSaathi";

/// Hero tagline.
pub const TAGLINE: &str = "Track less, live more.";

/// A phone screenshot shown in the feature showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screenshot {
    /// File name under the assets directory.
    pub asset: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

/// Screenshots in tab order. The first one is selected by default.
pub const SCREENSHOTS: &[Screenshot] = &[
    Screenshot {
        asset: "language-phone.png",
        alt: "Language Selection Screen",
        caption: "Speak in your language",
    },
    Screenshot {
        asset: "voice-phone.png",
        alt: "Voice Interaction Screen",
        caption: "Voice-Powered Interaction",
    },
    Screenshot {
        asset: "food-phone.png",
        alt: "Food Tracking Main Screen",
        caption: "Track meals effortlessly",
    },
    Screenshot {
        asset: "foodupload-phone.png",
        alt: "Meal Photo Upload Screen",
        caption: "Snap and upload meals",
    },
    Screenshot {
        asset: "foodupload2-phone.png",
        alt: "Instant Meal Feedback Screen",
        caption: "Get instant feedback",
    },
];

/// A card in the "Everything you need" grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Effortless Voice Logging",
        description: "Use your voice or tap to log meals, insulin, and sugar.",
    },
    Feature {
        title: "Quick 2-Minute Tracking",
        description: "Track everything you need in under 2 minutes, freeing up your time to focus on living.",
    },
    Feature {
        title: "Smart Photo Analysis",
        description: "Snap your meals, and we'll help you estimate carbs, making tracking even simpler.",
    },
];

/// A question in the FAQ accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Will it recognize Indian meals like roti, sabzi, or dosa?",
        answer: "Yes! Our meal analysis is trained on thousands of Indian dishes and cooking methods to ensure accurate nutritional insights.",
    },
    Faq {
        question: "How do I log my meals using the app?",
        answer: "Just click a photo, scan a barcode, or speak the dish name. The AI recognizes Indian foods and provides a full nutritional breakdown based on ingredients and cooking method.",
    },
    Faq {
        question: "Can my family or caregiver track my health through this app?",
        answer: "Yes. You can grant secure access to caregivers or family members, allowing them to receive updates, reports, and emergency alerts.",
    },
    Faq {
        question: "I can't understand English. What should I do?",
        answer: "No worries! You can change the app to your language, just speak or select it, and everything will appear in that language.",
    },
    Faq {
        question: "Can I upload existing medical documents?",
        answer: "Yes. Upload photos or PDFs anytime. The AI reads your reports and updates your health data regularly.",
    },
];

/// Copy for the "why we built it" section.
pub const WHY_HEADING: &str = "Why We Built SugarSaathi for You";
pub const WHY_BODY: &str = "We created SugarSaathi to be your trusted health partner, understanding Indian foods, languages, and your health. Our mission is to help you manage diabetes simply and personally every day, so you can focus on living your best life.";
pub const WHY_CLOSING: &str = "Finally, a Health App That Listens.";

/// Copy for the waitlist section.
pub const WAITLIST_HEADING: &str = "Join the SugarSaathi Waitlist";
pub const WAITLIST_OFFER: &str = "FREE 3 MONTH PLAN FOR FIRST 100 USERS";
pub const WAITLIST_PITCH: &str = "Be among the first to experience SugarSaathi with exclusive early access and onboarding support.";

/// The founder's note, paragraph by paragraph.
pub const FOUNDER_NOTE: &[&str] = &[
    "My family's personal journey with diabetes is the heart behind SugarSaathi. I saw the daily questions, the small frustrations, and the need for a guide that truly understands.",
    "SugarSaathi was born from that experience. My mission is simple: to build the companion I wished my family had. A 'Saathi' that speaks your language, simplifies the complex, and supports you, always.",
    "We are building this so that no one has to live in fear of sudden heart attacks or the devastating health consequences of this disease, all while wishing they just knew what was happening in their body.",
    "You are not alone in this.",
];
pub const FOUNDER_SIGN_OFF: &str = "With heartfelt support,";
pub const FOUNDER_NAME: &str = "Alisha Tharwani";

/// Addresses listed in the footer. The second one is also the queries
/// address under the waitlist form.
pub const CONTACT_EMAILS: &[&str] = &["contact@sugarsaathi.com", "sugarsaathi@gmail.com"];
pub const QUERIES_EMAIL: &str = "sugarsaathi@gmail.com";

/// A navigation link: label and in-page anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const HEADER_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#" },
    NavLink { label: "Why SugarSaathi", href: "#why-sugarsaathi" },
    NavLink { label: "Contact Us", href: "#footer" },
    NavLink { label: "Features", href: "#features" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#" },
    NavLink { label: "Features", href: "#features" },
    NavLink { label: "About Us", href: "#learn-about-us" },
    NavLink { label: "Join Waitlist", href: "#waitlist" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_sizes() {
        assert_eq!(SCREENSHOTS.len(), 5);
        assert_eq!(FEATURES.len(), 3);
        assert_eq!(FAQS.len(), 5);
    }

    #[test]
    fn queries_address_is_a_contact_address() {
        assert!(CONTACT_EMAILS.contains(&QUERIES_EMAIL));
        for addr in CONTACT_EMAILS {
            assert!(crate::email::is_valid_email(addr));
        }
    }
}
