//! Outbound contact links.
//!
//! Links are opaque strings handed straight to `href`; nothing here parses or
//! validates them.

/// A labelled outbound link (messaging deep link, e-mail, social profile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Primary sales channel, opened from every product page.
pub const SALES_WHATSAPP: ContactLink = ContactLink {
    label: "Fale com um consultor",
    href: "https://wa.me/5548999990000?text=Ol%C3%A1%21%20Quero%20conhecer%20os%20barcos%20Mar%C3%A9.",
};

/// Links shown in the site footer.
pub const FOOTER_LINKS: &[ContactLink] = &[
    SALES_WHATSAPP,
    ContactLink {
        label: "Instagram",
        href: "https://instagram.com/mare.boats",
    },
    ContactLink {
        label: "contato@mare.boats",
        href: "mailto:contato@mare.boats",
    },
];
