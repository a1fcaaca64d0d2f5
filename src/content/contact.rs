// SPDX-License-Identifier: MPL-2.0
//! Contact channels listed in the "Get in Touch" section.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Mail,
    Whatsapp,
    Phone,
    Instagram,
    X,
}

impl ContactKind {
    /// Lower-case identifier, also used to pick the icon.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ContactKind::Mail => "mail",
            ContactKind::Whatsapp => "whatsapp",
            ContactKind::Phone => "phone",
            ContactKind::Instagram => "instagram",
            ContactKind::X => "x",
        }
    }

    /// The identifier with its first letter upper-cased.
    #[must_use]
    pub fn label(self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub href: &'static str,
}

pub const CONTACTS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::Mail,
        href: "mailto:your.ajumohmd@gmail.com",
    },
    ContactLink {
        kind: ContactKind::Whatsapp,
        href: "https://wa.me/96893186068",
    },
    ContactLink {
        kind: ContactKind::Phone,
        href: "tel:+968 93186068",
    },
    ContactLink {
        kind: ContactKind::Instagram,
        href: "https://www.instagram.com/_aju0",
    },
    ContactLink {
        kind: ContactKind::X,
        href: "https://x.com/ajumohmd",
    },
];
