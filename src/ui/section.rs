// SPDX-License-Identifier: MPL-2.0
//! Page sections in scroll order.

/// A navigable region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Projects,
    Thoughts,
    Hobbies,
    Contact,
}

impl Section {
    /// All sections, top to bottom.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Projects,
        Section::Thoughts,
        Section::Hobbies,
        Section::Contact,
    ];

    /// Stable identifier, also used as the diagnostics label.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::Thoughts => "thoughts",
            Section::Hobbies => "hobbies",
            Section::Contact => "contact",
        }
    }

    /// Fluent key of the navigation label.
    #[must_use]
    pub fn nav_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::Projects => "nav-projects",
            Section::Thoughts => "nav-thoughts",
            Section::Hobbies => "nav-hobbies",
            Section::Contact => "nav-contact",
        }
    }

    /// Whether the section fades in the first time it becomes visible.
    /// The hero is on screen at launch and is never animated.
    #[must_use]
    pub fn is_animated(self) -> bool {
        !matches!(self, Section::Home)
    }

    /// Position in [`Section::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
