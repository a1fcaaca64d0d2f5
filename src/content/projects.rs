// SPDX-License-Identifier: MPL-2.0

/// Colour block drawn in place of a project screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// Background as `0xRRGGBB`.
    pub background: u32,
    /// Caption colour as `0xRRGGBB`.
    pub foreground: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub placeholder: Placeholder,
    pub link: &'static str,
}

pub const SKILLS: &[&str] = &[
    "React",
    "Node.js",
    "React Native",
    "Firebase",
    "TypeScript",
    "Python",
    "Tailwind CSS",
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Project Alpha",
        description: "A web application built to solve a common industry problem. It focuses on clean design and robust back-end logic.",
        placeholder: Placeholder {
            background: 0xe0f2fe,
            foreground: 0x0c4a6e,
        },
        link: "#",
    },
    Project {
        title: "Project Beta",
        description: "A mobile-first app designed to connect people with local events in real-time. It features a sleek, user-friendly interface.",
        placeholder: Placeholder {
            background: 0xe0f7fa,
            foreground: 0x004d40,
        },
        link: "#",
    },
    Project {
        title: "Project Gamma",
        description: "A powerful data visualization tool that processes complex datasets into interactive and easy-to-understand charts.",
        placeholder: Placeholder {
            background: 0xfff3e0,
            foreground: 0xff6f00,
        },
        link: "#",
    },
];
