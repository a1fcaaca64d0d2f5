// SPDX-License-Identifier: MPL-2.0
//! Owner identity shown in the hero and footer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialBrand {
    LinkedIn,
    GitHub,
    X,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub brand: SocialBrand,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub about: &'static str,
    pub photo: &'static str,
    pub socials: &'static [SocialLink],
}

pub const PROFILE: Profile = Profile {
    name: "ajumohmd",
    role: "Front End Developer",
    about: "I am a dedicated web developer based in Kerala, India, passionate about creating clean, efficient, and user-friendly web applications. \
Specializing in React, Node.js, and modern web technologies, I enjoy solving complex problems and building scalable solutions. \
Driven by curiosity and a commitment to continuous learning, I strive to deliver high-quality code with a focus on user experience. \
My mission is to contribute to projects that make a meaningful impact in the digital world.",
    photo: "images/profile.png",
    socials: &[
        SocialLink {
            brand: SocialBrand::LinkedIn,
            href: "https://linkedin.com/in/ajmal-p-v-49a9371a0",
        },
        SocialLink {
            brand: SocialBrand::GitHub,
            href: "https://github.com/ajumohmd",
        },
    ],
};
