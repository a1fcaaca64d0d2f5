// SPDX-License-Identifier: MPL-2.0
//! Static page content.
//!
//! Personal text (bio, quotes, project blurbs) is kept verbatim and is not
//! localized. Image references are paths relative to the public asset root,
//! e.g. `images/hiking.png`.

pub mod contact;
pub mod hobbies;
pub mod profile;
pub mod projects;
pub mod thoughts;

pub use contact::{ContactKind, ContactLink, CONTACTS};
pub use hobbies::{Hobby, HOBBIES, HOBBIES_INTRO};
pub use profile::{Profile, SocialBrand, SocialLink, PROFILE};
pub use projects::{Placeholder, Project, PROJECTS, SKILLS};
pub use thoughts::{Portrait, Quote, PORTRAITS, QUOTES, THOUGHTS_INTRO};
