// SPDX-License-Identifier: MPL-2.0

#[derive(Debug, Clone, Copy)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Portrait {
    pub image: &'static str,
    pub alt: &'static str,
}

pub const THOUGHTS_INTRO: &str = "I believe that good behavior is the cornerstone of a civilized society and personal success. It's about showing respect, empathy, and kindness, not because it's easy, but because it's right. These values are the foundation of strong relationships and a positive impact on the world around us.";

pub const QUOTES: &[Quote] = &[
    Quote {
        text: "“The best of people are those who are most beneficial to people.”",
        author: "― Prophet Muhammad ﷺ",
    },
    Quote {
        text: "\"Simplicity is the ultimate sophistication.\"",
        author: "- Leonardo da Vinci",
    },
    Quote {
        text: "\"The world is a dangerous place to live, not because of the people who are evil, but because of the people who don't do anything about it.\"",
        author: "- Albert Einstein",
    },
];

pub const PORTRAITS: &[Portrait] = &[
    Portrait {
        image: "images/teressa.png",
        alt: "Image 1",
    },
    Portrait {
        image: "images/gandhi.png",
        alt: "Image 2",
    },
    Portrait {
        image: "images/abraham.png",
        alt: "Image 3",
    },
    Portrait {
        image: "images/nelson.png",
        alt: "Image 4",
    },
];
