// SPDX-License-Identifier: MPL-2.0

#[derive(Debug, Clone, Copy)]
pub struct Hobby {
    pub name: &'static str,
    pub image: &'static str,
}

pub const HOBBIES_INTRO: &str = "In my free time, I love to explore various hobbies that help me relax and stay creative. From outdoor adventures to quiet moments of reflection, these activities help me find balance and inspiration.";

pub const HOBBIES: &[Hobby] = &[
    Hobby {
        name: "Watching",
        image: "images/football.png",
    },
    Hobby {
        name: "Hiking",
        image: "images/hiking.png",
    },
    Hobby {
        name: "Playing",
        image: "images/playing.png",
    },
    Hobby {
        name: "Bike Ride",
        image: "images/riding.png",
    },
    Hobby {
        name: "Photography",
        image: "images/wterfalls.png",
    },
    Hobby {
        name: "Reading",
        image: "images/reading.png",
    },
];
