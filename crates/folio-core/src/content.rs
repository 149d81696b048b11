//! Static portfolio content.

use crate::types::{Experience, Project};

pub const OWNER_NAME: &str = "Salim Muradi";

pub const TAGLINE: &str =
    "A Multi talented software developer crafting digital experiences with code and creativity.";

pub const PROFILE_IMAGE_URL: &str = "https://picsum.photos/800/800?grayscale";

pub const CONTACT_EMAIL: &str = "hello@example.com";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I am a passionate software engineer with a deep love for building scalable web applications. \
     My journey began with a curiosity for how things work on the internet, which quickly turned into a \
     career dedicated to solving complex problems through elegant code.",
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore \
     et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut \
     aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum \
     dolore eu fugiat nulla pariatur.",
];

pub const ABOUT_QUOTE: &str = "Creativity is intelligence having fun.";

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "YouTube Clone",
        description: "Youtube clone was the first real project I have worked on that I learn many \
                      things from it. I still sometimes lorem ipsum it very well.",
        image_url: "https://picsum.photos/600/350?random=1",
        tags: &["React", "API", "Video"],
    },
    Project {
        id: 2,
        title: "Eco Dashboard",
        description: "A comprehensive dashboard for tracking environmental impact metrics using \
                      real-time data visualization libraries.",
        image_url: "https://picsum.photos/600/350?random=2",
        tags: &["D3.js", "Tailwind", "Dashboard"],
    },
    Project {
        id: 3,
        title: "AI Chat Interface",
        description: "Modern chat application interface leveraging generative AI for smart \
                      responses and context awareness.",
        image_url: "https://picsum.photos/600/350?random=3",
        tags: &["Gemini", "TypeScript", "WebSocket"],
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        id: 1,
        role: "Senior Developer",
        company: "Tech Corp",
        period: "2022 - Present",
        description: "Leading frontend architecture and mentoring junior developers.",
    },
    Experience {
        id: 2,
        role: "Frontend Engineer",
        company: "Creative Agency",
        period: "2020 - 2022",
        description: "Built award-winning websites for international clients using React and GSAP.",
    },
    Experience {
        id: 3,
        role: "Junior Developer",
        company: "Startup Inc",
        period: "2018 - 2020",
        description: "Collaborated on the core product team to deliver MVP features.",
    },
];

/// A labelled outbound link in the contact section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "LinkedIn", href: "#" },
    SocialLink { label: "Twitter", href: "#" },
    SocialLink { label: "Instagram", href: "#" },
];

/// Even-indexed projects put the image on the left.
pub fn image_on_left(index: usize) -> bool {
    index % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_unique() {
        let ids: HashSet<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_projects_have_tags() {
        assert!(PROJECTS.iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn test_experience_ordered_newest_first() {
        assert_eq!(EXPERIENCES[0].period, "2022 - Present");
        assert_eq!(EXPERIENCES.len(), 3);
    }

    #[test]
    fn test_image_side_alternates() {
        assert!(image_on_left(0));
        assert!(!image_on_left(1));
        assert!(image_on_left(2));
    }
}
