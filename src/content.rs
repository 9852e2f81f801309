//! Static copy shown by the showcase.
//!
//! Everything here is literal content: service entries, loader words and hero
//! text. Order in the arrays is display order.

/// Icon shown next to a service title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum IconRef {
    Media,
    Programmatic,
    Influencer,
    Email,
    Performance,
}

impl IconRef {
    /// Terminal glyph standing in for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconRef::Media => "▶",
            IconRef::Programmatic => "◎",
            IconRef::Influencer => "✔",
            IconRef::Email => "✉",
            IconRef::Performance => "↗",
        }
    }
}

/// One static service record shown in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceEntry {
    pub title: &'static str,
    pub icon: IconRef,
    pub description: &'static str,
    /// Referenced by path only, never decoded.
    pub image: &'static str,
    pub video: &'static str,
}

pub const SERVICES: [ServiceEntry; 6] = [
    ServiceEntry {
        title: "Main Media",
        icon: IconRef::Media,
        description: "Traditional media channels strategically integrated with digital initiatives to create powerful cross-platform campaigns that maximize impact and ROI.",
        image: "employee-working-marketing-setting.jpg",
        video: "videos/media-service.mp4",
    },
    ServiceEntry {
        title: "Programmatic Campaigns",
        icon: IconRef::Programmatic,
        description: "Keep customers informed at every step. Deploy pre-built automation flows for real-time status updates with our AI-powered programmatic advertising solutions.",
        image: "person-front-computer-working-html.jpg",
        video: "videos/programmatic-service.mp4",
    },
    ServiceEntry {
        title: "Influencer Marketing",
        icon: IconRef::Influencer,
        description: "Perfect-fit partnerships with content creators that align with your brand values and marketing objectives for authentic promotion and engagement.",
        image: "website-hosting-concept-with-screen.jpg",
        video: "videos/influencer-service.mp4",
    },
    ServiceEntry {
        title: "E-mail & SMS Marketing",
        icon: IconRef::Email,
        description: "Data-driven direct communication channels that deliver personalized content to build lasting customer relationships and drive immediate action.",
        image: "employee-working-marketing-setting.jpg",
        video: "videos/email-service.mp4",
    },
    ServiceEntry {
        title: "Social Media Marketing",
        icon: IconRef::Performance,
        description: "Strategic planning, content creation, and community management across all major platforms to build engaged communities that amplify brand messages.",
        image: "employee-working-marketing-setting.jpg",
        video: "videos/social-service.mp4",
    },
    ServiceEntry {
        title: "Performance Marketing",
        icon: IconRef::Performance,
        description: "Results-driven campaigns focused on measurable outcomes with transparent metrics and clear return on ad spend through our advanced analytics platform.",
        image: "website-hosting-concept-with-screen.jpg",
        video: "videos/performance-service.mp4",
    },
];

pub mod loader {
    /// Words cycled during the Spelling stage.
    pub const FULL_FORM: [&str; 4] = ["Solutions", "Creative", "Responsive", "Frontends"];

    pub const PREFIX: &str = "We are ";

    pub const ACRONYM: [char; 4] = ['S', 'U', 'R', 'F'];

    /// A piece of the tagline sentence.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Segment {
        pub text: &'static str,
        pub highlight: bool,
    }

    pub const SENTENCE: [Segment; 5] = [
        Segment { text: "Solutions ", highlight: false },
        Segment { text: "digital ", highlight: true },
        Segment { text: "waves with ", highlight: false },
        Segment { text: "innovative ", highlight: true },
        Segment { text: "solutions", highlight: true },
    ];
}

pub mod hero {
    pub const BADGE: &str = "Creative Frontend Solutions";
    pub const HEADLINE: &str = "Crafting Responsive digital experiences";
    pub const SUBHEADING: &str = "We transform ideas into immersive web experiences";
    pub const DESCRIPTION: &str = "With cutting-edge frontend technologies and creative solutions tailored to your business needs.";
    pub const CTA: &str = "Explore Solutions";
    pub const WORDMARK: &str = "SURF";
    pub const SCROLL_HINT: &str = "Scroll";
    /// Background loop, referenced by path.
    pub const BACKGROUND_VIDEO: &str = "videos/skills-bg.mp4";
}

pub mod services {
    pub const HEADING: &str = "Our Services";
    pub const SUBHEADING: &str = "Integrated marketing that moves with your audience";
    pub const CTA: &str = "Get Started";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_keep_display_order() {
        let titles: Vec<_> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles.first(), Some(&"Main Media"));
        assert_eq!(titles.last(), Some(&"Performance Marketing"));
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn full_form_has_one_word_per_acronym_letter() {
        assert_eq!(loader::FULL_FORM.len(), loader::ACRONYM.len());
        assert!(loader::FULL_FORM.iter().all(|w| !w.is_empty()));
    }
}
