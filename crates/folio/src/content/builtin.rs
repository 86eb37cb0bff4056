//! The portfolio content compiled into the crate.

use std::collections::BTreeMap;

use super::model::{
    ContactInfo, EducationEntry, EndPeriod, HackathonEntry, Icon, NavItem, Profile, Project,
    ProjectLink, Registry, SocialLink, WorkExperience,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn website(href: &str) -> ProjectLink {
    ProjectLink {
        kind: "Website".to_string(),
        href: href.to_string(),
        icon: Icon::new("icons:globe"),
    }
}

/// Build the built-in registry.
#[must_use]
pub fn registry() -> Registry {
    Registry {
        profile: profile(),
        contact: contact(),
        work: work(),
        education: education(),
        projects: projects(),
        hackathons: hackathons(),
    }
}

fn profile() -> Profile {
    Profile {
        name: "Marx Yeh".to_string(),
        initials: "MY".to_string(),
        url: "https://marx.adastra.tw".to_string(),
        location: "Taipei, Taiwan".to_string(),
        location_link: "https://www.google.com/maps/place/Taipei,+Taiwan".to_string(),
        description: "Engineer and entrepreneur focused on AI and software development. \
            Currently building Adastra, an AI-powered solution for public relations and event \
            management, while exploring social complex systems through ML and DL."
            .to_string(),
        summary: "My work spans freelancing, leading student-driven projects, and diving deep \
            into research on social complex systems. With expertise in Machine Learning and Deep \
            Learning, I explore innovative ways to model human behavior and solve real-world \
            challenges.\n\nAt Adastra, I\u{2019}m driving the development of an AI-powered \
            platform for public relations and event management. Collaborating closely with our \
            first client, we\u{2019}re creating scalable, cutting-edge software tailored to their \
            needs. A relentless problem solver, I thrive at the intersection of AI, technology, \
            and impactful solutions, continuously delivering results that matter."
            .to_string(),
        avatar_url: "/me.png".to_string(),
        skills: strings(&[
            "React",
            "Next.js",
            "Typescript",
            "Node.js",
            "Python",
            "PyTorch",
            "Go",
            "Postgres",
            "Docker",
            "Kubernetes",
            "C++",
            "C#",
            "Rust",
            "AWS",
            "GCP",
            "Azure",
            "Cloudflare",
            "Firebase",
            "Entrepreneurship",
            "Product Management",
            "Data Science",
            "Machine Learning",
            "Deep Learning",
            "NLP",
            "Computer Vision",
            "Social Media Analysis",
        ]),
        navbar: vec![
            NavItem {
                href: "/".to_string(),
                icon: Icon::new("lucide:home"),
                label: "Home".to_string(),
            },
            NavItem {
                href: "/blog".to_string(),
                icon: Icon::new("lucide:notebook"),
                label: "Blog".to_string(),
            },
        ],
    }
}

fn contact() -> ContactInfo {
    let mut social = BTreeMap::new();
    social.insert(
        "GitHub".to_string(),
        SocialLink {
            name: "GitHub".to_string(),
            url: "https://github.com/youmingyeh".to_string(),
            icon: Icon::new("icons:github"),
            navbar: true,
        },
    );
    social.insert(
        "LinkedIn".to_string(),
        SocialLink {
            name: "LinkedIn".to_string(),
            url: "https://www.linkedin.com/in/%E5%8F%88%E9%8A%98-%E8%91%89-00b50b272/"
                .to_string(),
            icon: Icon::new("icons:linkedin"),
            navbar: true,
        },
    );

    ContactInfo {
        email: "b10705052@ntu.edu.tw".to_string(),
        tel: "+123456789".to_string(),
        social,
    }
}

fn work() -> Vec<WorkExperience> {
    vec![
        WorkExperience {
            company: "Adastra".to_string(),
            href: "https://adastra.tw".to_string(),
            badges: vec![],
            location: "Taipei, Taiwan".to_string(),
            title: "Co-Founder & Product Lead".to_string(),
            logo_url: "/adastra.png".to_string(),
            start: "August 2024".to_string(),
            end: EndPeriod::Present,
            description: "Found Proof-of-Concept and developed the MVP of Adastra, an \
                AI-powered solution for public relations and event management. Collaborated with \
                our first client to create a scalable, cutting-edge software tailored to their \
                needs."
                .to_string(),
        },
        WorkExperience {
            company: "Academia Sinica".to_string(),
            href: "https://www.sinica.edu.tw/en".to_string(),
            badges: vec![],
            location: "Taipei, Taiwan".to_string(),
            title: "Research Assistant".to_string(),
            logo_url: "/academia-sinica.png".to_string(),
            start: "July 2024".to_string(),
            end: EndPeriod::Present,
            description: "Conducting research on social complex systems using Machine Learning \
                and Deep Learning."
                .to_string(),
        },
        WorkExperience {
            company: "PDOGS".to_string(),
            href: "https://pdogs.ntu.im/".to_string(),
            badges: vec![],
            location: "Taipei, Taiwan".to_string(),
            title: "DevOps Engineer".to_string(),
            logo_url: "/pdogs.png".to_string(),
            start: "June 2022".to_string(),
            end: EndPeriod::from("August 2022"),
            description: "Maintained and developed the PDOGS platform, a judge system for \
                programming, CI/CD pipeline and managed the Infrastructure."
                .to_string(),
        },
        WorkExperience {
            company: "ChungHwa Telecom Laboratories".to_string(),
            href: "https://www.chttl.com.tw/en/".to_string(),
            badges: vec![],
            location: "Taipei, Taiwan".to_string(),
            title: "NLP + Developer".to_string(),
            logo_url: "/chunghwa.png".to_string(),
            start: "July 2022".to_string(),
            end: EndPeriod::from("August 2022"),
            description: "Developed a information system for the hundreds of stakeholders."
                .to_string(),
        },
    ]
}

fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            school: "National Taiwan University".to_string(),
            href: "https://www.ntu.edu.tw".to_string(),
            degree: "M.S. in Computer Science".to_string(),
            logo_url: "/ntu.png".to_string(),
            start: "2025".to_string(),
            end: "2027".to_string(),
        },
        EducationEntry {
            school: "National Taiwan University".to_string(),
            href: "https://www.ntu.edu.tw".to_string(),
            degree: "B.M. in Information Management".to_string(),
            logo_url: "/ntu.png".to_string(),
            start: "2021".to_string(),
            end: "2025".to_string(),
        },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Adastra".to_string(),
            href: Some("https://adastra.tw".to_string()),
            dates: "August 2024 - Present".to_string(),
            active: true,
            description: "A platform that uses AI to help public relations and event management \
                teams to manage their events and PR campaigns."
                .to_string(),
            technologies: strings(&[
                "React",
                "Next.js",
                "AI SDK",
                "Typescript",
                "Hono",
                "TailwindCSS",
                "Node.js",
                "SQLite",
                "OpenAI",
                "Cloudflare",
                "Supabase",
            ]),
            links: Some(vec![website("https://adastra.tw")]),
            image: Some("/adastra-screenshot.png".to_string()),
        },
        Project {
            title: "Glimmer".to_string(),
            href: Some("https://glimmer.adastra.tw/".to_string()),
            dates: "-".to_string(),
            active: true,
            description: "A browser extension that helps you navigate to Google, ChatGPT, \
                Perplexity and other tools with simple highlighting and left-clicking."
                .to_string(),
            technologies: strings(&[
                "React",
                "Typescript",
                "TailwindCSS",
                "Browser Extension",
                "Cloudflare Workers",
            ]),
            links: Some(vec![website("https://glimmer.adastra.tw")]),
            image: Some("/glimmer.png".to_string()),
        },
        Project {
            title: "NTU ArtFest 2024 Riddle City Game".to_string(),
            href: Some("https://riddlecity.ntuartfest.com/".to_string()),
            dates: "2024".to_string(),
            active: true,
            description: "A interactive game that uses riddles to guide players through the NTU \
                campus, showcasing the ArtFest 2024 events. Ended up with 200+ players engaging \
                with the game in 2 weeks."
                .to_string(),
            technologies: strings(&["React", "Next.js"]),
            links: Some(vec![website("https://riddlecity.ntuartfest.com")]),
            image: Some("/riddlecity.png".to_string()),
        },
        Project {
            title: "Production Scheduling Optimization".to_string(),
            href: Some("https://im-project-demo.vercel.app/".to_string()),
            dates: "Jan 2024 - Present".to_string(),
            active: true,
            description: "Graduation project of Information Management, using Operations \
                Research and Mixed Integer Programming to optimize the production scheduling of \
                a factory, deployed on Google Cloud Platform with well-designed API and database."
                .to_string(),
            technologies: strings(&[
                "GuRoBi",
                "Python",
                "FastAPI",
                "Cloud RUn",
                "Pub/Sub",
                "Firestore",
            ]),
            links: Some(vec![website("https://im-project-demo.vercel.app/")]),
            image: Some("/im-project.png".to_string()),
        },
        Project {
            title: "Enhanced INFEKTA".to_string(),
            href: None,
            dates: "Jan 2024 - Present".to_string(),
            active: true,
            description: "A project that enhances the INFEKTA platform, a epidemic model \
                enhanced with generative agents, simulating the dynamics of infectious diseases \
                with LLM Agents."
                .to_string(),
            technologies: strings(&[
                "Python",
                "LLM",
                "Agent-based Simulation",
                "Epidemic Model",
            ]),
            links: None,
            image: Some("/infekta.gif".to_string()),
        },
    ]
}

fn hackathons() -> Vec<HackathonEntry> {
    vec![
        HackathonEntry {
            title: "PDAO 2023".to_string(),
            dates: "2022".to_string(),
            location: "Taipei, Taiwan".to_string(),
            description: "Worked as a System Engineer and Problem Setter, developed the \
                scoreboard for the competition."
                .to_string(),
            image: "https://scontent.ftpe7-4.fna.fbcdn.net/v/t39.30808-6/\
                333039514_3358765871049793_7403106067881270151_n.jpg?_nc_cat=107&ccb=1-7\
                &_nc_sid=6ee11a&_nc_ohc=uj9PMQib-9kQ7kNvgEhiDF7&_nc_zt=23&_nc_ht=scontent.ftpe7-4.fna\
                &_nc_gid=AIWGMSmzVEDofSd7u2nMuMr\
                &oh=00_AYDEjWlBZYXU1T32Rtu0yQd8knRjQOM-CncJ28Adc7ZNjQ&oe=67623F01"
                .to_string(),
            links: None,
        },
        HackathonEntry {
            title: "CodeFest Taipei 2024".to_string(),
            dates: "2024".to_string(),
            location: "Taipei, Taiwan".to_string(),
            description: "Developed realtime cilivian reciprocity network with advanced \
                algorithm and Native APIs."
                .to_string(),
            image: "https://codefest.taipei/images/logo.svg".to_string(),
            links: Some(vec![]),
        },
        HackathonEntry {
            title: "ANU-NTU Students Hackathon Competition".to_string(),
            dates: "2024".to_string(),
            location: "Taipei, Taiwan".to_string(),
            description: "Winning the small hackathon with a project using multimodal \
                generative models to generate montages for investigator to understand the crime \
                scene with witnesses."
                .to_string(),
            image: "https://hackathon.ntu.im/images/logo.png".to_string(),
            links: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_literals_unmodified() {
        let registry = registry();
        assert_eq!(registry.profile.name, "Marx Yeh");
        assert_eq!(registry.profile.location, "Taipei, Taiwan");
        assert_eq!(registry.profile.initials, "MY");
    }

    #[test]
    fn test_summary_has_two_paragraphs() {
        let registry = registry();
        let paragraphs: Vec<_> = registry.profile.summary_paragraphs().collect();
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs[0].starts_with("My work spans"));
        assert!(paragraphs[1].starts_with("At Adastra"));
    }

    #[test]
    fn test_long_strings_have_single_spaces() {
        // Line continuations must not leave double spaces or newlines behind.
        let registry = registry();
        assert!(!registry.profile.description.contains("  "));
        assert!(!registry.hackathons[0].image.contains(' '));
        assert!(registry.hackathons[0].image.ends_with("&oe=67623F01"));
    }

    #[test]
    fn test_skill_order_preserved() {
        let registry = registry();
        assert_eq!(registry.profile.skills.len(), 26);
        assert_eq!(registry.profile.skills[0], "React");
        assert_eq!(registry.profile.skills[12], "Rust");
        assert_eq!(
            registry.profile.skills.last().map(String::as_str),
            Some("Social Media Analysis")
        );
    }

    #[test]
    fn test_work_present_preserved() {
        let registry = registry();
        assert_eq!(registry.work[0].company, "Adastra");
        assert_eq!(registry.work[0].end, EndPeriod::Present);
        assert_eq!(registry.work[0].end.as_str(), "Present");
        assert_eq!(registry.work[2].end.as_str(), "August 2022");
    }

    #[test]
    fn test_current_positions() {
        let registry = registry();
        let current: Vec<_> = registry
            .current_positions()
            .map(|w| w.company.as_str())
            .collect();
        assert_eq!(current, vec!["Adastra", "Academia Sinica"]);
    }

    #[test]
    fn test_infekta_has_no_href_or_links() {
        let registry = registry();
        let infekta = registry
            .projects
            .iter()
            .find(|p| p.title == "Enhanced INFEKTA")
            .unwrap();
        assert!(infekta.href.is_none());
        assert!(infekta.links.is_none());
        assert!(infekta.links().is_empty());
        assert_eq!(infekta.image.as_deref(), Some("/infekta.gif"));
    }

    #[test]
    fn test_hackathon_links_absent_and_empty_are_distinct() {
        let registry = registry();
        assert!(registry.hackathons[0].links.is_none());
        assert_eq!(registry.hackathons[1].links, Some(vec![]));
    }

    #[test]
    fn test_navbar_socials() {
        let registry = registry();
        let keys: Vec<_> = registry.contact.navbar_socials().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["GitHub", "LinkedIn"]);
    }

    #[test]
    fn test_counts() {
        let counts = registry().counts();
        assert_eq!(counts.work, 4);
        assert_eq!(counts.education, 2);
        assert_eq!(counts.projects, 5);
        assert_eq!(counts.hackathons, 3);
        assert_eq!(counts.social, 2);
    }
}
