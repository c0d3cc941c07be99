use super::{
    AboutSection, NavItem, Profile, ProjectEntry, SiteContent, SkillCategory, SkillIcon,
    SocialLink, SocialNetwork,
};
use crate::domain::model::Section;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(category: &str, icon: SkillIcon, items: &[&str]) -> SkillCategory {
    SkillCategory {
        category: category.to_string(),
        icon,
        items: strings(items),
    }
}

fn project(title: &str, description: &str, image_url: &str, link: &str) -> ProjectEntry {
    ProjectEntry {
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        link: link.to_string(),
    }
}

fn social(network: SocialNetwork, url: &str) -> SocialLink {
    SocialLink {
        network,
        url: url.to_string(),
    }
}

pub fn site_content() -> SiteContent {
    SiteContent {
        profile: Profile {
            name: "Tushar Kumar".to_string(),
            headline: "Full Stack Developer & Computer Science Student".to_string(),
            socials: vec![
                social(SocialNetwork::Github, "https://github.com/TusharNaugain"),
                social(
                    SocialNetwork::Linkedin,
                    "https://www.linkedin.com/in/tushar-naugain-aa3152292/",
                ),
                social(SocialNetwork::Twitter, "https://twitter.com/NaugainTushar"),
                social(SocialNetwork::Instagram, "https://www.instagram.com/__skipper_04/"),
            ],
        },
        navigation: vec![
            NavItem::new("Home", Section::Home),
            NavItem::new("About", Section::About),
            NavItem::new("Skills", Section::Skills),
            NavItem::new("Projects", Section::Projects),
            NavItem::new("Contact", Section::Contact),
        ],
        about: AboutSection {
            education: "Currently pursuing B.Tech in Computer Science at Polaris School of \
                        Technology, where I'm developing a strong foundation in computer science \
                        principles and modern software development practices."
                .to_string(),
            passion: "I'm passionate about creating innovative solutions that make a difference. \
                      My journey in tech is driven by curiosity and a desire to build applications \
                      that solve real-world problems."
                .to_string(),
            what_i_do: strings(&[
                "Full Stack Development",
                "Algorithm Design & Problem Solving",
                "Web Application Development",
                "Database Design & Management",
            ]),
        },
        skills: vec![
            skill(
                "Frontend Development",
                SkillIcon::Laptop,
                &["React.js", "TypeScript", "Tailwind CSS", "Next.js"],
            ),
            skill(
                "Backend Development",
                SkillIcon::Server,
                &["Node.js", "Express.js", "MongoDB", "RESTful APIs"],
            ),
            skill(
                "Computer Science",
                SkillIcon::Binary,
                &["Data Structures", "Algorithms", "System Design", "Problem Solving"],
            ),
            skill(
                "Tools & Technologies",
                SkillIcon::Globe,
                &["Git", "Docker", "AWS", "Firebase"],
            ),
        ],
        projects: vec![
            project(
                "React API Project",
                "A Pixele website clone using React and Bootstrap",
                "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&auto=format&fit=crop&q=60",
                "https://github.com/TusharNaugain/React-API-Project",
            ),
            project(
                "Carzuu Website",
                "Car featuring website built with React and Material UI",
                "https://images.unsplash.com/photo-1583121274602-3e2820c69888?w=800&auto=format&fit=crop&q=60",
                "https://github.com/TusharNaugain/Carzuu-Webite",
            ),
            project(
                "Code-Editor",
                "Code Editor Platform built with react and monaco framework",
                "photo.png",
                "https://github.com/TusharNaugain/Corousel-Code-Editor.git",
            ),
        ],
    }
}
