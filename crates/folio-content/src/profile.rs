#![forbid(unsafe_code)]

//! Home page data: profile, skills, experience, contact links.

use folio_core::{IconRef, SectionDescriptor};
use folio_widgets::NavItem;
use serde::Serialize;

/// Public path of the resume PDF.
pub const RESUME_PATH: &str = "/resume/Prasad_Narkhede_AWSCloud.pdf";
/// File name of the resume under the asset directory.
pub const RESUME_FILE: &str = "Prasad_Narkhede_AWSCloud.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub site_url: &'static str,
    pub resume_path: &'static str,
    pub highlights: &'static [&'static str],
    pub available_for: &'static [&'static str],
}

pub static PROFILE: Profile = Profile {
    name: "Prasad Narkhede",
    title: "Cloud & DevOps Engineer",
    tagline: "I specialize in designing, automating, and scaling secure AWS cloud architectures. From CI/CD pipelines to infrastructure cost optimization, I build solutions that are reliable, efficient, and production-ready.",
    site_url: "https://prasadnarkhede.dev",
    resume_path: RESUME_PATH,
    highlights: &[
        "Docker",
        "CI/CD pipelines",
        "Kubernetes",
        "Cloud Automation",
        "Infrastructure as Code",
    ],
    available_for: &[
        "AWS Cloud Architecture Design",
        "DevOps Consulting & Implementation",
        "Infrastructure Cost Optimization",
        "CI/CD Pipeline Development",
        "Cloud Migration Projects",
    ],
};

impl Profile {
    /// Absolute URL for a site-relative path.
    pub fn url(&self, path: &str) -> String {
        let base = self.site_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: IconRef,
    pub skills: &'static [&'static str],
}

pub static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Cloud Platforms",
        icon: IconRef("cloud"),
        skills: &["AWS (EC2, S3, RDS, EFS, ElastiCache)", "Route 53", "Lambda", "ACM", "CloudWatch"],
    },
    SkillCategory {
        title: "DevOps & IaC",
        icon: IconRef("git-branch"),
        skills: &["Terraform", "Ansible", "Docker", "GitHub Actions", "GitLab CI/CD", "Jenkins"],
    },
    SkillCategory {
        title: "Containers & Orchestration",
        icon: IconRef("server"),
        skills: &["Docker Compose", "Kubernetes (EKS basics)", "Container Registry"],
    },
    SkillCategory {
        title: "Monitoring & Security",
        icon: IconRef("shield"),
        skills: &["CloudWatch", "WAF", "IAM", "Fail2Ban", "Nginx Hardening"],
    },
    SkillCategory {
        title: "Programming/Scripting",
        icon: IconRef("code"),
        skills: &["Python", "Bash", "PHP basics", "Automation Scripts"],
    },
    SkillCategory {
        title: "Infrastructure",
        icon: IconRef("database"),
        skills: &["Auto Scaling", "Load Balancers", "VPC Design", "Cost Optimization"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Tej IT Solutions",
        role: "Cloud & DevOps Engineer",
        period: "2023 - Present",
        location: "Remote",
        kind: "Current Role",
        highlights: &[
            "Migrated 30+ PHP & Node.js applications from third-party vendor to AWS cloud infrastructure",
            "Designed multi-app architecture with EC2, Auto Scaling, ALB, EFS, RDS, and ElastiCache for high availability",
            "Achieved 40% AWS cost savings through reserved instances, auto scaling policies, and CPU credits monitoring",
            "Built comprehensive CI/CD pipelines for PHP applications using GitLab & GitHub Actions",
            "Automated SSL certificate renewal and EC2 scheduling with AWS Lambda & EventBridge",
            "Implemented infrastructure as code using Terraform for consistent, repeatable deployments",
        ],
    },
    Experience {
        company: "Exlearn Technologies",
        role: "Cloud Intern",
        period: "2022 - 2023",
        location: "Hybrid",
        kind: "Internship",
        highlights: &[
            "Assisted in Terraform-based Infrastructure as Code deployments for multiple environments",
            "Worked on automated backup strategies and S3 lifecycle policies for cost optimization",
            "Gained hands-on experience in Linux server hardening and continuous monitoring setup",
            "Collaborated on container orchestration projects using Docker and basic Kubernetes concepts",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub icon: IconRef,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    /// Links leaving the site open in a new tab.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

pub static CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        icon: IconRef("mail"),
        label: "Email",
        value: "narkhedeprasad8@gmail.com",
        href: "mailto:narkhedeprasad8@gmail.com",
    },
    ContactLink {
        icon: IconRef("linkedin"),
        label: "LinkedIn",
        value: "linkedin.com/in/prasadnarkhede",
        href: "https://linkedin.com/in/prasad-narkhede-b14688164",
    },
    ContactLink {
        icon: IconRef("github"),
        label: "GitHub",
        value: "github.com/prasadnarkhede",
        href: "https://github.com/prasadnar100699",
    },
    ContactLink {
        icon: IconRef("file-text"),
        label: "Resume",
        value: "Download PDF",
        href: RESUME_PATH,
    },
];

/// Anchored sections of the home page, in scroll order.
pub static HOME_SECTIONS: &[SectionDescriptor] = &[
    SectionDescriptor::new("home", "Home", "home"),
    SectionDescriptor::new("about", "About", "user"),
    SectionDescriptor::new("experience", "Experience", "briefcase"),
    SectionDescriptor::new("projects", "Projects", "layers"),
    SectionDescriptor::new("blog", "Blog", "book-open"),
    SectionDescriptor::new("contact", "Contact", "mail"),
];

/// Navbar entries. The blog section is reachable from its own index page.
pub static NAV_ITEMS: &[NavItem] = &[
    NavItem::new("#home", "Home"),
    NavItem::new("#about", "About"),
    NavItem::new("#experience", "Experience"),
    NavItem::new("#projects", "Projects"),
    NavItem::new("#contact", "Contact"),
];

/// Navbar entries on every page other than home.
pub static PAGE_NAV_ITEMS: &[NavItem] = &[
    NavItem::new("/", "Home"),
    NavItem::new("/projects", "Projects"),
    NavItem::new("/blog", "Blog"),
    NavItem::new("/#contact", "Contact"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_path_matches_file() {
        assert!(RESUME_PATH.ends_with(RESUME_FILE));
        assert_eq!(PROFILE.resume_path, RESUME_PATH);
    }

    #[test]
    fn url_joins_paths() {
        assert_eq!(PROFILE.url("/blog"), "https://prasadnarkhede.dev/blog");
        assert_eq!(PROFILE.url("blog"), "https://prasadnarkhede.dev/blog");
    }

    #[test]
    fn external_links() {
        let external: Vec<_> = CONTACT_LINKS
            .iter()
            .filter(|l| l.is_external())
            .map(|l| l.label)
            .collect();
        assert_eq!(external, vec!["LinkedIn", "GitHub"]);
    }

    #[test]
    fn nav_items_point_at_home_sections() {
        for item in NAV_ITEMS {
            let id = item.href.trim_start_matches('#');
            assert!(HOME_SECTIONS.iter().any(|s| s.id == id), "{id}");
        }
    }
}
