#![forbid(unsafe_code)]

//! Blog posts.

use folio_core::SectionDescriptor;
use serde::Serialize;

/// A blog post. Bodies are markdown with `{#id}` anchors on each section heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Post {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub excerpt: &'static str,
    /// `YYYY-MM-DD`.
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub keywords: &'static str,
    pub sections: &'static [SectionDescriptor],
    #[serde(skip)]
    pub body: &'static str,
}

impl Post {
    /// Site-relative URL.
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    /// `<title>` text.
    pub fn meta_title(&self) -> String {
        format!("{} | Prasad Narkhede Blog", self.title)
    }
}

const INTRODUCTION: SectionDescriptor = SectionDescriptor::new("introduction", "Introduction", "cloud");
const PROBLEM: SectionDescriptor = SectionDescriptor::new("problem", "The Problem", "alert-triangle");
const SOLUTION: SectionDescriptor = SectionDescriptor::new("solution", "The Solution", "zap");
const RESULTS: SectionDescriptor = SectionDescriptor::new("results", "Results", "server");
const LESSONS: SectionDescriptor = SectionDescriptor::new("lessons", "Lessons Learned", "zap");
const TOOLS: SectionDescriptor = SectionDescriptor::new("tools", "Tools & Services Used", "cloud");

pub static POSTS: &[Post] = &[
    Post {
        slug: "ssl-certificate-monitoring",
        title: "How I Automated SSL Certificate Expiry Monitoring with AWS Lambda & SNS",
        description: "Step-by-step guide to building a serverless SSL certificate monitoring system that prevents unexpected certificate expirations in production environments.",
        excerpt: "Step-by-step guide to building a serverless SSL certificate monitoring system that prevents unexpected certificate expirations in production environments.",
        date: "2024-01-08",
        read_time: "12 min read",
        category: "Automation",
        tags: &["AWS Lambda", "Serverless", "Automation"],
        keywords: "AWS Lambda Project, Serverless Automation, Cloud Monitoring, SSL Certificate Management, ACM, AWS SNS Alerts, EventBridge",
        sections: &[
            INTRODUCTION,
            PROBLEM,
            SOLUTION,
            RESULTS,
            LESSONS,
            TOOLS,
            SectionDescriptor::new("architecture", "Architecture Diagram", "bell"),
        ],
        body: include_str!("../content/blog/ssl-certificate-monitoring.md"),
    },
    Post {
        slug: "aws-efs-latency-solutions",
        title: "Fixing AWS EFS Latency: Why ElastiCache & S3 are Better for Sessions & Uploads",
        description: "Deep dive into AWS EFS performance issues and solutions using ElastiCache and S3",
        excerpt: "Deep dive into AWS EFS performance issues and why ElastiCache and S3 provide superior solutions for session management and file uploads in production environments.",
        date: "2024-01-15",
        read_time: "8–10 min",
        category: "Cloud Architecture",
        tags: &["EFS Performance", "AWS ElastiCache", "Cloud Optimization"],
        keywords: "EFS Performance, AWS ElastiCache, Cloud Optimization, S3 vs EFS, Session Management",
        sections: &[INTRODUCTION, PROBLEM, SOLUTION, RESULTS, LESSONS],
        body: include_str!("../content/blog/aws-efs-latency-solutions.md"),
    },
    Post {
        slug: "first-devops-engineer-lessons",
        title: "Lessons Learned as the First DevOps Engineer in My Company",
        description: "Insights from my journey as the first DevOps engineer, building AWS infrastructure and CI/CD pipelines from scratch without senior guidance.",
        excerpt: "My journey from fresher to lead DevOps engineer, including challenges faced, solutions implemented, and career growth tips for aspiring cloud professionals.",
        date: "2023-12-18",
        read_time: "10 min read",
        category: "Career",
        tags: &["Career", "DevOps Journey", "Leadership"],
        keywords: "DevOps Career, Cloud Journey, Freshers in DevOps, AWS Projects for Beginners, DevOps Leadership",
        sections: &[
            INTRODUCTION,
            SectionDescriptor::new("challenges", "Challenges Faced", "alert-triangle"),
            SectionDescriptor::new("solutions", "Solutions Implemented", "zap"),
            SectionDescriptor::new("lessons", "Lessons Learned", "users"),
            SectionDescriptor::new("outcomes", "Key Outcomes", "server"),
            TOOLS,
        ],
        body: include_str!("../content/blog/first-devops-engineer-lessons.md"),
    },
    Post {
        slug: "php-cicd-gitlab-aws",
        title: "CI/CD for 30+ PHP Applications with GitLab & AWS",
        description: "Complete guide to implementing robust CI/CD pipelines for multiple PHP applications using GitLab CI and AWS services for automated testing and deployment.",
        excerpt: "Complete guide to implementing robust CI/CD pipelines for multiple PHP applications using GitLab CI and AWS services for automated testing and deployment.",
        date: "2024-01-22",
        read_time: "9 min read",
        category: "DevOps",
        tags: &["CI/CD", "GitLab", "PHP", "AWS"],
        keywords: "DevOps Automation, Continuous Integration, Continuous Deployment, AWS GitLab Pipeline, PHP CI/CD",
        sections: &[
            INTRODUCTION,
            SectionDescriptor::new("challenges", "The Challenges", "alert-triangle"),
            SectionDescriptor::new("pipeline", "Pipeline Design", "git-branch"),
            SectionDescriptor::new("deployment", "Zero-Downtime Deployment", "server"),
            RESULTS,
            LESSONS,
        ],
        body: include_str!("../content/blog/php-cicd-gitlab-aws.md"),
    },
];

/// Exact slug match.
pub fn find_post(slug: &str) -> Option<&'static Post> {
    POSTS.iter().find(|p| p.slug == slug)
}
