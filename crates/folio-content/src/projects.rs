#![forbid(unsafe_code)]

//! Project case studies.

use folio_core::SectionDescriptor;
use folio_widgets::Card;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub tags: &'static [&'static str],
    pub sections: &'static [SectionDescriptor],
    #[serde(skip)]
    pub body: &'static str,
    /// Expandable highlight cards shown under the body.
    #[serde(skip)]
    pub cards: &'static [Card],
}

impl Project {
    pub fn path(&self) -> String {
        format!("/projects/{}", self.slug)
    }

    pub fn meta_title(&self) -> String {
        format!("{} | Prasad Narkhede Portfolio", self.title)
    }
}

const OVERVIEW: SectionDescriptor = SectionDescriptor::new("overview", "Overview", "cloud");
const OBJECTIVES: SectionDescriptor = SectionDescriptor::new("objectives", "Objectives", "zap");
const ARCHITECTURE: SectionDescriptor = SectionDescriptor::new("architecture", "Architecture", "server");
const OUTCOMES: SectionDescriptor = SectionDescriptor::new("outcomes", "Outcomes", "check-circle");
const TOOLS: SectionDescriptor = SectionDescriptor::new("services", "Tools", "layers");

pub static PROJECTS: &[Project] = &[
    Project {
        slug: "aws-infrastructure",
        title: "AWS Multi-App Architecture with Auto Scaling & High Availability",
        tagline: "Enterprise-grade hosting for 30+ client applications",
        description: "Comprehensive cloud infrastructure design for hosting multiple client applications with enterprise-grade reliability, security, and performance.",
        keywords: "AWS Architecture, High Availability, Auto Scaling, Multi-AZ RDS, ElastiCache, Cloud Cost Optimization",
        tags: &["AWS", "Auto Scaling", "High Availability"],
        sections: &[
            OVERVIEW,
            SectionDescriptor::new("objectives", "Business & Technical Objectives", "zap"),
            SectionDescriptor::new("nfrs", "Non-Functional Requirements", "lock"),
            SectionDescriptor::new("architecture", "To-Be Architecture", "server"),
            SectionDescriptor::new("adr", "Architecture Decision Records", "git-branch"),
            SectionDescriptor::new("implementation", "Implementation Plan", "monitor"),
            SectionDescriptor::new("diagram", "Architecture Diagram", "server"),
            SectionDescriptor::new("outcomes", "Key Outcomes", "zap"),
            SectionDescriptor::new("services", "AWS Services & DevOps Tools", "cloud"),
            SectionDescriptor::new("keywords", "Keywords", "lock"),
        ],
        body: include_str!("../content/projects/aws-infrastructure.md"),
        cards: &[
            Card::new(
                "Networking",
                "Two public and two private subnets in one VPC.",
                &["VPC 10.0.0.0/16", "IGW for public, NAT GW for private", "NACLs block internet on private subnets"],
            ),
            Card::new(
                "Compute",
                "Auto Scaling web tier next to a fixed Docker host.",
                &["ASG 1–5 instances on CPU ≥ 70%", "Fixed EC2 with termination protection", "Health checks on /health"],
            ),
            Card::new(
                "Data",
                "Managed MySQL, Redis sessions, and shared code on EFS.",
                &["RDS MySQL Multi-AZ", "ElastiCache Redis for sessions", "S3 lifecycle to Glacier after 30 days"],
            ),
        ],
    },
    Project {
        slug: "devops-transformation",
        title: "Company-Wide DevOps Transformation",
        tagline: "From manual deployments to automated CI/CD excellence",
        description: "Implementation of GitLab CE and Mattermost EE to establish DevOps practices and automate deployments.",
        keywords: "DevOps Transformation, CI/CD Pipelines, GitLab Implementation",
        tags: &["GitLab", "Mattermost", "CI/CD"],
        sections: &[OVERVIEW, OBJECTIVES, ARCHITECTURE, OUTCOMES, TOOLS],
        body: include_str!("../content/projects/devops-transformation.md"),
        cards: &[
            Card::new(
                "Infrastructure Setup",
                "VPC with public/private subnets, NAT Gateway, Security Groups.",
                &["EC2 ASG hosts GitLab CE and Mattermost EE", "Docker for simplified deployments"],
            ),
            Card::new(
                "Application Layer",
                "GitLab CE for repositories and pipelines, Mattermost EE for collaboration.",
                &["Docker-based GitLab runners", "Mattermost integrated with GitLab notifications"],
            ),
            Card::new(
                "CI/CD Automation",
                "GitLab Pipelines for build, test, and deploy workflows.",
                &["Jenkins kept for legacy projects", "Images pushed to the GitLab Container Registry"],
            ),
        ],
    },
    Project {
        slug: "client-isolation",
        title: "Multi-Client Account Isolation",
        tagline: "Secure multi-tenant architecture using AWS Organizations and IAM",
        description: "Secure multi-tenant architecture using AWS Organizations and IAM.",
        keywords: "AWS Organizations, Multi-Tenant, IAM, Cloud Security",
        tags: &["AWS Organizations", "IAM", "Security"],
        sections: &[OVERVIEW, OBJECTIVES, ARCHITECTURE, OUTCOMES, TOOLS],
        body: include_str!("../content/projects/client-isolation.md"),
        cards: &[
            Card::new(
                "AWS Organizations Setup",
                "Management account for consolidated billing and governance.",
                &["One OU per client", "A separate AWS account under each OU"],
            ),
            Card::new(
                "IAM & Security",
                "IAM Identity Center for single login.",
                &["SCPs deny disabling CloudTrail and GuardDuty", "SCPs block unapproved instance types"],
            ),
            Card::new(
                "Billing & Monitoring",
                "Consolidated billing with per-client tracking.",
                &["Cost Explorer and Budgets per client", "Centralized CloudTrail and Config"],
            ),
        ],
    },
    Project {
        slug: "eks-cicd",
        title: "CI/CD Pipeline for Kubernetes on EKS",
        tagline: "Automated deployment pipeline for microservices on EKS",
        description: "Automated deployment pipeline for microservices on EKS.",
        keywords: "CI/CD EKS, Kubernetes Deployment, Docker Helm",
        tags: &["EKS", "Helm", "GitHub Actions"],
        sections: &[
            SectionDescriptor::new("overview", "Project Overview", "zap"),
            SectionDescriptor::new("objectives", "Business & Technical Objectives", "git-branch"),
            SectionDescriptor::new("architecture", "Architecture Design", "server"),
            SectionDescriptor::new("nfrs", "Non-Functional Requirements", "shield"),
            SectionDescriptor::new("outcomes", "Key Outcomes", "monitor"),
            SectionDescriptor::new("tools", "Tools & Services", "database"),
            SectionDescriptor::new("diagram", "Architecture Diagram", "cloud"),
            SectionDescriptor::new("code", "Code Examples", "container"),
            SectionDescriptor::new("keywords", "SEO Keywords", "zap"),
        ],
        body: include_str!("../content/projects/eks-cicd.md"),
        cards: &[
            Card::new(
                "Build",
                "Docker images built and tested on every push.",
                &["GitHub Actions runners", "Images tagged with the commit SHA"],
            ),
            Card::new(
                "Deploy",
                "Helm releases to EKS with automatic rollback.",
                &["ALB Ingress Controller with ACM TLS", "HPA on CPU and memory"],
            ),
        ],
    },
    Project {
        slug: "cost-optimization",
        title: "Cloud Cost Optimization Tool",
        tagline: "Automated cost savings through intelligent resource management",
        description: "Python script using Boto3 to analyze and automatically stop idle EC2 instances for cost savings.",
        keywords: "Cloud Cost Optimization, AWS Boto3, Python Automation, EC2 Management, FinOps",
        tags: &["Python", "Boto3", "FinOps"],
        sections: &[
            SectionDescriptor::new("overview", "Project Overview", "cloud"),
            SectionDescriptor::new("features", "Features", "zap"),
            SectionDescriptor::new("code", "Code Example", "container"),
            SectionDescriptor::new("results", "Results", "check-circle"),
        ],
        body: include_str!("../content/projects/cost-optimization.md"),
        cards: &[],
    },
    Project {
        slug: "terraform-iac",
        title: "Infrastructure as Code with Terraform",
        tagline: "Automated AWS resource provisioning using Terraform",
        description: "Automated AWS resource provisioning using Terraform.",
        keywords: "Terraform IaC, AWS Automation, Infrastructure Provisioning",
        tags: &["Terraform", "IaC", "AWS"],
        sections: &[
            SectionDescriptor::new("overview", "Project Overview", "cloud"),
            SectionDescriptor::new("features", "Key Features", "layers"),
            SectionDescriptor::new("code", "Code Example", "container"),
            SectionDescriptor::new("practices", "Best Practices", "shield"),
        ],
        body: include_str!("../content/projects/terraform-iac.md"),
        cards: &[],
    },
];

/// Exact slug match.
pub fn find_project(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}
