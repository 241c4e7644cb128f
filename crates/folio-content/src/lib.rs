#![forbid(unsafe_code)]

//! Static site content and route resolution.
//!
//! Everything here is compiled in: post and project bodies are markdown files
//! under `content/`, and the tables are `static` slices looked up by exact
//! slug. Nothing is mutated at runtime.

pub mod posts;
pub mod profile;
pub mod projects;
pub mod routes;

pub use posts::{POSTS, Post, find_post};
pub use profile::{
    CONTACT_LINKS, ContactLink, EXPERIENCE, Experience, HOME_SECTIONS, NAV_ITEMS, PAGE_NAV_ITEMS,
    PROFILE, Profile, RESUME_FILE, RESUME_PATH, SKILLS, SkillCategory,
};
pub use projects::{PROJECTS, Project, find_project};
pub use routes::{HOME_TITLE, NOT_FOUND_TITLE, Resolved, Route, RouteEntry, all_pages};
