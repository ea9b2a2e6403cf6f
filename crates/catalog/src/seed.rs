//! Default catalog content written into an empty store on first start.
//!
//! Edit these entries to reflect your own experience and projects before
//! deploying.

use folio_core::catalog::{ENTRY_TYPE_EXPERIENCE, ENTRY_TYPE_PROJECT};
use folio_db::models::catalog_entry::CreateCatalogEntry;

/// The seed set, in insertion order: one experience, then three projects.
pub fn seed_entries() -> Vec<CreateCatalogEntry> {
    vec![
        // Work experience
        entry(
            "Vantashala",
            "Software Engineer Intern",
            "Summer 2024",
            "Backend Development: Built and integrated backend services powering \
             customer-facing dashboards (e.g., \"Recent Orders\" module), enabling real-time \
             order tracking and improving client visibility into activity. Code Optimization: \
             Refactored and cleaned legacy code across multiple repositories, reducing technical \
             debt and improving software maintainability for the team. Deployment & Delivery: \
             Supported production rollouts by pushing updates to live environments, ensuring \
             smooth delivery of new features to customers with minimal downtime.",
            "Java, Spring Boot, Git, Backend Services, Production Deployment",
            "/images/vantashala.png",
            ENTRY_TYPE_EXPERIENCE,
        ),
        // Personal projects
        entry(
            "Personal Portfolio Website",
            "Full-Stack Developer",
            "January 2025",
            "Designed and developed this portfolio website to showcase my projects, skills, and \
             experience. Built the website using modern web development technologies, including \
             Spring Boot for the backend and HTML, CSS, and JavaScript for the frontend. Focused \
             on creating a responsive and visually appealing design while ensuring smooth \
             navigation and functionality.",
            "Spring Boot, Thymeleaf, HTML, CSS, and JavaScript",
            "/images/portfolio.png",
            ENTRY_TYPE_PROJECT,
        ),
        entry(
            "FocusFlow - Pomodoro Study Timer",
            "Full-Stack Developer",
            "July 2025",
            "Built full-stack focus session application with Google OAuth2 authentication, \
             real-time WebSocket synchronization, YouTube music integration, and comprehensive \
             analytics dashboard tracking user study habits and session completion rates",
            "React, Spring Boot, OAuth2, WebSocket",
            "/images/focusflow.png",
            ENTRY_TYPE_PROJECT,
        ),
        entry(
            "Movie Recommender",
            "Full-Stack Developer",
            "May 2025",
            "Developed a movie recommendation website with a Spring Boot backend integrated with \
             a Python machine learning model that applies TF-IDF vectorization and cosine \
             similarity on movie descriptions to suggest relevant films, exposing results through \
             REST APIs that include hyperlinks to streaming platforms.",
            "Java, Spring Boot, Python, Data Science",
            "/images/movie-recommender.png",
            ENTRY_TYPE_PROJECT,
        ),
    ]
}

fn entry(
    name: &str,
    role: &str,
    date: &str,
    description: &str,
    technologies: &str,
    image_url: &str,
    entry_type: &str,
) -> CreateCatalogEntry {
    CreateCatalogEntry {
        name: name.to_string(),
        role: role.to_string(),
        date: date.to_string(),
        description: description.to_string(),
        technologies: technologies.to_string(),
        url: String::new(),
        image_url: image_url.to_string(),
        entry_type: entry_type.to_string(),
    }
}
