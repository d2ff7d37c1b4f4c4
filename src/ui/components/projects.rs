//! Project grid with optional category filter toolbar.

use dioxus::prelude::*;

use crate::projects::{categories, Project, ProjectFilter, ALL_FILTER};

#[derive(Props, Clone, PartialEq)]
pub struct ProjectGridProps {
    pub projects: Vec<Project>,
    /// Render the filter toolbar above the grid
    #[props(default = false)]
    pub show_filter: bool,
}

#[component]
pub fn ProjectGrid(props: ProjectGridProps) -> Element {
    let selected = ProjectFilter::default();
    let categories = categories(&props.projects);

    rsx! {
        section { id: "projects", class: "projects",
            h2 { "Projects" }
            if props.show_filter {
                div {
                    id: "project-filters",
                    class: "project-filters",
                    role: "toolbar",
                    "aria-label": "Filter projects",
                    FilterButton { value: ALL_FILTER.to_string(), label: "All".to_string(), pressed: selected.is_selected_by(ALL_FILTER) }
                    for category in categories.iter() {
                        FilterButton {
                            value: category.clone(),
                            label: category.clone(),
                            pressed: selected.is_selected_by(category),
                        }
                    }
                }
            }
            div { class: "project-grid",
                for project in props.projects.iter() {
                    ProjectCard { project: project.clone() }
                }
            }
        }
    }
}

#[component]
fn FilterButton(value: String, label: String, pressed: bool) -> Element {
    rsx! {
        button {
            class: "filter-button",
            r#type: "button",
            "data-filter": "{value}",
            "aria-pressed": if pressed { "true" } else { "false" },
            "{label}"
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        article { class: "project-card", "data-category": "{project.category}",
            img {
                src: "{project.image}",
                "data-full": project.full_image.clone(),
                alt: "{project.title}",
                loading: "lazy",
            }
            h3 { "{project.title}" }
            if !project.description.is_empty() {
                p { "{project.description}" }
            }
            if let Some(url) = project.url.clone() {
                a { href: url, rel: "noopener", "View project" }
            }
        }
    }
}
