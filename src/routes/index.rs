use std::str::FromStr;

use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;
use strum::VariantArray;

use crate::{
    content::{self, ADDITIONAL_SKILLS, PROJECTS, Project, SkillCategory, Technology},
    template::{Layout, Template},
};

#[derive(Deserialize, Default)]
pub struct PageQuery {
    pub project: Option<String>,
    pub category: Option<String>,
}

pub struct ProjectTab {
    pub index: usize,
    pub title: &'static str,
    pub active: bool,
}

pub struct CategoryTab {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub layout: Layout,
    pub project_tabs: Vec<ProjectTab>,
    pub project: &'static Project,
    pub category_tabs: Vec<CategoryTab>,
    pub active_category: &'static str,
    pub technologies: Vec<&'static Technology>,
    pub additional_skills: &'static [&'static str],
}

/// GET / - the whole site
///
/// `?project=<index>` picks the project tab and `?category=<id>` filters the
/// skills grid. Unknown values fall back to the first project and all skills.
pub async fn page(template: Template, Query(query): Query<PageQuery>) -> impl IntoResponse {
    let requested = query
        .project
        .as_deref()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or_default();
    let (active_project, project) = content::project(requested);

    let category = query
        .category
        .as_deref()
        .and_then(|value| SkillCategory::from_str(value).ok())
        .unwrap_or_default();

    let project_tabs = PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| ProjectTab {
            index,
            title: project.title,
            active: index == active_project,
        })
        .collect();

    let category_tabs = SkillCategory::VARIANTS
        .iter()
        .map(|variant| CategoryTab {
            id: variant.into(),
            label: variant.label(),
            active: *variant == category,
        })
        .collect();

    template.render(IndexTemplate {
        layout: template.layout(),
        project_tabs,
        project,
        category_tabs,
        active_category: category.into(),
        technologies: content::technologies(category),
        additional_skills: ADDITIONAL_SKILLS,
    })
}
