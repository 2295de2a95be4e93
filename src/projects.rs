use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};

#[cfg(feature = "ssr")]
const ALL_PROJECTS: &str = "";

pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Vec<Project>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content/projects"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    description: String,
    date: DateTime<Utc>,
    #[serde(default)]
    tags: Vec<String>,
    repo: Option<String>,
    demo: Option<String>,
    image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// File name without the extension.
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub repo: Option<String>,
    pub demo: Option<String>,
    pub image: Option<String>,
    /// Rendered markdown body.
    pub content: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectError {
    #[error("Project file {0} is not valid UTF-8")]
    Encoding(String),
    #[error("Couldn't parse front matter in {0}")]
    FrontMatter(String),
    #[error("Project {0} not found")]
    NotFound(String),
}

#[cfg(feature = "ssr")]
pub fn parse_project(file: &str, source: &str) -> Result<Project, ProjectError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(source)
        .ok_or_else(|| ProjectError::FrontMatter(file.to_string()))?;
    let fm = parsed.data;

    let parser = Parser::new_ext(&parsed.content, Options::all());
    let mut content = String::new();
    pulldown_cmark::html::push_html(&mut content, parser);

    Ok(Project {
        slug: file.strip_suffix(".md").unwrap_or(file).to_string(),
        title: fm.title,
        description: fm.description,
        date: fm.date,
        tags: fm.tags,
        repo: fm.repo.filter(|s| !s.is_empty()),
        demo: fm.demo.filter(|s| !s.is_empty()),
        image: fm.image,
        content,
    })
}

/// Every embedded project, newest first. Parsed once, then served from the
/// cache.
#[cfg(feature = "ssr")]
pub async fn get_projects() -> Result<Vec<Project>, ProjectError> {
    let cache = &*GLOBAL_PROJECT_CACHE;
    if let Some(r) = cache.get(ALL_PROJECTS) {
        return Ok(r.clone());
    }
    let mut projects = Assets::iter()
        .map(|file| {
            let asset = Assets::get(&file).ok_or_else(|| ProjectError::NotFound(file.to_string()))?;
            let source = String::from_utf8(asset.data.into())
                .map_err(|_| ProjectError::Encoding(file.to_string()))?;
            parse_project(&file, &source)
        })
        .collect::<Result<Vec<_>, _>>()?;
    projects.sort_by(|a, b| b.date.cmp(&a.date));
    tracing::debug!("loaded {} projects", projects.len());
    cache.insert(ALL_PROJECTS.to_string(), projects.clone());
    Ok(projects)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project() {
        let source = "---\ntitle: Demo\ndescription: Short\ndate: 2024-01-02T00:00:00Z\ntags:\n  - Rust\nrepo: \"\"\n---\n\nHello *there*\n";
        let project = parse_project("demo.md", source).unwrap();
        assert_eq!(project.slug, "demo");
        assert_eq!(project.title, "Demo");
        assert_eq!(project.tags, vec!["Rust".to_string()]);
        assert_eq!(project.repo, None);
        assert!(project.content.contains("<em>there</em>"));
    }

    #[test]
    fn test_missing_front_matter() {
        assert_eq!(
            parse_project("bad.md", "just text"),
            Err(ProjectError::FrontMatter("bad.md".to_string()))
        );
    }

    #[tokio::test]
    async fn test_embedded_projects_sorted() {
        let projects = get_projects().await.unwrap();
        assert_eq!(projects.len(), 3);
        assert!(projects.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(projects[0].slug, "math-brain");
    }
}
