// src/core/renderer.rs
//! Portfolio renderer - merges the portfolio context into a template bundle

use anyhow::{Context, Result};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use tracing::{debug, info};

use crate::core::TemplateEngine;
use crate::types::{
    GeneratedFiles, GithubData, LinkedinData, PersonalInfo, PortfolioContext, TemplateBundle,
    TemplateFile,
};
use crate::utils::{get_file_extension, is_template_file};

pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    pub fn new(engine: TemplateEngine) -> Self {
        Self { engine }
    }

    /// Build the portfolio context, load the template and render every file
    pub async fn render(
        &self,
        template_id: &str,
        personal: PersonalInfo,
        github: GithubData,
        linkedin: LinkedinData,
    ) -> Result<GeneratedFiles> {
        let context = PortfolioContext::new(personal, github, linkedin);
        let bundle = self.engine.resolve(template_id).await?;
        let files = render_bundle(&bundle, &context)?;

        info!(
            "Rendered {} files for template '{}'",
            files.len(),
            template_id
        );
        Ok(files)
    }
}

/// `.html` output is auto-escaped, so form text containing markup is shown
/// literally rather than injected into the page.
fn build_environment(bundle: &TemplateBundle) -> Result<Environment<'_>> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    // Missing keys at any depth print as empty strings
    env.set_undefined_behavior(UndefinedBehavior::Chainable);
    env.set_auto_escape_callback(|name| match get_file_extension(name).as_deref() {
        Some("html") => AutoEscape::Html,
        _ => AutoEscape::None,
    });

    for (name, file) in bundle {
        if let TemplateFile::Text(source) = file {
            if is_template_file(name) {
                env.add_template(name, source)
                    .with_context(|| format!("Failed to parse template '{}'", name))?;
            }
        }
    }

    Ok(env)
}

/// Render text templates with the context; pass every other file through untouched
pub fn render_bundle(bundle: &TemplateBundle, context: &PortfolioContext) -> Result<GeneratedFiles> {
    let env = build_environment(bundle)?;
    let ctx = context.to_template_value();

    let mut generated = GeneratedFiles::new();
    for (name, file) in bundle {
        let content = match file {
            TemplateFile::Text(_) if is_template_file(name) => {
                let template = env
                    .get_template(name)
                    .with_context(|| format!("Failed to load template '{}'", name))?;
                template
                    .render(&ctx)
                    .with_context(|| format!("Failed to render template '{}'", name))?
                    .into_bytes()
            }
            other => {
                debug!("Copying passthrough file: {}", name);
                other.clone().into_bytes()
            }
        };
        generated.insert(name.clone(), content);
    }

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RepositorySummary;

    fn bundle(files: &[(&str, TemplateFile)]) -> TemplateBundle {
        files
            .iter()
            .map(|(name, file)| (name.to_string(), file.clone()))
            .collect()
    }

    fn text(s: &str) -> TemplateFile {
        TemplateFile::Text(s.to_string())
    }

    fn personal(name: &str) -> PersonalInfo {
        PersonalInfo::default().with("name", name)
    }

    fn render_one(template: &str, context: &PortfolioContext) -> String {
        let files = render_bundle(&bundle(&[("index.html", text(template))]), context).unwrap();
        String::from_utf8(files["index.html"].clone()).unwrap()
    }

    #[test]
    fn test_missing_personal_name_renders_empty() {
        let context = PortfolioContext::new(
            PersonalInfo::default(),
            GithubData::default(),
            LinkedinData::default(),
        );
        assert_eq!(render_one("<h1>{{ personal.name }}</h1>", &context), "<h1></h1>");
    }

    #[test]
    fn test_deeply_missing_keys_render_empty() {
        let context = PortfolioContext::new(
            PersonalInfo::default(),
            GithubData::default(),
            LinkedinData::default(),
        );
        assert_eq!(
            render_one("[{{ personal.address.city }}|{{ nothing.at.all }}]", &context),
            "[|]"
        );
    }

    #[test]
    fn test_nested_access_and_repository_loop() {
        let mut github = GithubData::default();
        github.profile.bio = "Builds things".to_string();
        for name in ["alpha", "beta"] {
            github.repositories.push(RepositorySummary {
                name: name.to_string(),
                stars: 5,
                ..Default::default()
            });
        }
        let context = PortfolioContext::new(personal("Ada"), github, LinkedinData::default());

        let rendered = render_one(
            "{{ personal.name }}: {{ github.profile.bio }}\n\
             {% for repo in github.repositories %}<li>{{ repo.name }} ({{ repo.stars }})</li>{% endfor %}",
            &context,
        );
        assert_eq!(
            rendered,
            "Ada: Builds things\n<li>alpha (5)</li><li>beta (5)</li>"
        );
    }

    #[test]
    fn test_html_is_escaped_but_js_is_not() {
        let context = PortfolioContext::new(
            personal("Tom & Jerry"),
            GithubData::default(),
            LinkedinData::default(),
        );
        let files = render_bundle(
            &bundle(&[
                ("index.html", text("{{ personal.name }}")),
                ("script.js", text("const n = \"{{ personal.name }}\";")),
            ]),
            &context,
        )
        .unwrap();
        assert_eq!(files["index.html"], b"Tom &amp; Jerry".to_vec());
        assert_eq!(files["script.js"], b"const n = \"Tom & Jerry\";".to_vec());
    }

    #[test]
    fn test_passthrough_files_are_unchanged() {
        let context = PortfolioContext::new(
            personal("Ada"),
            GithubData::default(),
            LinkedinData::default(),
        );
        let png = vec![0x89, b'P', b'N', b'G', 0x00, 0xFF];
        let files = render_bundle(
            &bundle(&[
                ("README.md", text("{{ personal.name }}")),
                ("assets/logo.png", TemplateFile::Binary(png.clone())),
            ]),
            &context,
        )
        .unwrap();
        assert_eq!(files["README.md"], b"{{ personal.name }}".to_vec());
        assert_eq!(files["assets/logo.png"], png);
    }

    #[test]
    fn test_syntax_error_names_the_file() {
        let context = PortfolioContext::new(
            PersonalInfo::default(),
            GithubData::default(),
            LinkedinData::default(),
        );
        let err = render_bundle(&bundle(&[("broken.html", text("{% for %}"))]), &context)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("broken.html"));
    }

    #[tokio::test]
    async fn test_render_resolves_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("modern")).unwrap();
        std::fs::write(
            dir.path().join("modern/index.html"),
            "<title>{{ personal.name }}</title>",
        )
        .unwrap();

        let renderer = Renderer::new(TemplateEngine::new(dir.path().to_path_buf()));
        let files = renderer
            .render(
                "does-not-exist",
                personal("Grace"),
                GithubData::default(),
                LinkedinData::default(),
            )
            .await
            .unwrap();
        assert_eq!(files["index.html"], b"<title>Grace</title>".to_vec());
    }
}
