//! Site building orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── render_home()                       → index.html
//!     ├── render_landpage(conference, ...)    → conferences.html
//!     ├── render_landpage(training, ...)      → trainings.html
//!     ├── render_landpage(talk, ...)          → talks.html
//!     ├── render_item() for every item        → <slug>.html
//!     └── render_sitemap()                    → sitemap.xml
//! ```
//!
//! Pages are rendered one after another in that order and the first error
//! aborts the build. Files written before the failure stay on disk.

use crate::{
    config::SiteConfig,
    data::{Item, ItemKind},
    generator::sitemap::Sitemap,
    log,
    render::{RenderError, Renderer},
    site::Site,
};
use anyhow::{Context as _, Result};
use std::{fs, path::Path};
use tera::Context;

/// Render the whole site into `config.build.output`.
pub fn build_site(site: &Site, config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let renderer = Renderer::load(&config.build.templates, &site.meta)?;
    let pages = PageEmitter::new(site, config, &renderer, output).render()?;

    log!("build"; "{pages} pages written to {}", output.display());
    Ok(())
}

/// Writes rendered pages for one site into one output directory.
pub struct PageEmitter<'a> {
    site: &'a Site,
    config: &'a SiteConfig,
    renderer: &'a Renderer,
    output: &'a Path,
}

impl<'a> PageEmitter<'a> {
    pub fn new(
        site: &'a Site,
        config: &'a SiteConfig,
        renderer: &'a Renderer,
        output: &'a Path,
    ) -> Self {
        Self {
            site,
            config,
            renderer,
            output,
        }
    }

    /// Render every page. Returns the number of files written.
    pub fn render(&self) -> Result<usize, RenderError> {
        self.render_home()?;
        for kind in ItemKind::LANDING_ORDER {
            self.render_landpage(kind, kind.landing_file(), self.config.landing.title(kind))?;
        }
        for (slug, item) in &self.site.content.items {
            self.render_item(slug, item)?;
        }
        self.render_sitemap()?;

        Ok(1 + ItemKind::LANDING_ORDER.len() + self.site.content.items.len() + 1)
    }

    /// `index.html`
    pub fn render_home(&self) -> Result<(), RenderError> {
        let mut context = Context::new();
        context.insert("title", &self.config.site.title);
        self.emit("index.html", "index.html", context)
    }

    /// Landing page listing every item whose `type` is `kind`, as `entries`
    /// keyed by slug.
    pub fn render_landpage(
        &self,
        kind: ItemKind,
        filename: &str,
        title: &str,
    ) -> Result<(), RenderError> {
        let entries = self.site.content.items_of_type(kind.as_str());

        let mut context = Context::new();
        context.insert("landpage_title", title);
        context.insert("title", title);
        context.insert("entries", &entries);
        self.emit(filename, filename, context)
    }

    /// `<slug>.html` for one item, rendered with the template of its type.
    ///
    /// `authors` holds the loaded authors the item lists; unknown nicknames
    /// are left out. Nothing is written when the type is not recognized.
    pub fn render_item(&self, slug: &str, item: &Item) -> Result<(), RenderError> {
        let kind = match item.type_tag() {
            Some(tag) => ItemKind::from_tag(tag).ok_or_else(|| RenderError::InvalidType {
                slug: slug.to_owned(),
                kind: tag.to_owned(),
            })?,
            None => {
                return Err(RenderError::MissingField {
                    slug: slug.to_owned(),
                    field: "type",
                });
            }
        };
        let title = item.title().ok_or_else(|| RenderError::MissingField {
            slug: slug.to_owned(),
            field: "title",
        })?;
        let authors = self.site.content.authors_of(&item.author_nicks());

        let mut context = Context::new();
        context.insert("title", title);
        context.insert("entry", item);
        context.insert("authors", &authors);
        self.emit(kind.item_template(), &format!("{slug}.html"), context)
    }

    /// `sitemap.xml`, with one entry per page dated today (UTC).
    pub fn render_sitemap(&self) -> Result<(), RenderError> {
        let slugs = self.site.content.items.keys().map(String::as_str);
        let sitemap = Sitemap::today(self.config.site.domain(), slugs);

        log!("sitemap"; "{} urls", sitemap.len());

        let mut context = Context::new();
        context.insert("pages", &sitemap);
        self.emit("sitemap.xml", "sitemap.xml", context)
    }

    /// Render `template` and write it to `filename` in the output directory.
    fn emit(&self, template: &str, filename: &str, context: Context) -> Result<(), RenderError> {
        let content = self.renderer.render(template, context)?;
        let path = self.output.join(filename);
        fs::write(&path, content).map_err(|err| RenderError::Write(path.clone(), err))?;

        log!("render"; "{filename}");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::ContentStore,
        site::SiteMeta,
        utils::git::FixedRevision,
    };
    use tempfile::TempDir;

    const TEMPLATES: &[(&str, &str)] = &[
        ("index.html", "<title>{{ title }}</title> {{ git_sha1 }}"),
        (
            "conferences.html",
            "{{ landpage_title }}:{% for slug, e in entries %} {{ slug }}{% endfor %}",
        ),
        (
            "trainings.html",
            "{{ landpage_title }}:{% for slug, e in entries %} {{ slug }}{% endfor %}",
        ),
        (
            "talks.html",
            "{{ landpage_title }}:{% for slug, e in entries %} {{ slug }}{% endfor %}",
        ),
        (
            "talk.html",
            "<h1>{{ title }}</h1>{% for nick, a in authors %}[{{ nick }}={{ a.name }}]{% endfor %}",
        ),
        ("conference.html", "<h1>{{ entry.title }}</h1>"),
        ("training.html", "<h1>{{ entry.title }}</h1>"),
        (
            "sitemap.xml",
            "{% for page in pages %}<url><loc>{{ page.url }}</loc><lastmod>{{ page.lastmod }}</lastmod></url>\n{% endfor %}",
        ),
    ];

    struct Fixture {
        _dir: TempDir,
        site: Site,
        config: SiteConfig,
        renderer: Renderer,
    }

    impl Fixture {
        fn output(&self) -> &Path {
            &self.config.build.output
        }

        fn emitter(&self) -> PageEmitter<'_> {
            PageEmitter::new(&self.site, &self.config, &self.renderer, self.output())
        }

        fn read(&self, name: &str) -> String {
            fs::read_to_string(self.output().join(name)).unwrap()
        }

        fn count_outputs(&self) -> usize {
            fs::read_dir(self.output()).unwrap().count()
        }
    }

    /// Build a site from `(relative path, yaml)` content files.
    fn fixture(files: &[(&str, &str)]) -> Fixture {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.build.content = dir.path().join("content");
        config.build.output = dir.path().join("web");

        for sub in ["authors", "conferences", "talks", "trainings"] {
            fs::create_dir_all(config.build.content.join(sub)).unwrap();
        }
        fs::create_dir_all(&config.build.output).unwrap();
        for (rel, yaml) in files {
            fs::write(config.build.content.join(rel), yaml).unwrap();
        }

        let site = Site::load(&config, &FixedRevision("abc123".into())).unwrap();
        let renderer = Renderer::from_raw(TEMPLATES, &site.meta).unwrap();
        Fixture {
            _dir: dir,
            site,
            config,
            renderer,
        }
    }

    #[test]
    fn test_home_page() {
        let fx = fixture(&[]);
        fx.emitter().render_home().unwrap();

        assert_eq!(fx.read("index.html"), "<title>Atilla Learn</title> abc123");
    }

    #[test]
    fn test_landpage_lists_only_matching_type() {
        let fx = fixture(&[
            ("conferences/a.yaml", "type: conference\ntitle: A\n"),
            ("conferences/b.yaml", "type: conference\ntitle: B\n"),
            ("talks/c.yaml", "type: talk\ntitle: C\n"),
            ("trainings/d.yaml", "type: training\ntitle: D\n"),
        ]);
        fx.emitter()
            .render_landpage(ItemKind::Conference, "conferences.html", "Conférences")
            .unwrap();

        assert_eq!(fx.read("conferences.html"), "Conférences: a b");
    }

    #[test]
    fn test_landpage_single_and_empty() {
        let fx = fixture(&[("talks/c.yaml", "type: talk\ntitle: C\n")]);
        let emitter = fx.emitter();
        emitter
            .render_landpage(ItemKind::Talk, "talks.html", "Talks")
            .unwrap();
        emitter
            .render_landpage(ItemKind::Training, "trainings.html", "Formations")
            .unwrap();

        assert_eq!(fx.read("talks.html"), "Talks: c");
        assert_eq!(fx.read("trainings.html"), "Formations:");
    }

    #[test]
    fn test_item_authors_are_intersection() {
        let fx = fixture(&[
            ("authors/jdoe.yaml", "name: Jane Doe\n"),
            ("authors/asmith.yaml", "name: Alex Smith\n"),
            ("authors/bob.yaml", "name: Bob\n"),
            (
                "talks/t.yaml",
                "type: talk\ntitle: T\nauthors: [jdoe, ghost, asmith, jdoe]\n",
            ),
        ]);
        let item = &fx.site.content.items["t"];
        fx.emitter().render_item("t", item).unwrap();

        assert_eq!(
            fx.read("t.html"),
            "<h1>T</h1>[asmith=Alex Smith][jdoe=Jane Doe]"
        );
    }

    #[test]
    fn test_item_uses_template_of_its_type() {
        let fx = fixture(&[("trainings/git-101.yaml", "type: training\ntitle: Git 101\n")]);
        let item = &fx.site.content.items["git-101"];
        fx.emitter().render_item("git-101", item).unwrap();

        assert_eq!(fx.read("git-101.html"), "<h1>Git 101</h1>");
    }

    #[test]
    fn test_item_invalid_type_writes_nothing() {
        let fx = fixture(&[("talks/w.yaml", "type: workshop\ntitle: W\n")]);
        let item = &fx.site.content.items["w"];

        let err = fx.emitter().render_item("w", item).unwrap_err();
        assert!(matches!(err, RenderError::InvalidType { ref kind, .. } if kind == "workshop"));
        assert_eq!(fx.count_outputs(), 0);
    }

    #[test]
    fn test_item_missing_title_fails() {
        let fx = fixture(&[("talks/t.yaml", "type: talk\n")]);
        let item = &fx.site.content.items["t"];

        let err = fx.emitter().render_item("t", item).unwrap_err();
        assert!(matches!(err, RenderError::MissingField { field: "title", .. }));
        assert_eq!(fx.count_outputs(), 0);
    }

    #[test]
    fn test_sitemap_entry_count() {
        let fx = fixture(&[
            ("conferences/a.yaml", "type: conference\ntitle: A\n"),
            ("talks/b.yaml", "type: talk\ntitle: B\n"),
            ("trainings/c.yaml", "type: training\ntitle: C\n"),
        ]);
        fx.emitter().render_sitemap().unwrap();

        let xml = fx.read("sitemap.xml");
        assert_eq!(xml.matches("<url>").count(), 1 + 3 + 3);
        assert!(xml.contains("<loc>http://learn.atilla.org</loc>"));
        assert!(xml.contains("<loc>http://learn.atilla.org/b.html</loc>"));
    }

    #[test]
    fn test_render_full_site() {
        let fx = fixture(&[
            ("authors/jdoe.yaml", "name: \"Jane Doe\"\n"),
            (
                "talks/My-Talk!.yaml",
                "type: talk\ntitle: \"My Talk\"\nauthors: [jdoe]\n",
            ),
        ]);

        let written = fx.emitter().render().unwrap();
        assert_eq!(written, 6);
        assert_eq!(fx.count_outputs(), 6);

        assert_eq!(fx.read("my-talk.html"), "<h1>My Talk</h1>[jdoe=Jane Doe]");
        assert!(
            fx.read("sitemap.xml")
                .contains("<loc>http://learn.atilla.org/my-talk.html</loc>")
        );
        assert_eq!(fx.read("talks.html"), "Talks: my-talk");
        assert_eq!(fx.read("conferences.html"), "Conférences:");
    }

    #[test]
    fn test_render_unknown_author_is_dropped() {
        let fx = fixture(&[(
            "talks/solo.yaml",
            "type: talk\ntitle: Solo\nauthors: [nobody]\n",
        )]);

        fx.emitter().render().unwrap();
        assert_eq!(fx.read("solo.html"), "<h1>Solo</h1>");
    }

    #[test]
    fn test_render_aborts_on_first_failure() {
        let fx = fixture(&[
            ("talks/a.yaml", "type: talk\ntitle: A\n"),
            ("talks/b.yaml", "type: seminar\ntitle: B\n"),
            ("talks/c.yaml", "type: talk\ntitle: C\n"),
        ]);

        assert!(fx.emitter().render().is_err());
        assert!(fx.output().join("a.html").exists());
        assert!(!fx.output().join("c.html").exists());
        assert!(!fx.output().join("sitemap.xml").exists());
    }

    #[test]
    fn test_build_site_creates_output_and_loads_templates() {
        let dir = TempDir::new().unwrap();
        let templates = dir.path().join("templates");
        fs::create_dir(&templates).unwrap();
        for (name, source) in TEMPLATES {
            fs::write(templates.join(name), source).unwrap();
        }

        let mut config = SiteConfig::default();
        config.build.templates = templates;
        config.build.output = dir.path().join("out/web");

        let site = Site {
            content: ContentStore::default(),
            meta: SiteMeta::new("abc123"),
        };
        build_site(&site, &config).unwrap();

        for name in ["index.html", "conferences.html", "trainings.html", "talks.html", "sitemap.xml"] {
            assert!(config.build.output.join(name).exists(), "{name} missing");
        }
    }

    #[test]
    fn test_build_site_missing_template_fails() {
        let dir = TempDir::new().unwrap();
        let templates = dir.path().join("templates");
        fs::create_dir(&templates).unwrap();
        fs::write(templates.join("index.html"), "{{ title }}").unwrap();

        let mut config = SiteConfig::default();
        config.build.templates = templates;
        config.build.output = dir.path().join("web");

        let site = Site {
            content: ContentStore::default(),
            meta: SiteMeta::new("abc123"),
        };
        let err = build_site(&site, &config).unwrap_err();
        assert!(format!("{err:#}").contains("conferences.html"));
    }
}
