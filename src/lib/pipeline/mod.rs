use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::{Section, eyre::eyre};
use minify_html::{Cfg, minify};
use tracing::{debug, info};

use crate::{
    config::SiteConfig,
    document::Document,
    scripts::{self, PageScript},
    utils::route_to_rel_path,
};

type RenderedPage = (PathBuf, String);

/// Build every page into the configured output directory under the
/// current working directory.
pub fn build_once(config: &SiteConfig) -> color_eyre::Result<Vec<PathBuf>> {
    let root =
        std::env::current_dir().with_note(|| "While getting the current working directory")?;
    build_at(&root, config)
}

/// Returns the written files in registry order.
pub fn build_at(root: &Path, config: &SiteConfig) -> color_eyre::Result<Vec<PathBuf>> {
    let ctx = BuildCtx::load_at(root, config);
    fs::create_dir_all(&ctx.output_dir)
        .with_note(|| format!("While creating {}", ctx.output_dir.display()))?;

    info!(output = %ctx.output_dir.display(), pages = scripts::all().len(), "building site");

    Pipeline::new(ctx).render()?.emit()
}

/// Compose the document for a single registered page.
pub fn document_for(route: &str, config: &SiteConfig) -> color_eyre::Result<Document> {
    let script =
        scripts::find(route).ok_or_else(|| eyre!("No page registered for route '{route}'"))?;
    compose(script, config)
}

/// Render a single registered page to a string.
pub fn render_route(route: &str, config: &SiteConfig) -> color_eyre::Result<String> {
    document_for(route, config).map(|doc| doc.render())
}

fn compose(script: &PageScript, config: &SiteConfig) -> color_eyre::Result<Document> {
    let doc = (script.render)(config)
        .with_note(|| format!("While rendering page '{}'", script.route))?;
    debug!(route = script.route, fragments = doc.fragments().len(), "rendered page");
    Ok(doc)
}

struct BuildCtx {
    output_dir: PathBuf,
    config: SiteConfig,
    min_cfg: Option<Cfg>,
}

impl BuildCtx {
    fn load_at(root: &Path, config: &SiteConfig) -> Self {
        Self {
            output_dir: root.join(&config.output_dir),
            config: config.clone(),
            min_cfg: config.minify.then(Cfg::new),
        }
    }
}

fn render_pages(ctx: &BuildCtx) -> color_eyre::Result<Vec<RenderedPage>> {
    let mut rendered = Vec::with_capacity(scripts::all().len());
    for script in scripts::all() {
        let html = compose(script, &ctx.config)?.render();
        let out_path = ctx.output_dir.join(route_to_rel_path(script.route));
        rendered.push((out_path, html));
    }
    Ok(rendered)
}

fn emit_pages(ctx: &BuildCtx, rendered: Vec<RenderedPage>) -> color_eyre::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(rendered.len());
    for (out_path, html) in rendered {
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .with_note(|| format!("While creating {}", parent.display()))?;
        }

        let bytes = match &ctx.min_cfg {
            Some(cfg) => minify(html.as_bytes(), cfg),
            None => html.into_bytes(),
        };
        fs::write(&out_path, bytes).with_note(|| format!("While writing {}", out_path.display()))?;

        debug!(path = %out_path.display(), "wrote page");
        written.push(out_path);
    }

    info!(pages = written.len(), "build complete");
    Ok(written)
}

trait PipelineStage {}
/// Pipeline typestate driver
struct Pipeline<S: PipelineStage> {
    ctx: BuildCtx,
    state: S,
}

struct Rendered(Vec<RenderedPage>);
impl PipelineStage for Rendered {}
impl PipelineStage for () {}

impl Pipeline<()> {
    fn new(ctx: BuildCtx) -> Self {
        Self { ctx, state: () }
    }

    fn render(self) -> color_eyre::Result<Pipeline<Rendered>> {
        let pages = render_pages(&self.ctx)?;
        Ok(Pipeline {
            ctx: self.ctx,
            state: Rendered(pages),
        })
    }
}

impl Pipeline<Rendered> {
    fn emit(self) -> color_eyre::Result<Vec<PathBuf>> {
        emit_pages(&self.ctx, self.state.0)
    }
}
