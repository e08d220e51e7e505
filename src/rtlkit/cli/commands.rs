use super::render::{print_demo, print_messages, SpacingReport};
use super::setup::{Cli, Commands, DirectionArg};
use clap::{CommandFactory, Parser};
use framed::Surface;
use log::{debug, info};
use rtlkit::api::{CmdMessage, RtlkitApi, TextApi};
use rtlkit::bidi::BaseDirection;
use rtlkit::commands::demo::DemoText;
use rtlkit::config::{RtlkitConfig, CONFIG_DIRNAME};
use rtlkit::error::Result;
use rtlkit::store::fs::FileStore;
use std::io::Read;
use std::path::PathBuf;

const LOG_ENV: &str = "RTLKIT_LOG";

struct AppContext {
    config: RtlkitConfig,
    config_dir: PathBuf,
    surface: Surface,
    verbose: bool,
}

impl AppContext {
    fn direction(&self, arg: Option<DirectionArg>) -> BaseDirection {
        arg.map(BaseDirection::from)
            .unwrap_or(self.config.base_direction)
    }

    fn text_api(&self, arg: Option<DirectionArg>) -> TextApi {
        TextApi::new(self.direction(arg))
    }

    fn spacing_api(
        &self,
        dir: Option<PathBuf>,
        pattern: Option<String>,
    ) -> Result<RtlkitApi<FileStore>> {
        let dir = dir.unwrap_or_else(|| self.config.templates_dir.clone());
        let pattern = pattern.unwrap_or_else(|| self.config.template_pattern.clone());
        let store = FileStore::new(dir, &pattern)?;
        RtlkitApi::new(store)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let mut ctx = init_context(cli.verbose, cli.no_color, cli.config_dir)?;

    match command {
        Commands::Demo {
            message,
            title,
            body,
            direction,
        } => handle_demo(&mut ctx, message, title, body, direction),
        Commands::Spacing {
            dir,
            pattern,
            dry_run,
        } => handle_spacing(&mut ctx, dir, pattern, dry_run),
        Commands::Reorder { text, direction } => handle_reorder(&mut ctx, text, direction),
        Commands::Config { init } => handle_config(&mut ctx, init),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, default))
        .format_timestamp(None)
        .try_init();
}

fn init_context(verbose: bool, no_color: bool, config_dir: Option<PathBuf>) -> Result<AppContext> {
    let config_dir = config_dir.unwrap_or_else(|| PathBuf::from(CONFIG_DIRNAME));
    let config = RtlkitConfig::load(&config_dir)?;

    let mut surface = Surface::stdout();
    if no_color {
        surface = surface.with_color(false);
    }

    Ok(AppContext {
        config,
        config_dir,
        surface,
        verbose,
    })
}

fn handle_demo(
    ctx: &mut AppContext,
    message: Option<String>,
    title: Option<String>,
    body: Option<String>,
    direction: Option<DirectionArg>,
) -> Result<()> {
    let defaults = DemoText::default();
    let text = DemoText {
        message: message.unwrap_or(defaults.message),
        title: title.unwrap_or(defaults.title),
        body: body
            .map(|b| b.replace("\\n", "\n"))
            .unwrap_or(defaults.body),
    };

    let blocks = ctx.text_api(direction).demo(&text);
    print_demo(&mut ctx.surface, &blocks, &ctx.config.panel_border)
}

fn handle_spacing(
    ctx: &mut AppContext,
    dir: Option<PathBuf>,
    pattern: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let mut api = ctx.spacing_api(dir, pattern)?;
    let report = SpacingReport::new(ctx.surface.use_color(), ctx.verbose)?;
    debug!(
        "scanning {} for {}",
        api.store().root().display(),
        api.store().pattern()
    );

    let templates = api.discover_templates()?;
    report.found(&mut ctx.surface, templates.len())?;

    let mut updated = 0;
    for path in &templates {
        report.processing(&mut ctx.surface, path)?;
        let outcome = api.normalize_template(path, dry_run)?;
        if outcome.changed {
            updated += 1;
        }
        report.outcome(&mut ctx.surface, &outcome)?;
    }

    info!(
        "{} of {} templates {}",
        updated,
        templates.len(),
        if dry_run { "would change" } else { "updated" }
    );
    report.done(&mut ctx.surface)
}

fn handle_reorder(
    ctx: &mut AppContext,
    text: Vec<String>,
    direction: Option<DirectionArg>,
) -> Result<()> {
    let api = ctx.text_api(direction);

    if text.is_empty() {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        let visual = api.reorder_bytes(&bytes)?;
        ctx.surface.print(&visual)?;
    } else {
        let visual = api.reorder(&text.join(" "));
        ctx.surface.println(&visual)?;
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, init: bool) -> Result<()> {
    let path = RtlkitConfig::path(&ctx.config_dir);

    if init {
        let message = if path.exists() {
            CmdMessage::warning(format!("{} already exists", path.display()))
        } else {
            ctx.config.save(&ctx.config_dir)?;
            CmdMessage::success(format!("Wrote {}", path.display()))
        };
        print_messages(&mut ctx.surface, &[message])?;
    }

    let json = serde_json::to_string_pretty(&ctx.config)?;
    ctx.surface.println(&json)?;
    Ok(())
}
