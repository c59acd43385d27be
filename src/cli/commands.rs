//! Command dispatch

use std::fs;

use colored::{ColoredString, Colorize};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{open_in_editor, ApplicationError, CatalogService, IoResultExt};
use crate::cli::args::{
    CatalogCommands, Cli, Commands, ConfigCommands, ListCommands, TreeCommands,
};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::select::select_problem;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{
    list, tree, Difficulty, ListNode, ProblemMeta, Tag, TreeNode, TreeNodeConvert,
};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let mut settings = Settings::load(cli.solutions_dir.as_deref())?;
    if let Some(dir) = &cli.solutions_dir {
        settings.solutions_dir = dir.clone();
    }

    match &cli.command {
        Some(Commands::Tree { command }) => match command {
            TreeCommands::Build { tokens } => _tree_build(tokens),
            TreeCommands::Demo => _tree_demo(),
        },
        Some(Commands::List { command }) => match command {
            ListCommands::Build { values } => _list_build(values),
        },
        Some(Commands::Catalog { command }) => match command {
            CatalogCommands::List { tag, difficulty } => {
                _catalog_list(&settings, tag.as_deref(), difficulty.as_deref())
            }
            CatalogCommands::Show { id } => _catalog_show(&settings, id),
            CatalogCommands::Status => _catalog_status(&settings),
        },
        Some(Commands::Pick) => _pick(&settings),
        Some(Commands::Edit { id }) => _edit(&settings, id),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(&settings),
            ConfigCommands::Path => _config_path(&settings),
            ConfigCommands::Init => _config_init(),
        },
        None => Ok(()),
    }
}

/// Splits comma-separated argument groups into individual tokens.
/// Empty pieces survive the split: they are absence markers.
fn split_tokens(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split(','))
        .map(|token| token.trim().to_string())
        .collect()
}

#[instrument]
fn _tree_build(args: &[String]) -> CliResult<()> {
    let tokens = split_tokens(args);
    debug!("tokens: {:?}", tokens);
    match TreeNode::from_level_order(&tokens).map_err(ApplicationError::from)? {
        Some(root) => print_tree(&root),
        None => output::info(&tree::render(None)),
    }
    Ok(())
}

#[instrument]
fn _tree_demo() -> CliResult<()> {
    let root = TreeNode::reference_fixture();
    print_tree(&root);
    Ok(())
}

fn print_tree(root: &TreeNode) {
    output::info(&root.to_tree_string());
    output::detail(&format!(
        "{} nodes, depth {}, level-order {:?}",
        root.node_count(),
        root.depth(),
        root.level_order()
    ));
}

#[instrument]
fn _list_build(values: &[i32]) -> CliResult<()> {
    let head = ListNode::from_values(values);
    output::info(&list::render(head.as_deref()));
    Ok(())
}

#[instrument(skip(settings))]
fn _catalog_list(
    settings: &Settings,
    tag: Option<&str>,
    difficulty: Option<&str>,
) -> CliResult<()> {
    let service = CatalogService::new();
    let catalog = service.load(&settings.catalog_path())?;

    let tag = tag.map(Tag::parse);
    let difficulty = difficulty
        .map(str::parse::<Difficulty>)
        .transpose()
        .map_err(ApplicationError::from)?;

    let entries = catalog.filtered(tag.as_ref(), difficulty);
    if entries.is_empty() {
        output::info("no matching problems");
        return Ok(());
    }
    for (id, meta) in entries {
        output::info(&format!(
            "{}  {}  {}  [{}]",
            id,
            difficulty_badge(meta.difficulty),
            meta.title,
            meta.tag_line()
        ));
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _catalog_show(settings: &Settings, id: &str) -> CliResult<()> {
    let service = CatalogService::new();
    let catalog = service.load(&settings.catalog_path())?;
    let meta = catalog
        .get(id)
        .ok_or_else(|| ApplicationError::ProblemNotFound(id.to_string()))?;
    print_problem(id, meta);
    Ok(())
}

#[instrument(skip(settings))]
fn _catalog_status(settings: &Settings) -> CliResult<()> {
    let service = CatalogService::new();
    let catalog = service.load(&settings.catalog_path())?;
    let status = service.scan_solutions(&catalog, &settings.solutions_dir)?;

    output::header(&format!(
        "{} problems, {} solved",
        catalog.len(),
        status.solved.len()
    ));
    for (id, path) in &status.solved {
        output::success_detail(&format!("{}  {}", id, path.display()));
    }
    for id in &status.missing {
        output::failure(&format!("{}  (no solution file)", id));
    }
    for orphan in &status.orphans {
        output::warning(&format!("orphan solution file: {}", orphan.display()));
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _pick(settings: &Settings) -> CliResult<()> {
    let service = CatalogService::new();
    let catalog = service.load(&settings.catalog_path())?;
    if catalog.is_empty() {
        return Err(CliError::Usage(
            "catalog is empty, nothing to pick".to_string(),
        ));
    }
    match select_problem(&catalog) {
        Some(id) => {
            let meta = catalog
                .get(&id)
                .ok_or_else(|| ApplicationError::ProblemNotFound(id.clone()))?;
            print_problem(&id, meta);
        }
        None => output::info("no selection"),
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _edit(settings: &Settings, id: &str) -> CliResult<()> {
    if !is_problem_id(id) {
        return Err(CliError::InvalidArgs(format!(
            "'{}' is not a problem id (expected p<digits>, e.g. p0001)",
            id
        )));
    }
    let service = CatalogService::new();
    let file = service.solution_file(&settings.solutions_dir, id)?;
    open_in_editor(&settings.editor, &file)?;
    Ok(())
}

fn is_problem_id(id: &str) -> bool {
    id.len() > 1 && id.starts_with('p') && id[1..].chars().all(|c| c.is_ascii_digit())
}

#[instrument(skip(settings))]
fn _config_show(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

#[instrument(skip(settings))]
fn _config_path(settings: &Settings) -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::info(&format!("global: {}", path.display())),
        None => output::info("global: <unavailable>"),
    }
    output::info(&format!(
        "local:  {}",
        local_config_path(&settings.solutions_dir).display()
    ));
    Ok(())
}

#[instrument]
fn _config_init() -> CliResult<()> {
    let path = global_config_path().ok_or_else(|| {
        CliError::Usage("cannot determine global config directory".to_string())
    })?;
    if path.exists() {
        return Err(CliError::Usage(format!(
            "config already exists: {}",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_path_context("create config directory", parent)?;
    }
    fs::write(&path, Settings::template()).with_path_context("write config", &path)?;
    output::action("Created", &path.display());
    Ok(())
}

fn difficulty_badge(difficulty: Difficulty) -> ColoredString {
    let name = difficulty.to_string();
    match difficulty {
        Difficulty::Easy => name.green(),
        Difficulty::Medium => name.yellow(),
        Difficulty::Hard => name.red(),
    }
}

fn print_problem(id: &str, meta: &ProblemMeta) {
    output::header(&format!("{}  {}", id, meta.title));
    output::detail(&format!("difficulty: {}", difficulty_badge(meta.difficulty)));
    if !meta.tags.is_empty() {
        output::detail(&format!("tags: {}", meta.tag_line()));
    }
    if !meta.kinds.is_empty() {
        output::detail(&format!(
            "kinds: {}",
            meta.kinds.iter().map(ToString::to_string).join(", ")
        ));
    }
    if let Some(url) = &meta.url {
        output::detail(url);
    }
    for link in &meta.links {
        output::detail(link);
    }
    if !meta.description.is_empty() {
        output::info("");
        output::info(&meta.description);
    }
}
