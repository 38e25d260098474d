use crate::command::{number_or, Command, CommandResult, SubcommandTable};
use crate::commands::help;
use crate::context::TerminalContext;
use crate::parser::ParsedCommand;
use crate::render::Renderable;

/// ssg <command> [options]
/// Static site generator front-end. Every step is narrated, nothing is built.
pub struct SsgCommand;

pub static TABLE: SubcommandTable = SubcommandTable {
    scope: "ssg",
    usage: "Usage: ssg <command> [options]. Type 'help' for details.",
    entries: &[
        ("init", init),
        ("populate", populate),
        ("build", build),
        ("dev", dev),
        ("deploy", deploy),
        ("analyze", analyze),
    ],
};

const DEFAULT_PLATFORM: &str = "github-pages";
const DEFAULT_PORT: u16 = 3000;

impl Command for SsgCommand {
    fn execute(&self, cmd: &ParsedCommand, ctx: &mut TerminalContext) -> CommandResult {
        if cmd.has_flag("help") {
            return Ok(help::suite_help("ssg"));
        }
        TABLE.dispatch(cmd.subcommand.as_deref(), cmd, ctx)
    }
}

fn steps(title: &str, lines: &[&str], done: &str) -> Renderable {
    let mut items = vec![Renderable::heading(title)];
    items.extend(lines.iter().map(|l| Renderable::plain(*l)));
    items.push(Renderable::success(done));
    Renderable::group(items)
}

fn init(_cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    Ok(Some(steps(
        "Initializing project...",
        &[
            "✓ Created config/site.yaml",
            "✓ Created src/ directory structure",
            "✓ Created templates/ with 6 page layouts",
            "✓ Initialized Git repository",
        ],
        "Project initialized successfully!",
    )))
}

// counts whatever documents the session's filesystem actually holds
fn populate(_cmd: &ParsedCommand, ctx: &TerminalContext) -> CommandResult {
    let docs = ctx.vfs.list_dir("projects").map(|e| e.len()).unwrap_or(0);
    let reading = format!("→ Reading projects/ ({} document{})", docs, if docs == 1 { "" } else { "s" });
    Ok(Some(steps(
        "Populating content from sources...",
        &[reading.as_str(), "→ Parsing front matter...", "→ Building content index..."],
        &format!("Indexed {} documents", docs),
    )))
}

fn build(cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let minify = cmd.has_flag("minify") || cmd.has_flag("m");
    let optimize = cmd.has_flag("optimize") || cmd.has_flag("o");

    let mut items = vec![
        Renderable::heading("Building static site..."),
        Renderable::plain("→ Rendering 6 pages... Done (412ms)"),
        Renderable::plain("→ Extracting critical CSS... Done (89ms)"),
    ];
    if minify {
        items.push(Renderable::plain("→ Minifying CSS (98.2% reduction)... Done"));
    }
    if optimize {
        items.push(Renderable::plain("→ Optimizing images... Done"));
    }
    items.push(Renderable::plain("→ Generating sitemap & manifest... Done"));
    items.push(Renderable::success("Build complete! Output: dist/"));
    items.push(Renderable::muted("LCP: 0.8s | Total size: 124KB | Pages: 6"));
    Ok(Some(Renderable::group(items)))
}

fn dev(cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let port = number_or(cmd.flag_value("port"), DEFAULT_PORT);
    Ok(Some(steps(
        "Starting development server...",
        &["→ Watching src/ and templates/ for changes", "→ Hot reload enabled"],
        &format!("Dev server running at http://localhost:{}", port),
    )))
}

fn deploy(cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    // `--platform` on its own is a switch, not a name
    let platform = cmd.flag_value("platform").unwrap_or(DEFAULT_PLATFORM);
    Ok(Some(steps(
        &format!("Deploying to {}...", platform),
        &[
            "→ Building production bundle...",
            "→ Running health checks...",
            "→ Uploading assets...",
            "→ Configuring SSL/TLS...",
        ],
        "Deployed successfully! https://jacobcdsmith.dev",
    )))
}

fn analyze(_cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    Ok(Some(Renderable::group(vec![
        Renderable::heading("Performance Analysis Report:"),
        Renderable::key_values(
            Some("Lighthouse Scores"),
            [("Performance", "98"), ("Accessibility", "100"), ("SEO", "100")],
        ),
        Renderable::key_values(
            Some("Core Web Vitals"),
            [("LCP", "0.8s"), ("FID", "12ms"), ("CLS", "0.02")],
        ),
    ])))
}

#[cfg(test)]
mod tests {
    use crate::config::CliConfig;
    use crate::context::TerminalContext;

    fn run(line: &str) -> String {
        let mut ctx = TerminalContext::new(CliConfig { banner: false, ..CliConfig::default() });
        ctx.submit(line).rendered.map(|r| r.to_string()).unwrap_or_default()
    }

    #[test]
    fn bare_ssg_prints_usage() {
        assert_eq!(run("ssg"), "Usage: ssg <command> [options]. Type 'help' for details.");
    }

    #[test]
    fn unknown_ssg_command() {
        assert_eq!(run("ssg step"), "Unknown ssg command: step");
    }

    #[test]
    fn build_flags_toggle_steps() {
        let plain = run("ssg build");
        assert!(!plain.contains("Minifying"));
        assert!(!plain.contains("Optimizing"));

        let full = run("ssg build --minify -o");
        assert!(full.contains("Minifying CSS"));
        assert!(full.contains("Optimizing images"));
    }

    #[test]
    fn deploy_platform() {
        assert!(run("ssg deploy").starts_with("Deploying to github-pages..."));
        assert!(run("ssg deploy --platform netlify").starts_with("Deploying to netlify..."));
        // equals form is not split
        assert!(run("ssg deploy --platform=netlify").starts_with("Deploying to github-pages..."));
    }

    #[test]
    fn populate_counts_project_documents() {
        assert!(run("ssg populate").contains("Indexed 2 documents"));
    }

    #[test]
    fn dev_port_default_and_override() {
        assert!(run("ssg dev").contains("localhost:3000"));
        assert!(run("ssg dev --port 8080").contains("localhost:8080"));
    }

    #[test]
    fn help_flag_shows_suite() {
        assert!(run("ssg --help").starts_with("ssg - Static Site Generator"));
    }
}
