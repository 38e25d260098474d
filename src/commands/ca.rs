use crate::command::{number_or, Command, CommandResult, SubcommandTable};
use crate::commands::help;
use crate::context::TerminalContext;
use crate::error::CommandError;
use crate::parser::ParsedCommand;
use crate::render::{group_thousands, Renderable};

/// ca <command> [args]
/// Cellular automata engine console. Numbers are derived from the arguments
/// with plain arithmetic; no grid exists anywhere.
pub struct CaCommand;

pub static TABLE: SubcommandTable = SubcommandTable {
    scope: "ca",
    usage: "Usage: ca <command> [args]. Type 'help' for details.",
    entries: &[
        ("grid", grid),
        ("rule", rule),
        ("cell", cell),
        ("region", region),
        ("inject", inject),
        ("simulate", simulate),
        ("benchmark", benchmark),
        ("profile", profile),
        ("debug", debug),
        ("query", query),
    ],
};

// nested tables are keyed on the first positional arg
static GRID: SubcommandTable = SubcommandTable {
    scope: "grid",
    usage: "Usage: ca grid <init|step|info|export|import|query>",
    entries: &[
        ("init", grid_init),
        ("step", grid_step),
        ("info", grid_info),
        ("export", grid_export),
        ("import", grid_import),
        ("query", grid_query),
    ],
};

static RULE: SubcommandTable = SubcommandTable {
    scope: "rule",
    usage: "Usage: ca rule <load|validate|compile|list>",
    entries: &[
        ("load", rule_load),
        ("validate", rule_validate),
        ("compile", rule_compile),
        ("list", rule_list),
    ],
};

static CELL: SubcommandTable = SubcommandTable {
    scope: "cell",
    usage: "Usage: ca cell <get|set> [x] [y]",
    entries: &[("get", cell_get), ("set", cell_set)],
};

static REGION: SubcommandTable = SubcommandTable {
    scope: "region",
    usage: "Usage: ca region <get|assign-rule>",
    entries: &[("get", region_get), ("assign-rule", region_assign_rule)],
};

static QUERY: SubcommandTable = SubcommandTable {
    scope: "query",
    usage: "Usage: ca query <stability|entropy|performance>",
    entries: &[
        ("stability", query_stability),
        ("entropy", query_entropy),
        ("performance", query_performance),
    ],
};

const DEFAULT_WIDTH: u64 = 1920;
const DEFAULT_HEIGHT: u64 = 1080;
const DEFAULT_RULES: &str = "config/ca-rules.json";
const DEFAULT_SNAPSHOT: &str = "grid.bin";
const DEFAULT_RULE_ID: &str = "portfolio_ambient";
// two buffers of 12-byte cells
const BYTES_PER_CELL: u64 = 24;
const MS_PER_STEP: f64 = 2.3;
const WORKGROUP: u64 = 16;

impl Command for CaCommand {
    fn execute(&self, cmd: &ParsedCommand, ctx: &mut TerminalContext) -> CommandResult {
        if cmd.has_flag("help") {
            return Ok(help::suite_help("ca"));
        }
        TABLE.dispatch(cmd.subcommand.as_deref(), cmd, ctx)
    }
}

fn grid(cmd: &ParsedCommand, ctx: &TerminalContext) -> CommandResult {
    GRID.dispatch(cmd.arg(0), cmd, ctx)
}

fn rule(cmd: &ParsedCommand, ctx: &TerminalContext) -> CommandResult {
    RULE.dispatch(cmd.arg(0), cmd, ctx)
}

fn cell(cmd: &ParsedCommand, ctx: &TerminalContext) -> CommandResult {
    CELL.dispatch(cmd.arg(0), cmd, ctx)
}

fn region(cmd: &ParsedCommand, ctx: &TerminalContext) -> CommandResult {
    REGION.dispatch(cmd.arg(0), cmd, ctx)
}

fn query(cmd: &ParsedCommand, ctx: &TerminalContext) -> CommandResult {
    QUERY.dispatch(cmd.arg(0), cmd, ctx)
}

fn mebibytes(cells: u64) -> u64 {
    cells.saturating_mul(BYTES_PER_CELL).div_ceil(1 << 20)
}

fn plural(n: u64, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

/// Cheap deterministic "reading" in [0, 1) for a coordinate, so the same
/// cell always reports the same numbers.
fn sample(x: u64, y: u64, salt: u64) -> f64 {
    let h = x.wrapping_mul(31).wrapping_add(y.wrapping_mul(17)).wrapping_add(salt.wrapping_mul(7));
    (h % 100) as f64 / 100.0
}

fn state_at(x: u64, y: u64) -> &'static str {
    match x.wrapping_add(y) % 4 {
        0 => "empty",
        1 => "growing",
        2 => "stable",
        _ => "decaying",
    }
}

fn grid_init(cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let width = number_or(cmd.arg(1), DEFAULT_WIDTH);
    let height = number_or(cmd.arg(2), DEFAULT_HEIGHT);
    let cells = width.saturating_mul(height);
    Ok(Some(Renderable::group(vec![
        Renderable::heading("Initializing CA Grid Engine..."),
        Renderable::plain(format!(
            "→ Allocating dual buffers ({}×{} = {} cells)",
            width,
            height,
            group_thousands(cells)
        )),
        Renderable::plain("→ Compiling WGSL compute shaders..."),
        Renderable::plain("→ Initializing WebGPU context..."),
        Renderable::plain("→ Building spatial hash map..."),
        Renderable::success(format!("Grid initialized! Memory: {}MB", mebibytes(cells))),
    ])))
}

fn grid_step(cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let count = number_or(cmd.flag_value("count"), 1u64).max(1);
    let mut items = vec![
        Renderable::heading(format!("Running {}...", plural(count, "simulation step"))),
        Renderable::plain("Step 1: 342 cells changed | Stability: 0.89 | Entropy: 0.42"),
    ];
    if count > 1 {
        items.push(Renderable::plain(format!(
            "Step {}: 127 cells changed | Stability: 0.94 | Entropy: 0.38",
            count
        )));
    }
    items.push(Renderable::success(format!(
        "Average: {}ms/step ({}fps) | Total: {:.1}ms",
        MS_PER_STEP,
        (1000.0 / MS_PER_STEP).floor() as u64,
        MS_PER_STEP * count as f64
    )));
    Ok(Some(Renderable::group(items)))
}

fn grid_info(_cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let cells = DEFAULT_WIDTH * DEFAULT_HEIGHT;
    Ok(Some(Renderable::key_values(
        Some("Grid Statistics:"),
        [
            ("Dimensions", format!("{}×{}", DEFAULT_WIDTH, DEFAULT_HEIGHT)),
            ("Total Cells", group_thousands(cells)),
            ("Active Cells", group_thousands(842_341)),
            ("Stability", "0.91".to_string()),
            ("Avg Energy", "0.34".to_string()),
            ("Avg Pressure", "0.67".to_string()),
            ("Wave Velocity", "2.0".to_string()),
            ("GPU Compute", "Active".to_string()),
        ],
    )))
}

fn grid_export(cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let file = cmd.arg(1).unwrap_or(DEFAULT_SNAPSHOT);
    let cells = DEFAULT_WIDTH * DEFAULT_HEIGHT;
    Ok(Some(Renderable::group(vec![
        Renderable::heading(format!("Exporting grid state to {}...", file)),
        Renderable::plain(format!("→ Serializing {} cells", group_thousands(cells))),
        Renderable::plain("→ Compressing energy & pressure channels..."),
        Renderable::success(format!("Export complete ({}MB)", mebibytes(cells) / 2)),
    ])))
}

fn grid_import(cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let file = cmd.arg(1).unwrap_or(DEFAULT_SNAPSHOT);
    Ok(Some(Renderable::group(vec![
        Renderable::heading(format!("Importing grid state from {}...", file)),
        Renderable::plain("→ Verifying snapshot header..."),
        Renderable::plain("→ Uploading buffers to GPU..."),
        Renderable::success(format!("Grid restored ({}×{})", DEFAULT_WIDTH, DEFAULT_HEIGHT)),
    ])))
}

fn grid_query(cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let x = number_or(cmd.arg(1), DEFAULT_WIDTH / 2);
    let y = number_or(cmd.arg(2), DEFAULT_HEIGHT / 2);
    Ok(Some(cell_report(x, y)))
}

fn cell_report(x: u64, y: u64) -> Renderable {
    let title = format!("Cell ({}, {})", x, y);
    Renderable::key_values(
        Some(title.as_str()),
        [
            ("State", state_at(x, y).to_string()),
            ("Energy", format!("{:.2}", sample(x, y, 1))),
            ("Pressure", format!("{:.2}", sample(x, y, 2))),
            ("Rule", DEFAULT_RULE_ID.to_string()),
        ],
    )
}

/// What a rule file says about itself.
struct RuleSummary {
    id: String,
    neighborhood: String,
    transitions: u64,
}

// outer Err: the file isn't there. inner Err: it is, but doesn't parse
fn read_rules(ctx: &TerminalContext, path: &str) -> Result<Result<RuleSummary, String>, CommandError> {
    let text = ctx.vfs.read_file(path)?;
    let parsed: serde_json::Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(e) => return Ok(Err(e.to_string())),
    };
    let Some(id) = parsed.get("id").and_then(|v| v.as_str()) else {
        return Ok(Err("missing \"id\"".to_string()));
    };
    Ok(Ok(RuleSummary {
        id: id.to_string(),
        neighborhood: parsed
            .pointer("/neighbor_kernel/type")
            .and_then(|v| v.as_str())
            .unwrap_or("moore")
            .to_string(),
        transitions: parsed
            .get("transitions")
            .and_then(|v| v.as_array())
            .map_or(0, |t| t.len() as u64),
    }))
}

fn invalid_rules(file: &str, reason: &str) -> CommandError {
    CommandError::Invalid(format!("Invalid rule file {}: {}", file, reason))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn rule_load(cmd: &ParsedCommand, ctx: &TerminalContext) -> CommandResult {
    let file = cmd.arg(1).unwrap_or(DEFAULT_RULES);
    let summary = read_rules(ctx, file)?.map_err(|reason| invalid_rules(file, &reason))?;
    Ok(Some(Renderable::group(vec![
        Renderable::heading(format!("Loading rule: {}", file)),
        Renderable::plain("→ Parsing JSON configuration..."),
        Renderable::plain("→ Validating transition rules..."),
        Renderable::plain("→ Compiling rule engine..."),
        Renderable::success(format!("Rule loaded: {}", summary.id)),
        Renderable::muted(format!(
            "{} | {} neighborhood | Parallel compute",
            plural(summary.transitions, "transition"),
            capitalize(&summary.neighborhood)
        )),
    ])))
}

fn rule_validate(cmd: &ParsedCommand, ctx: &TerminalContext) -> CommandResult {
    let file = cmd.arg(1).unwrap_or(DEFAULT_RULES);
    let items = match read_rules(ctx, file)? {
        Ok(summary) => vec![
            Renderable::heading(format!("Validating rules in {}...", file)),
            Renderable::plain("✓ Schema valid"),
            Renderable::plain(format!("✓ {} well-formed", plural(summary.transitions, "transition"))),
            Renderable::plain("✓ Physics parameters in range"),
            Renderable::plain("✓ No circular dependencies"),
            Renderable::success("Validation passed!"),
        ],
        Err(reason) => vec![
            Renderable::heading(format!("Validating rules in {}...", file)),
            Renderable::error(format!("✗ Schema invalid: {}", reason)),
        ],
    };
    Ok(Some(Renderable::group(items)))
}

fn rule_compile(cmd: &ParsedCommand, ctx: &TerminalContext) -> CommandResult {
    let file = cmd.arg(1).unwrap_or(DEFAULT_RULES);
    let summary = read_rules(ctx, file)?.map_err(|reason| invalid_rules(file, &reason))?;
    Ok(Some(Renderable::group(vec![
        Renderable::heading(format!("Compiling {}...", summary.id)),
        Renderable::plain("→ Lowering transitions to WGSL..."),
        Renderable::plain(format!("→ Workgroup size {}×{}", WORKGROUP, WORKGROUP)),
        Renderable::success(format!(
            "Compiled {} → {} kernel",
            summary.id,
            plural(summary.transitions, "transition")
        )),
    ])))
}

fn rule_list(_cmd: &ParsedCommand, ctx: &TerminalContext) -> CommandResult {
    let mut rows = vec![
        vec!["conway_life".to_string(), "Moore".to_string(), "2".to_string(), "built-in".to_string()],
        vec!["wave_ripple".to_string(), "Von Neumann".to_string(), "4".to_string(), "built-in".to_string()],
    ];
    // anything json under config/ that names itself counts as a rule set
    if let Ok(entries) = ctx.vfs.list_dir("config") {
        for entry in entries.iter().filter(|e| e.name.ends_with(".json")) {
            let path = format!("config/{}", entry.name);
            if let Ok(Ok(summary)) = read_rules(ctx, &path) {
                rows.push(vec![
                    summary.id,
                    capitalize(&summary.neighborhood),
                    summary.transitions.to_string(),
                    path,
                ]);
            }
        }
    }
    Ok(Some(Renderable::table(&["Rule", "Neighborhood", "Transitions", "Source"], rows)))
}

fn cell_get(cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let x = number_or(cmd.arg(1), 0u64);
    let y = number_or(cmd.arg(2), 0u64);
    Ok(Some(cell_report(x, y)))
}

fn cell_set(cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let x = number_or(cmd.arg(1), 0u64);
    let y = number_or(cmd.arg(2), 0u64);
    let state = cmd.arg(3).unwrap_or("growing");
    Ok(Some(Renderable::group(vec![
        Renderable::plain(format!("Cell ({}, {}): {} → {}", x, y, state_at(x, y), state)),
        Renderable::muted("→ 8 neighbors notified (Moore kernel)"),
    ])))
}

fn region_bounds(cmd: &ParsedCommand, first: usize) -> (u64, u64, u64, u64) {
    (
        number_or(cmd.arg(first), 0u64),
        number_or(cmd.arg(first + 1), 0u64),
        number_or(cmd.arg(first + 2), 64u64),
        number_or(cmd.arg(first + 3), 64u64),
    )
}

fn region_get(cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let (x, y, w, h) = region_bounds(cmd, 1);
    let cells = w.saturating_mul(h);
    let active = (cells as f64 * 0.41).round() as u64;
    let title = format!("Region ({}, {}) {}×{}", x, y, w, h);
    Ok(Some(Renderable::key_values(
        Some(title.as_str()),
        [
            ("Cells", group_thousands(cells)),
            ("Active", group_thousands(active)),
            ("Avg Energy", format!("{:.2}", sample(x, y, 3))),
            ("Dominant State", state_at(x, y).to_string()),
        ],
    )))
}

fn region_assign_rule(cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let rule = cmd.arg(1).unwrap_or(DEFAULT_RULE_ID);
    let (x, y, w, h) = region_bounds(cmd, 2);
    Ok(Some(Renderable::group(vec![
        Renderable::plain(format!("Assigned rule {} to region ({}, {}) {}×{}", rule, x, y, w, h)),
        Renderable::muted(format!("{} cells rebound", group_thousands(w.saturating_mul(h)))),
    ])))
}

fn inject(cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let x = number_or(cmd.arg(0), DEFAULT_WIDTH / 2);
    let y = number_or(cmd.arg(1), DEFAULT_HEIGHT / 2);
    let energy = number_or(cmd.arg(2), 0.8f64);
    let radius = number_or(cmd.flag_value("radius"), 50u64);
    // float math, a u64 square overflows past ~4.3e9
    let r = radius as f64;
    let affected = (std::f64::consts::PI * r * r).round() as u64;
    Ok(Some(Renderable::group(vec![
        Renderable::plain(format!("Injected energy={} at ({}, {}) with radius={}", energy, x, y, radius)),
        Renderable::success(format!("Wave propagating... {} cells affected", group_thousands(affected))),
    ])))
}

fn simulate(cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let fps = number_or(cmd.flag_value("fps"), 60u64).max(1);
    Ok(Some(Renderable::group(vec![
        Renderable::heading(format!("Starting real-time simulation @ {}fps", fps)),
        Renderable::plain(format!("Frame budget: {:.2}ms", 1000.0 / fps as f64)),
        Renderable::plain("WebGPU compute pipeline active"),
        Renderable::plain("Press Ctrl+C to stop"),
        Renderable::success("[Simulation running...]"),
    ])))
}

fn benchmark(cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let steps = number_or(cmd.flag_value("steps"), 1000u64).max(1);
    let baseline = (DEFAULT_WIDTH * DEFAULT_HEIGHT) as f64;
    let rows = [(512u64, 512u64), (1024, 1024), (DEFAULT_WIDTH, DEFAULT_HEIGHT)]
        .iter()
        .map(|&(w, h)| {
            let cells = w * h;
            let ms = MS_PER_STEP * cells as f64 / baseline;
            vec![
                format!("{}×{}", w, h),
                group_thousands(cells),
                format!("{:.2}", ms),
                format!("{}", (1000.0 / ms).floor() as u64),
                format!("{:.1}s", ms * steps as f64 / 1000.0),
            ]
        })
        .collect();
    Ok(Some(Renderable::group(vec![
        Renderable::heading(format!("Benchmarking {}...", plural(steps, "step"))),
        Renderable::table(&["Grid", "Cells", "ms/step", "FPS", "Total"], rows),
    ])))
}

fn profile(_cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    Ok(Some(Renderable::key_values(
        Some("Pipeline profile (per step):"),
        [
            ("Neighbor gather", "0.9ms"),
            ("Transition eval", "0.8ms"),
            ("Physics update", "0.4ms"),
            ("Buffer swap", "0.2ms"),
            ("Total", "2.3ms"),
        ],
    )))
}

fn debug(_cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let groups_x = DEFAULT_WIDTH.div_ceil(WORKGROUP);
    let groups_y = DEFAULT_HEIGHT.div_ceil(WORKGROUP);
    Ok(Some(Renderable::key_values(
        Some("Compute pipeline state:"),
        [
            ("Adapter", "WebGPU (high-performance)".to_string()),
            ("Buffers", "2 × storage (ping-pong)".to_string()),
            ("Workgroup", format!("{}×{}", WORKGROUP, WORKGROUP)),
            (
                "Dispatch",
                format!("{}×{} = {} groups", groups_x, groups_y, group_thousands(groups_x * groups_y)),
            ),
            ("Active rule", DEFAULT_RULE_ID.to_string()),
        ],
    )))
}

fn query_stability(_cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    Ok(Some(Renderable::key_values(
        Some("Stability"),
        [("Current", "0.91"), ("Trend (100 steps)", "+0.03"), ("Oscillators", "1,204")],
    )))
}

fn query_entropy(_cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    Ok(Some(Renderable::key_values(
        Some("Entropy"),
        [("Shannon", "0.38 bits/cell"), ("Spatial", "0.42"), ("Trend (100 steps)", "-0.04")],
    )))
}

fn query_performance(_cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    Ok(Some(Renderable::key_values(
        Some("Performance"),
        [
            ("Step time", format!("{}ms", MS_PER_STEP)),
            ("FPS", format!("{}", (1000.0 / MS_PER_STEP).floor() as u64)),
            ("GPU memory", format!("{}MB", mebibytes(DEFAULT_WIDTH * DEFAULT_HEIGHT))),
        ],
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;

    fn run(line: &str) -> String {
        let mut ctx = TerminalContext::new(CliConfig { banner: false, ..CliConfig::default() });
        ctx.submit(line).rendered.map(|r| r.to_string()).unwrap_or_default()
    }

    #[test]
    fn grid_init_defaults() {
        let out = run("ca grid init");
        assert!(out.contains("1920×1080 = 2,073,600 cells"), "{}", out);
        assert!(out.contains("Memory: 48MB"));
    }

    #[test]
    fn grid_init_custom_and_garbage() {
        assert!(run("ca grid init 100 50").contains("100×50 = 5,000 cells"));
        assert!(run("ca grid init wide tall").contains("1920×1080"));
    }

    #[test]
    fn grid_usage_and_unknown() {
        assert_eq!(run("ca grid"), "Usage: ca grid <init|step|info|export|import|query>");
        assert_eq!(run("ca grid explode"), "Unknown grid command: explode");
    }

    #[test]
    fn step_count() {
        let one = run("ca grid step");
        assert!(one.starts_with("Running 1 simulation step..."));
        assert!(!one.contains("127 cells changed"));

        let ten = run("ca grid step --count 10");
        assert!(ten.starts_with("Running 10 simulation steps..."));
        assert!(ten.contains("Step 10: 127 cells changed"));
        assert!(ten.contains("(434fps)"));
    }

    #[test]
    fn step_count_equals_form_is_ignored() {
        assert!(run("ca grid step --count=10").starts_with("Running 1 simulation step..."));
    }

    #[test]
    fn inject_defaults_and_area() {
        let out = run("ca inject");
        assert!(out.contains("Injected energy=0.8 at (960, 540) with radius=50"));
        assert!(out.contains("7,854 cells affected"));

        let small = run("ca inject 10 20 0.5 --radius 3");
        assert!(small.contains("energy=0.5 at (10, 20) with radius=3"));
        assert!(small.contains("28 cells affected"));
    }

    #[test]
    fn rule_load_reads_filesystem() {
        let out = run("ca rule load");
        assert!(out.contains("Rule loaded: portfolio_ambient"));
        assert!(out.contains("1 transition | Moore neighborhood"));
    }

    #[test]
    fn rule_load_missing_file() {
        assert_eq!(run("ca rule load nowhere.json"), "Path not found: nowhere.json");
    }

    #[test]
    fn rule_validate_flags_non_json() {
        let out = run("ca rule validate config/site.yaml");
        assert!(out.contains("✗ Schema invalid"));
    }

    #[test]
    fn rule_list_includes_filesystem_rules() {
        let out = run("ca rule list");
        assert!(out.contains("conway_life"));
        assert!(out.contains("portfolio_ambient"));
        assert!(out.contains("config/ca-rules.json"));
    }

    #[test]
    fn region_cells_are_area() {
        let out = run("ca region get 0 0 100 20");
        assert!(out.contains("Region (0, 0) 100×20"));
        assert!(out.contains("2,000"));
    }

    #[test]
    fn cell_readings_are_stable() {
        assert_eq!(run("ca cell get 3 4"), run("ca cell get 3 4"));
        assert!(run("ca cell set 1 1 stable").contains("Cell (1, 1): stable → stable"));
    }

    #[test]
    fn query_family() {
        assert!(run("ca query stability").starts_with("Stability"));
        assert!(run("ca query entropy").starts_with("Entropy"));
        assert!(run("ca query performance").contains("48MB"));
        assert_eq!(run("ca query"), "Usage: ca query <stability|entropy|performance>");
        assert_eq!(run("ca query mood"), "Unknown query command: mood");
    }

    #[test]
    fn unknown_ca_subcommand() {
        assert_eq!(run("ca step"), "Unknown ca command: step");
        assert_eq!(run("ca"), "Usage: ca <command> [args]. Type 'help' for details.");
    }

    #[test]
    fn debug_dispatch_grid() {
        assert!(run("ca debug").contains("120×68 = 8,160 groups"));
    }

    #[test]
    fn huge_inject_radius_saturates() {
        let out = run("ca inject --radius 5000000000");
        assert!(out.contains("radius=5000000000"), "{}", out);
        assert!(out.contains("cells affected"), "{}", out);
        // f64 -> u64 casts saturate
        let out = run(&format!("ca inject --radius {}", u64::MAX));
        assert!(out.contains(&group_thousands(u64::MAX)), "{}", out);
    }

    #[test]
    fn huge_grid_reports_saturated_memory() {
        let out = run("ca grid init 1000000000 1000000000");
        assert!(out.contains("1,000,000,000,000,000,000 cells"), "{}", out);
        assert!(out.contains(&format!("Memory: {}MB", u64::MAX.div_ceil(1 << 20))), "{}", out);
        assert_eq!(mebibytes(u64::MAX), u64::MAX.div_ceil(1 << 20));
    }

    #[test]
    fn mebibytes_rounds_up() {
        assert_eq!(mebibytes(0), 0);
        assert_eq!(mebibytes(1), 1);
        assert_eq!(mebibytes(2_073_600), 48);
    }
}
