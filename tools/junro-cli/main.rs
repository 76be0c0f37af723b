use clap::{Parser, ValueEnum};
use junro::prelude::*;
use std::fs;
use std::io::{self, Write};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Output format for validation issues and simulation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Validate and simulate workflow graphs exported from the editor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow JSON document (plain or wrapped in a Markdown code fence)
    workflow_path: Option<String>,

    /// Only run validation, never simulate
    #[arg(long)]
    validate_only: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Fill in action labels and parameters from the built-in automation catalog
    #[arg(long)]
    resolve_actions: bool,

    /// Treat warnings as blocking
    #[arg(long)]
    strict: bool,

    /// Simulated duration of each step, in milliseconds
    #[arg(long, default_value_t = 250)]
    step_ms: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

struct RunOptions {
    workflow_path: String,
    validate_only: bool,
    format: OutputFormat,
    resolve_actions: bool,
    strict: bool,
    step_ms: u64,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = if cli.human {
        prompt_options(&cli)
    } else {
        RunOptions {
            workflow_path: cli.workflow_path.clone().unwrap_or_else(|| {
                exit_with_error("Workflow path is required in non-interactive mode.")
            }),
            validate_only: cli.validate_only,
            format: cli.format,
            resolve_actions: cli.resolve_actions,
            strict: cli.strict,
            step_ms: cli.step_ms,
        }
    };

    if !run(options) {
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "junro=debug" } else { "junro=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Loads, validates and simulates one workflow. Returns `false` if the run was blocked or failed.
fn run(options: RunOptions) -> bool {
    // --- 1. Loading ---
    let text = fs::read_to_string(&options.workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            options.workflow_path, e
        ))
    });
    let mut workflow = WorkflowDocument::from_generated_text(&text)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load workflow: {}", e)))
        .into_workflow();

    if options.resolve_actions {
        resolve_actions(&mut workflow, &AutomationCatalog::default());
    }

    let text_output = options.format == OutputFormat::Text;
    if text_output {
        println!("Loaded workflow from: {}", options.workflow_path);
        println!(
            "  Nodes: {}  Connections: {}",
            workflow.nodes.len(),
            workflow.edges.len()
        );
    }

    // --- 2. Validation ---
    let issues = validate(&workflow);
    let blocked = if options.strict {
        !issues.is_empty()
    } else {
        has_errors(&issues)
    };

    if options.validate_only || blocked {
        print_issues(&issues, options.format);
        if text_output && blocked {
            println!("\nSimulation blocked by validation.");
        }
        return !blocked;
    }

    if text_output && !issues.is_empty() {
        println!("\nValidation Warnings");
        println!("{}", TraceFormatter::format_issues(&issues));
    }

    // --- 3. Simulation ---
    let mut builder = Simulator::builder(&workflow)
        .with_clock(SimulatedClock::new(options.step_ms))
        .skip_validation();
    if text_output {
        println!("\nExecution Timeline");
        builder = builder.with_observer(|index: usize, step: &Step| {
            println!("{}", TraceFormatter::format_step(index, step));
        });
    }

    match builder.build().run() {
        Ok(result) => {
            if text_output {
                println!("\n{}", TraceFormatter::format_summary(&result));
            } else {
                print_json(&serde_json::json!({ "issues": issues, "result": result }));
            }
            true
        }
        Err(e) => {
            if text_output {
                eprintln!("\nError: {}", e);
            } else {
                print_json(&serde_json::json!({ "issues": issues, "error": e.to_string() }));
            }
            false
        }
    }
}

fn resolve_actions(workflow: &mut Workflow, catalog: &AutomationCatalog) {
    for node in &mut workflow.nodes {
        if let NodeKind::Automated(data) = &mut node.kind {
            if !data.action.is_empty() && !catalog.resolve(data) {
                warn!(node = %node.id, action = %data.action, "action not found in catalog");
            }
        }
    }
}

fn print_issues(issues: &[Issue], format: OutputFormat) {
    match format {
        OutputFormat::Text if issues.is_empty() => println!("\nNo validation issues found."),
        OutputFormat::Text => {
            println!("\nValidation Issues");
            println!("{}", TraceFormatter::format_issues(issues));
        }
        OutputFormat::Json => print_json(&serde_json::json!({ "issues": issues })),
    }
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => exit_with_error(&format!("Failed to serialize output: {}", e)),
    }
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn prompt_options(cli: &Cli) -> RunOptions {
    println!("--- Junro Interactive Mode ---");

    let workflow_path = prompt_for_input("Enter workflow path", Some("workflow.json"));
    let validate_only = loop {
        println!("\nWhat should be run?");
        println!("  1: Validate and simulate");
        println!("  2: Validate only");
        match prompt_for_input("Enter choice", Some("1")).as_str() {
            "1" => break false,
            "2" => break true,
            _ => println!("Invalid choice. Please enter 1 or 2."),
        }
    };
    let resolve_actions = prompt_for_input("Resolve automation actions? (y/n)", Some("n"))
        .eq_ignore_ascii_case("y");

    RunOptions {
        workflow_path,
        validate_only,
        format: OutputFormat::Text,
        resolve_actions,
        strict: cli.strict,
        step_ms: cli.step_ms,
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or(String::new(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if io::stdout().flush().is_err() || io::stdin().read_line(&mut line).is_err() {
        exit_with_error("Failed to read from the terminal.");
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed.to_string()
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
