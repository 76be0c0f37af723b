use clap::Parser;
use junro::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;

/// A CLI tool to generate random workflow documents for the Junro engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// Number of steps between the Start and End nodes
    #[arg(long, default_value_t = 6)]
    steps: usize,

    /// Probability (0.0 - 1.0) that a step also links to a later step, creating fan-out
    #[arg(long, default_value_t = 0.2)]
    branch_probability: f64,

    /// Probability (0.0 - 1.0) that a step links back to an earlier step, creating a cycle
    #[arg(long, default_value_t = 0.0)]
    loop_probability: f64,
}

const TASK_TITLES: [&str; 6] = [
    "Collect Documents",
    "Schedule Orientation",
    "Prepare Equipment",
    "Review Contract",
    "Set Up Accounts",
    "Assign Mentor",
];

const ASSIGNEES: [&str; 5] = ["HR", "IT", "Hiring Manager", "Payroll", ""];

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Add validation to ensure the probabilities make sense
    for (name, p) in [
        ("--branch-probability", cli.branch_probability),
        ("--loop-probability", cli.loop_probability),
    ] {
        if !(0.0..=1.0).contains(&p) {
            eprintln!("Error: {} ({}) must be between 0.0 and 1.0", name, p);
            std::process::exit(1);
        }
    }

    println!(
        "Generating a workflow with {} intermediate steps (branching {:.2}, looping {:.2})...",
        cli.steps, cli.branch_probability, cli.loop_probability
    );

    let mut rng = rand::rng();
    let workflow = generate_workflow(&mut rng, &cli)?;

    let issues = validate(&workflow);
    println!(
        "Generated {} nodes and {} edges ({} validation issue(s))",
        workflow.nodes.len(),
        workflow.edges.len(),
        issues.len()
    );

    WorkflowDocument::from_workflow(&workflow).save(&cli.output)?;
    println!("Successfully saved workflow to '{}'", cli.output);

    Ok(())
}

fn generate_workflow(rng: &mut ThreadRng, cli: &Cli) -> Result<Workflow> {
    let catalog = AutomationCatalog::default();
    let mut editor = WorkflowEditor::new();

    let start = editor.add_node(
        NodeKind::Start(StartData {
            title: "Employee Onboarding".to_string(),
            metadata: [("department", "Engineering")].into_iter().collect(),
        }),
        Position::new(250.0, 0.0),
    );

    let mut chain = vec![start];
    for index in 0..cli.steps {
        let kind = random_step(rng, &catalog);
        let position = Position::new(250.0, 150.0 * (index + 1) as f64);
        chain.push(editor.add_node(kind, position));
    }

    let end = editor.add_node(
        NodeKind::End(EndData {
            end_message: "Onboarding complete".to_string(),
            generate_summary: rng.random_bool(0.5),
        }),
        Position::new(250.0, 150.0 * (cli.steps + 1) as f64),
    );
    chain.push(end);

    for pair in chain.windows(2) {
        editor.add_edge(&pair[0], &pair[1])?;
    }

    // Extra edges only between intermediate steps, so Start and End stay at the ends.
    if chain.len() > 3 {
        let middle = &chain[1..chain.len() - 1];
        for (i, source) in middle.iter().enumerate() {
            if i + 2 < middle.len() && rng.random_bool(cli.branch_probability) {
                let target = &middle[rng.random_range(i + 2..middle.len())];
                editor.add_edge(source, target)?;
            }
            if i > 0 && rng.random_bool(cli.loop_probability) {
                let target = &middle[rng.random_range(0..i)];
                editor.add_edge(source, target)?;
            }
        }
    }

    Ok(editor.into_workflow())
}

fn random_step(rng: &mut ThreadRng, catalog: &AutomationCatalog) -> NodeKind {
    let title = TASK_TITLES.choose(rng).copied().unwrap_or("Task");
    match rng.random_range(0..3) {
        0 => NodeKind::Task(TaskData {
            title: title.to_string(),
            assignee: ASSIGNEES.choose(rng).copied().unwrap_or("").to_string(),
            ..Default::default()
        }),
        1 => NodeKind::Approval(ApprovalData {
            title: format!("Approve: {}", title),
            approver_role: junro::workflow::RECOMMENDED_APPROVER_ROLES
                .choose(rng)
                .copied()
                .unwrap_or("Manager")
                .to_string(),
            auto_approve_threshold: rng.random_bool(0.3).then(|| f64::from(rng.random_range(1u32..10))),
        }),
        _ => {
            let mut data = AutomatedData {
                title: format!("Automate: {}", title),
                ..Default::default()
            };
            if let Some(entry) = catalog.entries().choose(rng) {
                data.action = entry.id.clone();
                catalog.resolve(&mut data);
            }
            NodeKind::Automated(data)
        }
    }
}
