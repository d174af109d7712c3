//! CLI argument parsing and help text for stackup.

/// Options shared by `provision` and `plan`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions {
    pub config: Option<String>,
    pub namespace: Option<String>,
}

/// Parse `--config FILE` and `--namespace NS` from the arguments after the command.
pub fn parse_options(args: &[String]) -> Result<CommandOptions, String> {
    let mut options = CommandOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let value = args.get(i + 1).ok_or("Missing value for --config")?;
                options.config = Some(value.clone());
                i += 2;
            }
            "--namespace" | "-n" => {
                let value = args.get(i + 1).ok_or("Missing value for --namespace")?;
                options.namespace = Some(value.clone());
                i += 2;
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(options)
}

/// Print general usage information.
pub fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        "stackup - one-shot Kubernetes component provisioning v{}

USAGE:
    stackup [COMMAND] [OPTIONS]

COMMANDS:
    provision    Create a Deployment and a Service per component (default)
    plan         Print the manifests provision would submit, as JSON
    version      Show version information
    help         Show this help message

OPTIONS:
    -c, --config FILE     Load components and settings from a TOML file
    -n, --namespace NS    Target namespace (default: default)
    -h, --help            Show help for command
    -V, --version         Show version information

ENVIRONMENT:
    STACKUP_CONFIG     Config file path, used when --config is absent
    STACKUP_NAMESPACE  Namespace override
    KUBECONFIG         Cluster credentials (default: ~/.kube/config)
    RUST_LOG           Log level (debug, info, warn, error)

EXIT CODES:
    0  Every resource created
    1  One or more create requests failed
    2  Configuration error
    3  Cluster client error
",
        version
    );
}

/// Print detailed help for a specific command.
pub fn print_command_help(command: &str) {
    match command {
        "provision" => print_provision_help(),
        "plan" => print_plan_help(),
        _ => {
            eprintln!(
                "No detailed help available for '{}'. Use 'stackup help' for general usage.",
                command
            );
        }
    }
}

fn print_provision_help() {
    eprintln!(
        "stackup provision - Create components on the cluster

USAGE:
    stackup provision [OPTIONS]

OPTIONS:
    -c, --config FILE     Load components and settings from a TOML file
    -n, --namespace NS    Target namespace

DESCRIPTION:
    For each component, in order, submits one Deployment (1 replica) and one
    Service named <name>-service. Each create is attempted once; failures,
    including resources that already exist, are reported and the run
    continues. Existing resources are never updated or deleted.

OUTPUT:
    Deployment created: frontend
    Service frontend: services \"frontend-service\" already exists

EXIT CODES:
    0  Every resource created
    1  One or more create requests failed
    2  Configuration error
    3  Cluster client error
"
    );
}

fn print_plan_help() {
    eprintln!(
        "stackup plan - Show manifests without contacting the cluster

USAGE:
    stackup plan [OPTIONS]

OPTIONS:
    -c, --config FILE     Load components and settings from a TOML file
    -n, --namespace NS    Target namespace
"
    );
}
