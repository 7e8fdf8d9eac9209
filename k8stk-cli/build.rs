//! Build script for k8stk-cli.
//!
//! Generates the `k8stk.1` man page into OUT_DIR with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is described again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs and src/commands/.
fn build_cli() -> Command {
    let output = Arg::new("output")
        .short('o')
        .long("output")
        .value_name("OUTPUT")
        .help("File to write the result to (default: stdout)");
    let format = Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .value_parser(["yaml", "json"])
        .default_value("yaml")
        .help("Output format");

    Command::new("k8stk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Merge and edit kubeconfig files")
        .long_about(
            "Command-line tool for merging kubeconfig files and removing contexts from them",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("merge")
                .about("Merge multiple kubeconfig files")
                .long_about(
                    "Merge any number of kubeconfig files, using the first one as the base. \
                     Clusters, users and contexts from later files are renamed with a \
                     numeric suffix when their names are already taken.",
                )
                .arg(output.clone())
                .arg(format.clone())
                .arg(
                    Arg::new("configs")
                        .value_name("CONFIG")
                        .num_args(2..)
                        .required(true)
                        .help("Kubeconfig files to merge; the first one is the base"),
                ),
            Command::new("remove")
                .about("Remove a context from a kubeconfig file")
                .long_about(
                    "Remove a context together with the cluster and user it references, \
                     and move current-context to the first remaining context if needed.",
                )
                .arg(output)
                .arg(format)
                .arg(
                    Arg::new("context")
                        .short('c')
                        .long("context")
                        .value_name("CONTEXT_NAME")
                        .required(true)
                        .help("The context name to remove"),
                )
                .arg(
                    Arg::new("cascade")
                        .long("cascade")
                        .value_parser(["unreferenced", "always"])
                        .default_value("unreferenced")
                        .help("When to remove the context's cluster and user"),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .action(ArgAction::SetTrue)
                        .help("Show what would be removed without writing anything"),
                )
                .arg(Arg::new("config").value_name("CONFIG").required(true)),
            Command::new("validate")
                .about("Validate a kubeconfig file")
                .long_about("Check names are unique and every reference resolves")
                .arg(Arg::new("config").value_name("CONFIG").required(true)),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"])
                        .required(true),
                ),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR not set"));
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).expect("failed to create man directory");

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).expect("failed to render man page");

    fs::write(man_dir.join("k8stk.1"), buffer).expect("failed to write man page");

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
