use anyhow::Result;
use clap::Parser;

use trunk_release::domain::BuildContext;
use trunk_release::git::{Git2History, History};
use trunk_release::orchestrator::ReleaseOrchestrator;
use trunk_release::registry::NpmRegistry;
use trunk_release::{config, manifest, ui};

#[derive(clap::Parser)]
#[command(
    name = "trunk-release",
    about = "Derive and publish the next release version from the CI build context"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        help = "Branch the build runs on (defaults to the checked-out branch)"
    )]
    branch: Option<String>,

    #[arg(long, help = "Name of the build line (e.g., release-four)")]
    build_name: String,

    #[arg(long, help = "Build identifier supplied by the CI system")]
    build_id: String,

    #[arg(
        short,
        long,
        default_value = "test",
        help = "Deployment environment of this build"
    )]
    environment: String,

    #[arg(long, help = "Package name (defaults to the name in package.json)")]
    package: Option<String>,

    #[arg(long, help = "Preview the publish plan without publishing")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("trunk-release {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Open the repository the pipeline checked out
    let history = match Git2History::open(".") {
        Ok(history) => history,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    // Branch from the CI caller, falling back to the checkout
    let branch_name = match args.branch {
        Some(branch) => branch,
        None => match history.current_branch_name() {
            Ok(branch) => branch,
            Err(e) => {
                ui::display_error(&format!("Cannot determine current branch: {}", e));
                std::process::exit(1);
            }
        },
    };

    // Package name from the CI caller, falling back to the manifest
    let package = match args.package {
        Some(package) => package,
        None => match manifest::package_name("package.json") {
            Ok(package) => package,
            Err(e) => {
                ui::display_error(&format!("Cannot read package manifest: {}", e));
                std::process::exit(1);
            }
        },
    };

    let registry = NpmRegistry::new(package);
    let context = BuildContext::new(branch_name, args.build_name, args.build_id, args.environment);

    let orchestrator = match ReleaseOrchestrator::new(config) {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            ui::display_error(&format!("Invalid scenario configuration: {}", e));
            std::process::exit(1);
        }
    };

    if args.dry_run {
        match orchestrator.resolve(&context, &history, &registry) {
            Ok(Some(plan)) => {
                ui::display_plan(&plan);
                ui::display_status("Dry run - nothing was published");
            }
            Ok(None) => {
                ui::display_no_scenario(&context.branch_name, &context.environment);
            }
            Err(e) => {
                ui::display_error(&format!("Failed to resolve release plan: {}", e));
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    match orchestrator.run(&context, &history, &registry) {
        Ok(Some(plan)) => {
            ui::display_plan(&plan);
            ui::display_success(&format!(
                "Published {} @{} and pushed tag {}",
                plan.next_version, plan.dist_channel, plan.next_tag
            ));
        }
        Ok(None) => {
            // A no-match build is a successful no-op, not a failure
            ui::display_no_scenario(&context.branch_name, &context.environment);
        }
        Err(e) => {
            ui::display_error(&format!("Release failed: {}", e));
            std::process::exit(1);
        }
    }

    Ok(())
}
