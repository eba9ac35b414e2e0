//! Workbench command line entry point
//! 工作台命令行入口点

use anyhow::{Context, Result};
use clap::Parser;
use workbench_adapters::config::{init_tracing, CliArgs, Command, GenerateArgs, WorkbenchConfig};
use workbench_adapters::{Base64Adapter, Envelope, GenerateClient, GenerateConfig};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let config = WorkbenchConfig::load_with_cli(&args)?;
    init_tracing(&config.logging.to_logging_config())?;

    tracing::debug!(command = ?args.command, "workbench starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(run(args.command, config))
}

async fn run(command: Command, config: WorkbenchConfig) -> Result<()> {
    match command {
        Command::Encode { text } => {
            let encoded = Base64Adapter::in_process().encode(text)?;
            println!("{}", encoded.unwrap_or_default());
        }
        Command::Decode { input } => {
            let decoded = Base64Adapter::in_process()
                .decode(Some(input.as_str()))?
                .unwrap_or_default();
            match String::from_utf8(decoded) {
                Ok(text) => println!("{}", text),
                Err(e) => println!("{}", serde_json::to_string(e.as_bytes())?),
            }
        }
        Command::GenerateTemplate(g) => generate(&config.generate, g, false).await?,
        Command::GenerateModel(g) => generate(&config.generate, g, true).await?,
        Command::Perspective => print_perspective()?,
    }
    Ok(())
}

async fn generate(config: &GenerateConfig, g: GenerateArgs, from_model: bool) -> Result<()> {
    let client = GenerateClient::new(config)?;
    tracing::info!(
        base_url = %client.base_url(),
        service_path = %client.service_path(),
        workspace = %g.workspace,
        project = %g.project,
        file = %g.file,
        from_model,
        "Requesting generation"
    );

    let result = if from_model {
        client
            .generate_from_model(&g.workspace, &g.project, &g.file, &g.template, &g.parameters)
            .await
    } else {
        client
            .generate_from_template(&g.workspace, &g.project, &g.file, &g.template, &g.parameters)
            .await
    };

    let failure = result.as_ref().err().map(|e| e.to_string());
    println!("{}", serde_json::to_string_pretty(&Envelope::from(result))?);
    match failure {
        Some(msg) => anyhow::bail!("generation failed: {}", msg),
        None => Ok(()),
    }
}

#[cfg(feature = "perspective")]
fn print_perspective() -> Result<()> {
    let perspective = workbench_adapters::get_perspective();
    println!("{}", serde_json::to_string_pretty(&perspective)?);
    Ok(())
}

#[cfg(not(feature = "perspective"))]
fn print_perspective() -> Result<()> {
    anyhow::bail!("perspective registration is not compiled into this build")
}
