use clap::Parser;

use ground_picker::cli::Cli;
use ground_picker::{demo, Command, Config};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let script = demo::scripted_input(&cli.scenario, cli.frames)
        .ok_or_else(|| anyhow::anyhow!("unknown scenario: {}", cli.scenario))?;

    let mut world = demo::demo_world(config, cli.orthographic);
    world.picker_mut().subscribe(|event| {
        log::info!(
            "[select] target at ({:.2}, {:.2}, {:.2})",
            event.position.x,
            event.position.y,
            event.position.z
        );
    });

    let mut selections = 0usize;
    for (frame, input) in script.iter().enumerate() {
        let commands = world.tick(input);
        for command in &commands {
            log::debug!("[frame {frame}] {command:?}");
            if matches!(command, Command::Selected { .. }) {
                selections += 1;
            }
        }
    }

    println!(
        "{} frames, {} selections, camera: {:?}",
        cli.frames,
        selections,
        world.camera().projection
    );
    if let Some(target) = world.picker().target() {
        println!(
            "final target: ({:.2}, {:.2}, {:.2})",
            target.x, target.y, target.z
        );
    }

    Ok(())
}
